use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

use skybridge_data::{Artifact, ElementType};
use skybridge_nested_set::NestedSet;

use crate::{PathFragment, SdkFramework};

/// Host element types a key can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HostType {
	/// [`Artifact`], shared unchanged with scripts.
	File,
	/// Plain strings, shared unchanged with scripts.
	String,
	/// [`PathFragment`], exposed to scripts as its safe path string.
	Path,
	/// [`SdkFramework`], exposed to scripts by name.
	SdkFramework,
}

impl HostType {
	pub const ALL: [HostType; 4] = [Self::File, Self::String, Self::Path, Self::SdkFramework];

	pub const fn name(self) -> &'static str {
		match self {
			Self::File => "File",
			Self::String => "string",
			Self::Path => "PathFragment",
			Self::SdkFramework => "SdkFramework",
		}
	}

	/// Element type of the depset scripts see for this host type.
	pub const fn script_element_type(self) -> ElementType {
		match self {
			Self::File => ElementType::File,
			Self::String | Self::Path | Self::SdkFramework => ElementType::String,
		}
	}
}

impl fmt::Display for HostType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// A host-side set with its element type erased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostSet {
	File(NestedSet<Artifact>),
	String(NestedSet<String>),
	Path(NestedSet<PathFragment>),
	SdkFramework(NestedSet<SdkFramework>),
}

impl HostSet {
	pub fn host_type(&self) -> HostType {
		match self {
			Self::File(_) => HostType::File,
			Self::String(_) => HostType::String,
			Self::Path(_) => HostType::Path,
			Self::SdkFramework(_) => HostType::SdkFramework,
		}
	}

	pub fn is_empty(&self) -> bool {
		match self {
			Self::File(set) => set.is_empty(),
			Self::String(set) => set.is_empty(),
			Self::Path(set) => set.is_empty(),
			Self::SdkFramework(set) => set.is_empty(),
		}
	}
}

// Seal the HostElement trait; the registry covers exactly these types.
mod sealed {
	pub trait Sealed {}
	impl Sealed for skybridge_data::Artifact {}
	impl Sealed for String {}
	impl Sealed for crate::PathFragment {}
	impl Sealed for crate::SdkFramework {}
}

/// Rust types a key can declare as its element type.
pub trait HostElement: sealed::Sealed + Clone + Eq + Hash + fmt::Debug + Send + Sync + 'static {
	/// Type tag used for registry lookup.
	const HOST_TYPE: HostType;

	fn into_host_set(set: NestedSet<Self>) -> HostSet;

	/// Recovers the typed set, handing the erased set back on mismatch.
	fn from_host_set(set: HostSet) -> Result<NestedSet<Self>, HostSet>;
}

macro_rules! host_element {
	($ty:ty => $variant:ident) => {
		impl HostElement for $ty {
			const HOST_TYPE: HostType = HostType::$variant;

			fn into_host_set(set: NestedSet<Self>) -> HostSet {
				HostSet::$variant(set)
			}

			fn from_host_set(set: HostSet) -> Result<NestedSet<Self>, HostSet> {
				match set {
					HostSet::$variant(set) => Ok(set),
					other => Err(other),
				}
			}
		}
	};
}

host_element!(Artifact => File);
host_element!(String => String);
host_element!(PathFragment => Path);
host_element!(SdkFramework => SdkFramework);

/// A named provider slot holding a set of `E`.
///
/// The element type is carried by the type parameter, so a key can only ever
/// be paired with sets of its declared type.
pub struct Key<E> {
	name: &'static str,
	_element: PhantomData<fn() -> E>,
}

impl<E> Clone for Key<E> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<E> Copy for Key<E> {}

impl<E: HostElement> Key<E> {
	pub const fn new(name: &'static str) -> Self {
		Self {
			name,
			_element: PhantomData,
		}
	}

	/// Script-facing key name.
	pub const fn name(&self) -> &'static str {
		self.name
	}

	pub const fn host_type(&self) -> HostType {
		E::HOST_TYPE
	}

	pub const fn erase(&self) -> AnyKey {
		AnyKey::new(self.name, E::HOST_TYPE)
	}
}

impl<E: HostElement> fmt::Debug for Key<E> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Key")
			.field("name", &self.name)
			.field("host_type", &E::HOST_TYPE)
			.finish()
	}
}

/// A key with its element type erased to a runtime tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnyKey {
	name: &'static str,
	host_type: HostType,
}

impl AnyKey {
	pub const fn new(name: &'static str, host_type: HostType) -> Self {
		Self { name, host_type }
	}

	pub const fn name(&self) -> &'static str {
		self.name
	}

	pub const fn host_type(&self) -> HostType {
		self.host_type
	}
}

impl<E: HostElement> From<Key<E>> for AnyKey {
	fn from(key: Key<E>) -> Self {
		key.erase()
	}
}
