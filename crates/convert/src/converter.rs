//! Conversion strategies, one per host element type family.
//!
//! Every strategy is stateless. Both directions build a new set and keep the
//! input's stable order; none of them drops elements on its own.

use std::marker::PhantomData;

use skybridge_data::{Depset, DepsetElement, Value};
use skybridge_nested_set::NestedSet;

use crate::{AnyKey, HostElement, HostSet, PathFragment, Result, SdkFramework, unwrap_depset};

// Seal the Converter trait; strategies only live in the registry.
mod sealed {
	pub trait Sealed {}
	impl<E> Sealed for super::Direct<E> {}
	impl Sealed for super::PathToString {}
	impl Sealed for super::NameToDescriptor {}
}

/// Bidirectional translation between a host set and a script depset.
pub trait Converter: sealed::Sealed + Send + Sync {
	/// Strategy name for logging.
	fn name(&self) -> &'static str;

	/// Host set to script depset. Never fails.
	fn to_script(&self, key: AnyKey, value: HostSet) -> Depset;

	/// Script value to host set, validating the value through [`unwrap_depset`].
	fn to_host(&self, key: AnyKey, value: &Value) -> Result<HostSet>;
}

/// Shares the host set with scripts as-is.
pub(crate) struct Direct<E>(PhantomData<fn() -> E>);

impl<E> Direct<E> {
	pub(crate) const fn new() -> Self {
		Self(PhantomData)
	}
}

impl<E: HostElement + DepsetElement> Converter for Direct<E> {
	fn name(&self) -> &'static str {
		"direct"
	}

	fn to_script(&self, key: AnyKey, value: HostSet) -> Depset {
		Depset::of(expect_host_set::<E>(key, value))
	}

	fn to_host(&self, key: AnyKey, value: &Value) -> Result<HostSet> {
		unwrap_depset::<E>(value, key.name()).map(E::into_host_set)
	}
}

/// Paths travel to scripts as their safe path strings.
pub(crate) struct PathToString;

impl Converter for PathToString {
	fn name(&self) -> &'static str {
		"path_to_string"
	}

	fn to_script(&self, key: AnyKey, value: HostSet) -> Depset {
		paths_to_script(&expect_host_set::<PathFragment>(key, value))
	}

	fn to_host(&self, key: AnyKey, value: &Value) -> Result<HostSet> {
		let paths = unwrap_depset::<String>(value, key.name())?;
		Ok(HostSet::Path(paths.iter().map(|path| PathFragment::create(path)).collect()))
	}
}

/// Descriptors travel to scripts as their names.
pub(crate) struct NameToDescriptor;

impl Converter for NameToDescriptor {
	fn name(&self) -> &'static str {
		"name_to_descriptor"
	}

	fn to_script(&self, key: AnyKey, value: HostSet) -> Depset {
		let frameworks = expect_host_set::<SdkFramework>(key, value);
		Depset::of(frameworks.iter().map(|framework| framework.name().to_string()).collect::<NestedSet<_>>())
	}

	fn to_host(&self, key: AnyKey, value: &Value) -> Result<HostSet> {
		let names = unwrap_depset::<String>(value, key.name())?;
		Ok(HostSet::SdkFramework(names.iter().map(|name| SdkFramework::new(name.as_str())).collect()))
	}
}

/// Converts paths into a string depset of their safe path strings, in stable order.
pub fn paths_to_script(paths: &NestedSet<PathFragment>) -> Depset {
	Depset::of(paths.iter().map(|path| path.safe_path_string().to_string()).collect::<NestedSet<_>>())
}

/// Recovers the typed set a key's converter was handed.
///
/// # Panics
///
/// Panics if the set does not hold `E`; callers pair keys and sets by type.
pub(crate) fn expect_host_set<E: HostElement>(key: AnyKey, value: HostSet) -> NestedSet<E> {
	match E::from_host_set(value) {
		Ok(set) => set,
		Err(other) => panic!(
			"key '{}' expects {} elements but was handed a {} set",
			key.name(),
			E::HOST_TYPE,
			other.host_type()
		),
	}
}
