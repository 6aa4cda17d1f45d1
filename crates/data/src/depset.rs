use std::fmt;
use std::hash::Hash;

use skybridge_nested_set::NestedSet;
use thiserror::Error;

use crate::Artifact;

/// Element type tag carried by a [`Depset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ElementType {
	Bool,
	Int,
	String,
	File,
}

impl ElementType {
	pub const fn name(self) -> &'static str {
		match self {
			Self::Bool => "bool",
			Self::Int => "int",
			Self::String => "string",
			Self::File => "File",
		}
	}
}

impl fmt::Display for ElementType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Typed payload of a [`Depset`].
///
/// The element type tag is derived from the variant, so a depset can never
/// claim a type its elements do not have.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DepsetElements {
	/// Created by a script without elements; narrows to every element type.
	Empty,
	Bool(NestedSet<bool>),
	Int(NestedSet<i64>),
	String(NestedSet<String>),
	File(NestedSet<Artifact>),
}

impl DepsetElements {
	pub fn element_type(&self) -> Option<ElementType> {
		match self {
			Self::Empty => None,
			Self::Bool(_) => Some(ElementType::Bool),
			Self::Int(_) => Some(ElementType::Int),
			Self::String(_) => Some(ElementType::String),
			Self::File(_) => Some(ElementType::File),
		}
	}
}

// Seal the DepsetElement trait; the payload enum is closed.
mod sealed {
	pub trait Sealed {}
	impl Sealed for bool {}
	impl Sealed for i64 {}
	impl Sealed for String {}
	impl Sealed for crate::Artifact {}
}

/// Rust types that can be stored in a [`Depset`].
pub trait DepsetElement: sealed::Sealed + Clone + Eq + Hash + fmt::Debug + Send + Sync + 'static {
	/// Tag of depsets holding this type.
	const ELEMENT_TYPE: ElementType;

	/// Moves a set into the matching payload variant.
	fn wrap(set: NestedSet<Self>) -> DepsetElements;

	/// Returns the set if the payload holds this type.
	fn narrow(elements: &DepsetElements) -> Option<&NestedSet<Self>>;
}

impl DepsetElement for bool {
	const ELEMENT_TYPE: ElementType = ElementType::Bool;

	fn wrap(set: NestedSet<Self>) -> DepsetElements {
		DepsetElements::Bool(set)
	}

	fn narrow(elements: &DepsetElements) -> Option<&NestedSet<Self>> {
		match elements {
			DepsetElements::Bool(set) => Some(set),
			_ => None,
		}
	}
}

impl DepsetElement for i64 {
	const ELEMENT_TYPE: ElementType = ElementType::Int;

	fn wrap(set: NestedSet<Self>) -> DepsetElements {
		DepsetElements::Int(set)
	}

	fn narrow(elements: &DepsetElements) -> Option<&NestedSet<Self>> {
		match elements {
			DepsetElements::Int(set) => Some(set),
			_ => None,
		}
	}
}

impl DepsetElement for String {
	const ELEMENT_TYPE: ElementType = ElementType::String;

	fn wrap(set: NestedSet<Self>) -> DepsetElements {
		DepsetElements::String(set)
	}

	fn narrow(elements: &DepsetElements) -> Option<&NestedSet<Self>> {
		match elements {
			DepsetElements::String(set) => Some(set),
			_ => None,
		}
	}
}

impl DepsetElement for Artifact {
	const ELEMENT_TYPE: ElementType = ElementType::File;

	fn wrap(set: NestedSet<Self>) -> DepsetElements {
		DepsetElements::File(set)
	}

	fn narrow(elements: &DepsetElements) -> Option<&NestedSet<Self>> {
		match elements {
			DepsetElements::File(set) => Some(set),
			_ => None,
		}
	}
}

/// A depset's element type does not match the requested one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("got a depset of '{found}', expected a depset of '{expected}'")]
pub struct DepsetTypeError {
	pub expected: ElementType,
	pub found: ElementType,
}

/// The runtime's collection wrapper: a [`NestedSet`] paired with its element type.
#[derive(Clone, PartialEq, Eq)]
pub struct Depset {
	elements: DepsetElements,
}

impl Depset {
	/// Wraps a host-built set. The tag is fixed by `T`.
	pub fn of<T: DepsetElement>(set: NestedSet<T>) -> Self {
		Self { elements: T::wrap(set) }
	}

	/// The untyped empty depset a script gets from `depset()`.
	pub fn empty() -> Self {
		Self {
			elements: DepsetElements::Empty,
		}
	}

	pub fn elements(&self) -> &DepsetElements {
		&self.elements
	}

	/// Element type tag; `None` only for [`Depset::empty`].
	pub fn element_type(&self) -> Option<ElementType> {
		self.elements.element_type()
	}

	pub fn is_empty(&self) -> bool {
		match &self.elements {
			DepsetElements::Empty => true,
			DepsetElements::Bool(set) => set.is_empty(),
			DepsetElements::Int(set) => set.is_empty(),
			DepsetElements::String(set) => set.is_empty(),
			DepsetElements::File(set) => set.is_empty(),
		}
	}

	pub fn len(&self) -> usize {
		match &self.elements {
			DepsetElements::Empty => 0,
			DepsetElements::Bool(set) => set.len(),
			DepsetElements::Int(set) => set.len(),
			DepsetElements::String(set) => set.len(),
			DepsetElements::File(set) => set.len(),
		}
	}

	/// Narrows to a set of `T`.
	///
	/// Empty depsets narrow to any element type. The returned set shares the
	/// depset's nodes; elements are not copied.
	pub fn get_set<T: DepsetElement>(&self) -> Result<NestedSet<T>, DepsetTypeError> {
		if let Some(set) = T::narrow(&self.elements) {
			return Ok(set.clone());
		}
		match self.element_type() {
			Some(found) if !self.is_empty() => Err(DepsetTypeError {
				expected: T::ELEMENT_TYPE,
				found,
			}),
			_ => Ok(NestedSet::empty()),
		}
	}

	/// Diagnostic type name, e.g. `depset of string`.
	pub fn type_name(&self) -> String {
		match self.element_type() {
			Some(ty) => format!("depset of {ty}"),
			None => "depset".to_string(),
		}
	}
}

impl fmt::Display for Depset {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("depset([")?;
		match &self.elements {
			DepsetElements::Empty => {}
			DepsetElements::Bool(set) => write_items(f, set.iter().map(|b| if *b { "True" } else { "False" }))?,
			DepsetElements::Int(set) => write_items(f, set.iter())?,
			DepsetElements::String(set) => write_items(f, set.iter().map(|s| format!("{s:?}")))?,
			DepsetElements::File(set) => write_items(f, set.iter())?,
		}
		f.write_str("])")
	}
}

fn write_items<I>(f: &mut fmt::Formatter<'_>, items: I) -> fmt::Result
where
	I: Iterator,
	I::Item: fmt::Display,
{
	for (idx, item) in items.enumerate() {
		if idx > 0 {
			f.write_str(", ")?;
		}
		write!(f, "{item}")?;
	}
	Ok(())
}

impl fmt::Debug for Depset {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.elements {
			DepsetElements::Empty => f.write_str("Depset::Empty"),
			DepsetElements::Bool(set) => f.debug_tuple("Depset::Bool").field(set).finish(),
			DepsetElements::Int(set) => f.debug_tuple("Depset::Int").field(set).finish(),
			DepsetElements::String(set) => f.debug_tuple("Depset::String").field(set).finish(),
			DepsetElements::File(set) => f.debug_tuple("Depset::File").field(set).finish(),
		}
	}
}
