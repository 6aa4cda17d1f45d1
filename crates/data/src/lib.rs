//! Script-side data boundary.
//!
//! A compact value model for the embedded scripting runtime. It covers the
//! scalar types scripts pass around plus [`Depset`], the runtime's typed
//! collection wrapper, which is the only collection host-owned sets are
//! exchanged through.

mod artifact;
mod depset;

use std::fmt;

pub use artifact::{Artifact, ArtifactKind};
pub use depset::{Depset, DepsetElement, DepsetElements, DepsetTypeError, ElementType};

/// Span attached to a value for diagnostics.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
	pub start: usize,
	pub end: usize,
}

impl Span {
	pub const fn new(start: usize, end: usize) -> Self {
		Self { start, end }
	}

	pub const fn unknown() -> Self {
		Self { start: 0, end: 0 }
	}

	pub const fn test_data() -> Self {
		Self {
			start: usize::MAX / 2,
			end: usize::MAX / 2,
		}
	}
}

/// Runtime value as seen by scripts.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	Bool { val: bool, internal_span: Span },
	Int { val: i64, internal_span: Span },
	String { val: String, internal_span: Span },
	List { vals: Vec<Value>, internal_span: Span },
	File { val: Artifact, internal_span: Span },
	Depset { val: Depset, internal_span: Span },
	Nothing { internal_span: Span },
}

impl Value {
	pub fn bool(val: bool, span: Span) -> Self {
		Self::Bool { val, internal_span: span }
	}

	pub fn int(val: i64, span: Span) -> Self {
		Self::Int { val, internal_span: span }
	}

	pub fn string(val: impl Into<String>, span: Span) -> Self {
		Self::String {
			val: val.into(),
			internal_span: span,
		}
	}

	pub fn list(vals: Vec<Value>, span: Span) -> Self {
		Self::List { vals, internal_span: span }
	}

	pub fn file(val: Artifact, span: Span) -> Self {
		Self::File { val, internal_span: span }
	}

	pub fn depset(val: Depset, span: Span) -> Self {
		Self::Depset { val, internal_span: span }
	}

	pub fn nothing(span: Span) -> Self {
		Self::Nothing { internal_span: span }
	}

	pub fn test_int(val: i64) -> Self {
		Self::int(val, Span::test_data())
	}

	pub fn test_string(val: impl Into<String>) -> Self {
		Self::string(val, Span::test_data())
	}

	pub fn test_depset(val: Depset) -> Self {
		Self::depset(val, Span::test_data())
	}

	pub fn test_nothing() -> Self {
		Self::nothing(Span::test_data())
	}

	pub fn span(&self) -> Span {
		match self {
			Self::Bool { internal_span, .. }
			| Self::Int { internal_span, .. }
			| Self::String { internal_span, .. }
			| Self::List { internal_span, .. }
			| Self::File { internal_span, .. }
			| Self::Depset { internal_span, .. }
			| Self::Nothing { internal_span } => *internal_span,
		}
	}

	pub fn get_type(&self) -> ValueType {
		match self {
			Self::Bool { .. } => ValueType::Bool,
			Self::Int { .. } => ValueType::Int,
			Self::String { .. } => ValueType::String,
			Self::List { .. } => ValueType::List,
			Self::File { .. } => ValueType::File,
			Self::Depset { .. } => ValueType::Depset,
			Self::Nothing { .. } => ValueType::Nothing,
		}
	}

	/// Type name used in diagnostics.
	///
	/// Depsets report their element type, e.g. `depset of int`.
	pub fn type_name(&self) -> String {
		match self {
			Self::Depset { val, .. } => val.type_name(),
			other => other.get_type().to_string(),
		}
	}

	pub fn is_nothing(&self) -> bool {
		matches!(self, Self::Nothing { .. })
	}

	pub fn as_bool(&self) -> Result<bool, ValueTypeError> {
		match self {
			Self::Bool { val, .. } => Ok(*val),
			other => Err(ValueTypeError::new("bool", other.get_type())),
		}
	}

	pub fn as_int(&self) -> Result<i64, ValueTypeError> {
		match self {
			Self::Int { val, .. } => Ok(*val),
			other => Err(ValueTypeError::new("int", other.get_type())),
		}
	}

	pub fn as_str(&self) -> Result<&str, ValueTypeError> {
		match self {
			Self::String { val, .. } => Ok(val),
			other => Err(ValueTypeError::new("string", other.get_type())),
		}
	}

	pub fn as_list(&self) -> Result<&[Value], ValueTypeError> {
		match self {
			Self::List { vals, .. } => Ok(vals),
			other => Err(ValueTypeError::new("list", other.get_type())),
		}
	}

	pub fn as_depset(&self) -> Result<&Depset, ValueTypeError> {
		match self {
			Self::Depset { val, .. } => Ok(val),
			other => Err(ValueTypeError::new("depset", other.get_type())),
		}
	}
}

impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Bool { val: true, .. } => f.write_str("True"),
			Self::Bool { val: false, .. } => f.write_str("False"),
			Self::Int { val, .. } => write!(f, "{val}"),
			Self::String { val, .. } => write!(f, "{val:?}"),
			Self::List { vals, .. } => {
				f.write_str("[")?;
				for (idx, item) in vals.iter().enumerate() {
					if idx > 0 {
						f.write_str(", ")?;
					}
					write!(f, "{item}")?;
				}
				f.write_str("]")
			}
			Self::File { val, .. } => write!(f, "{val}"),
			Self::Depset { val, .. } => write!(f, "{val}"),
			Self::Nothing { .. } => f.write_str("None"),
		}
	}
}

/// Coarse value type used for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
	Bool,
	Int,
	String,
	List,
	File,
	Depset,
	Nothing,
}

impl fmt::Display for ValueType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Self::Bool => "bool",
			Self::Int => "int",
			Self::String => "string",
			Self::List => "list",
			Self::File => "File",
			Self::Depset => "depset",
			Self::Nothing => "NoneType",
		};
		f.write_str(name)
	}
}

/// Error returned by typed accessors like [`Value::as_depset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueTypeError {
	expected: &'static str,
	got: ValueType,
}

impl ValueTypeError {
	pub fn new(expected: &'static str, got: ValueType) -> Self {
		Self { expected, got }
	}

	pub fn got(&self) -> ValueType {
		self.got
	}
}

impl fmt::Display for ValueTypeError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "expected {}, got {}", self.expected, self.got)
	}
}

impl std::error::Error for ValueTypeError {}

#[cfg(test)]
mod tests;
