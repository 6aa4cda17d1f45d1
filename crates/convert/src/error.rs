//! Error types for host/script conversion.

use skybridge_data::{DepsetTypeError, ElementType, Span};
use thiserror::Error;

use crate::HostType;

/// A script value could not be converted into a host set.
///
/// Both variants are user-facing: they are reported to the script author as
/// an evaluation failure naming the offending key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
	/// The value is not a depset at all.
	#[error("value for key '{key}' must be a depset, instead found {found}")]
	NotACollection {
		/// Script-facing key name.
		key: String,
		/// Type name of the value that was passed.
		found: String,
		span: Span,
	},

	/// The value is a depset, but of another element type.
	#[error("value for key '{key}' must be a depset of {expected}, instead found depset of {found}")]
	ElementTypeMismatch {
		/// Script-facing key name.
		key: String,
		expected: ElementType,
		found: ElementType,
		span: Span,
		#[source]
		source: DepsetTypeError,
	},
}

impl ConvertError {
	/// Name of the key the failing value was meant for.
	pub fn key(&self) -> &str {
		match self {
			Self::NotACollection { key, .. } | Self::ElementTypeMismatch { key, .. } => key,
		}
	}

	/// Span of the offending script value.
	pub fn span(&self) -> Span {
		match self {
			Self::NotACollection { span, .. } | Self::ElementTypeMismatch { span, .. } => *span,
		}
	}
}

/// No converter is registered for a host element type.
///
/// This is a registry/key mismatch introduced at build time, never a script
/// error. [`Registry::lookup`](crate::Registry::lookup) panics with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no converter registered for host element type '{host_type}'")]
pub struct UnsupportedElementType {
	pub host_type: HostType,
}

/// Result type for script-to-host conversion.
pub type Result<T> = std::result::Result<T, ConvertError>;
