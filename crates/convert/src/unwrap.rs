use skybridge_data::{DepsetElement, Value};
use skybridge_nested_set::NestedSet;

use crate::{ConvertError, Result};

/// Extracts the set of `T` wrapped by a script depset.
///
/// This is the only place a script value's element type is checked. The
/// returned set is the depset's own, not a copy.
pub fn unwrap_depset<T: DepsetElement>(value: &Value, key: &str) -> Result<NestedSet<T>> {
	let Value::Depset { val, internal_span } = value else {
		return Err(ConvertError::NotACollection {
			key: key.to_string(),
			found: value.type_name(),
			span: value.span(),
		});
	};

	val.get_set::<T>().map_err(|source| ConvertError::ElementTypeMismatch {
		key: key.to_string(),
		expected: source.expected,
		found: source.found,
		span: *internal_span,
		source,
	})
}
