//! Converters between host-owned nested sets and script depsets.
//!
//! Every provider [`Key`] declares a host element type. The [`Registry`] maps
//! each element type to one stateless [`Converter`]:
//!
//! * `File` and `string` sets are shared with scripts unchanged,
//! * [`PathFragment`] sets become string depsets of safe path strings,
//! * [`SdkFramework`] sets become string depsets of framework names.
//!
//! Script values headed for the host go through [`unwrap_depset`], the single
//! place their element type is validated. Invalid script input is reported as
//! [`ConvertError`]; a key whose type has no converter is a build-time mistake
//! and panics instead.

mod converter;
mod error;
mod framework;
mod key;
pub mod keys;
mod path;
mod registry;
mod unwrap;

pub use converter::{Converter, paths_to_script};
pub use error::{ConvertError, Result, UnsupportedElementType};
pub use framework::SdkFramework;
pub use key::{AnyKey, HostElement, HostSet, HostType, Key};
pub use path::PathFragment;
pub use registry::Registry;
use skybridge_data::{Depset, Value};
use skybridge_nested_set::NestedSet;
pub use unwrap::unwrap_depset;

/// Converts a host set stored under `key` into the depset scripts see.
///
/// The depset's element type is `key`'s script element type.
pub fn convert_to_script<E: HostElement>(key: &Key<E>, value: &NestedSet<E>) -> Depset {
	Registry::global().to_script(key.erase(), E::into_host_set(value.clone()))
}

/// Converts a script value into the host set for `key`.
///
/// Fails with [`ConvertError::NotACollection`] when `value` is not a depset
/// and [`ConvertError::ElementTypeMismatch`] when it holds other elements.
pub fn convert_to_host<E: HostElement>(key: &Key<E>, value: &Value) -> Result<NestedSet<E>> {
	let set = Registry::global().to_host(key.erase(), value)?;
	Ok(converter::expect_host_set(key.erase(), set))
}
