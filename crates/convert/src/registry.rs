use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use skybridge_data::{Artifact, Depset, Value};

use crate::converter::{Converter, Direct, NameToDescriptor, PathToString};
use crate::{AnyKey, HostSet, HostType, Result, UnsupportedElementType};

static DIRECT_FILES: Direct<Artifact> = Direct::new();
static DIRECT_STRINGS: Direct<String> = Direct::new();
static PATHS: PathToString = PathToString;
static FRAMEWORKS: NameToDescriptor = NameToDescriptor;

/// Process-wide registry, built on first use and never mutated.
static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::builtin);

/// Immutable table from host element type to its converter.
pub struct Registry {
	converters: HashMap<HostType, &'static dyn Converter>,
}

impl Registry {
	/// The shared registry used by [`convert_to_script`](crate::convert_to_script)
	/// and [`convert_to_host`](crate::convert_to_host).
	pub fn global() -> &'static Registry {
		&REGISTRY
	}

	/// Builds the table covering every [`HostType`].
	pub fn builtin() -> Self {
		let mut builder = RegistryBuilder::default();
		builder
			.register(HostType::File, &DIRECT_FILES)
			.register(HostType::String, &DIRECT_STRINGS)
			.register(HostType::Path, &PATHS)
			.register(HostType::SdkFramework, &FRAMEWORKS);
		let registry = builder.build();
		tracing::debug!(converters = registry.len(), "built converter registry");
		registry
	}

	pub fn get(&self, host_type: HostType) -> Option<&'static dyn Converter> {
		self.converters.get(&host_type).copied()
	}

	pub fn try_lookup(&self, host_type: HostType) -> std::result::Result<&'static dyn Converter, UnsupportedElementType> {
		self.get(host_type).ok_or(UnsupportedElementType { host_type })
	}

	/// Returns the converter for `host_type`.
	///
	/// # Panics
	///
	/// Panics when no converter is registered. Keys and the registry are both
	/// fixed at build time, so a miss is a programming error.
	pub fn lookup(&self, host_type: HostType) -> &'static dyn Converter {
		match self.try_lookup(host_type) {
			Ok(converter) => converter,
			Err(error) => panic!("{error}"),
		}
	}

	/// Converts an erased host set for `key` into a script depset.
	///
	/// # Panics
	///
	/// Panics if `value` does not hold the key's element type, or if the key's
	/// type has no converter.
	pub fn to_script(&self, key: AnyKey, value: HostSet) -> Depset {
		assert_eq!(
			key.host_type(),
			value.host_type(),
			"host set does not match the element type of key '{}'",
			key.name()
		);
		let converter = self.lookup(key.host_type());
		tracing::trace!(key = key.name(), host_type = %key.host_type(), converter = converter.name(), "converting host set to script");
		converter.to_script(key, value)
	}

	/// Converts a script value for `key` into an erased host set.
	pub fn to_host(&self, key: AnyKey, value: &Value) -> Result<HostSet> {
		let converter = self.lookup(key.host_type());
		tracing::trace!(key = key.name(), host_type = %key.host_type(), converter = converter.name(), "converting script value to host");
		let set = converter.to_host(key, value).inspect_err(|error| {
			tracing::debug!(key = key.name(), %error, "rejected script value");
		})?;
		debug_assert_eq!(set.host_type(), key.host_type());
		Ok(set)
	}

	pub fn len(&self) -> usize {
		self.converters.len()
	}

	pub fn is_empty(&self) -> bool {
		self.converters.is_empty()
	}
}

impl fmt::Debug for Registry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_map()
			.entries(self.converters.iter().map(|(host_type, converter)| (host_type, converter.name())))
			.finish()
	}
}

/// Collects converters for a [`Registry`]; each host type may be registered once.
#[derive(Default)]
pub(crate) struct RegistryBuilder {
	converters: HashMap<HostType, &'static dyn Converter>,
}

impl RegistryBuilder {
	/// # Panics
	///
	/// Panics if `host_type` already has a converter.
	pub(crate) fn register(&mut self, host_type: HostType, converter: &'static dyn Converter) -> &mut Self {
		if self.converters.insert(host_type, converter).is_some() {
			panic!("duplicate converter registered for host element type '{host_type}'");
		}
		self
	}

	pub(crate) fn build(self) -> Registry {
		Registry {
			converters: self.converters,
		}
	}
}
