use std::fmt;
use std::sync::Arc;

/// An SDK framework identified by name alone (e.g. `Foundation`).
///
/// Equality and hashing are by name, so a set of frameworks deduplicates by
/// name. Names are not validated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SdkFramework {
	name: Arc<str>,
}

impl SdkFramework {
	pub fn new(name: impl Into<Arc<str>>) -> Self {
		Self { name: name.into() }
	}

	pub fn name(&self) -> &str {
		&self.name
	}
}

impl fmt::Display for SdkFramework {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.name)
	}
}
