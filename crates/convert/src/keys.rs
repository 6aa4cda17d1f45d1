//! Standard provider keys.

use skybridge_data::Artifact;

use crate::{AnyKey, Key, PathFragment, SdkFramework};

pub const SDK_FRAMEWORK: Key<SdkFramework> = Key::new("sdk_framework");
pub const WEAK_SDK_FRAMEWORK: Key<SdkFramework> = Key::new("weak_sdk_framework");
pub const SDK_DYLIB: Key<String> = Key::new("sdk_dylib");
pub const DEFINE: Key<String> = Key::new("define");
pub const LINKOPT: Key<String> = Key::new("linkopt");
pub const INCLUDE: Key<PathFragment> = Key::new("include");
pub const INCLUDE_SYSTEM: Key<PathFragment> = Key::new("include_system");
pub const FRAMEWORK_SEARCH_PATHS: Key<PathFragment> = Key::new("framework_search_paths");
pub const HEADER: Key<Artifact> = Key::new("header");
pub const LIBRARY: Key<Artifact> = Key::new("library");
pub const IMPORTED_LIBRARY: Key<Artifact> = Key::new("imported_library");

/// Every standard key, erased.
pub const ALL: &[AnyKey] = &[
	SDK_FRAMEWORK.erase(),
	WEAK_SDK_FRAMEWORK.erase(),
	SDK_DYLIB.erase(),
	DEFINE.erase(),
	LINKOPT.erase(),
	INCLUDE.erase(),
	INCLUDE_SYSTEM.erase(),
	FRAMEWORK_SEARCH_PATHS.erase(),
	HEADER.erase(),
	LIBRARY.erase(),
	IMPORTED_LIBRARY.erase(),
];

/// Finds a standard key by its script-facing name.
pub fn find(name: &str) -> Option<AnyKey> {
	ALL.iter().copied().find(|key| key.name() == name)
}
