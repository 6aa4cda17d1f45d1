use std::fmt;
use std::sync::Arc;

/// Whether an artifact is checked in or produced by an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ArtifactKind {
	Source,
	Derived,
}

/// Opaque file handle, shared as-is between the host and scripts.
///
/// Scripts see it as a `File`. Identity is the exec path plus kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Artifact {
	exec_path: Arc<str>,
	kind: ArtifactKind,
}

impl Artifact {
	pub fn source(exec_path: impl Into<Arc<str>>) -> Self {
		Self {
			exec_path: exec_path.into(),
			kind: ArtifactKind::Source,
		}
	}

	pub fn derived(exec_path: impl Into<Arc<str>>) -> Self {
		Self {
			exec_path: exec_path.into(),
			kind: ArtifactKind::Derived,
		}
	}

	pub fn exec_path(&self) -> &str {
		&self.exec_path
	}

	pub fn kind(&self) -> ArtifactKind {
		self.kind
	}

	pub fn is_source(&self) -> bool {
		self.kind == ArtifactKind::Source
	}

	pub fn basename(&self) -> &str {
		self.exec_path.rsplit('/').next().unwrap_or(&self.exec_path)
	}

	/// Extension without the dot, empty when there is none.
	pub fn extension(&self) -> &str {
		let base = self.basename();
		match base.rfind('.') {
			Some(idx) if idx > 0 => &base[idx + 1..],
			_ => "",
		}
	}
}

impl fmt::Display for Artifact {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.kind {
			ArtifactKind::Source => write!(f, "<source file {}>", self.exec_path),
			ArtifactKind::Derived => write!(f, "<generated file {}>", self.exec_path),
		}
	}
}
