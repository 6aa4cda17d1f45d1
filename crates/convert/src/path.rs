use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// A normalized, purely syntactic path.
///
/// Construction never touches the filesystem. The stored form:
/// * uses `/` as the only separator (`\` is read as one too),
/// * has no empty or `.` segments and no trailing separator,
/// * resolves `..` against the preceding segment; leading `..` segments are
///   kept on relative paths and dropped at the root of absolute paths.
///
/// The empty relative path is rendered as `.` by [`PathFragment::safe_path_string`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "String", from = "String"))]
pub struct PathFragment {
	path: Arc<str>,
}

impl PathFragment {
	pub fn create(raw: &str) -> Self {
		let absolute = raw.starts_with(['/', '\\']);
		let mut segments: Vec<&str> = Vec::new();
		for segment in raw.split(['/', '\\']) {
			match segment {
				"" | "." => {}
				".." => match segments.last() {
					Some(&last) if last != ".." => {
						segments.pop();
					}
					_ if absolute => {}
					_ => segments.push(".."),
				},
				other => segments.push(other),
			}
		}

		let joined = segments.join("/");
		let path = if absolute { format!("/{joined}") } else { joined };
		Self { path: path.into() }
	}

	pub fn empty() -> Self {
		Self { path: "".into() }
	}

	/// The normalized path; empty for the empty relative path.
	pub fn path_string(&self) -> &str {
		&self.path
	}

	/// The normalized path, with `.` standing in for the empty path.
	///
	/// Special characters are not escaped.
	pub fn safe_path_string(&self) -> &str {
		if self.path.is_empty() { "." } else { &*self.path }
	}

	pub fn is_absolute(&self) -> bool {
		self.path.starts_with('/')
	}

	pub fn is_empty(&self) -> bool {
		self.path.is_empty()
	}

	pub fn segments(&self) -> impl Iterator<Item = &str> {
		self.path.split('/').filter(|segment| !segment.is_empty())
	}

	/// Last segment, or the empty string for the empty and root paths.
	pub fn base_name(&self) -> &str {
		self.segments().last().unwrap_or("")
	}
}

impl fmt::Display for PathFragment {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.path)
	}
}

impl FromStr for PathFragment {
	type Err = Infallible;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(Self::create(s))
	}
}

impl From<&str> for PathFragment {
	fn from(raw: &str) -> Self {
		Self::create(raw)
	}
}

impl From<String> for PathFragment {
	fn from(raw: String) -> Self {
		Self::create(&raw)
	}
}

impl From<PathFragment> for String {
	fn from(path: PathFragment) -> Self {
		path.safe_path_string().to_string()
	}
}
