use std::hash::Hash;

use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;

use crate::NestedSet;

/// Accumulates direct elements and transitive sets for a new [`NestedSet`].
///
/// Direct elements are deduplicated on insert. Transitive sets are linked,
/// never copied; empty ones are skipped and the same node is linked once.
pub struct NestedSetBuilder<T> {
	direct: IndexSet<T, FxBuildHasher>,
	transitive: Vec<NestedSet<T>>,
}

impl<T: Clone + Eq + Hash> NestedSetBuilder<T> {
	/// Creates a builder whose result iterates in stable order.
	pub fn stable_order() -> Self {
		Self {
			direct: IndexSet::with_hasher(FxBuildHasher),
			transitive: Vec::new(),
		}
	}

	pub fn add(&mut self, item: T) -> &mut Self {
		self.direct.insert(item);
		self
	}

	pub fn add_all(&mut self, items: impl IntoIterator<Item = T>) -> &mut Self {
		self.direct.extend(items);
		self
	}

	/// Links every element of `set` into the result.
	pub fn add_transitive(&mut self, set: NestedSet<T>) -> &mut Self {
		if set.is_empty() || self.transitive.iter().any(|existing| existing.ptr_eq(&set)) {
			return self;
		}
		self.transitive.push(set);
		self
	}

	pub fn is_empty(&self) -> bool {
		self.direct.is_empty() && self.transitive.is_empty()
	}

	/// Builds the set.
	///
	/// A builder holding a single transitive set and nothing else returns that
	/// set as-is instead of wrapping it in a new node.
	pub fn build(mut self) -> NestedSet<T> {
		if self.direct.is_empty() && self.transitive.len() == 1 {
			if let Some(only) = self.transitive.pop() {
				return only;
			}
		}
		NestedSet::from_parts(self.direct.into_iter().collect(), self.transitive.into_boxed_slice())
	}
}

impl<T: Clone + Eq + Hash> Default for NestedSetBuilder<T> {
	fn default() -> Self {
		Self::stable_order()
	}
}
