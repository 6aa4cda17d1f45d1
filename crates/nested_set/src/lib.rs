//! Immutable, order-preserving, deduplicating nested sets.
//!
//! A [`NestedSet`] is a node in a DAG: it holds a few direct elements plus
//! references to other, already built sets. Building a union never copies the
//! contributing sets, it only links them. Iteration flattens the DAG in stable
//! order:
//!
//! * every transitive set, in the order it was added, comes first,
//! * then the node's own direct elements,
//! * and only the first occurrence of an element is kept.
//!
//! Sets reachable through several paths are walked once. The flattened list is
//! computed on first use and memoized on the node, so a set shared by many
//! unions is flattened at most once.

mod builder;

use std::fmt;
use std::hash::Hash;
use std::sync::{Arc, OnceLock};

pub use builder::NestedSetBuilder;
use indexmap::IndexSet;
use rustc_hash::{FxBuildHasher, FxHashSet};

/// Immutable union-of-sets collection with stable iteration order.
///
/// Cloning is a reference count bump.
pub struct NestedSet<T> {
	node: Arc<Node<T>>,
}

struct Node<T> {
	direct: Box<[T]>,
	transitive: Box<[NestedSet<T>]>,
	flattened: OnceLock<Arc<[T]>>,
}

impl<T> Clone for NestedSet<T> {
	fn clone(&self) -> Self {
		Self { node: Arc::clone(&self.node) }
	}
}

impl<T> NestedSet<T> {
	fn from_parts(direct: Box<[T]>, transitive: Box<[NestedSet<T>]>) -> Self {
		Self {
			node: Arc::new(Node {
				direct,
				transitive,
				flattened: OnceLock::new(),
			}),
		}
	}

	/// Returns a set with no elements.
	pub fn empty() -> Self {
		Self::from_parts(Box::default(), Box::default())
	}

	/// Returns true if both handles point at the same node.
	pub fn ptr_eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.node, &other.node)
	}

	/// Returns true if the set has no elements.
	///
	/// Answered structurally; never flattens. Builders never link an empty
	/// set, so a node with children is non-empty.
	pub fn is_empty(&self) -> bool {
		self.node.direct.is_empty() && self.node.transitive.is_empty()
	}
}

impl<T: Clone + Eq + Hash> NestedSet<T> {
	/// Builds a set from direct elements only, dropping repeats.
	pub fn wrap(items: impl IntoIterator<Item = T>) -> Self {
		let mut builder = NestedSetBuilder::stable_order();
		builder.add_all(items);
		builder.build()
	}

	/// Returns the elements in stable order.
	pub fn to_list(&self) -> Vec<T> {
		self.flattened().to_vec()
	}

	/// Iterates the elements in stable order.
	pub fn iter(&self) -> std::slice::Iter<'_, T> {
		self.flattened().iter()
	}

	/// Number of distinct elements.
	pub fn len(&self) -> usize {
		self.flattened().len()
	}

	fn flattened(&self) -> &[T] {
		self.node.flattened.get_or_init(|| walk(&self.node).into_iter().collect())
	}
}

/// Post-order walk over the DAG below `root` with an explicit stack, so the
/// depth of a union chain is bounded by memory rather than the thread stack.
fn walk<T: Clone + Eq + Hash>(root: &Node<T>) -> IndexSet<T, FxBuildHasher> {
	let mut visited: FxHashSet<*const Node<T>> = FxHashSet::default();
	let mut out = IndexSet::with_hasher(FxBuildHasher);
	let mut stack = vec![(root, 0usize)];
	visited.insert(std::ptr::from_ref(root));

	while let Some(top) = stack.last_mut() {
		let node = top.0;
		let Some(child) = node.transitive.get(top.1) else {
			out.extend(node.direct.iter().cloned());
			stack.pop();
			continue;
		};
		top.1 += 1;

		if !visited.insert(Arc::as_ptr(&child.node)) {
			continue;
		}
		match child.node.flattened.get() {
			Some(done) => out.extend(done.iter().cloned()),
			None => stack.push((&*child.node, 0)),
		}
	}
	out
}

// Unlink uniquely owned children onto a work list so dropping a deep chain
// does not recurse once per level.
impl<T> Drop for Node<T> {
	fn drop(&mut self) {
		let mut pending = std::mem::take(&mut self.transitive).into_vec();
		while let Some(set) = pending.pop() {
			if let Ok(mut node) = Arc::try_unwrap(set.node) {
				pending.extend(std::mem::take(&mut node.transitive).into_vec());
			}
		}
	}
}

impl<T: Clone + Eq + Hash> FromIterator<T> for NestedSet<T> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		Self::wrap(iter)
	}
}

impl<'a, T: Clone + Eq + Hash> IntoIterator for &'a NestedSet<T> {
	type Item = &'a T;
	type IntoIter = std::slice::Iter<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl<T> Default for NestedSet<T> {
	fn default() -> Self {
		Self::empty()
	}
}

/// Two sets are equal when they flatten to the same sequence.
impl<T: Clone + Eq + Hash> PartialEq for NestedSet<T> {
	fn eq(&self, other: &Self) -> bool {
		self.ptr_eq(other) || self.flattened() == other.flattened()
	}
}

impl<T: Clone + Eq + Hash> Eq for NestedSet<T> {}

impl<T: Clone + Eq + Hash + fmt::Debug> fmt::Debug for NestedSet<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_list().entries(self.iter()).finish()
	}
}
