//! Recursive helpers over trees of key-addressable collaborators.
//!
//! These functions traverse arbitrary-depth nested mappings through the
//! [`KeyedTree`] capability rather than any concrete container, so the
//! same get/set/make/iterate operations work on an [`Odict`] tree, a raw
//! `serde_json` object tree, or any other type that adapts itself.
//!
//! Only [`make_nested`] creates structure; [`get_nested`] and
//! [`set_nested`] fail at the first missing or non-branch level. All
//! traversals are bounded by [`MAX_DEPTH`] to guard against cycles.
//!
//! # Examples
//!
//! ```
//! # use ordict::{Key, Odict, Value};
//! # use ordict::nested::{get_nested, make_nested};
//! let mut root = Odict::new();
//! let path: Vec<Key> = ["b", "a", "x"].map(Key::from).to_vec();
//! make_nested(&mut root, &path, Value::Int(5))?;
//! assert_eq!(*get_nested(&root, &path)?, Value::Int(5));
//! # Ok::<(), ordict::Error>(())
//! ```

pub mod errors;

pub use errors::NestedError;

use std::fmt;

use crate::Result;
use crate::odict::{Key, Odict, Value};

/// Maximum tree depth for nested traversals and path operations.
pub const MAX_DEPTH: usize = 100;

/// The capability nested helpers operate over: enumerate child keys in
/// order, fetch and store child nodes, and tell branches from leaves.
pub trait KeyedTree: Sized {
    /// The key type of one level.
    type Key: Clone + Eq + fmt::Display;
    /// The node type stored at each key, branch or leaf.
    type Node;

    /// The child node at `key`, if present.
    fn child(&self, key: &Self::Key) -> Option<&Self::Node>;

    /// Mutable access to the child node at `key`.
    fn child_mut(&mut self, key: &Self::Key) -> Option<&mut Self::Node>;

    /// Stores a child node, replacing any existing one.
    fn set_child(&mut self, key: Self::Key, node: Self::Node);

    /// Child keys in this level's own order.
    fn child_keys(&self) -> Vec<Self::Key>;

    /// Views a node as a branch, if it is one.
    fn as_branch(node: &Self::Node) -> Option<&Self>;

    /// Mutable branch view of a node.
    fn as_branch_mut(node: &mut Self::Node) -> Option<&mut Self>;

    /// A node holding a fresh, empty branch.
    fn empty_branch() -> Self::Node;
}

impl KeyedTree for Odict {
    type Key = Key;
    type Node = Value;

    fn child(&self, key: &Key) -> Option<&Value> {
        self.lookup(key)
    }

    fn child_mut(&mut self, key: &Key) -> Option<&mut Value> {
        self.lookup_mut(key)
    }

    fn set_child(&mut self, key: Key, node: Value) {
        self.put(key, node);
    }

    fn child_keys(&self) -> Vec<Key> {
        self.keys().cloned().collect()
    }

    fn as_branch(node: &Value) -> Option<&Odict> {
        node.as_dict()
    }

    fn as_branch_mut(node: &mut Value) -> Option<&mut Odict> {
        node.as_dict_mut()
    }

    fn empty_branch() -> Value {
        Value::Dict(Odict::new())
    }
}

// Plain JSON object trees traverse the same way.
impl KeyedTree for serde_json::Map<String, serde_json::Value> {
    type Key = String;
    type Node = serde_json::Value;

    fn child(&self, key: &String) -> Option<&serde_json::Value> {
        self.get(key)
    }

    fn child_mut(&mut self, key: &String) -> Option<&mut serde_json::Value> {
        self.get_mut(key)
    }

    fn set_child(&mut self, key: String, node: serde_json::Value) {
        self.insert(key, node);
    }

    fn child_keys(&self) -> Vec<String> {
        self.keys().cloned().collect()
    }

    fn as_branch(node: &serde_json::Value) -> Option<&Self> {
        node.as_object()
    }

    fn as_branch_mut(node: &mut serde_json::Value) -> Option<&mut Self> {
        node.as_object_mut()
    }

    fn empty_branch() -> serde_json::Value {
        serde_json::Value::Object(serde_json::Map::new())
    }
}

/// Fetches the node at `path`, failing at the first missing or non-branch
/// level.
pub fn get_nested<'t, T: KeyedTree>(root: &'t T, path: &[T::Key]) -> Result<&'t T::Node> {
    check_depth(path.len())?;
    let (last, parents) = split_path(path)?;
    let parent = descend(root, parents, 0)?;
    parent.child(last).ok_or_else(|| {
        NestedError::PathNotFound {
            key: last.to_string(),
            depth: parents.len(),
        }
        .into()
    })
}

/// Safe variant of [`get_nested`]: any failure becomes `None`.
pub fn peek_nested<'t, T: KeyedTree>(root: &'t T, path: &[T::Key]) -> Option<&'t T::Node> {
    get_nested(root, path).ok()
}

/// Assigns the node at `path`. Every intermediate level must already
/// exist; only the final key may be absent.
pub fn set_nested<T: KeyedTree>(root: &mut T, path: &[T::Key], value: T::Node) -> Result<()> {
    check_depth(path.len())?;
    let (last, parents) = split_path(path)?;
    let parent = descend_mut(root, parents, 0)?;
    parent.set_child(last.clone(), value);
    Ok(())
}

/// Like [`set_nested`], but creates every missing intermediate level as an
/// empty branch first. This is the only structure-creating operation in
/// this module.
pub fn make_nested<T: KeyedTree>(root: &mut T, path: &[T::Key], value: T::Node) -> Result<()> {
    check_depth(path.len())?;
    let (last, parents) = split_path(path)?;
    let parent = ensure_branches(root, parents, 0)?;
    parent.set_child(last.clone(), value);
    Ok(())
}

/// Lazily enumerates every complete path to a non-branch leaf, depth
/// first, in each level's own key order. Restart by calling again.
///
/// A tree deeper than [`MAX_DEPTH`] yields one
/// [`NestedError::RecursionLimitExceeded`] and stops, keeping traversal
/// finite on cyclic inputs.
pub fn iter_nested<T: KeyedTree>(root: &T) -> NestedPaths<'_, T> {
    NestedPaths {
        stack: vec![Frame::new(root)],
        done: false,
    }
}

struct Frame<'t, T: KeyedTree> {
    branch: &'t T,
    keys: Vec<T::Key>,
    next: usize,
}

impl<'t, T: KeyedTree> Frame<'t, T> {
    fn new(branch: &'t T) -> Self {
        Frame {
            branch,
            keys: branch.child_keys(),
            next: 0,
        }
    }
}

/// Iterator produced by [`iter_nested`].
pub struct NestedPaths<'t, T: KeyedTree> {
    stack: Vec<Frame<'t, T>>,
    done: bool,
}

impl<T: KeyedTree> Iterator for NestedPaths<'_, T> {
    type Item = Result<Vec<T::Key>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            let frame = self.stack.last_mut()?;
            if frame.next >= frame.keys.len() {
                self.stack.pop();
                continue;
            }
            let branch = frame.branch;
            let key = frame.keys[frame.next].clone();
            frame.next += 1;
            let Some(node) = branch.child(&key) else {
                continue;
            };
            match T::as_branch(node) {
                Some(sub) => {
                    if self.stack.len() >= MAX_DEPTH {
                        self.done = true;
                        return Some(Err(NestedError::RecursionLimitExceeded {
                            limit: MAX_DEPTH,
                        }
                        .into()));
                    }
                    self.stack.push(Frame::new(sub));
                }
                None => {
                    return Some(Ok(self
                        .stack
                        .iter()
                        .map(|f| f.keys[f.next - 1].clone())
                        .collect()));
                }
            }
        }
    }
}

fn check_depth(len: usize) -> Result<()> {
    if len > MAX_DEPTH {
        return Err(NestedError::RecursionLimitExceeded { limit: MAX_DEPTH }.into());
    }
    Ok(())
}

fn split_path<K>(path: &[K]) -> Result<(&K, &[K])> {
    path.split_last()
        .ok_or_else(|| NestedError::EmptyPath.into())
}

fn descend<'t, T: KeyedTree>(cur: &'t T, path: &[T::Key], depth: usize) -> Result<&'t T> {
    match path.split_first() {
        None => Ok(cur),
        Some((key, rest)) => {
            let node = cur.child(key).ok_or_else(|| NestedError::PathNotFound {
                key: key.to_string(),
                depth,
            })?;
            let branch = T::as_branch(node).ok_or_else(|| NestedError::NotABranch {
                key: key.to_string(),
                depth,
            })?;
            descend(branch, rest, depth + 1)
        }
    }
}

fn descend_mut<'t, T: KeyedTree>(cur: &'t mut T, path: &[T::Key], depth: usize) -> Result<&'t mut T> {
    match path.split_first() {
        None => Ok(cur),
        Some((key, rest)) => {
            let node = cur.child_mut(key).ok_or_else(|| NestedError::PathNotFound {
                key: key.to_string(),
                depth,
            })?;
            let branch = T::as_branch_mut(node).ok_or_else(|| NestedError::NotABranch {
                key: key.to_string(),
                depth,
            })?;
            descend_mut(branch, rest, depth + 1)
        }
    }
}

fn ensure_branches<'t, T: KeyedTree>(
    cur: &'t mut T,
    path: &[T::Key],
    depth: usize,
) -> Result<&'t mut T> {
    match path.split_first() {
        None => Ok(cur),
        Some((key, rest)) => {
            if cur.child(key).is_none() {
                cur.set_child(key.clone(), T::empty_branch());
            }
            let node = cur.child_mut(key).ok_or_else(|| NestedError::PathNotFound {
                key: key.to_string(),
                depth,
            })?;
            let branch = T::as_branch_mut(node).ok_or_else(|| NestedError::NotABranch {
                key: key.to_string(),
                depth,
            })?;
            ensure_branches(branch, rest, depth + 1)
        }
    }
}
