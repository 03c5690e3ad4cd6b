//! This crate keeps a roster of employees in an unbalanced Binary Search Tree
//! keyed by employee id, along with the menu-driven session used to edit it.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. The tree is made of `Node`s, each
//! storing one [`Employee`][record::Employee] and up to two child `Node`s. The
//! most important invariants of the tree are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have an id less
//!    than its own id.
//! 2. For every `Node`, all the `Node`s in its right subtree have an id
//!    greater than its own id.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for an id takes `O(height)` (where `height` is the longest path
//! from the root `Node` to a leaf `Node`). This tree never rebalances, so
//! `height` is anywhere between `O(lg N)` and `N`, depending on the order of
//! insertions. Visiting the left subtree, then the subtree root, then the
//! right subtree yields employees in ascending id order, which is how
//! [`report`] builds its listings.
//!
//! ## Modules
//!
//! - [`tree`] - the tree and its in-order [`Traverse`][tree::Traverse]al
//! - [`stack`] - the linked-list stack the traversal is built on
//! - [`record`] - the stored [`Employee`][record::Employee] record
//! - [`report`] - text renderings of a tree
//! - [`menu`] - the interactive console session
//! - [`logging`] - `tracing` subscriber setup

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod logging;
pub mod menu;
pub mod record;
pub mod report;
pub mod stack;
pub mod tree;


pub use error::{Error, Result};
pub use record::Employee;
pub use tree::Tree;
