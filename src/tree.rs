//! An unbalanced BST of [`Employee`]s keyed by their `id`.
//!
//! Nothing rebalances the tree, so inserting ids in sorted order degrades it to a linked list.
//! Everything that walks the tree does so iteratively (with [`Stack`]s where it has to remember
//! where it's been) so a degenerate tree never exhausts the call stack.
//!
//! # Examples
//!
//! ```
//! use roster::record::Employee;
//! use roster::tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.find(5).is_none());
//! assert!(tree.min().is_none());
//!
//! tree.insert(Employee::new(5, 20, "A")).unwrap();
//! tree.insert(Employee::new(3, 21, "B")).unwrap();
//! tree.insert(Employee::new(8, 22, "C")).unwrap();
//!
//! assert_eq!(tree.find(3).map(|e| e.name.as_str()), Some("B"));
//! assert_eq!(tree.min().map(|e| e.id), Some(3));
//! assert_eq!(tree.max().map(|e| e.id), Some(8));
//!
//! // Ids can only be used once.
//! assert!(tree.insert(Employee::new(5, 30, "D")).is_err());
//!
//! // Removing returns the record that was removed.
//! let removed = tree.remove(5);
//! assert_eq!(removed.map(|e| e.name), Some("A".to_string()));
//! assert!(tree.remove(5).is_none());
//!
//! let ids: Vec<_> = tree.traverse().map(|visit| visit.employee.id).collect();
//! assert_eq!(ids, vec![3, 8]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::record::Employee;
use crate::stack::Stack;

type Link = Option<Box<Node>>;

/// A Binary Search Tree of employees ordered by id. Smaller ids live in left subtrees, larger ids
/// in right subtrees, and each id appears at most once.
#[derive(Default)]
pub struct Tree {
    root: Link,
    len: usize,
}

impl Drop for Tree {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl fmt::Debug for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let employees: Vec<_> = self.traverse().map(|visit| visit.employee).collect();
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("employees", &employees)
            .finish()
    }
}

impl Tree {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Whether the tree holds no employees.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of employees in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Inserts `employee` as a new leaf, stamping its `level` with the depth it lands at, and
    /// returns the stored record.
    ///
    /// # Errors
    ///
    /// [`Error::DuplicateId`] if an employee with the same id is already stored. The tree is left
    /// untouched in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster::record::Employee;
    /// use roster::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// let root = tree.insert(Employee::new(5, 20, "A")).unwrap();
    /// assert_eq!(root.level, 1);
    ///
    /// let child = tree.insert(Employee::new(8, 22, "C")).unwrap();
    /// assert_eq!(child.level, 2);
    /// ```
    pub fn insert(&mut self, mut employee: Employee) -> Result<&Employee> {
        let id = employee.id;
        let mut slot = &mut self.root;
        let mut level = 1;

        while let Some(node) = slot {
            if node.employee.id == id {
                trace!(id, "rejected duplicate employee");
                return Err(Error::DuplicateId(id));
            }
            slot = node.child_mut(id);
            level += 1;
        }

        employee.level = level;
        self.len += 1;
        debug!(id, level, len = self.len, "inserted employee");

        let node = slot.insert(Node::new_boxed(employee));
        Ok(&node.employee)
    }

    /// Removes the employee with the given id and returns it. If no employee has that id, nothing
    /// happens and `None` is returned.
    ///
    /// A node with two children is not unlinked itself. Its in-order successor (the leftmost node
    /// of its right subtree) is unlinked instead and the successor's record moves into its place.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster::record::Employee;
    /// use roster::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(Employee::new(1, 30, "A")).unwrap();
    ///
    /// assert_eq!(tree.remove(1).map(|e| e.id), Some(1));
    /// assert!(tree.remove(1).is_none());
    /// assert!(tree.is_empty());
    /// ```
    pub fn remove(&mut self, id: i32) -> Option<Employee> {
        let mut slot = &mut self.root;
        while slot.as_deref().is_some_and(|node| node.employee.id != id) {
            if let Some(node) = slot {
                slot = node.child_mut(id);
            }
        }

        let Some(node) = slot.as_mut() else {
            trace!(id, "no employee to remove");
            return None;
        };

        let removed = if node.left.is_some() && node.right.is_some() {
            let successor = Node::take_min(&mut node.right)?;
            std::mem::replace(&mut node.employee, successor.employee)
        } else {
            let mut node = slot.take()?;
            *slot = node.left.take().or_else(|| node.right.take());
            node.employee
        };

        self.len -= 1;
        debug!(id, len = self.len, "removed employee");
        Some(removed)
    }

    /// Potentially finds the employee with the given id. If no employee has the id, `None` is
    /// returned.
    pub fn find(&self, id: i32) -> Option<&Employee> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match id.cmp(&node.employee.id) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return Some(&node.employee),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        None
    }

    /// Whether an employee with the given id is stored.
    pub fn contains(&self, id: i32) -> bool {
        self.find(id).is_some()
    }

    /// The employee with the smallest id, or `None` if the tree is empty.
    pub fn min(&self) -> Option<&Employee> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.employee)
    }

    /// The employee with the largest id, or `None` if the tree is empty.
    pub fn max(&self) -> Option<&Employee> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.employee)
    }

    /// The number of nodes on the longest path from the root to a leaf. An empty tree has a
    /// height of 0.
    pub fn height(&self) -> usize {
        self.traverse().map(|visit| visit.depth).max().unwrap_or(0)
    }

    /// Removes every employee. Clearing an empty tree does nothing.
    pub fn clear(&mut self) {
        let freed = self.teardown();
        debug!(freed, "cleared tree");
    }

    /// Visits every employee in ascending id order. See [`Traverse`].
    pub fn traverse(&self) -> Traverse<'_> {
        Traverse {
            current: self.root.as_deref(),
            nodes: Stack::new(),
            depths: Stack::new(),
            depth: 0,
        }
    }

    /// Frees every node without recursing and returns how many there were.
    fn teardown(&mut self) -> usize {
        let mut pending = Stack::new();
        if let Some(root) = self.root.take() {
            pending.push(root);
        }

        let mut freed = 0;
        while let Some(mut node) = pending.pop() {
            if let Some(left) = node.left.take() {
                pending.push(left);
            }
            if let Some(right) = node.right.take() {
                pending.push(right);
            }
            freed += 1;
        }

        self.len = 0;
        freed
    }
}

impl<'a> IntoIterator for &'a Tree {
    type Item = Visit<'a>;
    type IntoIter = Traverse<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.traverse()
    }
}

/// One step of an in-order walk: an employee and how deep its node currently sits (root = 1).
///
/// `depth` reflects the tree's current shape. It can differ from `employee.level`, which records
/// where the employee was placed when it was inserted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Visit<'a> {
    /// The visited employee.
    pub employee: &'a Employee,
    /// Current depth of the node holding `employee`.
    pub depth: usize,
}

/// Lazy in-order iterator over a [`Tree`], created by [`Tree::traverse`].
///
/// Rather than recursing it keeps two stacks in lockstep: the nodes whose right subtrees are
/// still to be walked and the depth of each of those nodes.
pub struct Traverse<'a> {
    current: Option<&'a Node>,
    nodes: Stack<&'a Node>,
    depths: Stack<usize>,
    depth: usize,
}

impl<'a> Iterator for Traverse<'a> {
    type Item = Visit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        // Slide down to the smallest unvisited node, remembering the way back up.
        while let Some(node) = self.current {
            self.depth += 1;
            self.nodes.push(node);
            self.depths.push(self.depth);
            self.current = node.left.as_deref();
        }

        let node = self.nodes.pop()?;
        self.depth = self.depths.pop()?;
        self.current = node.right.as_deref();

        Some(Visit {
            employee: &node.employee,
            depth: self.depth,
        })
    }
}

impl FusedIterator for Traverse<'_> {}

struct Node {
    employee: Employee,
    left: Link,
    right: Link,
}

impl Node {
    fn new_boxed(employee: Employee) -> Box<Self> {
        Box::new(Self {
            employee,
            left: None,
            right: None,
        })
    }

    /// The child slot a search for `id` continues into. Equal ids go right.
    fn child_mut(&mut self, id: i32) -> &mut Link {
        if id < self.employee.id {
            &mut self.left
        } else {
            &mut self.right
        }
    }

    /// Unlinks the leftmost node of the subtree in `slot`, splicing its right child into its
    /// place.
    fn take_min(mut slot: &mut Link) -> Option<Box<Self>> {
        while slot.as_deref().is_some_and(|node| node.left.is_some()) {
            if let Some(node) = slot {
                slot = &mut node.left;
            }
        }

        let mut min = slot.take()?;
        *slot = min.right.take();
        Some(min)
    }
}
