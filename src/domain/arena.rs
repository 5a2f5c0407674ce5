//! Arena-based storage for labeled trees.

use std::collections::BTreeSet;

use generational_arena::{Arena, Index};
use tracing::instrument;

/// Tree node in the arena-based hierarchy structure.
#[derive(Debug, Clone)]
pub struct TreeNode {
    /// Label of this node, expected unique within the tree
    pub label: String,
    /// Index of parent node in the arena, None for the root
    pub parent: Option<Index>,
    /// Indices of child nodes in the arena, in stored order
    pub children: Vec<Index>,
}

/// Arena-based tree of labeled nodes.
///
/// Nodes are referenced by generational arena indices, so the parent link is a
/// plain handle rather than an owning pointer. A tree always has a root and
/// nodes are never removed, so every index handed out stays valid for the
/// lifetime of the tree.
#[derive(Debug, Clone)]
pub struct Tree {
    /// Arena storage for all tree nodes
    arena: Arena<TreeNode>,
    /// Index of the current root node
    root: Index,
}

impl Tree {
    /// Creates a single-node tree.
    pub fn leaf(label: impl Into<String>) -> Self {
        let mut arena = Arena::new();
        let root = arena.insert(TreeNode {
            label: label.into(),
            parent: None,
            children: Vec::new(),
        });
        Self { arena, root }
    }

    /// Inserts a new node below `parent` and returns its index.
    #[instrument(level = "trace", skip(self))]
    pub fn insert_node(&mut self, label: String, parent: Index) -> Index {
        let node = TreeNode {
            label,
            parent: Some(parent),
            children: Vec::new(),
        };
        let node_idx = self.arena.insert(node);

        if let Some(parent) = self.arena.get_mut(parent) {
            parent.children.push(node_idx);
        }

        node_idx
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get_node(&self, idx: Index) -> Option<&TreeNode> {
        self.arena.get(idx)
    }

    pub(crate) fn get_node_mut(&mut self, idx: Index) -> Option<&mut TreeNode> {
        self.arena.get_mut(idx)
    }

    pub(crate) fn set_root(&mut self, idx: Index) {
        self.root = idx;
    }

    pub fn root_index(&self) -> Index {
        self.root
    }

    /// Read-only view of the current root.
    pub fn root(&self) -> Node<'_> {
        Node {
            tree: self,
            idx: self.root,
        }
    }

    /// View of the node at `idx`, if it belongs to this tree.
    pub fn node(&self, idx: Index) -> Option<Node<'_>> {
        self.arena.get(idx).map(|_| Node { tree: self, idx })
    }

    /// Label of the current root.
    pub fn value(&self) -> &str {
        self.root().value()
    }

    /// Children of the current root.
    pub fn children(&self) -> Vec<Node<'_>> {
        self.root().children()
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Always false: a tree has at least its root.
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Pre-order traversal from the root, children in stored order.
    #[instrument(level = "trace", skip(self))]
    pub fn iter(&self) -> TreeIterator<'_> {
        TreeIterator::new(self)
    }

    /// Number of nodes on the longest root-to-leaf path.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        self.calculate_depth(self.root)
    }

    fn calculate_depth(&self, node_idx: Index) -> usize {
        let mut max_depth = 0;
        let mut stack = vec![(node_idx, 1)];

        while let Some((idx, depth)) = stack.pop() {
            if let Some(node) = self.get_node(idx) {
                max_depth = max_depth.max(depth);
                for &child in &node.children {
                    stack.push((child, depth + 1));
                }
            }
        }

        max_depth
    }

    /// Collects the labels of all leaf nodes in depth-first order.
    ///
    /// A single-node tree reports its root as the only leaf.
    #[instrument(level = "debug", skip(self))]
    pub fn leaf_nodes(&self) -> Vec<String> {
        self.iter()
            .filter(|(_, node)| node.children.is_empty())
            .map(|(_, node)| node.label.clone())
            .collect()
    }

    /// Undirected edge set as label pairs, each pair ordered lexically.
    ///
    /// Independent of which node is the root, so two trees with equal edge
    /// sets have the same adjacency.
    #[instrument(level = "debug", skip(self))]
    pub fn edges(&self) -> BTreeSet<(String, String)> {
        let mut edges = BTreeSet::new();
        for (_, node) in self.iter() {
            for &child in &node.children {
                if let Some(child) = self.get_node(child) {
                    let (a, b) = (node.label.clone(), child.label.clone());
                    edges.insert(if a <= b { (a, b) } else { (b, a) });
                }
            }
        }
        edges
    }
}

/// Borrowed handle to a node of a [`Tree`].
#[derive(Debug, Clone, Copy)]
pub struct Node<'a> {
    tree: &'a Tree,
    idx: Index,
}

impl<'a> Node<'a> {
    fn data(&self) -> &'a TreeNode {
        // Indices are only handed out for live nodes and nodes are never removed.
        &self.tree.arena[self.idx]
    }

    pub fn index(&self) -> Index {
        self.idx
    }

    pub fn value(&self) -> &'a str {
        &self.data().label
    }

    pub fn children(&self) -> Vec<Node<'a>> {
        self.data()
            .children
            .iter()
            .map(|&idx| Node {
                tree: self.tree,
                idx,
            })
            .collect()
    }

    pub fn parent(&self) -> Option<Node<'a>> {
        self.data().parent.map(|idx| Node {
            tree: self.tree,
            idx,
        })
    }

    /// Pre-order traversal of the subtree below and including this node.
    pub fn descendants(&self) -> TreeIterator<'a> {
        TreeIterator::starting_at(self.tree, self.idx)
    }

    /// Labels of the children, in stored order.
    pub fn child_values(&self) -> Vec<&'a str> {
        self.children().iter().map(|child| child.value()).collect()
    }
}

pub struct TreeIterator<'a> {
    tree: &'a Tree,
    stack: Vec<Index>,
}

impl<'a> TreeIterator<'a> {
    fn new(tree: &'a Tree) -> Self {
        Self::starting_at(tree, tree.root)
    }

    fn starting_at(tree: &'a Tree, idx: Index) -> Self {
        Self {
            tree,
            stack: vec![idx],
        }
    }
}

impl<'a> Iterator for TreeIterator<'a> {
    type Item = (Index, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.tree.get_node(current_idx) {
                // Push children in reverse order for left-to-right traversal
                for &child in node.children.iter().rev() {
                    self.stack.push(child);
                }
                return Some((current_idx, node));
            }
        }
        None
    }
}
