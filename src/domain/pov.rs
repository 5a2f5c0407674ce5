//! Point-of-view operations: lookup, re-rooting and path search.

use generational_arena::Index;
use tracing::{debug, instrument, trace};

use crate::domain::arena::{Node, Tree};

impl Tree {
    /// Finds the first node labeled `label` in depth-first pre-order.
    #[instrument(level = "debug", skip(self))]
    pub fn find(&self, label: &str) -> Option<Index> {
        self.iter()
            .find(|(_, node)| node.label == label)
            .map(|(idx, _)| idx)
    }

    /// Re-roots the tree in place at the node labeled `label`.
    ///
    /// Edges along the path from the old root to the target are reversed, all
    /// other edges are left untouched. Returns the new root, or `None` when no
    /// node carries `label`, in which case the tree is not modified.
    #[instrument(level = "debug", skip(self))]
    pub fn from_point_of_view(&mut self, label: &str) -> Option<Node<'_>> {
        let target = self.find(label)?;
        self.reroot_at(target);
        Some(self.root())
    }

    fn reroot_at(&mut self, target: Index) {
        let mut next = self.get_node_mut(target).and_then(|node| node.parent.take());
        let mut current = target;

        while let Some(parent) = next {
            let Some(parent_node) = self.get_node_mut(parent) else {
                break;
            };
            next = parent_node.parent.replace(current);
            if let Some(pos) = parent_node.children.iter().position(|&c| c == current) {
                parent_node.children.remove(pos);
            }
            trace!(label = %parent_node.label, "reversing edge");

            if let Some(current_node) = self.get_node_mut(current) {
                current_node.children.push(parent);
            }
            current = parent;
        }

        self.set_root(target);
        debug!(root = %self.value(), "re-rooted");
    }

    /// Labels on the unique path from `from` to `to`, both inclusive.
    ///
    /// The tree is re-rooted at `from` as part of the search and stays that
    /// way. Returns `None` when either label is absent.
    #[instrument(level = "debug", skip(self))]
    pub fn path_to(&mut self, from: &str, to: &str) -> Option<Vec<String>> {
        let root = self.from_point_of_view(from)?.index();

        let mut path: Vec<String> = Vec::new();
        let mut stack: Vec<(Index, usize)> = vec![(root, 0)];

        while let Some((idx, depth)) = stack.pop() {
            let Some(node) = self.get_node(idx) else {
                continue;
            };
            path.truncate(depth);
            path.push(node.label.clone());

            if node.label == to {
                debug!(hops = path.len() - 1, "path found");
                return Some(path);
            }
            for &child in node.children.iter().rev() {
                stack.push((child, depth + 1));
            }
        }

        debug!("target not reachable");
        None
    }
}
