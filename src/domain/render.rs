//! Conversion into `termtree` for box-drawing terminal output.

use std::collections::HashMap;

use generational_arena::Index;
use termtree::Tree as TermTree;
use tracing::instrument;

use crate::domain::arena::{Node, Tree};

pub trait ToTermTree {
    fn to_term_tree(&self) -> TermTree<String>;
}

impl ToTermTree for Tree {
    #[instrument(level = "debug", skip(self))]
    fn to_term_tree(&self) -> TermTree<String> {
        self.root().to_term_tree()
    }
}

impl ToTermTree for Node<'_> {
    /// Built bottom-up from a pre-order listing, so depth does not grow the call stack.
    fn to_term_tree(&self) -> TermTree<String> {
        let order: Vec<_> = self.descendants().collect();
        let mut built: HashMap<Index, TermTree<String>> = HashMap::with_capacity(order.len());

        for &(idx, node) in order.iter().rev() {
            let leaves: Vec<_> = node
                .children
                .iter()
                .filter_map(|child| built.remove(child))
                .collect();
            built.insert(idx, TermTree::new(node.label.clone()).with_leaves(leaves));
        }

        built
            .remove(&self.index())
            .unwrap_or_else(|| TermTree::new(self.value().to_string()))
    }
}
