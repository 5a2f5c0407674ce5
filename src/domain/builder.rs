//! Bottom-up tree construction from nested descriptions.

use generational_arena::Index;
use tracing::instrument;

use crate::domain::arena::Tree;

/// Builds a tree rooted at `label` with the given sub-trees as children.
///
/// Each child is grafted into the new tree's arena and its root gets the new
/// node as parent. The new node itself has no parent.
#[instrument(level = "debug", skip_all, fields(label = %label.as_ref()))]
pub fn build<S, I>(label: S, children: I) -> Tree
where
    S: AsRef<str>,
    I: IntoIterator<Item = Tree>,
{
    let mut tree = Tree::leaf(label.as_ref());
    let root = tree.root_index();
    for child in children {
        graft(&mut tree, root, &child);
    }
    tree
}

impl Tree {
    /// See [`build`].
    pub fn build<S, I>(label: S, children: I) -> Tree
    where
        S: AsRef<str>,
        I: IntoIterator<Item = Tree>,
    {
        build(label, children)
    }
}

/// Copies `subtree` below `parent`, preserving child order.
fn graft(tree: &mut Tree, parent: Index, subtree: &Tree) {
    let mut stack: Vec<(Index, Index)> = vec![(subtree.root_index(), parent)];

    while let Some((source_idx, target_parent)) = stack.pop() {
        let Some(source) = subtree.get_node(source_idx) else {
            continue;
        };
        let new_idx = tree.insert_node(source.label.clone(), target_parent);
        // Reverse so the first child is inserted first
        for &child in source.children.iter().rev() {
            stack.push((child, new_idx));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    //      one
    //     /   \
    //   two   four
    //    |    /  \
    // three five seven
    //         |
    //        six
    #[test]
    fn given_nested_description_when_building_then_structure_matches() {
        let tree = build(
            "one",
            [
                build("two", [Tree::leaf("three")]),
                build("four", [build("five", [Tree::leaf("six")]), Tree::leaf("seven")]),
            ],
        );

        assert_eq!(tree.value(), "one");
        assert_eq!(tree.root().child_values(), vec!["two", "four"]);
        let four = tree.children()[1];
        assert_eq!(four.child_values(), vec!["five", "seven"]);
        assert_eq!(four.children()[0].child_values(), vec!["six"]);
        assert_eq!(tree.len(), 7);
        assert_eq!(tree.depth(), 4);
    }

    #[test]
    fn given_children_when_building_then_parents_point_to_new_node() {
        let tree = build("parent", [Tree::leaf("a"), Tree::leaf("b")]);
        assert!(tree.root().parent().is_none());
        for child in tree.children() {
            assert_eq!(child.parent().map(|p| p.value()), Some("parent"));
        }
    }

    #[test]
    fn given_no_children_when_building_then_returns_leaf() {
        let tree = build("x", Vec::<Tree>::new());
        assert_eq!(tree.value(), "x");
        assert!(tree.children().is_empty());
    }
}
