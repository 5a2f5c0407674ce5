//! Re-rooting and path search on built trees

use std::collections::{BTreeMap, BTreeSet};

use pov::domain::{build, parse, Tree};
use pov::util::testing;
use rstest::{fixture, rstest};

//        one
//       /   \
//     two   four
//      |    /  \
//  three  five seven
//           |
//          six
#[fixture]
fn numbers() -> Tree {
    testing::init_test_setup();
    build(
        "one",
        [
            build("two", [Tree::leaf("three")]),
            build("four", [build("five", [Tree::leaf("six")]), Tree::leaf("seven")]),
        ],
    )
}

#[fixture]
fn x_with_siblings() -> Tree {
    build("parent", [Tree::leaf("x"), Tree::leaf("a"), Tree::leaf("b")])
}

fn sorted(labels: Vec<&str>) -> BTreeSet<String> {
    labels.into_iter().map(str::to_string).collect()
}

/// Child labels of every node, keyed by the node's label.
fn child_sets(tree: &Tree) -> BTreeMap<String, BTreeSet<String>> {
    tree.iter()
        .map(|(idx, node)| {
            let children = tree.node(idx).map(|n| n.child_values()).unwrap_or_default();
            (node.label.clone(), sorted(children))
        })
        .collect()
}

/// `(n0 (n1 (... (n{depth-1} leaf))))`
fn chain_notation(depth: usize) -> String {
    let mut notation = String::new();
    for i in 0..depth {
        notation.push_str(&format!("(n{i} "));
    }
    notation.push_str("leaf");
    notation.push_str(&")".repeat(depth));
    notation
}

// ============================================================
// Re-rooting
// ============================================================

#[test]
fn given_single_node_when_rerooting_then_returns_same_node() {
    let mut tree = Tree::leaf("x");
    let root = tree.from_point_of_view("x").unwrap();
    assert_eq!(root.value(), "x");
    assert!(root.children().is_empty());
}

#[rstest]
fn given_current_root_when_rerooting_then_nothing_changes(mut x_with_siblings: Tree) {
    let root = x_with_siblings.from_point_of_view("parent").unwrap();
    assert_eq!(root.value(), "parent");
    assert_eq!(root.child_values(), vec!["x", "a", "b"]);
}

//   x
//  / \
// a   b
#[test]
fn given_root_with_two_leaves_when_viewing_from_root_or_leaf_then_edges_follow() {
    let mut tree = build("x", [Tree::leaf("a"), Tree::leaf("b")]);

    let root = tree.from_point_of_view("x").unwrap();
    assert_eq!(root.value(), "x");
    assert_eq!(sorted(root.child_values()), sorted(vec!["a", "b"]));

    let root = tree.from_point_of_view("a").unwrap();
    assert_eq!(root.value(), "a");
    let children = root.children();
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].value(), "x");
    assert_eq!(children[0].child_values(), vec!["b"]);
    assert_eq!(tree.to_string(), "(a (x b))");
}

#[rstest]
fn given_leaf_when_rerooting_then_former_parent_becomes_only_child(mut x_with_siblings: Tree) {
    let root = x_with_siblings.from_point_of_view("x").unwrap();
    assert_eq!(root.value(), "x");
    let children = root.children();
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].value(), "parent");
    assert_eq!(sorted(children[0].child_values()), sorted(vec!["a", "b"]));
}

#[test]
fn given_parent_with_siblings_when_rerooting_at_child_then_siblings_stay() {
    let mut tree = build(
        "parent",
        [
            build("x", [Tree::leaf("kid-0"), Tree::leaf("kid-1")]),
            Tree::leaf("sibling-0"),
            Tree::leaf("sibling-1"),
        ],
    );
    tree.from_point_of_view("x").unwrap();
    assert_eq!(tree.to_string(), "(x kid-0 kid-1 (parent sibling-0 sibling-1))");
}

#[rstest]
fn given_deep_node_when_rerooting_then_path_edges_are_reversed(mut numbers: Tree) {
    let root = numbers.from_point_of_view("six").unwrap();
    assert_eq!(root.child_values(), vec!["five"]);
    assert_eq!(numbers.to_string(), "(six (five (four seven (one (two three)))))");
    assert_eq!(numbers.depth(), 6);
    assert_eq!(numbers.len(), 7);
}

#[rstest]
#[case("one")]
#[case("three")]
#[case("four")]
#[case("six")]
#[case("seven")]
fn given_any_node_when_rerooting_then_adjacency_is_preserved(
    mut numbers: Tree,
    #[case] label: &str,
) {
    let before = numbers.edges();
    let root = numbers.from_point_of_view(label).unwrap();
    assert_eq!(root.value(), label);
    assert!(root.parent().is_none());
    assert_eq!(numbers.edges(), before);
}

#[rstest]
#[case("two")]
#[case("five")]
#[case("seven")]
fn given_rerooted_tree_when_rerooting_back_then_original_is_restored(
    mut numbers: Tree,
    #[case] label: &str,
) {
    let before = numbers.edges();
    let children_before = child_sets(&numbers);
    let depth_before = numbers.depth();

    numbers.from_point_of_view(label).unwrap();
    numbers.from_point_of_view("one").unwrap();

    assert_eq!(numbers.value(), "one");
    assert_eq!(numbers.edges(), before);
    assert_eq!(numbers.depth(), depth_before);
    // Child order may differ, the children of each node may not
    assert_eq!(child_sets(&numbers), children_before);
}

#[rstest]
fn given_missing_label_when_rerooting_then_returns_none_and_tree_survives(mut numbers: Tree) {
    let before = numbers.to_string();
    assert!(numbers.from_point_of_view("nonexistent").is_none());
    assert_eq!(numbers.to_string(), before);
    assert_eq!(numbers.from_point_of_view("six").map(|n| n.value()), Some("six"));
}

#[test]
fn given_duplicate_labels_when_rerooting_then_first_match_is_used() {
    let mut tree = parse("(r (a dup) (b dup))").unwrap();
    let root = tree.from_point_of_view("dup").unwrap();
    assert_eq!(root.child_values(), vec!["a"]);
    assert_eq!(tree.to_string(), "(dup (a (r (b dup))))");
}

// ============================================================
// Path search
// ============================================================

#[rstest]
fn given_distant_nodes_when_searching_path_then_returns_unique_path(mut numbers: Tree) {
    assert_eq!(
        numbers.path_to("three", "seven").unwrap(),
        vec!["three", "two", "one", "four", "seven"]
    );
}

#[test]
fn given_single_node_when_searching_path_to_itself_then_returns_it() {
    let mut tree = Tree::leaf("x");
    assert_eq!(tree.path_to("x", "x").unwrap(), vec!["x"]);
}

#[rstest]
#[case("one")]
#[case("three")]
#[case("six")]
fn given_same_endpoints_when_searching_path_then_returns_single_label(
    mut numbers: Tree,
    #[case] label: &str,
) {
    assert_eq!(numbers.path_to(label, label).unwrap(), vec![label]);
}

#[rstest]
#[case("three", "six")]
#[case("seven", "two")]
#[case("one", "six")]
#[case("five", "seven")]
fn given_two_nodes_when_swapping_endpoints_then_path_is_reversed(
    mut numbers: Tree,
    #[case] a: &str,
    #[case] b: &str,
) {
    let forward = numbers.path_to(a, b).unwrap();
    let mut backward = numbers.path_to(b, a).unwrap();
    backward.reverse();
    assert_eq!(forward, backward);
}

#[rstest]
fn given_parent_and_child_when_searching_path_then_returns_both(mut x_with_siblings: Tree) {
    assert_eq!(
        x_with_siblings.path_to("x", "parent").unwrap(),
        vec!["x", "parent"]
    );
    assert_eq!(
        x_with_siblings.path_to("a", "b").unwrap(),
        vec!["a", "parent", "b"]
    );
}

#[rstest]
#[case("nonexistent", "one")]
#[case("one", "nonexistent")]
#[case("nope", "nada")]
fn given_missing_label_when_searching_path_then_returns_none(
    mut numbers: Tree,
    #[case] from: &str,
    #[case] to: &str,
) {
    assert!(numbers.path_to(from, to).is_none());
    // Tree is still usable afterwards
    assert_eq!(numbers.len(), 7);
    assert_eq!(
        numbers.path_to("six", "two").unwrap(),
        vec!["six", "five", "four", "one", "two"]
    );
}

// ============================================================
// Deep trees
// ============================================================

const CHAIN_DEPTH: usize = 200_000;

#[test]
fn given_deep_chain_when_rendering_then_round_trips_without_recursion() {
    let notation = chain_notation(CHAIN_DEPTH);
    let tree = parse(&notation).unwrap();
    assert_eq!(tree.to_string(), notation);
}

#[test]
fn given_deep_chain_when_measuring_then_reports_depth_and_leaves() {
    let tree = parse(&chain_notation(CHAIN_DEPTH)).unwrap();
    assert_eq!(tree.depth(), CHAIN_DEPTH + 1);
    assert_eq!(tree.len(), CHAIN_DEPTH + 1);
    assert_eq!(tree.leaf_nodes(), vec!["leaf"]);
}

#[test]
fn given_deep_chain_when_rerooting_at_leaf_then_chain_is_reversed() {
    let mut tree = parse(&chain_notation(CHAIN_DEPTH)).unwrap();
    let path = tree.path_to("leaf", "n0").unwrap();
    assert_eq!(path.len(), CHAIN_DEPTH + 1);
    assert_eq!(path.first().map(String::as_str), Some("leaf"));
    assert_eq!(path.last().map(String::as_str), Some("n0"));
    assert_eq!(tree.depth(), CHAIN_DEPTH + 1);
    assert_eq!(tree.leaf_nodes(), vec!["n0"]);
}
