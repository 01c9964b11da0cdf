//! Tests for attaching path-addressed values to a name-only tree

use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};

use rshier::util::testing;
use rshier::{ProjectedTreeNode, SimpleTree, SimpleTreeNode, TreeBuilder};

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

fn simple(name: &str, children: Vec<SimpleTreeNode>) -> SimpleTreeNode {
    SimpleTreeNode::new(name).with_children(children)
}

fn projected<V>(name: &str, item: Option<V>, children: Vec<ProjectedTreeNode<V>>) -> ProjectedTreeNode<V> {
    ProjectedTreeNode::new(name, item).with_children(children)
}

// A
// B ── C
// D ── E ── F
//          └ G
// G
#[fixture]
fn tree() -> SimpleTree {
    SimpleTree::new(vec![
        simple("A", vec![]),
        simple("B", vec![simple("C", vec![])]),
        simple(
            "D",
            vec![simple("E", vec![simple("F", vec![]), simple("G", vec![])])],
        ),
        simple("G", vec![]),
    ])
}

#[rstest]
fn given_values_for_paths_when_joining_then_projects_onto_matching_nodes(tree: SimpleTree) {
    let values = vec![("A", 1), ("B.C", 2), ("D.E.F", 3), ("D.E.G", 4), ("D", 5)];

    let result = tree.join(values);

    let expected = vec![
        projected("A", Some(1), vec![]),
        projected("B", None, vec![projected("C", Some(2), vec![])]),
        projected(
            "D",
            Some(5),
            vec![projected(
                "E",
                None,
                vec![projected("F", Some(3), vec![]), projected("G", Some(4), vec![])],
            )],
        ),
    ];
    assert_eq!(result.nodes(), expected.as_slice());
}

#[rstest]
fn given_untargeted_root_when_joining_then_it_is_left_out(tree: SimpleTree) {
    let result = tree.join([("A", 'a')]);

    let names: Vec<&str> = result.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, vec!["A"]);
}

#[rstest]
#[case("X")]
#[case("X.A")]
#[case("")]
fn given_path_outside_tree_when_joining_then_it_is_dropped(tree: SimpleTree, #[case] path: &str) {
    let result = tree.join([(path, 1)]);
    assert!(result.is_empty());
}

#[rstest]
fn given_path_diverging_below_root_when_joining_then_keeps_matched_prefix(tree: SimpleTree) {
    let result = tree.join([("D.E.Z", 1)]);

    let expected = vec![projected("D", None, vec![projected("E", None, vec![])])];
    assert_eq!(result.into_nodes(), expected);
}

#[rstest]
fn given_same_path_twice_when_joining_then_first_value_wins(tree: SimpleTree) {
    let result = tree.join([("B.C", "first"), ("B.C", "second")]);

    let expected = vec![projected("B", None, vec![projected("C", Some("first"), vec![])])];
    assert_eq!(result.nodes(), expected.as_slice());
}

#[rstest]
fn given_zero_value_when_joining_then_it_differs_from_absent(tree: SimpleTree) {
    let result = tree.join([("B.C", 0)]);

    let b = &result.nodes()[0];
    assert_eq!(b.item, None);
    assert_eq!(b.children[0].item, Some(0));
}

#[test]
fn given_built_tree_when_joining_with_delimiter_then_pipeline_matches() {
    let tree = TreeBuilder::with_delimiter(':').build(["svc:api", "svc:db", "web"]);

    let result = tree.join_with([("svc:db", 5432u16), ("web", 80), ("svc", 1)], ':');

    let expected = vec![
        projected("svc", Some(1), vec![projected("db", Some(5432), vec![])]),
        projected("web", Some(80), vec![]),
    ];
    assert_eq!(result.into_nodes(), expected);
}

#[rstest]
fn given_projected_tree_when_displaying_then_shows_values(tree: SimpleTree) {
    let result = tree.join([("B.C", 2)]);
    assert_eq!(result.to_string(), "B\n└── C = 2\n");
}
