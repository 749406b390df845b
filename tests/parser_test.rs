//! Tests for outline parsing

use generational_arena::Index;
use rstest::rstest;

use treegen::domain::{parse_input, split_input, TreeArena, ROOT_DEPTH, ROOT_NAME};
use treegen::util::testing;

const MOCK_INPUT: &str = "
my-app
  src
    main.js
    style.css
  dist
    index.html
    assets
      index.css
      index.js
  index.html
  package.json
  package-lock.json
  README.md
";

fn child_names(tree: &TreeArena, idx: Index) -> Vec<&str> {
    tree.get_node(idx)
        .unwrap()
        .children
        .iter()
        .map(|&c| tree.get_node(c).unwrap().data.name.as_str())
        .collect()
}

fn child(tree: &TreeArena, idx: Index, n: usize) -> Index {
    tree.get_node(idx).unwrap().children[n]
}

#[test]
fn given_mock_input_when_splitting_then_returns_flat_entries_in_order() {
    testing::init_test_setup();

    let entries = split_input(MOCK_INPUT);

    let pairs: Vec<_> = entries
        .iter()
        .map(|e| (e.name.as_str(), e.indent_depth))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("my-app", 0),
            ("src", 2),
            ("main.js", 4),
            ("style.css", 4),
            ("dist", 2),
            ("index.html", 4),
            ("assets", 4),
            ("index.css", 6),
            ("index.js", 6),
            ("index.html", 2),
            ("package.json", 2),
            ("package-lock.json", 2),
            ("README.md", 2),
        ]
    );
}

#[test]
fn given_mock_input_when_parsing_then_builds_expected_hierarchy() {
    testing::init_test_setup();

    let tree = parse_input(MOCK_INPUT);

    let root = tree.root().unwrap();
    let root_node = tree.get_node(root).unwrap();
    assert_eq!(root_node.data.name, ROOT_NAME);
    assert_eq!(root_node.data.indent_depth, ROOT_DEPTH);
    assert!(root_node.parent.is_none());
    assert_eq!(child_names(&tree, root), vec!["my-app"]);

    let my_app = child(&tree, root, 0);
    assert_eq!(
        child_names(&tree, my_app),
        vec![
            "src",
            "dist",
            "index.html",
            "package.json",
            "package-lock.json",
            "README.md"
        ]
    );

    let src = child(&tree, my_app, 0);
    assert_eq!(child_names(&tree, src), vec!["main.js", "style.css"]);

    let dist = child(&tree, my_app, 1);
    assert_eq!(child_names(&tree, dist), vec!["index.html", "assets"]);

    let assets = child(&tree, dist, 1);
    assert_eq!(child_names(&tree, assets), vec!["index.css", "index.js"]);
    assert_eq!(tree.get_node(assets).unwrap().parent, Some(dist));

    assert_eq!(tree.len(), 14);
    assert_eq!(tree.depth(), 5);
}

#[rstest]
#[case::mock(MOCK_INPUT)]
#[case::irregular_steps("a\n   b\n c\n  d\n      e\nf\n f")]
#[case::indented_first_line("      a\n  b\n    c\nd")]
#[case::tabs_and_spaces("a\n\tb\n\t c\n  d\n\t\te")]
#[case::deep_dedent("a\n b\n  c\n   d\n    e\nf")]
#[case::blank_lines("\n\n  x\n\n    y\n   \n  z\n\n")]
fn given_any_outline_when_parsing_then_structural_invariants_hold(#[case] input: &str) {
    testing::init_test_setup();

    let entries = split_input(input);
    let tree = parse_input(input);
    let root = tree.root().unwrap();

    // Pre-order (without root) reproduces the flat order
    let visited: Vec<_> = tree.iter().skip(1).collect();
    assert_eq!(visited.len(), entries.len());
    for ((_, node), entry) in visited.iter().zip(&entries) {
        assert_eq!(&node.data, entry);
    }

    // Parent is the nearest preceding entry with strictly smaller depth
    for (pos, (idx, node)) in visited.iter().enumerate() {
        let expected = visited[..pos]
            .iter()
            .rev()
            .find(|(_, prev)| prev.data.indent_depth < node.data.indent_depth)
            .map(|(prev_idx, _)| *prev_idx)
            .unwrap_or(root);
        assert_eq!(node.parent, Some(expected), "parent of {}", node.data.name);

        // Listed exactly once among the parent's children
        let siblings = &tree.get_node(expected).unwrap().children;
        assert_eq!(siblings.iter().filter(|&&c| c == *idx).count(), 1);
    }

    // Exactly one last child per parent: the most recently appended one
    for (_, node) in tree.iter() {
        let last: Vec<_> = node
            .children
            .iter()
            .filter(|&&c| tree.is_last_child(c))
            .collect();
        if node.children.is_empty() {
            assert!(last.is_empty());
        } else {
            assert_eq!(last, vec![node.children.last().unwrap()]);
        }
    }
}

#[rstest]
#[case::empty("")]
#[case::newlines("\n\n\n")]
#[case::whitespace("  \n\t\n   \r\n")]
fn given_blank_input_when_parsing_then_returns_root_without_children(#[case] input: &str) {
    let tree = parse_input(input);

    assert!(split_input(input).is_empty());
    assert_eq!(tree.len(), 1);
    assert!(tree
        .get_node(tree.root().unwrap())
        .unwrap()
        .children
        .is_empty());
}

#[test]
fn given_very_deep_outline_when_parsing_then_does_not_overflow() {
    let input: String = (0..3_000)
        .map(|i| format!("{}n{}\n", " ".repeat(i), i))
        .collect();

    let tree = parse_input(&input);

    assert_eq!(tree.depth(), 3_001);
    assert_eq!(tree.leaf_nodes(), vec!["n2999"]);
}
