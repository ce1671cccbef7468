//! Rendering of tree shape

use balanced_bst::display::TreeRender;
use balanced_bst::Tree;
use rstest::rstest;

#[rstest]
fn given_letters_when_rendering_then_box_drawing_layout() {
    let tree = Tree::build('A'..='K').unwrap();
    let expected = "\
│       ┌── K
│       │   └── J
│   ┌── I
│   │   └── H
│   │       └── G
└── F
    │   ┌── E
    │   │   └── D
    └── C
        └── B
            └── A
";
    assert_eq!(tree.render_string(), expected);
}

#[rstest]
fn given_single_element_when_rendering_then_one_line() {
    let tree = Tree::build([1]).unwrap();
    assert_eq!(tree.render_string(), "└── 1\n");
}

#[rstest]
fn given_letters_when_converting_to_termtree_then_root_label_first() {
    let tree = Tree::build('A'..='K').unwrap();
    let rendered = tree.to_tree_string().to_string();
    assert!(rendered.starts_with('F'));
    for c in 'A'..='K' {
        assert!(rendered.contains(c), "missing label {c}");
    }
}
