//! Integration tests for the line parser's cursor walk.

use embiggen_dom::{Content, NodeId, Tree};
use embiggen_syntax::{CompileError, parse_line};

/// Helper to get an element's children, empty for leaf states.
fn children(tree: &Tree, id: NodeId) -> Vec<NodeId> {
    match tree.content(id) {
        Some(Content::Children(children)) => children.clone(),
        _ => Vec::new(),
    }
}

/// Helper to get an element's tag name.
fn tag(tree: &Tree, id: NodeId) -> &str {
    &tree.as_element(id).expect("element node").tag_name
}

#[test]
fn test_single_element() {
    let tree = parse_line("p").unwrap();
    let top = tree.top_level();
    assert_eq!(top.len(), 1);
    assert_eq!(tag(&tree, top[0]), "p");
    assert_eq!(tree.content(top[0]), Some(&Content::Empty));
}

#[test]
fn test_descend_builds_nesting() {
    let tree = parse_line("ul > li > a").unwrap();
    let ul = tree.top_level()[0];
    assert_eq!(tag(&tree, ul), "ul");

    let li = children(&tree, ul)[0];
    assert_eq!(tag(&tree, li), "li");

    let a = children(&tree, li)[0];
    assert_eq!(tag(&tree, a), "a");
    assert_eq!(tree.parent(a), Some(li));
    assert_eq!(tree.parent(li), Some(ul));
}

#[test]
fn test_sibling_keeps_cursor() {
    let tree = parse_line("div > span + span + span").unwrap();
    let div = tree.top_level()[0];
    let spans = children(&tree, div);
    assert_eq!(spans.len(), 3);
    for span in spans {
        assert_eq!(tag(&tree, span), "span");
        assert_eq!(tree.parent(span), Some(div));
    }
}

#[test]
fn test_ascend_returns_to_parent() {
    // Descend into div, add two spans, ascend back to root, add a second
    // top-level div.
    let tree = parse_line("div > span { a } + span { b } < div").unwrap();

    let top = tree.top_level();
    assert_eq!(top.len(), 2);
    assert_eq!(tag(&tree, top[0]), "div");
    assert_eq!(tag(&tree, top[1]), "div");

    let spans = children(&tree, top[0]);
    assert_eq!(spans.len(), 2);
    assert_eq!(tree.content(spans[0]), Some(&Content::Text("a".to_string())));
    assert_eq!(tree.content(spans[1]), Some(&Content::Text("b".to_string())));
}

#[test]
fn test_top_level_siblings() {
    let tree = parse_line("div#header + div#footer").unwrap();
    let top = tree.top_level();
    assert_eq!(top.len(), 2);
    assert_eq!(
        tree.as_element(top[0]).unwrap().id(),
        Some(&"header".to_string())
    );
    assert_eq!(
        tree.as_element(top[1]).unwrap().id(),
        Some(&"footer".to_string())
    );
}

#[test]
fn test_placeholder_consumed_by_first_child() {
    let tree = parse_line("div > p").unwrap();
    let div = tree.top_level()[0];
    // No empty text remains once a real child arrived.
    assert_eq!(children(&tree, div).len(), 1);
}

#[test]
fn test_text_content_kept_when_children_arrive() {
    let tree = parse_line("div{hello} > span").unwrap();
    let div = tree.top_level()[0];
    let kids = children(&tree, div);
    assert_eq!(kids.len(), 2);
    assert_eq!(tree.as_text(kids[0]), Some("hello"));
    assert_eq!(tag(&tree, kids[1]), "span");
}

#[test]
fn test_separators_inside_braces_are_literal() {
    let tree = parse_line("span{a > b + c} + em").unwrap();
    let top = tree.top_level();
    assert_eq!(top.len(), 2);
    assert_eq!(
        tree.content(top[0]),
        Some(&Content::Text("a > b + c".to_string()))
    );
    assert_eq!(tag(&tree, top[1]), "em");
}

#[test]
fn test_blank_line_is_an_empty_tree() {
    assert!(parse_line("").unwrap().top_level().is_empty());
    assert!(parse_line("   \t ").unwrap().top_level().is_empty());
}

#[test]
fn test_ascend_at_root_fails() {
    assert_eq!(
        parse_line("div < div"),
        Err(CompileError::UnbalancedAscend)
    );
}

#[test]
fn test_trailing_separator_fails() {
    assert!(matches!(
        parse_line("div >"),
        Err(CompileError::UnparseableLine(_))
    ));
}

#[test]
fn test_trailing_junk_fails() {
    assert!(matches!(
        parse_line("div ?what"),
        Err(CompileError::UnparseableLine(_))
    ));
}

#[test]
fn test_invalid_descriptor_propagates() {
    assert!(matches!(
        parse_line("div > br{x}"),
        Err(CompileError::InvalidDescriptor(_))
    ));
}
