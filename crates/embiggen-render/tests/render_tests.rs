//! Exercises the pretty-printer over trees built by the line parser.

use embiggen_render::{RenderOptions, render};
use embiggen_syntax::parse_line;

fn compile(line: &str) -> String {
    render(&parse_line(line).unwrap(), &RenderOptions::default())
}

#[test]
fn void_tag_is_self_closing() {
    assert_eq!(compile("br"), "<br/>\n");
}

#[test]
fn attributes_sort_alphabetically() {
    assert_eq!(
        compile("br#id.class1.class2"),
        "<br class=\"class1 class2\" id=\"id\"/>\n"
    );
}

#[test]
fn block_placeholder_is_a_blank_indented_line() {
    assert_eq!(
        compile("div#header + div#footer"),
        "<div id=\"header\">\n\t\n</div>\n<div id=\"footer\">\n\t\n</div>\n"
    );
}

#[test]
fn non_block_single_child_renders_inline() {
    assert_eq!(
        compile("a[href=http://x.com]{ Home }"),
        "<a href=\"http://x.com\">Home</a>\n"
    );
}

#[test]
fn nested_inline_elements_collapse() {
    assert_eq!(compile("span > em{hi}"), "<span><em>hi</em></span>\n");
}

#[test]
fn block_tag_indents_single_child() {
    assert_eq!(compile("div{text}"), "<div>\n\ttext\n</div>\n");
}

#[test]
fn nested_blocks_indent_each_level() {
    assert_eq!(compile("ul > li{one}"), "<ul>\n\t<li>one</li>\n</ul>\n");
}

#[test]
fn block_inside_block_indents_twice() {
    assert_eq!(
        compile("div > div{x}"),
        "<div>\n\t<div>\n\t\tx\n\t</div>\n</div>\n"
    );
}

#[test]
fn mixed_text_and_children_each_get_a_line() {
    assert_eq!(
        compile("div{hello} > span{x}"),
        "<div>\n\thello\n\t<span>x</span>\n</div>\n"
    );
}

#[test]
fn empty_braces_render_self_closing() {
    assert_eq!(compile("div{}"), "<div/>\n");
}

#[test]
fn required_attributes_are_filled_in() {
    // Non-block tags collapse the placeholder onto the opening line.
    assert_eq!(compile("script"), "<script type=\"text/javascript\"></script>\n");
}

#[test]
fn empty_line_renders_nothing() {
    assert_eq!(compile("   "), "");
}

#[test]
fn custom_indent_and_newline() {
    let tree = parse_line("div{x}").unwrap();
    let options = RenderOptions {
        indent_unit: "  ".to_string(),
        newline: "\r\n".to_string(),
        close_tag_guides: false,
    };
    assert_eq!(render(&tree, &options), "<div>\r\n  x\r\n</div>\r\n");
}

#[test]
fn close_tag_guides_only_on_divs_with_id() {
    let options = RenderOptions {
        close_tag_guides: true,
        ..RenderOptions::default()
    };

    let tree = parse_line("div#tagged").unwrap();
    assert_eq!(
        render(&tree, &options),
        "<div id=\"tagged\">\n\t\n</div><!-- /#tagged -->\n"
    );

    // No guide without an id, and none on non-div tags.
    let tree = parse_line("div{x}").unwrap();
    assert_eq!(render(&tree, &options), "<div>\n\tx\n</div>\n");
    let tree = parse_line("span#s{x}").unwrap();
    assert_eq!(render(&tree, &options), "<span id=\"s\">x</span>\n");
}

#[test]
fn guide_applies_to_nested_divs_too() {
    let options = RenderOptions {
        close_tag_guides: true,
        ..RenderOptions::default()
    };
    let tree = parse_line("div#outer > div#inner{x}").unwrap();
    assert_eq!(
        render(&tree, &options),
        "<div id=\"outer\">\n\t<div id=\"inner\">\n\t\tx\n\t</div><!-- /#inner -->\n</div><!-- /#outer -->\n"
    );
}

#[test]
fn render_is_idempotent() {
    let tree = parse_line("div > span{a} + span{b} < div").unwrap();
    let options = RenderOptions::default();
    assert_eq!(render(&tree, &options), render(&tree, &options));
}
