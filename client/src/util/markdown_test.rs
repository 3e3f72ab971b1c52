use super::*;

#[test]
fn renders_emphasis_and_lists() {
    let html = render_markdown_html("**Goal:** ship\n\n- one\n- two\n");
    assert!(html.contains("<strong>Goal:</strong>"));
    assert!(html.contains("<li>one</li>"));
    assert!(html.contains("<li>two</li>"));
}

#[test]
fn drops_raw_html() {
    let html = render_markdown_html("before <script>alert(1)</script> after\n\n<div>block</div>\n");
    assert!(!html.contains("<script>"));
    assert!(!html.contains("<div>"));
    assert!(html.contains("before"));
}

#[test]
fn renders_links() {
    let html = render_markdown_html("[Medium](https://medium.com/@aemd2donchev)");
    assert!(html.contains(r#"<a href="https://medium.com/@aemd2donchev">Medium</a>"#));
}

#[test]
fn empty_input_renders_nothing() {
    assert!(render_markdown_html("").is_empty());
}
