use devops_landing::markup::{DisplayNode, classify_line, render};
use proptest::prelude::*;

// Lines drawn from the shapes the manual uses, plus arbitrary noise.
fn markup_line() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[ \t]{0,4}",
        "[a-zA-Z ():/-]{1,30}",
        "• [a-zA-Z :]{0,20}",
        "• \\*\\*[a-zA-Z]{1,8}\\*\\*: [a-z ]{0,20}",
        "\\*\\*[a-zA-Z ]{1,16}:\\*\\*",
        "[*•a-z ]{0,12}",
        any::<String>().prop_filter("single line", |s| !s.contains('\n')),
    ]
}

fn markup_doc() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(markup_line(), 0..24)
}

proptest! {
    #[test]
    fn one_node_per_input_line(lines in markup_doc()) {
        let content = lines.join("\n");
        let nodes = render(&content);
        prop_assert_eq!(nodes.len(), content.split('\n').count());
    }

    #[test]
    fn nodes_follow_input_line_order(lines in markup_doc()) {
        let content = lines.join("\n");
        let expected: Vec<DisplayNode> = content.split('\n').map(classify_line).collect();
        prop_assert_eq!(render(&content), expected);
    }

    #[test]
    fn rendering_is_deterministic(lines in markup_doc()) {
        let content = lines.join("\n");
        prop_assert_eq!(render(&content), render(&content));
    }

    #[test]
    fn surrounding_whitespace_is_insignificant(
        lines in markup_doc(),
        left in "[ \t]{0,3}",
        right in "[ \t]{0,3}",
    ) {
        let plain = lines.join("\n");
        let padded = lines
            .iter()
            .map(|line| format!("{left}{line}{right}"))
            .collect::<Vec<_>>()
            .join("\n");
        prop_assert_eq!(render(&plain), render(&padded));
    }

    #[test]
    fn blank_lines_map_to_blank_nodes(lines in markup_doc()) {
        let content = lines.join("\n");
        for (line, node) in content.split('\n').zip(render(&content)) {
            prop_assert_eq!(line.trim().is_empty(), node == DisplayNode::Blank);
        }
    }

    #[test]
    fn emphasized_spans_set_the_flag(lines in markup_doc()) {
        for node in render(&lines.join("\n")) {
            if let DisplayNode::Bullet { spans, has_emphasis } = &node
                && spans.iter().any(|s| s.is_emphasis())
            {
                prop_assert!(*has_emphasis);
            }
        }
    }
}

#[test]
fn plain_paragraphs_keep_their_order() {
    let nodes = render("first\nsecond\nthird");
    let texts: Vec<String> = nodes.iter().map(DisplayNode::plain_text).collect();
    assert_eq!(texts, ["first", "second", "third"]);
}
