//! Markup rendering of a [`DiffResult`].
//!
//! Produces two side-by-side blocks inside a container:
//!
//! ```text
//! <div class="diff-container">
//!   <div class="diff diff-left">…</div>
//!   <div class="diff diff-right">…</div>
//! </div>
//! ```
//!
//! (emitted without the whitespace shown). Each token becomes a `span` whose
//! class reflects its classification, followed by a single space.

use crate::diff::{ClassifiedToken, DiffResult, TokenChange};
use crate::escape::escape_html;
use std::io;

const CLASS_SAME: &str = "diff-same";
const CLASS_REMOVED: &str = "diff-removed";
const CLASS_ADDED: &str = "diff-added";

pub fn render_html(result: &DiffResult) -> String {
    let capacity = (result.left.len() + result.right.len()) * 40 + 96;
    let mut out = String::with_capacity(capacity);
    out.push_str("<div class=\"diff-container\">");
    push_side(&mut out, "diff diff-left", &result.left);
    push_side(&mut out, "diff diff-right", &result.right);
    out.push_str("</div>");
    out
}

pub fn write_html<W: io::Write>(w: &mut W, result: &DiffResult) -> io::Result<()> {
    w.write_all(render_html(result).as_bytes())
}

fn push_side(out: &mut String, class: &str, tokens: &[ClassifiedToken]) {
    out.push_str("<div class=\"");
    out.push_str(class);
    out.push_str("\">");
    for token in tokens {
        let span_class = match token.change() {
            TokenChange::Unchanged => CLASS_SAME,
            TokenChange::Removed => CLASS_REMOVED,
            TokenChange::Added => CLASS_ADDED,
        };
        out.push_str("<span class=\"");
        out.push_str(span_class);
        out.push_str("\">");
        out.push_str(&escape_html(&token.text));
        out.push_str("</span> ");
    }
    out.push_str("</div>");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_both_sides_in_order() {
        let result = DiffResult::new(
            vec![ClassifiedToken::removed("a"), ClassifiedToken::unchanged("b")],
            vec![ClassifiedToken::unchanged("b"), ClassifiedToken::added("a")],
        );
        assert_eq!(
            render_html(&result),
            concat!(
                "<div class=\"diff-container\">",
                "<div class=\"diff diff-left\">",
                "<span class=\"diff-removed\">a</span> ",
                "<span class=\"diff-same\">b</span> ",
                "</div>",
                "<div class=\"diff diff-right\">",
                "<span class=\"diff-same\">b</span> ",
                "<span class=\"diff-added\">a</span> ",
                "</div>",
                "</div>",
            )
        );
    }

    #[test]
    fn empty_result_renders_empty_sides() {
        let result = DiffResult::new(Vec::new(), Vec::new());
        assert_eq!(
            render_html(&result),
            "<div class=\"diff-container\"><div class=\"diff diff-left\"></div><div class=\"diff diff-right\"></div></div>"
        );
    }

    #[test]
    fn token_text_is_escaped() {
        let result = DiffResult::new(
            vec![ClassifiedToken::removed("<script>")],
            vec![ClassifiedToken::added("\"x\"&'y'")],
        );
        let html = render_html(&result);
        assert!(html.contains("<span class=\"diff-removed\">&lt;script&gt;</span>"));
        assert!(html.contains("<span class=\"diff-added\">&quot;x&quot;&amp;&#039;y&#039;</span>"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn write_html_matches_render() {
        let result = DiffResult::new(vec![ClassifiedToken::unchanged("x")], Vec::new());
        let mut buf = Vec::new();
        write_html(&mut buf, &result).expect("write to vec");
        assert_eq!(String::from_utf8(buf).expect("utf8"), render_html(&result));
    }
}
