use word_diff::{
    DiffConfig, DiffResult, LimitBehavior, deserialize_diff_result, diff_texts, render_html,
    serialize_diff_result, try_diff_texts,
};

#[test]
fn html_marks_insertion() {
    let html = render_html(&diff_texts("the cat sat", "the big cat sat"));
    assert_eq!(
        html,
        concat!(
            "<div class=\"diff-container\">",
            "<div class=\"diff diff-left\">",
            "<span class=\"diff-same\">the</span> ",
            "<span class=\"diff-same\">cat</span> ",
            "<span class=\"diff-same\">sat</span> ",
            "</div>",
            "<div class=\"diff diff-right\">",
            "<span class=\"diff-same\">the</span> ",
            "<span class=\"diff-added\">big</span> ",
            "<span class=\"diff-same\">cat</span> ",
            "<span class=\"diff-same\">sat</span> ",
            "</div>",
            "</div>",
        )
    );
}

#[test]
fn html_never_embeds_live_markup() {
    let html = render_html(&diff_texts(
        "safe text",
        "safe <script>alert('x')</script> text",
    ));
    assert!(html.contains("&lt;script&gt;alert(&#039;x&#039;)&lt;/script&gt;"));
    assert!(!html.contains("<script>"));
}

#[test]
fn html_left_side_has_no_added_class() {
    let html = render_html(&diff_texts("alpha beta", "gamma delta"));
    let (left, right) = html
        .split_once("<div class=\"diff diff-right\">")
        .expect("right block present");
    assert!(!left.contains("diff-added"));
    assert!(left.contains("diff-removed"));
    assert!(!right.contains("diff-removed"));
    assert!(right.contains("diff-added"));
}

#[test]
fn json_roundtrip_preserves_result() {
    let result = diff_texts("one two three", "one 2 three four");
    let json = serialize_diff_result(&result).expect("serialize");
    let parsed: DiffResult = deserialize_diff_result(&json).expect("deserialize");
    assert_eq!(parsed, result);
}

#[test]
fn json_reports_incomplete_fallback() {
    let config = DiffConfig {
        max_tokens: 2,
        on_limit_exceeded: LimitBehavior::FallbackToPositional,
        ..Default::default()
    };
    let result = try_diff_texts("a b", "b a", &config).expect("fallback");
    let value: serde_json::Value =
        serde_json::from_str(&serialize_diff_result(&result).expect("serialize")).expect("json");
    assert_eq!(value["version"], "1");
    assert_eq!(value["complete"], false);
    assert_eq!(value["warnings"].as_array().map(|w| w.len()), Some(1));
    assert_eq!(value["left"][0]["removed"], true);
    assert_eq!(value["right"][0]["added"], true);
}
