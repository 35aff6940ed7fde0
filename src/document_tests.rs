//! Tests for document

use super::*;

#[test]
fn test_new_splits_lines() {
    let doc = TextDocument::new("{{#a}}\nbody\n{{/a}}");
    assert_eq!(doc.line_count(), 3);
    assert_eq!(doc.line(0), Some("{{#a}}"));
    assert_eq!(doc.line(2), Some("{{/a}}"));
    assert_eq!(doc.line(3), None);
}

#[test]
fn test_new_strips_carriage_returns() {
    let doc = TextDocument::new("one\r\ntwo\r\n");
    assert_eq!(doc.lines(), &["one", "two", ""]);
}

#[test]
fn test_empty_document_has_one_line() {
    assert_eq!(TextDocument::new("").line_count(), 1);
    assert_eq!(TextDocument::from_lines(Vec::<String>::new()).line_count(), 1);
}

#[test]
fn test_text_range_single_line() {
    let doc = TextDocument::new("hello world");
    let text = doc.text_range(Position::new(0, 6), Position::new(0, 11));
    assert_eq!(text, "world");
}

#[test]
fn test_text_range_across_lines() {
    let doc = TextDocument::new("abc\ndef\nghi");
    let text = doc.text_range(Position::new(0, 1), Position::new(2, 2));
    assert_eq!(text, "bc\ndef\ngh");
}

#[test]
fn test_text_range_clamps_past_end() {
    let doc = TextDocument::new("abc\ndef");
    let text = doc.text_range(Position::new(1, 1), Position::new(9, 9));
    assert_eq!(text, "ef");
}

#[test]
fn test_text_range_reversed_is_empty() {
    let doc = TextDocument::new("abc");
    assert_eq!(doc.text_range(Position::new(0, 2), Position::new(0, 1)), "");
}

#[test]
fn test_text_range_counts_characters_not_bytes() {
    let doc = TextDocument::new("héllo {{#a}}");
    let text = doc.text_range(Position::new(0, 6), Position::new(0, 12));
    assert_eq!(text, "{{#a}}");
}

#[test]
fn test_line_prefix() {
    let doc = TextDocument::new("x {{#items}} y");
    assert_eq!(doc.line_prefix(Position::new(0, 12)), "x {{#items}}");
    assert_eq!(doc.line_prefix(Position::new(0, 0)), "");
}

#[test]
fn test_char_after() {
    let doc = TextDocument::new("{{#a}}x");
    assert_eq!(doc.char_after(Position::new(0, 6)), Some('x'));
    assert_eq!(doc.char_after(Position::new(0, 7)), None);
    assert_eq!(doc.char_after(Position::new(5, 0)), None);
}

#[test]
fn test_contains() {
    let doc = TextDocument::new("ab\n");
    assert!(doc.contains(Position::new(0, 2)));
    assert!(!doc.contains(Position::new(0, 3)));
    assert!(doc.contains(Position::new(1, 0)));
    assert!(!doc.contains(Position::new(2, 0)));
}
