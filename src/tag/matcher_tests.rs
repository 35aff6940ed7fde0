//! Tests for matcher

use super::*;
use crate::document::TextDocument;
use crate::tag::extractor::tag_at_cursor;
use proptest::prelude::*;

fn anchor(text: &str) -> Tag {
    parse_forward(text).expect("anchor text should parse")
}

/// Cursor placed right after the first occurrence of `anchor_text`.
fn cursor_after(doc: &TextDocument, anchor_text: &str) -> Position {
    for (index, line) in doc.lines().iter().enumerate() {
        if let Some(byte) = line.find(anchor_text) {
            let column = line[..byte].chars().count() + anchor_text.chars().count();
            return Position::new(index, column);
        }
    }
    panic!("{:?} not found in document", anchor_text);
}

fn pair_in(text: &str, anchor_text: &str) -> Option<Position> {
    let doc = TextDocument::new(text);
    let cursor = cursor_after(&doc, anchor_text);
    find_pair(cursor, &doc, &anchor(anchor_text))
}

mod parse_forward_tests {
    use super::*;

    #[test]
    fn test_parses_each_symbol() {
        assert_eq!(parse_forward("{{#a}}").unwrap().symbol(), Symbol::Open);
        assert_eq!(parse_forward("{{^a}}").unwrap().symbol(), Symbol::Inverted);
        assert_eq!(parse_forward("{{/a}}").unwrap().symbol(), Symbol::Close);
    }

    #[test]
    fn test_parses_triple_braces() {
        let tag = parse_forward("{{{/raw}}}").unwrap();
        assert_eq!(tag.brace_count(), BraceCount::Triple);
        assert_eq!(tag.name(), "raw");
    }

    #[test]
    fn test_trailing_text_ignored() {
        let tag = parse_forward("{{/items}}</ul>").unwrap();
        assert_eq!(tag.name(), "items");
    }

    #[test]
    fn test_interior_space() {
        assert_eq!(parse_forward("{{/my section}}").unwrap().name(), "my section");
    }

    #[test]
    fn test_rejects_malformed_names() {
        assert_eq!(parse_forward("{{/my  section}}"), None);
        assert_eq!(parse_forward("{{/ items}}"), None);
        assert_eq!(parse_forward("{{/items }}"), None);
        assert_eq!(parse_forward("{{/}}"), None);
        assert_eq!(parse_forward("{{/it*ems}}"), None);
    }

    #[test]
    fn test_rejects_missing_symbol() {
        assert_eq!(parse_forward("{{items}}"), None);
        assert_eq!(parse_forward("{{>partial}}"), None);
    }

    #[test]
    fn test_rejects_wrong_brace_counts() {
        assert_eq!(parse_forward("{/a}}"), None);
        assert_eq!(parse_forward("{{{{/a}}}}"), None);
        assert_eq!(parse_forward("{{/a}}}"), None);
        assert_eq!(parse_forward("{{{/a}}"), None);
        assert_eq!(parse_forward("{{/a}"), None);
    }

    #[test]
    fn test_rejects_unterminated() {
        assert_eq!(parse_forward("{{/a"), None);
        assert_eq!(parse_forward("{{/"), None);
        assert_eq!(parse_forward("{{"), None);
        assert_eq!(parse_forward(""), None);
    }
}

mod find_pair_tests {
    use super::*;

    #[test]
    fn test_pair_on_next_line() {
        let found = pair_in("{{#items}}\n{{/items}}", "{{#items}}");
        assert_eq!(found, Some(Position::new(1, 0)));
    }

    #[test]
    fn test_pair_on_same_line() {
        let found = pair_in("<b>{{#bold}}text{{/bold}}</b>", "{{#bold}}");
        assert_eq!(found, Some(Position::new(0, 16)));
    }

    #[test]
    fn test_pair_several_lines_down() {
        let text = "{{#people}}\n  <li>{{name}}</li>\n  {{#admin}}*{{/admin}}\n{{/people}}";
        let found = pair_in(text, "{{#people}}");
        assert_eq!(found, Some(Position::new(3, 0)));
    }

    #[test]
    fn test_open_pairs_with_inverted() {
        let found = pair_in("{{#items}}a{{^items}}b{{/items}}", "{{#items}}");
        assert_eq!(found, Some(Position::new(0, 11)));
    }

    #[test]
    fn test_inverted_skips_inverted_and_open() {
        let text = "{{^items}}{{^items}}{{#items}}{{/items}}";
        let found = pair_in(text, "{{^items}}");
        assert_eq!(found, Some(Position::new(0, 30)));
    }

    #[test]
    fn test_close_anchor_pairs_with_later_close() {
        let found = pair_in("{{/a}} x {{#a}} {{/a}}", "{{/a}}");
        assert_eq!(found, Some(Position::new(0, 16)));
    }

    #[test]
    fn test_no_partner() {
        let found = pair_in("{{#items}}\n<li></li>\n", "{{#items}}");
        assert_eq!(found, None);
    }

    #[test]
    fn test_partner_before_cursor_ignored() {
        let found = pair_in("{{/items}}{{#items}}", "{{#items}}");
        assert_eq!(found, None);
    }

    #[test]
    fn test_different_name_ignored() {
        let found = pair_in("{{#a}}{{/b}}{{/a}}", "{{#a}}");
        assert_eq!(found, Some(Position::new(0, 12)));
    }

    #[test]
    fn test_name_prefix_is_not_equal() {
        let found = pair_in("{{#item}}{{/items}}{{/item}}", "{{#item}}");
        assert_eq!(found, Some(Position::new(0, 19)));
    }

    #[test]
    fn test_double_anchor_never_matches_triple() {
        let found = pair_in("{{#name}}\n{{{/name}}}", "{{#name}}");
        assert_eq!(found, None);
    }

    #[test]
    fn test_triple_anchor_matches_triple() {
        let found = pair_in("{{{#name}}}\n{{/name}}\n{{{/name}}}", "{{{#name}}}");
        assert_eq!(found, Some(Position::new(2, 0)));
    }

    #[test]
    fn test_interior_space_must_match_exactly() {
        let text = "{{#my section}}{{/my  section}}{{/mysection}}{{/my section}}";
        let found = pair_in(text, "{{#my section}}");
        assert_eq!(found, Some(Position::new(0, 45)));
    }

    #[test]
    fn test_malformed_candidate_skipped() {
        let found = pair_in("{{#a}} {{/a {{ /a}} {{/a}}", "{{#a}}");
        assert_eq!(found, Some(Position::new(0, 20)));
    }

    #[test]
    fn test_nearest_forward_wins() {
        let found = pair_in("{{#a}}{{/a}}{{/a}}", "{{#a}}");
        assert_eq!(found, Some(Position::new(0, 6)));
    }

    #[test]
    fn test_nesting_depth_not_counted() {
        let text = "{{#a}}\n{{#a}}\n{{/a}}\n{{/a}}";
        let found = pair_in(text, "{{#a}}");
        assert_eq!(found, Some(Position::new(2, 0)));
    }

    #[test]
    fn test_columns_count_characters() {
        let found = pair_in("{{#a}}é€{{/a}}", "{{#a}}");
        assert_eq!(found, Some(Position::new(0, 8)));
    }

    #[test]
    fn test_cursor_column_past_line_end() {
        let doc = TextDocument::new("{{#a}}\n{{/a}}");
        let found = find_pair(Position::new(0, 40), &doc, &anchor("{{#a}}"));
        assert_eq!(found, Some(Position::new(1, 0)));
    }

    #[test]
    fn test_cursor_past_document() {
        let doc = TextDocument::new("{{#a}}\n{{/a}}");
        assert_eq!(find_pair(Position::new(5, 0), &doc, &anchor("{{#a}}")), None);
    }
}

fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_.-]{1,8}( [A-Za-z0-9_.-]{1,8}){0,3}"
}

// Feature: section-matching, Property 1: Open/close round trip
// For any valid name, the close tag following an open tag is found at its
// opening brace, whatever text separates them.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_open_close_round_trip(
        name in name_strategy(),
        lead in "[a-z <>]{0,8}",
        filler in prop::collection::vec("[a-z <>/]{0,12}", 0..4),
        triple in prop::bool::ANY,
    ) {
        let (open, close) = if triple { ("{{{", "}}}") } else { ("{{", "}}") };
        let mut text = format!("{}{}#{}{}", lead, open, name, close);
        for line in &filler {
            text.push('\n');
            text.push_str(line);
        }
        let close_line = filler.len();
        let close_column = if filler.is_empty() { text.chars().count() } else { 0 };
        if !filler.is_empty() {
            text.push('\n');
        }
        text.push_str(&format!("{}/{}{}", open, name, close));

        let doc = TextDocument::new(&text);
        let cursor = Position::new(0, lead.chars().count() + open.len() * 2 + 1 + name.chars().count());

        let tag = tag_at_cursor(&doc, cursor);
        prop_assert!(tag.is_some(), "no anchor in {:?}", text);
        let tag = tag.unwrap();

        let expected = if filler.is_empty() {
            Position::new(0, close_column)
        } else {
            Position::new(close_line + 1, 0)
        };
        prop_assert_eq!(find_pair(cursor, &doc, &tag), Some(expected));
    }
}

// Feature: section-matching, Property 2: Symbol compatibility
// An incompatible candidate is skipped and scanning continues to the next
// compatible one.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_incompatible_symbol_skipped(
        anchor_symbol in prop::sample::select(vec!['#', '^', '/']),
        blocker in prop::sample::select(vec!['#', '^', '/']),
        name in "[a-z]{1,6}",
    ) {
        let anchor_text = format!("{{{{{}{}}}}}", anchor_symbol, name);
        let blocker_text = format!("{{{{{}{}}}}}", blocker, name);
        let text = format!("{} {} {{{{/{}}}}}", anchor_text, blocker_text, name);

        let anchor_symbol = Symbol::from_char(anchor_symbol).unwrap();
        let blocker_symbol = Symbol::from_char(blocker).unwrap();
        let blocker_column = anchor_text.len() + 1;
        let close_column = blocker_column + blocker_text.len() + 1;

        let expected = if anchor_symbol.pairs_with(blocker_symbol) {
            blocker_column
        } else {
            close_column
        };
        prop_assert_eq!(pair_in(&text, &anchor_text), Some(Position::new(0, expected)));
    }
}

// Feature: section-matching, Property 3: Brace counts never mix
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_brace_count_mismatch(name in "[a-z]{1,6}", triple_anchor in prop::bool::ANY) {
        let (anchor_text, other) = if triple_anchor {
            (format!("{{{{{{#{}}}}}}}", name), format!("{{{{/{}}}}}", name))
        } else {
            (format!("{{{{#{}}}}}", name), format!("{{{{{{/{}}}}}}}", name))
        };
        let text = format!("{}\n{}", anchor_text, other);
        prop_assert_eq!(pair_in(&text, &anchor_text), None);
    }
}
