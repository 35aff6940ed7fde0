//! Backward scanner that recognizes a section tag ending at the cursor.
//!
//! The scan starts just left of the closing brace run and walks towards the
//! start of the line: name characters first, then the section symbol, then
//! the opening brace run.

use crate::document::Document;
use crate::position::Position;
use crate::tag::grammar::{BraceCount, CLOSE_BRACE, OPEN_BRACE, Symbol, Tag, is_name_char};

/// Scanner state while reading right to left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Nothing read yet. The next character must end the name.
    Start,
    /// Inside the name. `after_space` is set when the last character read was
    /// a space, which forbids a second one or the symbol next.
    Name { after_space: bool },
    /// Symbol read; counting the opening braces to its left.
    Opening { symbol: Symbol, braces: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue(State),
    Accept(Symbol),
    Reject,
}

fn step(state: State, c: char, brace_count: BraceCount) -> Step {
    match state {
        State::Start => {
            if is_name_char(c) {
                Step::Continue(State::Name { after_space: false })
            } else {
                Step::Reject
            }
        }
        State::Name { after_space } => {
            if is_name_char(c) {
                Step::Continue(State::Name { after_space: false })
            } else if c == ' ' && !after_space {
                Step::Continue(State::Name { after_space: true })
            } else if let Some(symbol) = Symbol::from_char(c).filter(|_| !after_space) {
                Step::Continue(State::Opening { symbol, braces: 0 })
            } else {
                Step::Reject
            }
        }
        State::Opening { symbol, braces } => {
            if c != OPEN_BRACE {
                return Step::Reject;
            }
            let braces = braces + 1;
            if braces == brace_count.count() {
                Step::Accept(symbol)
            } else {
                Step::Continue(State::Opening { symbol, braces })
            }
        }
    }
}

/// Detects which closing run the prefix ends with. At least one character
/// must precede the run.
fn closing_run(chars: &[char]) -> Option<BraceCount> {
    let trailing = chars.iter().rev().take_while(|&&c| c == CLOSE_BRACE).count();
    let has_room = |n: usize| trailing >= n && chars.len() > n;

    if has_room(3) {
        Some(BraceCount::Triple)
    } else if has_room(2) {
        Some(BraceCount::Double)
    } else {
        None
    }
}

/// Extracts the section tag whose closing braces end `line_before_cursor`.
///
/// `line_before_cursor` is the text of the cursor's line up to `cursor`.
/// Returns `None` when the text does not end in a complete `{{#name}}`,
/// `{{^name}}` or `{{/name}}` tag (or a triple-brace variant).
///
/// # Examples
/// ```
/// use tagpair::position::Position;
/// use tagpair::tag::extractor::extract;
///
/// let tag = extract(Position::new(0, 10), "{{#items}}").unwrap();
/// assert_eq!(tag.name(), "items");
/// assert!(extract(Position::new(0, 7), "{{foo}}").is_none());
/// ```
#[cfg_attr(not(debug_assertions), allow(unused_variables))]
pub fn extract(cursor: Position, line_before_cursor: &str) -> Option<Tag> {
    let chars: Vec<char> = line_before_cursor.chars().collect();
    let brace_count = closing_run(&chars)?;
    let body = &chars[..chars.len() - brace_count.count()];

    let mut state = State::Start;
    let mut name = Vec::new();

    for &c in body.iter().rev() {
        match step(state, c, brace_count) {
            Step::Continue(next) => {
                if matches!(next, State::Name { .. }) {
                    name.push(c);
                }
                state = next;
            }
            Step::Accept(symbol) => {
                let name: String = name.iter().rev().collect();
                #[cfg(debug_assertions)]
                log::trace!("extracted {:?} {:?} {:?} at {:?}", brace_count, symbol, name, cursor);
                return Some(Tag::new(brace_count, symbol, name));
            }
            Step::Reject => return None,
        }
    }

    None
}

/// Returns the tag ending exactly at `cursor`, if any.
///
/// Requires a `}` directly before the cursor and anything but `}` directly
/// after it, so a cursor in the middle of a brace run never matches. A
/// cursor outside the document, or past the end of its line, never matches.
pub fn tag_at_cursor<D: Document + ?Sized>(document: &D, cursor: Position) -> Option<Tag> {
    if !document.contains(cursor) {
        return None;
    }

    if document.char_after(cursor) == Some(CLOSE_BRACE) {
        return None;
    }

    let prefix = document.line_prefix(cursor);
    if !prefix.ends_with(CLOSE_BRACE) {
        return None;
    }

    extract(cursor, &prefix)
}

#[cfg(test)]
#[path = "extractor_tests.rs"]
mod extractor_tests;
