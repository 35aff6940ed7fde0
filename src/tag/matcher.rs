//! Forward scanner that finds the nearest pairing partner of an anchor tag.
//!
//! Every `{` from the cursor onwards is a candidate. A candidate is parsed
//! with [`parse_forward`]; malformed candidates are skipped and the first
//! candidate that pairs with the anchor wins. Nesting depth is not tracked.

use memchr::memchr_iter;

use crate::document::Document;
use crate::position::Position;
use crate::tag::grammar::{BraceCount, CLOSE_BRACE, OPEN_BRACE, Symbol, Tag, is_name_char};

/// Scanner state while reading left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Counting the opening run.
    Opening { braces: usize },
    /// Symbol read. A name character must follow.
    Symbol { brace_count: BraceCount, symbol: Symbol },
    /// Inside the name.
    Name {
        brace_count: BraceCount,
        symbol: Symbol,
        after_space: bool,
    },
    /// Counting the closing run.
    Closing {
        brace_count: BraceCount,
        symbol: Symbol,
        braces: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue(State),
    Done(BraceCount, Symbol),
    Reject,
}

fn step(state: State, c: char) -> Step {
    match state {
        State::Opening { braces } => {
            if c == OPEN_BRACE {
                return if braces < 3 {
                    Step::Continue(State::Opening { braces: braces + 1 })
                } else {
                    Step::Reject
                };
            }
            match (BraceCount::from_count(braces), Symbol::from_char(c)) {
                (Some(brace_count), Some(symbol)) => {
                    Step::Continue(State::Symbol { brace_count, symbol })
                }
                _ => Step::Reject,
            }
        }
        State::Symbol { brace_count, symbol } => {
            if is_name_char(c) {
                Step::Continue(State::Name {
                    brace_count,
                    symbol,
                    after_space: false,
                })
            } else {
                Step::Reject
            }
        }
        State::Name {
            brace_count,
            symbol,
            after_space,
        } => {
            if is_name_char(c) {
                Step::Continue(State::Name {
                    brace_count,
                    symbol,
                    after_space: false,
                })
            } else if c == ' ' && !after_space {
                Step::Continue(State::Name {
                    brace_count,
                    symbol,
                    after_space: true,
                })
            } else if c == CLOSE_BRACE && !after_space {
                Step::Continue(State::Closing {
                    brace_count,
                    symbol,
                    braces: 1,
                })
            } else {
                Step::Reject
            }
        }
        State::Closing {
            brace_count,
            symbol,
            braces,
        } => {
            if c == CLOSE_BRACE {
                if braces < brace_count.count() {
                    Step::Continue(State::Closing {
                        brace_count,
                        symbol,
                        braces: braces + 1,
                    })
                } else {
                    Step::Reject
                }
            } else {
                finish(state)
            }
        }
    }
}

/// Outcome when the closing run ends, either at a non-brace or end of text.
fn finish(state: State) -> Step {
    match state {
        State::Closing {
            brace_count,
            symbol,
            braces,
        } if braces == brace_count.count() => Step::Done(brace_count, symbol),
        _ => Step::Reject,
    }
}

/// Parses the section tag that starts at the beginning of `text`.
///
/// Text after the tag is ignored, except that the closing run must not be
/// followed directly by another `}`.
///
/// # Examples
/// ```
/// use tagpair::tag::matcher::parse_forward;
///
/// let tag = parse_forward("{{/items}} trailing").unwrap();
/// assert_eq!(tag.name(), "items");
/// assert!(parse_forward("{{items}}").is_none());
/// ```
pub fn parse_forward(text: &str) -> Option<Tag> {
    let mut state = State::Opening { braces: 0 };
    let mut name = String::new();

    for c in text.chars() {
        match step(state, c) {
            Step::Continue(next) => {
                if matches!(next, State::Name { .. }) {
                    name.push(c);
                }
                state = next;
            }
            Step::Done(brace_count, symbol) => return Some(Tag::new(brace_count, symbol, name)),
            Step::Reject => return None,
        }
    }

    match finish(state) {
        Step::Done(brace_count, symbol) => Some(Tag::new(brace_count, symbol, name)),
        _ => None,
    }
}

/// Finds the nearest `{` at or after `cursor` that opens a legal partner of
/// `anchor`.
///
/// The cursor line is scanned from the cursor column, every later line from
/// column 0. Returns the position of the partner's first opening brace.
pub fn find_pair<D: Document + ?Sized>(
    cursor: Position,
    document: &D,
    anchor: &Tag,
) -> Option<Position> {
    for index in cursor.line..document.line_count() {
        let Some(line) = document.line(index) else {
            break;
        };

        let from = if index == cursor.line {
            byte_offset(line, cursor.column)
        } else {
            0
        };

        for offset in memchr_iter(OPEN_BRACE as u8, &line.as_bytes()[from..]) {
            let start = from + offset;
            let Some(candidate) = parse_forward(&line[start..]) else {
                continue;
            };

            if anchor.pairs_with(&candidate) {
                let found = Position::new(index, line[..start].chars().count());
                #[cfg(debug_assertions)]
                log::debug!("paired {} with {} at {:?}", anchor, candidate, found);
                return Some(found);
            }
        }
    }

    #[cfg(debug_assertions)]
    log::debug!("no partner for {} after {:?}", anchor, cursor);

    None
}

/// Byte offset of character `column` in `line`, or the line length when the
/// column is past the end.
fn byte_offset(line: &str, column: usize) -> usize {
    line.char_indices()
        .nth(column)
        .map(|(i, _)| i)
        .unwrap_or(line.len())
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod matcher_tests;
