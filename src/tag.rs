pub mod extractor;
pub mod grammar;
pub mod matcher;

pub use extractor::{extract, tag_at_cursor};
pub use grammar::{BraceCount, Symbol, Tag};
pub use matcher::{find_pair, parse_forward};
