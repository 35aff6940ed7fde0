//! Character classes and the normalized tag type shared by both scanners.

use std::fmt;

use serde::Serialize;

/// Number of braces that open and close a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "usize")]
pub enum BraceCount {
    Double,
    Triple,
}

impl BraceCount {
    pub fn from_count(n: usize) -> Option<Self> {
        match n {
            2 => Some(BraceCount::Double),
            3 => Some(BraceCount::Triple),
            _ => None,
        }
    }

    pub fn count(self) -> usize {
        match self {
            BraceCount::Double => 2,
            BraceCount::Triple => 3,
        }
    }
}

impl From<BraceCount> for usize {
    fn from(count: BraceCount) -> usize {
        count.count()
    }
}

/// Section symbol that follows the opening braces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "char")]
pub enum Symbol {
    /// `#`, truthy block.
    Open,
    /// `^`, falsy block.
    Inverted,
    /// `/`, end of block.
    Close,
}

impl Symbol {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '#' => Some(Symbol::Open),
            '^' => Some(Symbol::Inverted),
            '/' => Some(Symbol::Close),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Symbol::Open => '#',
            Symbol::Inverted => '^',
            Symbol::Close => '/',
        }
    }

    /// Whether a forward tag using `other` may pair with an anchor using `self`.
    ///
    /// `#` pairs with `^` or `/`. `^` and `/` pair only with `/`.
    pub fn pairs_with(self, other: Symbol) -> bool {
        match self {
            Symbol::Open => matches!(other, Symbol::Inverted | Symbol::Close),
            Symbol::Inverted | Symbol::Close => other == Symbol::Close,
        }
    }
}

impl From<Symbol> for char {
    fn from(symbol: Symbol) -> char {
        symbol.as_char()
    }
}

pub const OPEN_BRACE: char = '{';
pub const CLOSE_BRACE: char = '}';

/// Characters allowed in a tag name, apart from single interior spaces.
pub fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.')
}

/// A parsed section delimiter such as `{{#items}}`.
///
/// Only the scanners construct tags, so a `Tag` always satisfies the name
/// grammar.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Tag {
    brace_count: BraceCount,
    symbol: Symbol,
    name: String,
}

impl Tag {
    pub(crate) fn new(brace_count: BraceCount, symbol: Symbol, name: String) -> Self {
        Self {
            brace_count,
            symbol,
            name,
        }
    }

    pub fn brace_count(&self) -> BraceCount {
        self.brace_count
    }

    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether `other` is a legal pairing partner for `self` as an anchor.
    pub fn pairs_with(&self, other: &Tag) -> bool {
        self.brace_count == other.brace_count
            && self.symbol.pairs_with(other.symbol)
            && self.name == other.name
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.brace_count.count();
        for _ in 0..n {
            write!(f, "{}", OPEN_BRACE)?;
        }
        write!(f, "{}{}", self.symbol.as_char(), self.name)?;
        for _ in 0..n {
            write!(f, "{}", CLOSE_BRACE)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "grammar_tests.rs"]
mod grammar_tests;
