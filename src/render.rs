//! Styled output for highlight spans.
//!
//! Turns a document plus a [`Span`] into ratatui lines where the covered
//! characters carry the highlight style.

use ratatui::style::Style;
use ratatui::text::{Line, Span as TextSpan};

use crate::document::Document;
use crate::highlight::HighlightRenderer;
use crate::position::{Position, Span};

/// Renderer that keeps the most recent span and style.
#[derive(Debug, Clone, Default)]
pub struct StyledRenderer {
    span: Span,
    style: Style,
    renders: usize,
}

impl StyledRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn span(&self) -> Span {
        self.span
    }

    /// Number of times the renderer has been asked to draw.
    pub fn render_count(&self) -> usize {
        self.renders
    }

    /// The document with the current highlight applied.
    pub fn lines<D: Document + ?Sized>(&self, document: &D) -> Vec<Line<'static>> {
        highlight_lines(document, self.span, self.style)
    }
}

impl HighlightRenderer for StyledRenderer {
    fn render(&mut self, span: Span, style: &Style) {
        self.span = span;
        self.style = *style;
        self.renders += 1;
    }
}

/// Builds one line per document line, styling the characters inside `span`.
///
/// The span is normalized first; its end is exclusive.
pub fn highlight_lines<D: Document + ?Sized>(
    document: &D,
    span: Span,
    style: Style,
) -> Vec<Line<'static>> {
    (0..document.line_count())
        .map(|index| {
            let text = document.line(index).unwrap_or_default();
            highlight_line(index, text, span, style)
        })
        .collect()
}

fn highlight_line(index: usize, text: &str, span: Span, style: Style) -> Line<'static> {
    let mut spans = Vec::new();
    let mut run = String::new();
    let mut run_highlighted = false;

    for (column, c) in text.chars().enumerate() {
        let highlighted = span.contains(Position::new(index, column));
        if highlighted != run_highlighted && !run.is_empty() {
            spans.push(styled_run(std::mem::take(&mut run), run_highlighted, style));
        }
        run_highlighted = highlighted;
        run.push(c);
    }

    if !run.is_empty() {
        spans.push(styled_run(run, run_highlighted, style));
    }

    Line::from(spans)
}

fn styled_run(text: String, highlighted: bool, style: Style) -> TextSpan<'static> {
    if highlighted {
        TextSpan::styled(text, style)
    } else {
        TextSpan::raw(text)
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
