//! Selection-driven section highlighting.
//!
//! Each selection change runs one full extract-then-match pass over the live
//! document. Nothing is cached between passes.

use ratatui::style::Style;

use crate::document::Document;
use crate::position::{Position, Span};
use crate::tag::{find_pair, tag_at_cursor};

/// Notification that the editor selection moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionChange {
    /// Active cursor of the primary selection.
    pub cursor: Position,
    /// Number of selections in the editor.
    pub selections: usize,
}

impl SelectionChange {
    pub fn single(cursor: Position) -> Self {
        Self {
            cursor,
            selections: 1,
        }
    }

    pub fn is_single(&self) -> bool {
        self.selections == 1
    }
}

/// Consumer of computed highlight spans.
pub trait HighlightRenderer {
    /// Show `span` using `style`. An empty span clears the highlight.
    fn render(&mut self, span: Span, style: &Style);
}

/// Computes the highlight span for `cursor`.
///
/// Returns `Span::new(cursor, partner)` when a section tag ends at the cursor
/// and a partner exists, or the empty default span otherwise.
pub fn compute_span<D: Document + ?Sized>(document: &D, cursor: Position) -> Span {
    let Some(anchor) = tag_at_cursor(document, cursor) else {
        return Span::default();
    };

    match find_pair(cursor, document, &anchor) {
        Some(partner) => Span::new(cursor, partner),
        None => Span::default(),
    }
}

/// Drives a renderer from selection-change notifications.
pub struct SectionHighlighter<R> {
    renderer: R,
    style: Style,
}

impl<R: HighlightRenderer> SectionHighlighter<R> {
    pub fn new(renderer: R, style: Style) -> Self {
        Self { renderer, style }
    }

    /// Handles one selection change.
    ///
    /// Multi-selection events are ignored and return `None` without touching
    /// the renderer. Otherwise the computed span is rendered and returned.
    pub fn on_selection_change<D: Document + ?Sized>(
        &mut self,
        document: &D,
        event: &SelectionChange,
    ) -> Option<Span> {
        if !event.is_single() {
            #[cfg(debug_assertions)]
            log::debug!("ignoring selection change with {} selections", event.selections);
            return None;
        }

        let span = compute_span(document, event.cursor);

        #[cfg(debug_assertions)]
        log::debug!("selection at {:?} -> span {:?}", event.cursor, span);

        self.renderer.render(span, &self.style);
        Some(span)
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

#[cfg(test)]
#[path = "highlight_tests.rs"]
mod highlight_tests;
