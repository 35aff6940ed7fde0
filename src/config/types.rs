// Configuration type definitions

use std::str::FromStr;

use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

/// Highlight appearance section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HighlightConfig {
    #[serde(default = "default_foreground")]
    pub foreground: String,
    #[serde(default = "default_background")]
    pub background: String,
    #[serde(default)]
    pub bold: bool,
}

fn default_foreground() -> String {
    "black".to_string()
}

fn default_background() -> String {
    "yellow".to_string()
}

impl Default for HighlightConfig {
    fn default() -> Self {
        HighlightConfig {
            foreground: default_foreground(),
            background: default_background(),
            bold: false,
        }
    }
}

impl HighlightConfig {
    /// Style used for the highlighted region. Unknown colour names leave
    /// that channel unset.
    pub fn style(&self) -> Style {
        let mut style = Style::default();
        if let Some(fg) = parse_color(&self.foreground) {
            style = style.fg(fg);
        }
        if let Some(bg) = parse_color(&self.background) {
            style = style.bg(bg);
        }
        if self.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        style
    }
}

fn parse_color(name: &str) -> Option<Color> {
    let color = Color::from_str(name.trim()).ok();
    #[cfg(debug_assertions)]
    if color.is_none() {
        log::warn!("Unknown highlight colour {:?}, ignoring", name);
    }
    color
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub highlight: HighlightConfig,
}

impl Config {
    pub fn highlight_style(&self) -> Style {
        self.highlight.style()
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
