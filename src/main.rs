use clap::Parser;
use color_eyre::Result;
use ratatui::text::Text;
use ratatui::widgets::Paragraph;
use ratatui::{TerminalOptions, Viewport};
use serde::Serialize;
use std::path::PathBuf;

use tagpair::config::{self, ConfigResult};
use tagpair::error::TagPairError;
use tagpair::render::StyledRenderer;
use tagpair::tag::tag_at_cursor;
use tagpair::{Document, Position, SectionHighlighter, SelectionChange, Span, Tag, TextDocument};

/// Find the partner of a mustache section tag
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Find the partner of the mustache/handlebars section tag that ends at the cursor"
)]
struct Args {
    /// Template file to scan
    input: PathBuf,

    /// Cursor line (zero-based)
    #[arg(short, long)]
    line: usize,

    /// Cursor column in characters (zero-based)
    #[arg(short, long)]
    column: usize,

    /// Print the result as JSON
    #[arg(long, conflicts_with = "render")]
    json: bool,

    /// Draw the document with the highlighted span
    #[arg(long)]
    render: bool,
}

/// Outcome of one extract-then-match pass
#[derive(Debug, Serialize)]
struct Report {
    cursor: Position,
    anchor: Option<Tag>,
    pair: Option<Position>,
    span: Span,
}

fn main() -> Result<()> {
    // Writes to /tmp/tagpair-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    init_debug_log();

    color_eyre::install()?;

    let config_result = config::load_config();
    let args = Args::parse();

    let text = std::fs::read_to_string(&args.input).map_err(TagPairError::from)?;
    let document = TextDocument::new(&text);

    let cursor = Position::new(args.line, args.column);
    if !document.contains(cursor) {
        return Err(TagPairError::cursor_out_of_range(cursor).into());
    }

    let style = config_result.config.highlight_style();
    let mut highlighter = SectionHighlighter::new(StyledRenderer::new(), style);
    let report = scan(&mut highlighter, &document, cursor);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if args.render {
        render(&document, highlighter.renderer(), &config_result)?;
    } else {
        print_report(&report);
    }

    #[cfg(debug_assertions)]
    log::debug!("=== TAGPAIR DEBUG SESSION ENDED ===");

    Ok(())
}

#[cfg(debug_assertions)]
fn init_debug_log() {
    use std::io::Write;

    let Ok(log_file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("/tmp/tagpair-debug.log")
    else {
        return;
    };

    let _ = env_logger::Builder::new()
        .filter_level(log::LevelFilter::Debug)
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .format(|buf, record| {
            use std::time::SystemTime;
            let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
            writeln!(
                buf,
                "[{}] [{}] {}",
                datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .try_init();

    log::debug!("=== TAGPAIR DEBUG SESSION STARTED ===");
}

/// Run one selection pass through the highlighter and describe the outcome
fn scan(
    highlighter: &mut SectionHighlighter<StyledRenderer>,
    document: &TextDocument,
    cursor: Position,
) -> Report {
    let span = highlighter
        .on_selection_change(document, &SelectionChange::single(cursor))
        .unwrap_or_default();
    let anchor = tag_at_cursor(document, cursor);
    // A found pair never yields the origin span: no tag can end at (0, 0)
    let pair = (span != Span::default()).then_some(span.end);

    Report {
        cursor,
        anchor,
        pair,
        span,
    }
}

fn print_report(report: &Report) {
    let cursor = report.cursor;
    match (&report.anchor, report.pair) {
        (None, _) => println!("no section tag ends at {}:{}", cursor.line, cursor.column),
        (Some(anchor), None) => println!("{} at {}:{} has no pair", anchor, cursor.line, cursor.column),
        (Some(anchor), Some(pair)) => println!(
            "{} at {}:{} pairs with {}:{}",
            anchor, cursor.line, cursor.column, pair.line, pair.column
        ),
    }
}

/// Draw the highlighted document inline below the prompt
fn render(
    document: &TextDocument,
    renderer: &StyledRenderer,
    config_result: &ConfigResult,
) -> Result<()> {
    if let Some(warning) = &config_result.warning {
        eprintln!("tagpair: {}", warning);
    }

    let lines = renderer.lines(document);
    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);

    let mut terminal = ratatui::try_init_with_options(TerminalOptions {
        viewport: Viewport::Inline(height),
    })?;
    let result = terminal.draw(|frame| {
        frame.render_widget(Paragraph::new(Text::from(lines)), frame.area());
    });
    ratatui::restore();
    result?;

    println!();
    Ok(())
}
