//! Terminal rendering for the topic table.

use std::io::{self, Write};
use std::panic;

use crossterm::style::{Attribute, SetAttribute};
use crossterm::terminal::{
    Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
};
use crossterm::{cursor, execute, queue, style::Print};
use explorer_lib::{SortDirection, SortField, TableView};
use unicode_width::UnicodeWidthStr;

const INDEX_WIDTH: usize = 7;
const NAME_WIDTH: usize = 44;
const BRANDS_WIDTH: usize = 19;
const UPDATED_WIDTH: usize = 14;

/// Puts the terminal into raw mode and the alternate screen, restoring
/// both on drop. A panic hook restores the terminal before the default
/// handler prints, so a panic message is readable.
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn new() -> io::Result<Self> {
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let _ = restore_terminal();
            original_hook(panic_info);
        }));

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = restore_terminal();
    }
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)
}

/// Draws one frame: heading, search box, table, summary, pager, keys.
pub fn draw(view: &TableView, raw_query: &str, active_filter: &str) -> io::Result<()> {
    let mut stdout = io::stdout();

    queue!(stdout, cursor::MoveTo(0, 0), Clear(ClearType::All))?;

    queue!(
        stdout,
        SetAttribute(Attribute::Bold),
        Print(active_filter),
        SetAttribute(Attribute::Reset),
        Print("\r\n\r\n"),
    )?;

    let search_note = if view.is_pending { "  (searching...)" } else { "" };
    queue!(
        stdout,
        Print(format!("Search: {raw_query}_{search_note}\r\n\r\n")),
    )?;

    draw_header(&mut stdout, view)?;

    for topic in &view.rows {
        queue!(
            stdout,
            Print(pad(&topic.id.to_string(), INDEX_WIDTH)),
            Print(pad(&topic.name, NAME_WIDTH)),
            Print(pad_right(&topic.brands_discovered.to_string(), BRANDS_WIDTH)),
            Print(pad_right(&topic.last_updated, UPDATED_WIDTH)),
            Print("\r\n"),
        )?;
    }

    if view.rows.is_empty() && !view.is_pending {
        queue!(
            stdout,
            SetAttribute(Attribute::Dim),
            Print("  No matching topics\r\n"),
            SetAttribute(Attribute::Reset),
        )?;
    }

    queue!(
        stdout,
        Print("\r\n"),
        Print(format!(
            "{}    Rows per page: {}    Page {} of {}\r\n",
            view.summary(),
            view.page_size,
            view.page_index,
            view.total_pages
        )),
        SetAttribute(Attribute::Dim),
        Print(
            "F1 name  F2 brands  F3 updated  F4 filter  F5 page size  \
             \u{2190}/\u{2192} page  Home/End first/last  Esc clear  Ctrl+Q quit\r\n"
        ),
        SetAttribute(Attribute::Reset),
    )?;

    stdout.flush()
}

fn draw_header(stdout: &mut io::Stdout, view: &TableView) -> io::Result<()> {
    let name = header_label("Topic Name", SortField::Name, view);
    let brands = header_label("Brands Discovered", SortField::BrandsDiscovered, view);
    let updated = header_label("Last Updated", SortField::LastUpdated, view);

    queue!(
        stdout,
        SetAttribute(Attribute::Bold),
        Print(pad("Index", INDEX_WIDTH)),
        Print(pad(&name, NAME_WIDTH)),
        Print(pad_right(&brands, BRANDS_WIDTH)),
        Print(pad_right(&updated, UPDATED_WIDTH)),
        SetAttribute(Attribute::Reset),
        Print("\r\n"),
    )
}

/// Column header with a sort indicator on the active column.
fn header_label(label: &str, field: SortField, view: &TableView) -> String {
    if view.sort_field != field {
        return label.to_string();
    }
    let arrow = match view.sort_direction {
        SortDirection::Ascending => '\u{25b2}',
        SortDirection::Descending => '\u{25bc}',
    };
    format!("{label} {arrow}")
}

/// Left-aligns `text` into a column, truncating with an ellipsis.
fn pad(text: &str, width: usize) -> String {
    let text = truncate(text, width.saturating_sub(2));
    let padding = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(padding))
}

/// Right-aligns `text` into a column.
fn pad_right(text: &str, width: usize) -> String {
    let text = truncate(text, width);
    let padding = width.saturating_sub(text.width());
    format!("{}{text}", " ".repeat(padding))
}

fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    for ch in text.chars() {
        if out.width() + 2 > max_width {
            break;
        }
        out.push(ch);
    }
    out.push('\u{2026}');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_fills_to_width() {
        assert_eq!(pad("abc", 6), "abc   ");
        assert_eq!(pad_right("42", 5), "   42");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        let truncated = truncate("a very long topic name", 10);
        assert!(truncated.width() <= 10);
        assert!(truncated.ends_with('\u{2026}'));
    }

    #[test]
    fn test_short_text_is_untouched() {
        assert_eq!(truncate("short", 10), "short");
    }
}
