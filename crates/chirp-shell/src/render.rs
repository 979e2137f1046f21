//! Plain-text rendering of the menu and timeline.

use chirp_engine::DisplayRow;

use crate::menu::MENU;

/// Marker printed in front of the selected post.
pub const SELECTED_MARKER: &str = "-->";

/// Render the numbered menu, one entry per line.
pub fn render_menu() -> String {
    MENU.iter()
        .map(|item| format!("{}. {}", item.number, item.label))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render timeline rows as an aligned table with a header line.
pub fn render_timeline(rows: &[DisplayRow<'_>]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(format_line("sel", "ID", "Likes", "Tweet"));

    for row in rows {
        let marker = if row.selected { SELECTED_MARKER } else { "" };
        lines.push(format_line(
            marker,
            &row.id.to_string(),
            &row.likes.to_string(),
            row.text,
        ));
    }

    lines.join("\n")
}

fn format_line(marker: &str, id: &str, likes: &str, text: &str) -> String {
    let line = format!("{marker:<5}{id:<6}{likes:<7}{text}");
    line.trim_end().to_string()
}
