//! Text rendering for the launcher view.
//!
//! Pure string output; main.rs decides when to print. Colour is ANSI
//! truecolor derived from each record's accent colour and can be turned
//! off wholesale (tests, dumb terminals).

use portal_core::{CatalogView, GridState, Icon, ViewState};
use portal_types::color::Color;
use portal_types::record::ApplicationRecord;

const TILE_WIDTH: usize = 16;
const LABEL_WIDTH: usize = TILE_WIDTH - 2;

/// Render the whole view for the current state.
pub fn render_view(view: &CatalogView, grid: &GridState, use_color: bool) -> String {
    match view.state() {
        ViewState::Loading => "Loading applications...\n".to_string(),
        ViewState::Error(message) => render_error(message),
        ViewState::Ready(records) => render_grid(records, grid, use_color),
    }
}

fn render_error(message: &str) -> String {
    let mut out = String::new();
    out.push_str("+------------------------------------------+\n");
    out.push_str(&format!("| {message:<40} |\n"));
    out.push_str("| Type r to retry, q to quit.              |\n");
    out.push_str("+------------------------------------------+\n");
    out
}

fn render_grid(records: &[ApplicationRecord], grid: &GridState, use_color: bool) -> String {
    if records.is_empty() {
        return "No applications available. Type r to reload, q to quit.\n".to_string();
    }

    let mut out = String::new();
    let range = grid.page_range();
    let page = &records[range];
    let cols = grid.cols();

    for (row_start, row) in page.chunks(cols).enumerate().map(|(i, c)| (i * cols, c)) {
        // Each row of tiles renders as four text lines.
        let mut icon_line = String::new();
        let mut label_line = String::new();
        let mut desc_line = String::new();
        let mut number_line = String::new();
        for (offset, record) in row.iter().enumerate() {
            let cell = row_start + offset;
            let selected = cell == grid.selected();
            let accent = record.accent_color();
            let icon = Icon::from_name(&record.icon);

            let marker = if selected { '>' } else { ' ' };
            icon_line.push_str(&tile(
                &format!("{marker} {}", icon.glyph()),
                accent,
                selected,
                use_color,
            ));
            label_line.push_str(&tile(&truncate_label(&record.name), accent, selected, use_color));
            let desc = record.description.as_deref().unwrap_or("");
            desc_line.push_str(&tile(&truncate_label(desc), accent, selected, use_color));
            number_line.push_str(&tile(&format!("[{}]", cell + 1), accent, selected, use_color));
        }
        out.push_str(icon_line.trim_end());
        out.push('\n');
        out.push_str(label_line.trim_end());
        out.push('\n');
        // The description line is elided for rows where no record has one.
        if row.iter().any(|r| r.description.is_some()) {
            out.push_str(desc_line.trim_end());
            out.push('\n');
        }
        out.push_str(number_line.trim_end());
        out.push('\n');
        out.push('\n');
    }

    out.push_str(&format!(
        "Page {}/{}  ({} applications)\n",
        grid.page() + 1,
        grid.page_count(),
        records.len(),
    ));
    out
}

/// One cell's worth of text, padded to the tile width.
fn tile(text: &str, accent: Color, selected: bool, use_color: bool) -> String {
    let padded = pad(text, TILE_WIDTH);
    if !use_color {
        return padded;
    }
    let style = if selected { "1;" } else { "" };
    format!(
        "\x1b[{style}38;2;{};{};{}m{padded}\x1b[0m",
        accent.r, accent.g, accent.b,
    )
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    let mut out = text.to_string();
    for _ in len..width {
        out.push(' ');
    }
    out
}

/// Clip a label to the tile, keeping whole characters.
fn truncate_label(name: &str) -> String {
    let count = name.chars().count();
    if count <= LABEL_WIDTH {
        return name.to_string();
    }
    let mut out: String = name.chars().take(LABEL_WIDTH - 1).collect();
    out.push('…');
    out
}
