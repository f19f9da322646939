//! Terminal rendering of a view tree.

use std::fmt::Write;

use super::tree::{Card, Cell, Listing, Podium, Table, ViewTree};

const BAR_WIDTH: usize = 10;

/// Render a view tree as plain text for a terminal
pub fn to_text(tree: &ViewTree) -> String {
    let mut out = String::new();

    match tree {
        ViewTree::Loading(indicator) => {
            let _ = writeln!(out, "⟳ {}", indicator.label);
        }
        ViewTree::Failed(panel) => {
            let _ = writeln!(out, "✕ {}", panel.heading);
            let _ = writeln!(out, "  {}", panel.message);
            let _ = writeln!(out);
            let _ = writeln!(out, "  [{}]", panel.retry.label);
        }
        ViewTree::Empty(empty) => {
            let _ = writeln!(out, "{}", empty.title);
            if !empty.message.is_empty() {
                let _ = writeln!(out, "  {}", empty.message);
            }
            let _ = writeln!(out, "  [{}]", empty.action.label);
        }
        ViewTree::Populated(listing) => write_listing(&mut out, listing),
    }

    out
}

fn write_listing(out: &mut String, listing: &Listing) {
    let _ = writeln!(out, "{}    [{}]", listing.title, listing.refresh.label);
    if !listing.subtitle.is_empty() {
        let _ = writeln!(out, "{}", listing.subtitle);
    }
    let _ = writeln!(out);

    if let Some(podium) = &listing.podium {
        write_podium(out, podium);
        let _ = writeln!(out);
    }

    write_table(out, &listing.table);
    let _ = writeln!(out, "{}: {}", listing.total_label, listing.total);

    if !listing.cards.is_empty() {
        let _ = writeln!(out);
        for card in &listing.cards {
            write_card(out, card);
        }
    }
}

fn write_podium(out: &mut String, podium: &Podium) {
    let _ = writeln!(out, "🎉 Top Performers");
    for place in &podium.places {
        let _ = writeln!(
            out,
            "  {} {:<10} {:<20} {}",
            place.medal, place.title, place.name, place.score
        );
    }
}

fn write_table(out: &mut String, table: &Table) {
    let rows: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| row.cells.iter().map(cell_text).collect())
        .collect();

    let mut widths: Vec<usize> = table.headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(i) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    write_row(out, &table.headers, &widths);
    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    write_row(out, &separator, &widths);
    for row in &rows {
        write_row(out, row, &widths);
    }
}

fn write_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| pad(cell, *width))
        .collect();
    let _ = writeln!(out, "{}", line.join(" | ").trim_end());
}

fn write_card(out: &mut String, card: &Card) {
    let _ = writeln!(out, "┌ {}", card.title);
    if !card.badges.is_empty() {
        let badges: Vec<String> = card.badges.iter().map(cell_text).collect();
        let _ = writeln!(out, "│ {}", badges.join(" "));
    }
    for field in &card.fields {
        match &field.label {
            Some(label) => {
                let _ = writeln!(out, "│ {}: {}", label, cell_text(&field.value));
            }
            None => {
                let _ = writeln!(out, "│ {}", cell_text(&field.value));
            }
        }
    }
    let _ = writeln!(out, "└");
}

/// Text form of one cell
fn cell_text(cell: &Cell) -> String {
    match cell {
        Cell::Badge { text, .. } => format!("[{}]", text),
        Cell::Progress { percent, label } => {
            let filled = ((percent.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f64).round() as usize;
            format!(
                "{}{} {}",
                "█".repeat(filled),
                "·".repeat(BAR_WIDTH - filled),
                label
            )
        }
        Cell::Avatar { initial } => format!("({})", initial),
        other => other.plain_text(),
    }
}

fn pad(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::tree::{Action, ErrorPanel, Row};

    #[test]
    fn test_failed_view_text() {
        let tree = ViewTree::Failed(ErrorPanel {
            heading: "Error Loading Users".to_string(),
            message: "Failed to fetch users: Network error: connection refused".to_string(),
            retry: Action::retry(),
        });

        let text = to_text(&tree);
        assert!(text.contains("Error Loading Users"));
        assert!(text.contains("connection refused"));
        assert!(text.contains("[Try Again]"));
    }

    #[test]
    fn test_table_columns_align() {
        let listing = Listing {
            title: "Teams".to_string(),
            subtitle: String::new(),
            refresh: Action::refresh(),
            podium: None,
            table: Table {
                headers: vec!["#".to_string(), "Team Name".to_string()],
                rows: vec![
                    Row {
                        position: 1,
                        cells: vec![Cell::text("1"), Cell::strong("Blue Team")],
                    },
                    Row {
                        position: 2,
                        cells: vec![Cell::text("2"), Cell::strong("Gold")],
                    },
                ],
            },
            cards: Vec::new(),
            total: 2,
            total_label: "Total Teams".to_string(),
        };

        let text = to_text(&ViewTree::Populated(listing));
        assert!(text.contains("# | Team Name"));
        assert!(text.contains("1 | Blue Team"));
        assert!(text.contains("2 | Gold"));
        assert!(text.contains("Total Teams: 2"));
    }

    #[test]
    fn test_progress_bar() {
        let cell = Cell::Progress {
            percent: 95.0,
            label: "95%".to_string(),
        };
        assert_eq!(cell_text(&cell), "██████████ 95%");

        let cell = Cell::Progress {
            percent: 30.0,
            label: "30%".to_string(),
        };
        assert_eq!(cell_text(&cell), "███······· 30%");
    }
}
