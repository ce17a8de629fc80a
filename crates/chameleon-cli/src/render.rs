//! Terminal rendering for the grid, dice, statistics and help.
//!
//! Every renderer writes into a `Write` so the interactive loop and tests can
//! capture the output.

use std::io::{self, Write};

use chameleon_core::{Die, DieStats, GRID_CELLS, GRID_SIDE, SessionState};
use colored::Colorize;
use comfy_table::{CellAlignment, ContentArrangement, Table};

const ROW_LABELS: [&str; GRID_SIDE] = ["A", "B", "C", "D"];

/// Print the topic and its 4x4 grid, row-major.
pub fn grid<W: Write>(out: &mut W, state: &SessionState) -> io::Result<()> {
    if state.current_items.len() < GRID_CELLS {
        let msg = format!(
            "Error: no grid to show ({} of {GRID_CELLS} items). Type 'roll' to deal a new topic.",
            state.current_items.len()
        );
        writeln!(out, "  {}", msg.red())?;
        return Ok(());
    }

    writeln!(out, "  Topic: {}", state.current_topic.bold())?;

    let mut table = Table::new();
    let mut header = vec![String::new()];
    header.extend((1..=GRID_SIDE).map(|c| c.to_string()));
    table.set_header(header);

    for (label, cells) in ROW_LABELS
        .iter()
        .zip(state.current_items.chunks(GRID_SIDE))
    {
        let mut row = vec![label.to_string()];
        row.extend(cells.iter().cloned());
        table.add_row(row);
    }
    for column in table.column_iter_mut() {
        column.set_cell_alignment(CellAlignment::Center);
    }

    writeln!(out, "{table}")?;
    Ok(())
}

/// Print both die faces.
///
/// A face passed as `None` falls back to the last value stored in the
/// session instead of rolling.
pub fn dice<W: Write>(
    out: &mut W,
    state: &SessionState,
    d6: Option<u32>,
    d8: Option<u32>,
) -> io::Result<()> {
    let d6 = d6.unwrap_or(state.d6_value);
    let d8 = d8.unwrap_or(state.d8_value);
    writeln!(
        out,
        "  {}: {}   {}: {}",
        Die::D6.to_string().cyan(),
        d6.to_string().bold(),
        Die::D8.to_string().magenta(),
        d8.to_string().bold(),
    )
}

/// Print per-face roll counts and a summary for both dice.
pub fn statistics<W: Write>(out: &mut W, state: &SessionState) -> io::Result<()> {
    if state.has_no_rolls() {
        writeln!(out, "  No rolls yet. Type 'roll' to roll the dice.")?;
        return Ok(());
    }

    writeln!(out, "  {}", "Roll Statistics".bold())?;
    for die in [Die::D6, Die::D8] {
        writeln!(out)?;
        die_statistics(out, die, state.stats(die))?;
    }
    Ok(())
}

fn die_statistics<W: Write>(out: &mut W, die: Die, stats: &DieStats) -> io::Result<()> {
    if stats.is_empty() {
        writeln!(out, "  {}: no rolls yet", die.to_string().bold())?;
        return Ok(());
    }

    writeln!(out, "  {}", die.to_string().bold())?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Face", "Count", "Share"]);
    for face in 1..=die.sides() {
        table.add_row(vec![
            face.to_string(),
            stats.count(face).to_string(),
            format!("{:.1}%", stats.percentage(face)),
        ]);
    }
    writeln!(out, "{table}")?;

    let mut summary = format!("  Total rolls: {}", stats.total());
    if let Some((face, count)) = stats.most_common() {
        summary.push_str(&format!(" | Most common: {face} ({count}x)"));
    }
    if let Some((face, count)) = stats.least_common() {
        summary.push_str(&format!(" | Least common: {face} ({count}x)"));
    }
    writeln!(out, "{summary}")
}

/// Print the interactive command list.
pub fn help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "\
  Commands:
    roll              Deal a new topic and roll both dice
    stats             Show dice roll statistics
    help              Show this help
    quit, exit, q     End the session"
    )
}
