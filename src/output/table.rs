//! Table output rendering

use std::collections::{HashMap, HashSet};

use comfy_table::{presets::NOTHING, Cell, Color, Table};

use super::EnvironmentRow;

/// Color for the ENVIRONMENT cell, keyed on the environment name
///
/// Production-like names stand out in red, staging-like in yellow,
/// test-like in cyan. Anything else stays uncolored.
fn environment_color(name: &str) -> Option<Color> {
    let name = name.to_lowercase();
    if name.starts_with("prod") || name == "live" {
        Some(Color::Red)
    } else if name.starts_with("stag") || name.starts_with("preprod") || name.starts_with("pre-prod")
    {
        Some(Color::Yellow)
    } else if name.starts_with("qa") || name.starts_with("test") || name.starts_with("uat") {
        Some(Color::Cyan)
    } else {
        None
    }
}

/// Per-project commit agreement colors
///
/// Green when every deployed environment of a project runs the same commit,
/// red when two or more distinct commits appear (the environments have
/// drifted apart). Projects with no deployed commit get no entry.
fn commit_colors(rows: &[EnvironmentRow]) -> HashMap<&str, Color> {
    let mut commits: HashMap<&str, HashSet<&str>> = HashMap::new();
    for row in rows {
        if !row.commit.is_empty() {
            commits
                .entry(row.project.as_str())
                .or_default()
                .insert(row.commit.as_str());
        }
    }

    commits
        .into_iter()
        .map(|(project, shas)| {
            let color = if shas.len() == 1 { Color::Green } else { Color::Red };
            (project, color)
        })
        .collect()
}

/// Build the output table
///
/// comfy-table computes each column's width from the header and every row,
/// and drops the colors when stdout is not a terminal.
pub fn render_table(rows: &[EnvironmentRow]) -> Table {
    let mut table = Table::new();
    table.load_preset(NOTHING).set_header(vec![
        "PROJECT",
        "ENVIRONMENT",
        "DEPLOYMENT",
        "COMMIT",
        "UPDATED",
    ]);

    let commit_colors = commit_colors(rows);
    for row in rows {
        let environment = match environment_color(&row.environment) {
            Some(color) => Cell::new(&row.environment).fg(color),
            None => Cell::new(&row.environment),
        };
        let commit = match commit_colors.get(row.project.as_str()) {
            Some(&color) if !row.commit.is_empty() => Cell::new(&row.commit).fg(color),
            _ => Cell::new(&row.commit),
        };

        table.add_row(vec![
            Cell::new(&row.project),
            environment,
            Cell::new(&row.deployment),
            commit,
            Cell::new(&row.updated),
        ]);
    }

    table
}

/// Print the table to stdout
pub fn print_table(rows: &[EnvironmentRow]) {
    println!("{}", render_table(rows));
}
