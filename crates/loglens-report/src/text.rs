use loglens_types::{LevelCounts, LogRecord};

/// Width of the separator line closing each report section.
const SECTION_RULE_WIDTH: usize = 30;

/// Render the per-level counts table.
///
/// Rows are sorted by count descending; equal counts are ordered by level
/// name so the table is stable from run to run.
pub fn render_counts(counts: &LevelCounts) -> String {
    let mut rows: Vec<_> = counts.iter().collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.as_str().cmp(b.0.as_str())));

    let mut out = String::new();
    out.push_str(&format!("{:<16} | {}\n", "Level", "Count"));
    out.push_str("-----------------|----------\n");
    for (level, count) in rows {
        out.push_str(&format!("{:<16} | {}\n", level.as_str(), count));
    }
    out.push_str(&"-".repeat(SECTION_RULE_WIDTH));
    out.push('\n');
    out
}

/// Render the detail list for a requested level.
///
/// The header echoes the request uppercased even when it names no known
/// level; with no matching records it collapses to a single "not found"
/// line.
pub fn render_filtered(records: &[LogRecord], requested_level: &str) -> String {
    let level = requested_level.to_uppercase();

    let mut out = String::new();
    if records.is_empty() {
        out.push_str(&format!(
            "Log details for level '{level}': No records found.\n"
        ));
    } else {
        out.push_str(&format!("Log details for level '{level}':\n"));
        for record in records {
            out.push_str(&format!(
                "{} {} - {}\n",
                record.date, record.time, record.message
            ));
        }
    }
    out.push_str(&"-".repeat(SECTION_RULE_WIDTH));
    out.push('\n');
    out
}
