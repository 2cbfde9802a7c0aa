use crate::report::{DetailEntry, Report, Summary};

/// Sum of open pull requests over every repository in the summary
pub fn summary_total(summary: &Summary) -> usize {
    summary.values().sum()
}

/// Render the summary as a markdown table.
///
/// Repositories without open pull requests are left out; the rest are
/// sorted by name. A final row carries the total.
///
/// ```text
/// ## Open PRs Summary
/// | Name | Open PRs |
/// | - | - |
/// |svc-a| 3|
///  | Total | 3 |
/// ```
pub fn render_summary_table(summary: &Summary) -> String {
    let mut names: Vec<&String> = summary
        .iter()
        .filter(|(_, count)| **count > 0)
        .map(|(name, _)| name)
        .collect();
    names.sort();

    let rows: String = names
        .iter()
        .map(|name| format!("|{}| {}| \n", name, summary[*name]))
        .collect();

    format!(
        "## Open PRs Summary \n| Name | Open PRs | \n| - | - | \n{} | Total | {} | \n",
        rows,
        summary_total(summary)
    )
}

/// Make free text safe for a single markdown table cell
fn escape_cell(text: &str) -> String {
    text.replace("\r\n", " ")
        .replace(['\r', '\n'], " ")
        .replace('|', "\\|")
}

/// Render one repository's open pull requests as a markdown table
pub fn render_detail_table(repo: &str, entries: &[DetailEntry]) -> String {
    let rows: String = entries
        .iter()
        .map(|entry| {
            format!(
                "|{}| {}| {} | \n",
                escape_cell(&entry.title),
                entry.url,
                entry.age_in_days
            )
        })
        .collect();

    format!(
        "## {} \n| Title | Url | Age| \n| - | - | - | \n{}",
        repo, rows
    )
}

/// Render a detail table for every repository in the report, in report order
pub fn render_detail_tables(report: &Report) -> Vec<(String, String)> {
    report
        .iter()
        .map(|(repo, entries)| (repo.to_string(), render_detail_table(repo, entries)))
        .collect()
}
