use leadhunt_core::{AppViewModel, LeadRowView, Phase};

const COLUMNS: [&str; 6] = ["Name", "Email", "Company", "Role", "Intent", "Status"];
const MAX_CELL: usize = 32;

pub fn render(view: &AppViewModel) {
    for line in dashboard_lines(view) {
        println!("{line}");
    }
}

pub fn dashboard_lines(view: &AppViewModel) -> Vec<String> {
    let mut lines = Vec::new();
    let phase = match view.phase {
        Phase::Running => "Hunting...",
        Phase::Idle => "Idle",
    };
    lines.push(format!(
        "== Lead hunt [{phase}]  role: {}  industry: {}",
        or_dash(&view.role),
        or_dash(&view.industry)
    ));
    if let Some(error) = &view.last_error {
        lines.push(format!("!! {error}"));
    }
    if let Some(notice) = &view.notice {
        lines.push(format!("-- {notice}"));
    }
    lines.push(format!(
        "Total Leads: {}   Emails Found: {}   Success Rate: {}%",
        view.metrics.total, view.metrics.with_email, view.metrics.success_rate
    ));

    if view.can_launch {
        lines.push("Type `launch` to start hunting.".into());
    }

    if view.leads.is_empty() {
        lines.push("No leads found. Enter a role and industry to start hunting for leads.".into());
        return lines;
    }
    lines.extend(table_lines(&view.leads));
    lines
}

fn table_lines(rows: &[LeadRowView]) -> Vec<String> {
    let cells: Vec<[String; 6]> = rows
        .iter()
        .map(|row| {
            [
                clip(&row.name),
                clip(&row.email),
                clip(&row.company),
                clip(&row.role),
                clip(&row.intent),
                row.status_label().to_string(),
            ]
        })
        .collect();

    let mut widths = COLUMNS.map(|label| label.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(cells.len() + 2);
    lines.push(format_row(&COLUMNS.map(str::to_string), &widths));
    lines.push(
        widths
            .iter()
            .map(|width| "-".repeat(*width))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    for row in &cells {
        lines.push(format_row(row, &widths));
    }
    lines
}

fn format_row(cells: &[String; 6], widths: &[usize; 6]) -> String {
    cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}

fn clip(value: &str) -> String {
    if value.chars().count() <= MAX_CELL {
        return value.to_string();
    }
    let mut clipped: String = value.chars().take(MAX_CELL - 1).collect();
    clipped.push('…');
    clipped
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}
