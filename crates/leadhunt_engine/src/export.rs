use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use hunt_logging::hunt_info;
use leadhunt_core::Lead;
use tempfile::NamedTempFile;

/// Column labels, in output order.
pub const CSV_HEADER: [&str; 6] = ["Name", "Email", "Company", "Role", "Intent", "Status"];
pub const CSV_MIME_TYPE: &str = "text/csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub rows: usize,
    pub path: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("no leads to export")]
    NoLeads,
    #[error("export directory unusable: {0}")]
    ExportDir(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Serializes leads as CSV: a fixed header, then one row per lead in input order.
///
/// Every field is quoted and embedded quotes are doubled (RFC 4180), so commas
/// and line breaks inside values stay within their cell. Rows are separated by
/// `\n` with no trailing newline. An absent email becomes an empty field.
pub fn leads_to_csv(leads: &[Lead]) -> String {
    let mut lines = Vec::with_capacity(leads.len() + 1);
    lines.push(CSV_HEADER.join(","));
    for lead in leads {
        let fields = [
            lead.name.as_str(),
            lead.email.as_deref().unwrap_or(""),
            lead.company.as_str(),
            lead.role.as_str(),
            lead.intent.as_str(),
            lead.status.as_str(),
        ];
        let row: Vec<String> = fields.iter().map(|field| quote_field(field)).collect();
        lines.push(row.join(","));
    }
    lines.join("\n")
}

fn quote_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// `leads_YYYY-MM-DD.csv` for the given export date.
pub fn export_filename(date: NaiveDate) -> String {
    format!("leads_{}.csv", date.format("%Y-%m-%d"))
}

pub fn write_csv_export(
    dir: &Path,
    leads: &[Lead],
    date: NaiveDate,
) -> Result<ExportSummary, ExportError> {
    if leads.is_empty() {
        return Err(ExportError::NoLeads);
    }
    let content = leads_to_csv(leads);
    let path = replace_file(dir, &export_filename(date), &content)?;
    hunt_info!(
        "Wrote {} ({}) rows={} bytes={}",
        path.display(),
        CSV_MIME_TYPE,
        leads.len(),
        content.len()
    );
    Ok(ExportSummary {
        rows: leads.len(),
        path,
    })
}

/// Writes `{dir}/{filename}` through a sibling temp file renamed over the target.
///
/// The rename replaces an earlier same-day export in one step, so the target is
/// always either the previous file or the complete new one.
fn replace_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf, ExportError> {
    prepare_dir(dir)?;
    let target = dir.join(filename);
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.as_file_mut().sync_all()?;
    tmp.persist(&target).map_err(|err| ExportError::Io(err.error))?;
    Ok(target)
}

fn prepare_dir(dir: &Path) -> Result<(), ExportError> {
    match fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(ExportError::ExportDir(format!(
            "{} is not a directory",
            dir.display()
        ))),
        Err(err) if err.kind() == io::ErrorKind::NotFound => fs::create_dir_all(dir)
            .map_err(|err| ExportError::ExportDir(format!("{}: {err}", dir.display()))),
        Err(err) => Err(ExportError::ExportDir(format!("{}: {err}", dir.display()))),
    }
}
