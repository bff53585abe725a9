//! Format tree hash reports as text or JSON.

use crate::error::ApiError;
use crate::tree::TreeHashReport;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use serde_json::json;

/// Plain tree hash, the reference output.
pub fn format_report_text(report: &TreeHashReport) -> String {
    report.tree_hash.clone()
}

/// Every reduction level as a table, followed by the tree hash.
pub fn format_levels_text(report: &TreeHashReport) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} ({} bytes, {} chunks of {} bytes, {})\n\n",
        report.path, report.bytes, report.chunks, report.chunk_size, report.algorithm
    ));
    if let Some(ref levels) = report.levels {
        let mut table = Table::new();
        table.load_preset(UTF8_BORDERS_ONLY);
        table.set_header(vec!["Level", "Index", "Digest"]);
        for (depth, level) in levels.iter().enumerate() {
            for (index, digest) in level.iter().enumerate() {
                table.add_row(vec![depth.to_string(), index.to_string(), digest.clone()]);
            }
        }
        out.push_str(&format!("{}\n\n", table));
    }
    out.push_str(&report.tree_hash);
    out
}

/// Successful `--check` line.
pub fn format_check_text(report: &TreeHashReport) -> String {
    format!("{}: OK", report.path)
}

/// Report as pretty JSON; `verified` is present only when a check ran.
pub fn format_report_json(
    report: &TreeHashReport,
    verified: Option<bool>,
) -> Result<String, ApiError> {
    let mut value = serde_json::to_value(report)?;
    if let (Some(verified), Some(obj)) = (verified, value.as_object_mut()) {
        obj.insert("verified".to_string(), json!(verified));
    }
    Ok(serde_json::to_string_pretty(&value)?)
}
