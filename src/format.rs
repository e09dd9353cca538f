use crate::error::Result;

/// Render names for stdout: one per line, or a JSON array.
pub fn format_names(names: &[String], json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string(names)?);
    }
    Ok(names.join("\n"))
}
