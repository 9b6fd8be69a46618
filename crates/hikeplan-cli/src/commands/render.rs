//! Render command: validate a recorded Lambda event offline.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::Value;

use hikeplan_lambda_shared::{parse_event, ApiResponse};

use crate::output::OutputFormat;

/// Handle the render subcommand.
///
/// Prints the parsed request, or the 502 response the Lambda would return
/// for the event, in which case the command fails.
pub fn handle_render(event_path: &Path, format: OutputFormat) -> Result<()> {
    let raw = fs::read_to_string(event_path)
        .with_context(|| format!("failed to read event file {}", event_path.display()))?;
    let payload: Value = serde_json::from_str(&raw)
        .with_context(|| format!("event file {} is not valid JSON", event_path.display()))?;

    match parse_event(&payload) {
        Ok(request) => format.render_request(&request),
        Err(e) => {
            let response = ApiResponse::parameter_error(&e);
            println!("{}", serde_json::to_string_pretty(&response)?);
            bail!("event would be rejected: {}", e)
        }
    }
}
