//! Plan command: run the full pipeline for one request.

use anyhow::{anyhow, Context, Result};
use tracing::info;

use hikeplan_lambda_shared::{ApiResponse, HikePlanRequest};
use hikeplan_lib::{Config, Pipeline};

use crate::dry_run::PrintingMailer;
use crate::output::OutputFormat;

/// Arguments collected from the command line.
#[derive(Debug, Clone)]
pub struct PlanArgs {
    pub trail_id: String,
    pub start_date: String,
    pub username: String,
    pub dry_run: bool,
}

/// Handle the plan subcommand.
///
/// Validates the arguments exactly as the Lambda validates an event body,
/// then runs the pipeline with configuration from the environment.
pub async fn handle_plan(args: PlanArgs, format: OutputFormat) -> Result<()> {
    let request = HikePlanRequest {
        start_date: args.start_date,
        trail_id: args.trail_id,
        username: args.username,
    }
    .into_plan()
    .context("invalid plan arguments")?;

    let config = Config::from_env().context("failed to load configuration")?;

    let pipeline = if args.dry_run {
        info!("dry run: email will be printed, not sent");
        Pipeline::with_mailer(&config, Box::new(PrintingMailer::stdout())).await
    } else {
        Pipeline::from_config(&config).await
    }
    .context("failed to build provider clients")?;

    let outcome = pipeline.run(&request).await.map_err(|e| {
        let response = ApiResponse::pipeline_error(&e);
        anyhow!(response.body_text().unwrap_or_else(|| e.to_string()))
    })?;

    format.render_outcome(&request, &outcome)
}
