//! Output formatting for command results.

use std::io::{self, Write};

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use hikeplan_lib::{Delivery, PipelineOutcome, PlanRequest};

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    pub fn render_outcome(self, request: &PlanRequest, outcome: &PipelineOutcome) -> Result<()> {
        let mut out = io::stdout().lock();
        match self {
            OutputFormat::Json => write_json(&mut out, outcome),
            OutputFormat::Text => {
                writeln!(out, "Trail:     {}", request.trail_id)?;
                writeln!(out, "Date:      {}", request.start_date)?;
                let forecast = if outcome.forecast_found {
                    "found"
                } else {
                    "outside forecast window"
                };
                writeln!(out, "Forecast:  {}", forecast)?;
                writeln!(out, "Delivery:  {}", describe_delivery(&outcome.delivery))?;
                Ok(())
            }
        }
    }

    pub fn render_request(self, request: &PlanRequest) -> Result<()> {
        let mut out = io::stdout().lock();
        match self {
            OutputFormat::Json => write_json(&mut out, request),
            OutputFormat::Text => {
                writeln!(out, "StartDate: {}", request.start_date)?;
                writeln!(out, "TrailId:   {}", request.trail_id)?;
                writeln!(out, "Username:  {}", request.username)?;
                Ok(())
            }
        }
    }
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

pub fn describe_delivery(delivery: &Delivery) -> String {
    match delivery {
        Delivery::Sent { message_id } => format!("sent (message id {})", message_id),
        Delivery::UserLookupFailed { reason } => format!("not sent, user lookup failed: {}", reason),
        Delivery::DispatchFailed { reason } => format!("not sent, dispatch failed: {}", reason),
    }
}
