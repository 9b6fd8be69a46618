use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use hikeplan_cli::commands::plan::{handle_plan, PlanArgs};
use hikeplan_cli::commands::render::handle_render;
use hikeplan_cli::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Hike planner notification utilities")]
struct Cli {
    /// Output format for command results.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Look up a trail and its forecast, then email the plan to a user.
    Plan {
        /// Trail provider identifier.
        #[arg(long = "trail-id")]
        trail_id: String,
        /// First day of the hike (YYYY-MM-DD).
        #[arg(long = "start-date")]
        start_date: String,
        /// User directory username of the recipient.
        #[arg(long)]
        username: String,
        /// Print the email instead of sending it.
        #[arg(long)]
        dry_run: bool,
    },
    /// Validate a recorded API Gateway event without calling any provider.
    Render {
        /// Path to the event JSON file.
        #[arg(long)]
        event: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Plan {
            trail_id,
            start_date,
            username,
            dry_run,
        } => {
            let args = PlanArgs {
                trail_id,
                start_date,
                username,
                dry_run,
            };
            handle_plan(args, cli.format).await
        }
        Command::Render { event } => handle_render(&event, cli.format),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
