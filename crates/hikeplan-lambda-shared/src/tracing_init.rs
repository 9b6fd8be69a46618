//! Tracing initialization for Lambda functions.
//!
//! Configures JSON-formatted tracing output suitable for CloudWatch Logs.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when `RUST_LOG` is unset. The AWS SDK is noisy at `info`.
const DEFAULT_FILTER: &str = "info,aws_config=warn,aws_smithy_runtime=warn";

/// Initialize tracing with JSON formatting for CloudWatch Logs.
///
/// Call once at the start of the Lambda `main` function, before the runtime
/// starts polling for events. Later calls are ignored, which keeps test
/// binaries that initialize tracing more than once from panicking.
///
/// The log level can be controlled via the `RUST_LOG` environment variable.
///
/// # Example
///
/// ```no_run
/// use hikeplan_lambda_shared::init_tracing;
///
/// #[tokio::main]
/// async fn main() -> Result<(), lambda_runtime::Error> {
///     init_tracing();
///     // ... rest of Lambda setup
///     Ok(())
/// }
/// ```
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // CloudWatch stamps each line itself.
    let fmt_layer = fmt::layer()
        .json()
        .with_target(true)
        .with_level(true)
        .with_current_span(false)
        .without_time()
        .flatten_event(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
