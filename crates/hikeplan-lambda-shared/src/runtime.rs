//! Lambda runtime initialization.
//!
//! Configuration and provider clients are built once at cold start and kept
//! in a process-wide singleton. Every invocation borrows them immutably.
//!
//! # Cold-Start Performance
//!
//! Initialization logs timing fields to help spot slow cold starts:
//!
//! - `config_load_ms`: Time to read configuration from the environment
//! - `client_init_ms`: Time to build the HTTP and AWS SDK clients
//! - `total_init_ms`: Total initialization time

use std::fmt;
use std::sync::OnceLock;
use std::time::Instant;

use tracing::{error, info};

use hikeplan_lib::{Config, Error as LibError, Pipeline};

/// Process-wide Lambda runtime state.
static RUNTIME: OnceLock<LambdaRuntime> = OnceLock::new();

/// Error during runtime initialization.
#[derive(Debug)]
pub struct InitError {
    pub message: String,
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lambda initialization failed: {}", self.message)
    }
}

impl std::error::Error for InitError {}

impl From<LibError> for InitError {
    fn from(err: LibError) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

/// The wired pipeline, shared by all invocations.
pub struct LambdaRuntime {
    pipeline: Pipeline,
}

impl LambdaRuntime {
    pub fn new(pipeline: Pipeline) -> Self {
        Self { pipeline }
    }

    /// Access the pipeline used to serve invocations.
    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }
}

/// Initialize the runtime from the process environment.
///
/// Returns the already-installed runtime when called again.
pub async fn init_runtime() -> Result<&'static LambdaRuntime, InitError> {
    if let Some(runtime) = RUNTIME.get() {
        return Ok(runtime);
    }

    let total_start = Instant::now();

    let config_start = Instant::now();
    let config = Config::from_env().map_err(|e| {
        error!(error = %e, "configuration is incomplete");
        InitError::from(e)
    })?;
    let config_load_ms = config_start.elapsed().as_millis();

    info!(
        config_load_ms = config_load_ms,
        region = %config.aws_region,
        trail_base_url = %config.trail_base_url,
        weather_base_url = %config.weather_base_url,
        "configuration loaded"
    );

    let client_start = Instant::now();
    let pipeline = Pipeline::from_config(&config).await?;
    let client_init_ms = client_start.elapsed().as_millis();

    info!(
        total_init_ms = total_start.elapsed().as_millis(),
        config_load_ms = config_load_ms,
        client_init_ms = client_init_ms,
        "Lambda runtime initialization complete"
    );

    Ok(install_runtime(LambdaRuntime::new(pipeline)))
}

/// Install a prepared runtime, keeping the first one if already set.
pub fn install_runtime(runtime: LambdaRuntime) -> &'static LambdaRuntime {
    RUNTIME.get_or_init(|| runtime)
}

/// Get the installed runtime, if initialization has completed.
pub fn get_runtime() -> Option<&'static LambdaRuntime> {
    RUNTIME.get()
}
