//! Hike plan notification handler.
//!
//! Parses the API Gateway event, runs the trail, weather, and mail pipeline,
//! and maps the outcome onto a `{statusCode, body}` response.

use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info, warn};

use hikeplan_lambda_shared::{
    get_runtime, init_runtime, init_tracing, parse_event, ApiResponse, InitError,
};
use hikeplan_lib::Pipeline;

/// Entry point used by the Lambda runtime.
pub async fn run() -> Result<(), Error> {
    init_tracing();

    // Configuration or client failures abort the cold start.
    let _runtime = init_runtime().await?;

    lambda_runtime::run(service_fn(handler)).await
}

/// Lambda handler invoked per request.
pub async fn handler(event: LambdaEvent<Value>) -> Result<ApiResponse, Error> {
    let runtime = get_runtime().ok_or_else(|| InitError {
        message: "runtime not initialized".to_string(),
    })?;
    Ok(handle_event(runtime.pipeline(), event).await)
}

/// Run one invocation against `pipeline`.
pub async fn handle_event(pipeline: &Pipeline, event: LambdaEvent<Value>) -> ApiResponse {
    let request_id = event.context.request_id.clone();

    let request = match parse_event(&event.payload) {
        Ok(request) => request,
        Err(e) => {
            error!(request_id = %request_id, error = %e, "failed to parse request");
            return ApiResponse::parameter_error(&e);
        }
    };

    info!(
        request_id = %request_id,
        trail_id = %request.trail_id,
        start_date = %request.start_date,
        username = %request.username,
        "handling hike plan request"
    );

    let outcome = match pipeline.run(&request).await {
        Ok(outcome) => outcome,
        Err(e) => {
            error!(
                request_id = %request_id,
                stage = %e.stage(),
                error = %e,
                "pipeline aborted"
            );
            return ApiResponse::pipeline_error(&e);
        }
    };

    // Delivery problems are reported as success to the caller; they only
    // surface here.
    if !outcome.delivery.is_sent() {
        warn!(
            request_id = %request_id,
            delivery = ?outcome.delivery,
            "hike plan accepted but email was not delivered"
        );
    }

    info!(
        request_id = %request_id,
        forecast_found = outcome.forecast_found,
        delivered = outcome.delivery.is_sent(),
        "hike plan request complete"
    );

    ApiResponse::success()
}
