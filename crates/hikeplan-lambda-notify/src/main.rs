//! AWS Lambda function for hike plan notifications.

use lambda_runtime::Error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    hikeplan_lambda_notify::run().await
}
