use std::time::Duration;

use reqwest::Client;

/// Build an HTTP client with the shared timeout and user agent.
pub(crate) fn build_client(timeout: Duration) -> reqwest::Result<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent(user_agent())
        .build()
}

fn user_agent() -> String {
    format!("hikeplan-lib/{version}", version = env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_agent_includes_version() {
        assert!(user_agent().starts_with("hikeplan-lib/"));
        assert!(user_agent().ends_with(env!("CARGO_PKG_VERSION")));
    }
}
