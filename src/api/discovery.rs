//! Startup resolution of the travel API base URL.
//!
//! Runs once before the server starts. The chosen URL is fixed for the
//! lifetime of the process.

use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{info, warn};

const PROBE_TIMEOUT: Duration = Duration::from_secs(3);

/// A candidate is reachable when `/auth/me` answers at all with success or
/// an auth rejection.
pub fn is_reachable_status(status: StatusCode) -> bool {
    status.is_success() || status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN
}

async fn probe(client: &Client, base_url: &str) -> bool {
    match client.get(format!("{}/auth/me", base_url)).send().await {
        Ok(response) => is_reachable_status(response.status()),
        Err(e) => {
            warn!("Travel API candidate {} unreachable: {}", base_url, e);
            false
        }
    }
}

/// Pick the first reachable base URL, primary first. Falls back to the
/// primary when nothing answers.
pub async fn resolve_base_url(primary: &str, fallbacks: &[String]) -> String {
    if fallbacks.is_empty() {
        return primary.to_string();
    }

    let client = match Client::builder().timeout(PROBE_TIMEOUT).build() {
        Ok(c) => c,
        Err(e) => {
            warn!("Could not build probe client ({}), using primary travel API URL", e);
            return primary.to_string();
        }
    };

    for candidate in std::iter::once(primary).chain(fallbacks.iter().map(String::as_str)) {
        if probe(&client, candidate).await {
            info!("Travel API resolved to {}", candidate);
            return candidate.to_string();
        }
    }

    warn!("No travel API candidate answered, keeping primary {}", primary);
    primary.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reachable_statuses() {
        assert!(is_reachable_status(StatusCode::OK));
        assert!(is_reachable_status(StatusCode::UNAUTHORIZED));
        assert!(is_reachable_status(StatusCode::FORBIDDEN));
        assert!(!is_reachable_status(StatusCode::NOT_FOUND));
        assert!(!is_reachable_status(StatusCode::BAD_GATEWAY));
    }

    #[tokio::test]
    async fn test_no_fallbacks_keeps_primary_without_probing() {
        let url = resolve_base_url("http://primary.invalid/api", &[]).await;
        assert_eq!(url, "http://primary.invalid/api");
    }

    #[tokio::test]
    async fn test_nothing_reachable_keeps_primary() {
        let fallbacks = vec!["http://127.0.0.1:9/api".to_string()];
        let url = resolve_base_url("http://127.0.0.1:9/primary", &fallbacks).await;
        assert_eq!(url, "http://127.0.0.1:9/primary");
    }
}
