use crate::services::rest_countries::RestCountriesClient;
use futures::future::join_all;
use tracing::{info, warn};

/// Resolves border codes into country names.
///
/// All lookups are started together and awaited as a group. A lookup that
/// fails is logged and dropped; the rest keep the relative order of `codes`.
/// An empty input issues no requests.
pub async fn resolve_borders(client: &RestCountriesClient, codes: &[String]) -> Vec<String> {
    if codes.is_empty() {
        return Vec::new();
    }

    let lookups = codes.iter().map(|code| async move {
        match client.fetch_country_name(code).await {
            Ok(name) => Some(name),
            Err(e) => {
                warn!("Failed to fetch border country {}: {}", code, e);
                None
            }
        }
    });

    // join_all yields results in input order regardless of completion order
    let resolved: Vec<String> = join_all(lookups).await.into_iter().flatten().collect();

    info!(
        "Resolved {}/{} border countries",
        resolved.len(),
        codes.len()
    );

    resolved
}
