//! JSON fetch helper shared by the HTTP resolvers.
//!
//! Turns one GET through an `HttpTransport` into a typed value, mapping
//! each failure onto the lookup error taxonomy for the given stage.

use crate::domain::error::LookupError;
use crate::domain::ports::HttpTransport;
use crate::domain::value_objects::LookupStage;
use reqwest::Url;
use serde::de::DeserializeOwned;

/// GET `url` and decode the body as `T`.
///
/// `context` is appended to the status error message after the stage name
/// (e.g. `" for 1.2.3.4"`); pass an empty string when there is none.
pub(crate) async fn fetch_json<T: DeserializeOwned>(
    transport: &dyn HttpTransport,
    stage: LookupStage,
    url: Url,
    context: &str,
) -> Result<T, LookupError> {
    tracing::debug!("fetching {} from {}", stage, url);

    let response = transport
        .get(url)
        .await
        .map_err(|e| LookupError::network(stage, e))?;

    if !response.is_success() {
        tracing::warn!(
            "{} lookup failed with status {}",
            stage,
            response.status
        );
        return Err(LookupError::UpstreamStatus {
            stage,
            status: response.status,
            context: context.to_string(),
            body: response.body,
        });
    }

    parse_json(stage, &response.body)
}

/// Decode a JSON body, reporting malformed or mismatched payloads as parse errors.
pub(crate) fn parse_json<T: DeserializeOwned>(
    stage: LookupStage,
    body: &str,
) -> Result<T, LookupError> {
    serde_json::from_str(body).map_err(|e| LookupError::parse(stage, e.to_string()))
}
