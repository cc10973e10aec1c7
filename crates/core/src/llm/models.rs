//! Remote model catalog.

use crate::llm::provider::LlmError;
use cf_protocol::model_models::{ModelInfo, FREE_SUFFIX};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument};

/// OpenRouter's public model listing.
pub const MODELS_URL: &str = "https://openrouter.ai/api/frontend/models";

#[derive(Debug, Deserialize)]
struct CatalogPage {
    #[serde(default)]
    data: Vec<Value>,
}

/// Map one catalog entry; entries without a string `name`, `slug` and
/// `author` are skipped.
fn model_entry(entry: &Value) -> Option<ModelInfo> {
    let name = entry.get("name")?.as_str()?;
    let slug = entry.get("slug")?.as_str()?;
    let author = entry.get("author")?.as_str()?;
    let provider = entry
        .get("endpoint")
        .and_then(|endpoint| endpoint.get("provider_name"))
        .and_then(Value::as_str)
        .map(str::to_string);

    Some(ModelInfo {
        name: name.to_string(),
        model_id: slug.to_string(),
        author: author.to_uppercase(),
        provider,
        is_free: slug.contains(FREE_SUFFIX),
    })
}

/// Parse a catalog response body.
pub fn parse_models(body: &str, free_only: bool) -> Result<Vec<ModelInfo>, LlmError> {
    let page: CatalogPage =
        serde_json::from_str(body).map_err(|e| LlmError::MalformedReply(e.to_string()))?;

    Ok(page
        .data
        .iter()
        .filter_map(model_entry)
        .filter(|model| !free_only || model.is_free)
        .collect())
}

/// Fetch the model list from [`MODELS_URL`].
pub async fn fetch_models(free_only: bool) -> Result<Vec<ModelInfo>, LlmError> {
    fetch_models_from(MODELS_URL, free_only, Duration::from_secs(30)).await
}

/// Fetch the model list from an explicit URL.
#[instrument(skip_all, fields(url = %url, free_only = free_only))]
pub async fn fetch_models_from(
    url: &str,
    free_only: bool,
    timeout: Duration,
) -> Result<Vec<ModelInfo>, LlmError> {
    let client = Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| LlmError::Http(format!("failed to create HTTP client: {e}")))?;

    let response = client.get(url).send().await?;
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(LlmError::Status {
            status: status.as_u16(),
            message: body.trim().to_string(),
        });
    }

    let models = parse_models(&body, free_only)?;
    debug!(count = models.len(), "Fetched model catalog");
    Ok(models)
}
