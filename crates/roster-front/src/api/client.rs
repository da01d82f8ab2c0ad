use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::RecordId;
use gloo_net::http::{Request, Response};
use serde_json::Value;

#[derive(Clone, Debug, PartialEq)]
pub struct RosterClient {
    base_url: String,
}

impl RosterClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            base_url: config.base_url(),
        }
    }

    pub fn players_url(&self) -> String {
        format!("{}players", self.base_url)
    }

    pub fn player_url(&self, id: &RecordId) -> String {
        format!("{}players/{}", self.base_url, id)
    }
}

/// Sends the request and reads the body as JSON. The status code is not
/// inspected; the envelope inside the body decides success.
pub async fn send_json(request: Request) -> Result<Value, ApiError> {
    let response: Response = request.send().await?;

    log::debug!(
        "{} {} -> {}",
        response.url(),
        response.status_text(),
        response.status()
    );

    let text = response.text().await?;
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }

    Ok(serde_json::from_str(&text)?)
}
