use serde_json::Value;

use binaryai_core::Config;

use crate::error::RemoteError;

/// Longest error body echoed back in [`RemoteError::Status`].
const MAX_ERROR_BODY_CHARS: usize = 512;

/// Executes one GraphQL document against the service and yields its `data`.
pub trait Transport {
    fn execute(&self, query: &str, variables: Value) -> Result<Value, RemoteError>;
}

pub struct Client {
    token: String,
    url: String,
    agent: ureq::Agent,
}

impl Client {
    pub fn new(token: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            url: url.into(),
            agent: ureq::AgentBuilder::new().build(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.token.clone(), config.url.clone())
    }
}

impl Transport for Client {
    fn execute(&self, query: &str, variables: Value) -> Result<Value, RemoteError> {
        log::debug!("POST {} variables={}", self.url, variables);

        let result = self
            .agent
            .post(&self.url)
            .set("Token", &self.token)
            .set("Content-Type", "application/json")
            .send_json(serde_json::json!({ "query": query, "variables": variables }));

        let response = match result {
            Ok(resp) => resp,
            Err(ureq::Error::Status(status, resp)) => {
                let body = resp.into_string().unwrap_or_default();
                // GraphQL errors are sometimes delivered with a 4xx status.
                if let Ok(parsed) = serde_json::from_str::<Value>(&body) {
                    if let Some(err) = api_error(&parsed) {
                        return Err(err);
                    }
                }
                return Err(RemoteError::Status {
                    status,
                    body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
                });
            }
            Err(err) => {
                return Err(RemoteError::Transport {
                    url: self.url.clone(),
                    source: Box::new(err),
                })
            }
        };

        let body: Value = response.into_json().map_err(RemoteError::Decode)?;
        into_data(body)
    }
}

/// Splits a GraphQL response envelope into its `data` member or an error.
pub(crate) fn into_data(mut body: Value) -> Result<Value, RemoteError> {
    if let Some(err) = api_error(&body) {
        return Err(err);
    }
    match body.get_mut("data").map(Value::take) {
        Some(Value::Null) | None => Err(RemoteError::MissingField("data".to_string())),
        Some(data) => Ok(data),
    }
}

fn api_error(body: &Value) -> Option<RemoteError> {
    let errors = body.get("errors")?.as_array()?;
    if errors.is_empty() {
        return None;
    }
    let messages = errors
        .iter()
        .map(|e| match e.get("message").and_then(Value::as_str) {
            Some(m) => m.to_string(),
            None => e.to_string(),
        })
        .collect();
    Some(RemoteError::Api { messages })
}
