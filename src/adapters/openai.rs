//! Chat-completion client for OpenAI-compatible endpoints.
//!
//! Sends one user message per request and returns the text of the first
//! choice. Uses the blocking `reqwest` client; there is no retry and no
//! streaming.

use crate::config::ModelSettings;
use crate::core::{ModelClient, Request, Response};
use crate::utils::error::{CodeaidError, Result};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

pub struct OpenAiClient {
    settings: ModelSettings,
    client: Client,
}

impl OpenAiClient {
    pub fn new(settings: ModelSettings) -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self { settings, client })
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.settings.endpoint.trim_end_matches('/')
        )
    }
}

impl ModelClient for OpenAiClient {
    fn complete(&self, request: &Request) -> Result<Response> {
        let url = self.completions_url();
        let body = ChatRequest {
            model: &self.settings.model,
            messages: vec![ChatMessage {
                role: "user",
                content: &request.prompt,
            }],
        };

        tracing::debug!("POST {} (model {})", url, self.settings.model);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.settings.api_key)
            .json(&body)
            .send()?;

        let status = response.status();
        tracing::debug!("Model API response status: {}", status);

        if !status.is_success() {
            let error_text = response.text().unwrap_or_default();
            return Err(CodeaidError::RequestFailed {
                message: format!("API returned {}: {}", status, error_text.trim()),
            });
        }

        let completion: ChatResponse = response.json()?;
        let text = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| CodeaidError::RequestFailed {
                message: "response contained no completion text".to_string(),
            })?;

        Ok(Response { text })
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}
