//! # Ollama Client
//!
//! Minimal client for a local Ollama server's chat and embedding endpoints.

use crate::errors::PromptError;
use reqwest::{Client as ReqwestClient, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::debug;

pub const DEFAULT_OLLAMA_HOST: &str = "http://localhost:11434";

// --- Request and response structures ---

#[derive(Serialize, Debug)]
struct EmbedRequest<'a> {
    model: &'a str,
    input: &'a [&'a str],
}

#[derive(Deserialize, Debug)]
struct EmbedResponse {
    embeddings: Vec<Vec<f32>>,
}

#[derive(Serialize, Debug)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    stream: bool,
}

#[derive(Deserialize, Debug)]
struct ChatResponse {
    message: Option<ChatMessage>,
}

/// A single chat turn.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }
}

// --- Client implementation ---

#[derive(Clone, Debug)]
pub struct OllamaClient {
    client: ReqwestClient,
    host: String,
}

impl OllamaClient {
    /// Creates a client for the server at `host` (e.g. `http://localhost:11434`).
    pub fn new(host: impl Into<String>) -> Result<Self, PromptError> {
        let client = ReqwestClient::builder()
            .build()
            .map_err(PromptError::ReqwestClientBuild)?;
        Ok(Self {
            client,
            host: host.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Embeds each input string, returning one vector per input in order.
    pub async fn embed(&self, model: &str, inputs: &[&str]) -> Result<Vec<Vec<f32>>, PromptError> {
        let request_body = EmbedRequest {
            model,
            input: inputs,
        };
        debug!(payload = ?request_body, "--> Sending request to Ollama embed API");
        let response: EmbedResponse = self.post_json("/api/embed", &request_body).await?;
        Ok(response.embeddings)
    }

    /// Sends a non-streaming chat request and returns the assistant's message.
    pub async fn chat(
        &self,
        model: &str,
        messages: &[ChatMessage],
    ) -> Result<ChatMessage, PromptError> {
        let request_body = ChatRequest {
            model,
            messages,
            stream: false,
        };
        debug!(payload = ?request_body, "--> Sending request to Ollama chat API");
        let response: ChatResponse = self.post_json("/api/chat", &request_body).await?;
        response.message.ok_or(PromptError::EmptyResponse)
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, PromptError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .client
            .post(format!("{}{path}", self.host))
            .json(body)
            .send()
            .await
            .map_err(PromptError::AiRequest)?;
        let response = check_status(response).await?;
        response
            .json::<T>()
            .await
            .map_err(PromptError::AiDeserialization)
    }
}

async fn check_status(response: Response) -> Result<Response, PromptError> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    Err(PromptError::AiApi { status, body })
}
