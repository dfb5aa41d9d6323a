pub mod ollama;

pub use ollama::{ChatMessage, OllamaClient, DEFAULT_OLLAMA_HOST};
