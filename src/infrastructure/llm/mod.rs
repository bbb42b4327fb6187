mod http_client;
mod openai;

pub use http_client::{HttpClient, HttpClientTrait};
pub use openai::{OpenAiRelay, DEFAULT_COMPLETIONS_URL};
