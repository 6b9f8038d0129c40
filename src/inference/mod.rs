pub mod client;

pub use client::{ChatCompletions, OpenAiClient};
