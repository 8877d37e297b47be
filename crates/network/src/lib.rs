#![forbid(unsafe_code)]

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod memory;
pub mod wire;

pub use api::QuestionsApi;
pub use config::ApiConfig;
pub use error::ApiError;
pub use reqwest::StatusCode;
pub use http::HttpQuestionsApi;
pub use memory::InMemoryQuestionsApi;
pub use wire::{NetworkAnswer, NetworkQuestion};
