use crate::sdk::field::Field;
use serde::Deserialize;
use thiserror::Error;

// Helper structs to parse the JSON error response from ORS.
// Directions errors carry a code, geocoding errors are a bare string.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum OrsErrorDetail {
    Structured { code: u32, message: String },
    Text(String),
}

#[derive(Deserialize, Debug)]
pub struct OrsErrorPayload {
    pub error: OrsErrorDetail,
}

impl OrsErrorPayload {
    pub fn message(&self) -> String {
        match &self.error {
            OrsErrorDetail::Structured { code, message } => {
                format!("{} (code {})", message, code)
            }
            OrsErrorDetail::Text(text) => text.clone(),
        }
    }
}

/// Input problems caught before any request is sent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("住所を入力してください")]
    EmptyAddress,

    #[error("{}を入力してください", .0.label())]
    MissingField(Field),
}

#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("通信エラー: {0}")]
    Request(#[from] reqwest::Error),

    #[error("APIエラー {status}: {message}")]
    Status { status: u16, message: String },

    #[error("応答を解析できません: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("予期しない応答: {0}")]
    Unexpected(String),
}

impl NetworkError {
    /// Builds a status error, preferring the structured ORS message over the raw body.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = match serde_json::from_str::<OrsErrorPayload>(body) {
            Ok(payload) => payload.message(),
            Err(_) if body.trim().is_empty() => "応答本文なし".to_string(),
            Err(_) => body.trim().to_string(),
        };
        NetworkError::Status { status, message }
    }
}

#[derive(Error, Debug)]
pub enum RoutingError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("位置が見つかりません: {query}")]
    NotFound { query: String },

    #[error(transparent)]
    Network(#[from] NetworkError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Network,
}

impl RoutingError {
    /// Parse failures report as `Network`; they are a bad response, not bad input.
    pub fn kind(&self) -> ErrorKind {
        match self {
            RoutingError::Validation(_) => ErrorKind::Validation,
            RoutingError::NotFound { .. } => ErrorKind::NotFound,
            RoutingError::Network(_) => ErrorKind::Network,
        }
    }
}
