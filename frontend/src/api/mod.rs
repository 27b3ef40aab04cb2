//! HTTP client for the order service.
//!
//! One async function per endpoint, each returning the decoded body or an
//! [`ApiError`]. Decoding failures of the error envelope are tolerated: a
//! non-2xx reply whose body carries no usable `message` still surfaces as a
//! server error with generic text. Every [`ApiError`] is logged to the
//! console at the point it is constructed, network failures included.

pub mod items;
pub mod orders;

use gloo_net::http::Response;
use serde::de::DeserializeOwned;
use thiserror::Error;

use common::requests::ErrorEnvelope;

/// Fallback text when an error reply has no message of its own.
pub const GENERIC_SERVER_ERROR: &str = "Server error";

/// What went wrong with a request, as the status banner reports it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status. `message` is the server's
    /// own wording when the error envelope carried one.
    #[error("{message}")]
    Status { code: u16, message: String },
    /// The request never completed: connection refused, aborted, or a body
    /// that failed to encode or decode.
    #[error("{0}")]
    Network(String),
}

impl ApiError {
    /// HTTP status code, for failures the server actually answered.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Status { code, .. } => Some(*code),
            ApiError::Network(_) => None,
        }
    }

    /// Console line for this failure, emitted where the error is built.
    fn log_line(&self) -> String {
        match self {
            ApiError::Status { code, message } => {
                format!("request failed with status {code}: {message}")
            }
            ApiError::Network(message) => format!("request failed: {message}"),
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        let err = ApiError::Network(err.to_string());
        gloo_console::error!(err.log_line());
        err
    }
}

/// Decodes a 2xx response body as `T`, or turns a non-2xx reply into
/// [`ApiError::Status`].
pub(crate) async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if response.ok() {
        Ok(response.json::<T>().await?)
    } else {
        Err(status_error(response).await)
    }
}

/// For endpoints whose success reply has no body worth reading (delete).
pub(crate) async fn expect_success(response: Response) -> Result<(), ApiError> {
    if response.ok() {
        Ok(())
    } else {
        Err(status_error(response).await)
    }
}

async fn status_error(response: Response) -> ApiError {
    let code = response.status();
    let message = match response.text().await {
        Ok(body) => match serde_json::from_str::<ErrorEnvelope>(&body) {
            Ok(envelope) if !envelope.message.is_empty() => envelope.message,
            _ => GENERIC_SERVER_ERROR.to_string(),
        },
        Err(_) => GENERIC_SERVER_ERROR.to_string(),
    };
    let err = ApiError::Status { code, message };
    gloo_console::error!(err.log_line());
    err
}
