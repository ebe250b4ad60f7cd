use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use cookbook_gate::GateError;
use cookbook_names::NameError;
use cookbook_resolver::ResolveError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid name: {0}")]
    Name(#[from] NameError),

    #[error("admission failed: {0}")]
    Gate(#[from] GateError),

    #[error("summary failed: {0}")]
    Resolve(#[from] ResolveError),

    #[error("malformed request: {0}")]
    MalformedRequest(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

impl ServerError {
    /// Short label of the failure, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Name(_) => "invalid_name",
            Self::Gate(GateError::Rejected(_)) => "rejected_entry",
            Self::Resolve(ResolveError::UnknownEntry { .. }) => "unknown_entry",
            Self::Resolve(ResolveError::NotARecipe { .. }) => "not_a_recipe",
            Self::Resolve(ResolveError::CyclicDefinition { .. }) => "cyclic_definition",
            Self::Resolve(ResolveError::DepthExceeded { .. }) => "depth_exceeded",
            Self::Resolve(ResolveError::QuantityOverflow { .. }) => "quantity_overflow",
            Self::Gate(GateError::Store(_)) | Self::Resolve(ResolveError::Store(_)) => "store",
            Self::MalformedRequest(_) => "malformed_request",
            Self::Config(_) => "config",
            Self::Io(_) => "io",
            Self::Internal(_) => "internal",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Gate(GateError::Store(_))
            | Self::Resolve(ResolveError::Store(_))
            | Self::Config(_)
            | Self::Io(_)
            | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

/// Failures carry no body; the reason only goes to the log.
impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(kind = self.kind(), error = %self, "request failed");
        } else {
            tracing::warn!(kind = self.kind(), error = %self, "request rejected");
        }
        status.into_response()
    }
}
