use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use brandwatch_domain::DomainError;
use serde_json::json;
use tracing::error;

pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            DomainError::NotFound(_)
            | DomainError::BrandNotFound(_)
            | DomainError::DomainNotFound(_) => StatusCode::NOT_FOUND,

            DomainError::MissingField(_)
            | DomainError::InvalidFormat(_)
            | DomainError::UnknownBrand(_)
            | DomainError::InvalidBrand(_)
            | DomainError::InvalidInput(_)
            | DomainError::BrandHasDomains(_) => StatusCode::BAD_REQUEST,

            DomainError::DuplicateKey(_) => StatusCode::CONFLICT,
            DomainError::Unauthorized => StatusCode::UNAUTHORIZED,
            DomainError::Forbidden(_) => StatusCode::FORBIDDEN,
            DomainError::CheckerTimeout => StatusCode::GATEWAY_TIMEOUT,

            DomainError::CheckerUnavailable(_)
            | DomainError::UpstreamTransportFault(_)
            | DomainError::UpstreamProtocolFault(_) => StatusCode::BAD_GATEWAY,

            DomainError::PersistenceFault(_) | DomainError::ConfigError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!(error = %self.0, "Request failed");
            "internal error".to_string()
        } else {
            self.0.to_string()
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
