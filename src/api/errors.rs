// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

/// Uniform JSON error envelope returned by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error_type: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub enum ApiError {
    /// A required query parameter is missing or malformed (HTTP 422).
    ValidationError { field: String, message: String },
    /// A downstream collaborator (keystore, state store) failed (HTTP 500).
    InternalError(String),
}

impl ApiError {
    pub fn missing_param(field: &str) -> Self {
        ApiError::ValidationError {
            field: field.to_string(),
            message: format!("'{}' must be specified", field),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::ValidationError { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        let (error_type, message) = match self {
            ApiError::ValidationError { message, .. } => ("validation_error", message.clone()),
            ApiError::InternalError(msg) => ("internal_error", msg.clone()),
        };
        ErrorResponse {
            error_type: error_type.to_string(),
            message,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.to_response())).into_response()
    }
}
