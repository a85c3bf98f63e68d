use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use models::validation::FieldError;
use serde::Serialize;
use service::errors::ServiceError;
use tracing::{error, warn};

/// Error body shared by every record route: `{message, error[, fields]}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: &'static str,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<FieldError>>,
}

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorBody,
}

impl ApiError {
    /// Map a service failure. Client mistakes are 4xx, store failures 500.
    pub fn from_service(message: &'static str, err: ServiceError) -> Self {
        let (status, fields) = match &err {
            ServiceError::Validation(v) => (StatusCode::BAD_REQUEST, Some(v.fields().to_vec())),
            ServiceError::DuplicateKey(_) => (StatusCode::CONFLICT, None),
            ServiceError::Storage(_) => (StatusCode::INTERNAL_SERVER_ERROR, None),
        };
        Self { status, body: ErrorBody { message, error: err.to_string(), fields } }
    }

    /// The body was not JSON at all.
    pub fn from_rejection(message: &'static str, rejection: JsonRejection) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: ErrorBody { message, error: rejection.body_text(), fields: None },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, error = %self.body.error, "{}", self.body.message);
        } else {
            warn!(status = %self.status, error = %self.body.error, "{}", self.body.message);
        }
        (self.status, Json(self.body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::validation::{FieldIssue, ValidationErrors};

    #[test]
    fn status_mapping() {
        let v = ServiceError::Validation(ValidationErrors {
            entity: "customer",
            errors: vec![FieldError { field: "name".into(), issue: FieldIssue::Missing }],
        });
        let e = ApiError::from_service("Error saving customer", v);
        assert_eq!(e.status, StatusCode::BAD_REQUEST);
        assert_eq!(e.body.fields.as_ref().map(Vec::len), Some(1));

        let d = ApiError::from_service("Error saving customer", ServiceError::duplicate_email("customer", "a@x.com"));
        assert_eq!(d.status, StatusCode::CONFLICT);
        assert!(d.body.fields.is_none());

        let s = ApiError::from_service("Error fetching customers", ServiceError::Storage("down".into()));
        assert_eq!(s.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(s.body.error, "storage error: down");
    }

    #[test]
    fn body_omits_fields_when_absent() {
        let body = ErrorBody { message: "Error fetching profiles", error: "storage error: x".into(), fields: None };
        let v = serde_json::to_value(&body).unwrap();
        assert_eq!(v, serde_json::json!({"message": "Error fetching profiles", "error": "storage error: x"}));
    }
}
