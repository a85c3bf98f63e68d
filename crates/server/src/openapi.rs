//! OpenAPI description of the HTTP surface, served at `/api-docs/openapi.json`.
//!
//! The doc types mirror the JSON shapes; the handlers themselves work on
//! `serde_json::Value` payloads and the `models` records.
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobPreferencesDoc {
    pub location: String,
    pub job_type: String,
    pub industry: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub skills: Vec<String>,
    pub experience: String,
    pub education: String,
    pub job_preferences: JobPreferencesDoc,
    pub profile_image: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDoc {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub skills: Vec<String>,
    pub experience: String,
    pub education: String,
    pub job_preferences: JobPreferencesDoc,
    pub profile_image: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, ToSchema)]
pub struct SavedProfile { pub message: String, pub data: ProfileDoc }

#[derive(Serialize, ToSchema)]
pub struct CustomerInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDoc {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, ToSchema)]
pub struct SavedCustomer { pub message: String, pub data: CustomerDoc }

#[derive(Serialize, ToSchema)]
pub struct FieldErrorDoc {
    /// Dotted path of the failing field
    pub field: String,
    /// `missing` or `wrong_type`
    pub reason: String,
    pub expected: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
    pub error: String,
    pub fields: Option<Vec<FieldErrorDoc>>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::profiles::create,
        crate::routes::profiles::list,
        crate::routes::customers::create,
        crate::routes::customers::list,
    ),
    components(
        schemas(
            HealthResponse,
            JobPreferencesDoc,
            ProfileInput,
            ProfileDoc,
            SavedProfile,
            CustomerInput,
            CustomerDoc,
            SavedCustomer,
            FieldErrorDoc,
            ErrorResponse,
        )
    ),
    tags(
        (name = "health"),
        (name = "profiles"),
        (name = "customers")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        for p in ["/health", "/api/profiles", "/api/customers"] {
            assert!(paths.contains(&p), "{p} missing from {paths:?}");
        }
    }
}
