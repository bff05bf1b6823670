use axum::body::Bytes;
use serde::Deserialize;
use utoipa::ToSchema;

/// A file part pulled out of a multipart body.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredUpload {
    pub file_name: String,
    /// Relative URL written to the database, `/uploads/<file_name>`.
    pub public_path: String,
}

/// Parsed `multipart/form-data` body of the student create/update routes.
#[derive(Debug, Clone, Default)]
pub struct StudentForm {
    pub name: String,
    pub email: String,
    pub image: Option<UploadedFile>,
}

/// OpenAPI description of the student multipart body.
#[derive(Debug, Deserialize, ToSchema)]
pub struct StudentUploadForm {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "ProfileImage")]
    #[schema(value_type = Option<String>, format = Binary)]
    pub profile_image: Option<Vec<u8>>,
}
