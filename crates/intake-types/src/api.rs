use serde::{Deserialize, Serialize};

// -- Submit --

/// Wire payload for `POST /submit`. Every field defaults to the empty
/// string so a missing field fails validation rather than
/// deserialization.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct SubmitRequest {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub eircode: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub message: String,
    pub id: i64,
}

// -- Errors --

/// One validation failure attributable to exactly one named field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ValidationFailure {
    pub success: bool,
    pub errors: Vec<FieldError>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FaultResponse {
    pub success: bool,
    pub message: String,
}

// -- Health --

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub message: String,
}
