/// Database row types — these map directly to SQLite rows.
pub struct SubmissionRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub eircode: String,
    pub created_at: String,
}
