//! Scalar aliases shared by every crate in the workspace.

/// Primary-key type; the schema uses BIGSERIAL throughout.
pub type DbId = i64;

/// Timestamps are stored and exchanged in UTC only.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
