//! Shared constants: session option names, default endpoints, and scopes.

/// Host session option holding the access key id.
pub const OPT_ACCESS_KEY_ID: &str = "s3_access_key_id";
/// Host session option holding the secret access key.
pub const OPT_SECRET_ACCESS_KEY: &str = "s3_secret_access_key";
/// Host session option holding the session token.
pub const OPT_SESSION_TOKEN: &str = "s3_session_token";
/// Host session option holding the region.
pub const OPT_REGION: &str = "s3_region";

/// Placeholder rendered in place of redacted secret values.
pub const REDACTED_PLACEHOLDER: &str = "<redacted>";

/// Default endpoint for the primary object-storage service.
pub const S3_DEFAULT_ENDPOINT: &str = "s3.amazonaws.com";
/// Default endpoint for the generic cloud-storage variant.
pub const GCS_DEFAULT_ENDPOINT: &str = "storage.googleapis.com";
/// Domain suffix appended to the account id for the alternate provider.
pub const R2_ENDPOINT_SUFFIX: &str = ".r2.cloudflarestorage.com";

/// URL-prefix scopes applied when the caller supplies none.
pub const S3_DEFAULT_SCOPE: &[&str] = &["s3://", "s3n://", "s3a://"];
/// Scope default for the alternate provider.
pub const R2_DEFAULT_SCOPE: &[&str] = &["r2://"];
/// Scope default for the generic cloud-storage variant.
pub const GCS_DEFAULT_SCOPE: &[&str] = &["gcs://", "gs://"];

/// Host extension providing object-storage I/O; required before any
/// credential is applied to the session.
pub const STORAGE_EXTENSION: &str = "httpfs";

/// Provider label recorded on secrets produced by chain resolution.
pub const CREDENTIAL_CHAIN_PROVIDER: &str = "credential_chain";

/// Fixed base for task-role resource-path lookups (the container
/// metadata address).
pub const TASK_ROLE_BASE_URL: &str = "http://169.254.170.2";
