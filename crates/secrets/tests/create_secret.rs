//! Secret creation end to end: chain options drive resolution, the
//! result lands in a redacted record.

use credchain_core::{Error, Result, SecretRecord, ServiceType};
use credchain_secrets::{create_and_store_secret, create_secret, CreateSecretInput, SecretCatalog};
use serial_test::serial;

struct EnvGuard {
    key: String,
    previous: Option<String>,
}

impl EnvGuard {
    fn set(key: &str, value: &str) -> Self {
        let previous = std::env::var(key).ok();
        std::env::set_var(key, value);
        Self {
            key: key.to_string(),
            previous,
        }
    }

    fn unset(key: &str) -> Self {
        let previous = std::env::var(key).ok();
        std::env::remove_var(key);
        Self {
            key: key.to_string(),
            previous,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.previous {
            Some(value) => std::env::set_var(&self.key, value),
            None => std::env::remove_var(&self.key),
        }
    }
}

#[tokio::test]
#[serial]
async fn env_chain_produces_a_populated_record() {
    let _imds = EnvGuard::set("AWS_EC2_METADATA_DISABLED", "true");
    let _key = EnvGuard::set("AWS_ACCESS_KEY_ID", "AKIDSECRET");
    let _secret = EnvGuard::set("AWS_SECRET_ACCESS_KEY", "chain-secret");
    let _token = EnvGuard::unset("AWS_SESSION_TOKEN");
    let _region = EnvGuard::set("AWS_REGION", "eu-central-1");

    let input = CreateSecretInput::new(ServiceType::S3, "from_env").with_option("chain", "env");
    let record = create_secret(&input).await.unwrap();

    assert_eq!(record.get("key_id"), Some("AKIDSECRET"));
    assert_eq!(record.get("secret"), Some("chain-secret"));
    assert_eq!(record.get("region"), Some("eu-central-1"));
    assert_eq!(record.get("endpoint"), Some("s3.amazonaws.com"));
    assert!(record.is_redacted("secret"));
}

#[tokio::test]
#[serial]
async fn empty_chain_option_yields_a_record_without_credentials() {
    let _imds = EnvGuard::set("AWS_EC2_METADATA_DISABLED", "true");
    // Environment credentials must not leak in through a default-chain
    // fallback when the caller asked for an empty chain.
    let _key = EnvGuard::set("AWS_ACCESS_KEY_ID", "AKIDENV");
    let _secret = EnvGuard::set("AWS_SECRET_ACCESS_KEY", "env-secret");
    let _token = EnvGuard::unset("AWS_SESSION_TOKEN");
    let _region = EnvGuard::set("AWS_REGION", "us-east-1");

    let input = CreateSecretInput::new(ServiceType::S3, "no_chain").with_option("chain", "");
    let record = create_secret(&input).await.unwrap();

    assert!(!record.contains("key_id"));
    assert!(!record.contains("secret"));
    // Defaults and redaction still apply to the empty record.
    assert_eq!(record.get("endpoint"), Some("s3.amazonaws.com"));
    assert!(record.is_redacted("secret"));
}

#[tokio::test]
#[serial]
async fn unknown_chain_token_fails_without_resolving() {
    let input =
        CreateSecretInput::new(ServiceType::S3, "broken").with_option("chain", "env;bogus");
    let err = create_secret(&input).await.unwrap_err();
    assert!(matches!(err, Error::InvalidInput { .. }));
    assert!(err.to_string().contains("'bogus'"));
}

#[tokio::test]
#[serial]
async fn overrides_beat_chain_results() {
    let _imds = EnvGuard::set("AWS_EC2_METADATA_DISABLED", "true");
    let _key = EnvGuard::set("AWS_ACCESS_KEY_ID", "AKIDCHAIN");
    let _secret = EnvGuard::set("AWS_SECRET_ACCESS_KEY", "chain-secret");
    let _token = EnvGuard::unset("AWS_SESSION_TOKEN");
    let _region = EnvGuard::set("AWS_REGION", "us-east-1");

    let input = CreateSecretInput::new(ServiceType::S3, "override")
        .with_option("chain", "env")
        .with_option("region", "us-west-2")
        .with_option("endpoint", "minio.internal:9000");
    let record = create_secret(&input).await.unwrap();

    assert_eq!(record.get("region"), Some("us-west-2"));
    assert_eq!(record.get("endpoint"), Some("minio.internal:9000"));
    assert_eq!(record.get("key_id"), Some("AKIDCHAIN"));
}

#[tokio::test]
#[serial]
async fn stored_secrets_transfer_to_the_catalog() {
    let _imds = EnvGuard::set("AWS_EC2_METADATA_DISABLED", "true");
    let _key = EnvGuard::set("AWS_ACCESS_KEY_ID", "AKIDCATALOG");
    let _secret = EnvGuard::set("AWS_SECRET_ACCESS_KEY", "catalog-secret");
    let _token = EnvGuard::unset("AWS_SESSION_TOKEN");
    let _region = EnvGuard::set("AWS_REGION", "us-east-1");

    #[derive(Default)]
    struct InMemoryCatalog {
        records: Vec<SecretRecord>,
    }

    impl SecretCatalog for InMemoryCatalog {
        fn store(&mut self, record: SecretRecord) -> Result<()> {
            self.records.push(record);
            Ok(())
        }
    }

    let mut catalog = InMemoryCatalog::default();
    let input = CreateSecretInput::new(ServiceType::S3, "stored").with_option("chain", "env");
    create_and_store_secret(&mut catalog, &input).await.unwrap();

    assert_eq!(catalog.records.len(), 1);
    assert_eq!(catalog.records[0].name, "stored");
    assert_eq!(catalog.records[0].get("key_id"), Some("AKIDCATALOG"));
}

#[tokio::test]
#[serial]
async fn empty_environment_still_yields_a_record() {
    let _imds = EnvGuard::set("AWS_EC2_METADATA_DISABLED", "true");
    let _creds_file = EnvGuard::set("AWS_SHARED_CREDENTIALS_FILE", "/dev/null");
    let _config_file = EnvGuard::set("AWS_CONFIG_FILE", "/dev/null");
    let _key = EnvGuard::unset("AWS_ACCESS_KEY_ID");
    let _secret = EnvGuard::unset("AWS_SECRET_ACCESS_KEY");
    let _token = EnvGuard::unset("AWS_SESSION_TOKEN");
    let _region = EnvGuard::set("AWS_REGION", "us-east-1");

    let input =
        CreateSecretInput::new(ServiceType::Gcs, "no_creds").with_option("chain", "env;config");
    let record = create_secret(&input).await.unwrap();

    assert!(!record.contains("key_id"));
    assert!(!record.contains("secret"));
    assert_eq!(record.get("endpoint"), Some("storage.googleapis.com"));
    assert_eq!(record.get("url_style"), Some("path"));
    assert!(record.is_redacted("secret"));
    assert!(record.is_redacted("session_token"));
}
