//! LambdaTest Basic-Authentication adapter.
//!
//! This crate implements the credential-authentication contract of a
//! LambdaTest connector for a third-party integration platform: it builds
//! a Basic-Authentication header from user-supplied credentials, attaches
//! it to outbound request descriptors, classifies authentication failures
//! on every response, and verifies newly registered credentials against
//! the LambdaTest organization endpoint.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): request/response descriptors, credential
//!   and verification types, and the error taxonomy
//! - **Adapter Layer** (`adapters`): the Basic-auth hooks and the
//!   verification probe, plus the assembled surface the host runtime
//!   registers
//! - **Infrastructure Layer** (`infrastructure`): configuration loading
//!   and logging setup with credential redaction
//!
//! # Example
//!
//! ```ignore
//! use lambdatest_auth::{BasicAuthAdapter, ConfigLoader, Credentials};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ConfigLoader::load()?;
//!     let adapter = BasicAuthAdapter::new(&config)?;
//!     let result = adapter
//!         .test(&Credentials::new("alice", "secret"))
//!         .await?;
//!     println!("connected as {}", result.username);
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use adapters::basic::{
    classify_response, inject_basic_auth, BasicAuthAdapter, CredentialVerifier, VERIFY_URL,
};
pub use domain::errors::{AuthError, AuthResult, AUTH_FAILED_MESSAGE};
pub use domain::models::{
    Credentials, FieldSpec, RequestDescriptor, ResponseDescriptor, VerificationResult,
};
pub use infrastructure::config::{AdapterConfig, ConfigError, ConfigLoader, LoggingConfig};
pub use infrastructure::logging::{init_logging, CredentialScrubber};
