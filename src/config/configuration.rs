//! Deployment parameters bound once per run

use serde::Serialize;

use crate::domain::ports::ConfigProvider;
use crate::domain::value_objects::{Address, ConstructorArg};
use crate::error::ConfigurationError;

/// Environment keys read by [`Configuration::load`]
pub mod keys {
    pub const OWNER: &str = "OWNER";
    pub const CERTIFICATE: &str = "CERTIFICATE";
    pub const SIGNING_DOMAIN: &str = "SIGNING_DOMAIN";
    pub const SIGNATURE_VERSION: &str = "SIGNATURE_VERSION";

    /// All required keys, in constructor order
    pub const REQUIRED: [&str; 4] = [OWNER, CERTIFICATE, SIGNING_DOMAIN, SIGNATURE_VERSION];

    /// Network profile name, when `--network` is not given
    pub const NETWORK: &str = "AUTHDEPLOY_NETWORK";
    /// RPC URL override, when `--rpc-url` is not given
    pub const RPC_URL: &str = "AUTHDEPLOY_RPC_URL";
    /// Sender account, when `--from` is not given
    pub const FROM: &str = "AUTHDEPLOY_FROM";
    /// `tracing` filter directives
    pub const LOG: &str = "AUTHDEPLOY_LOG";
}

/// Immutable deployment parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Configuration {
    /// Initial owner of the ownership module
    pub owner: Address,
    /// Certificate identifier passed to the authenticity module
    pub certificate: String,
    /// Signing-domain name (typed-data domain)
    pub signing_domain: String,
    /// Signature-version string (typed-data domain)
    pub signature_version: String,
}

impl Configuration {
    pub fn new(
        owner: impl Into<Address>,
        certificate: impl Into<String>,
        signing_domain: impl Into<String>,
        signature_version: impl Into<String>,
    ) -> Self {
        Self {
            owner: owner.into(),
            certificate: certificate.into(),
            signing_domain: signing_domain.into(),
            signature_version: signature_version.into(),
        }
    }

    /// Read the four required keys from `provider`.
    ///
    /// A whitespace-only value counts as missing, and every absent or blank
    /// key is reported, not just the first one. Text values are passed to
    /// the constructor exactly as set; only the owner address is trimmed.
    pub fn load(provider: &dyn ConfigProvider) -> Result<Self, ConfigurationError> {
        let mut missing = Vec::new();
        let mut read = |key: &str| -> String {
            match provider.get(key) {
                Some(value) if !value.trim().is_empty() => value,
                _ => {
                    missing.push(key.to_string());
                    String::new()
                }
            }
        };

        let owner = read(keys::OWNER);
        let certificate = read(keys::CERTIFICATE);
        let signing_domain = read(keys::SIGNING_DOMAIN);
        let signature_version = read(keys::SIGNATURE_VERSION);

        if !missing.is_empty() {
            return Err(ConfigurationError::Missing { keys: missing });
        }

        Ok(Self::new(owner, certificate, signing_domain, signature_version))
    }

    /// Arguments for the authenticity module's constructor, after the
    /// ownership address.
    pub fn authenticity_args(&self) -> [ConstructorArg; 3] {
        [
            ConstructorArg::text(self.certificate.clone()),
            ConstructorArg::text(self.signing_domain.clone()),
            ConstructorArg::text(self.signature_version.clone()),
        ]
    }
}
