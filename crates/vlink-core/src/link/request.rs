//! Per-invocation link parameters and their defaults.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_PORT: &str = "443";
pub const DEFAULT_SNI: &str = "www.microsoft.com";
pub const DEFAULT_REMARK: &str = "Xray-Reality";

/// Values substituted for port, SNI and remark when the caller leaves them out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkDefaults {
    pub port: String,
    pub sni: String,
    pub remark: String,
}

impl Default for LinkDefaults {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT.to_string(),
            sni: DEFAULT_SNI.to_string(),
            remark: DEFAULT_REMARK.to_string(),
        }
    }
}

/// Everything needed to build one share link.
///
/// Fields are not validated: empty strings and arbitrary characters are
/// accepted and substituted verbatim (only the public key is encoded).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRequest {
    identifier: String,
    server: String,
    port: String,
    public_key: String,
    short_id: String,
    sni: String,
    remark: String,
}

impl LinkRequest {
    /// Request with the built-in SNI and remark. `port` may be a string or an integer.
    pub fn new(
        identifier: impl Into<String>,
        server: impl Into<String>,
        port: impl fmt::Display,
        public_key: impl Into<String>,
        short_id: impl Into<String>,
    ) -> Self {
        let defaults = LinkDefaults::default();
        Self::from_parts(
            identifier,
            server,
            port,
            public_key,
            short_id,
            defaults.sni,
            defaults.remark,
        )
    }

    /// Request with every field given explicitly.
    pub fn from_parts(
        identifier: impl Into<String>,
        server: impl Into<String>,
        port: impl fmt::Display,
        public_key: impl Into<String>,
        short_id: impl Into<String>,
        sni: impl Into<String>,
        remark: impl Into<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            server: server.into(),
            port: port.to_string(),
            public_key: public_key.into(),
            short_id: short_id.into(),
            sni: sni.into(),
            remark: remark.into(),
        }
    }

    pub fn with_sni(mut self, sni: impl Into<String>) -> Self {
        self.sni = sni.into();
        self
    }

    pub fn with_remark(mut self, remark: impl Into<String>) -> Self {
        self.remark = remark.into();
        self
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn server(&self) -> &str {
        &self.server
    }

    pub fn port(&self) -> &str {
        &self.port
    }

    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    pub fn short_id(&self) -> &str {
        &self.short_id
    }

    pub fn sni(&self) -> &str {
        &self.sni
    }

    pub fn remark(&self) -> &str {
        &self.remark
    }
}
