//! Fixed tokens of the VLESS + REALITY share link.
//!
//! Client software matches these byte for byte; they are never derived from input.

pub const SCHEME: &str = "vless";
pub const ENCRYPTION: &str = "none";
pub const FLOW: &str = "xtls-rprx-vision";
pub const SECURITY: &str = "reality";
pub const FINGERPRINT: &str = "chrome";
pub const TRANSPORT: &str = "tcp";
pub const HEADER_TYPE: &str = "none";
