//! Share link formatting.
//!
//! Builds a `vless://` URI for a REALITY-secured TCP endpoint. The formatter
//! is a pure function of [`LinkRequest`]: no validation, no I/O, no failure.

mod params;
mod request;

pub use params::*;
pub use request::{LinkDefaults, LinkRequest, DEFAULT_PORT, DEFAULT_REMARK, DEFAULT_SNI};

use crate::encode::encode_component;
use std::fmt;

/// Assemble the share link for `req`.
///
/// # Examples
///
/// ```
/// use vlink_core::{format_link, LinkRequest};
///
/// let req = LinkRequest::new("a1b2c3", "203.0.113.5", 443, "ab+cd/ef=", "short1");
/// assert!(format_link(&req).contains("&pbk=ab%2Bcd%2Fef%3D&"));
/// ```
pub fn format_link(req: &LinkRequest) -> String {
    format!(
        "{SCHEME}://{}@{}:{}?encryption={ENCRYPTION}&flow={FLOW}&security={SECURITY}\
         &sni={}&fp={FINGERPRINT}&pbk={}&sid={}&type={TRANSPORT}&headerType={HEADER_TYPE}#{}",
        req.identifier(),
        req.server(),
        req.port(),
        req.sni(),
        encode_component(req.public_key()),
        req.short_id(),
        req.remark(),
    )
}

/// Free-function form: `None` for `sni` or `remark` means the built-in default.
pub fn format(
    identifier: &str,
    server: &str,
    port: impl fmt::Display,
    public_key: &str,
    short_id: &str,
    sni: Option<&str>,
    remark: Option<&str>,
) -> String {
    let mut req = LinkRequest::new(identifier, server, port, public_key, short_id);
    if let Some(sni) = sni {
        req = req.with_sni(sni);
    }
    if let Some(remark) = remark {
        req = req.with_remark(remark);
    }
    format_link(&req)
}

impl fmt::Display for LinkRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_link(self))
    }
}
