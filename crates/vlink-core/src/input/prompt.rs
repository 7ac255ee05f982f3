//! Line-by-line interactive prompting.

use super::InputError;
use crate::link::{LinkDefaults, LinkRequest};
use std::io::{BufRead, Write};

/// Write `label`, read one line, and return it trimmed.
fn ask<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    field: &'static str,
    label: &str,
) -> Result<String, InputError> {
    write!(writer, "{label}: ")?;
    writer.flush()?;
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(InputError::UnexpectedEof { field });
    }
    Ok(line.trim().to_string())
}

/// Like [`ask`], but an empty reply yields `default`.
fn ask_or<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    field: &'static str,
    label: &str,
    default: &str,
) -> Result<String, InputError> {
    let value = ask(reader, writer, field, &format!("{label} (default {default})"))?;
    if value.is_empty() {
        tracing::debug!(field, "empty reply, using default");
        Ok(default.to_string())
    } else {
        Ok(value)
    }
}

/// Prompt for all seven fields in order.
///
/// Empty replies for port, SNI and remark fall back to `defaults`; other
/// empty replies are kept as empty strings.
pub fn prompt_request<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
    defaults: &LinkDefaults,
) -> Result<LinkRequest, InputError> {
    let r = &mut reader;
    let w = &mut writer;
    let identifier = ask(r, w, "identifier", "UUID")?;
    let server = ask(r, w, "server", "Server address")?;
    let port = ask_or(r, w, "port", "Port", &defaults.port)?;
    let public_key = ask(r, w, "public key", "Public key")?;
    let short_id = ask(r, w, "short ID", "Short ID")?;
    let sni = ask_or(r, w, "SNI", "SNI", &defaults.sni)?;
    let remark = ask_or(r, w, "remark", "Remark", &defaults.remark)?;

    Ok(LinkRequest::from_parts(
        identifier, server, port, public_key, short_id, sni, remark,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str) -> (Result<LinkRequest, InputError>, String) {
        let mut out = Vec::new();
        let res = prompt_request(Cursor::new(input), &mut out, &LinkDefaults::default());
        (res, String::from_utf8(out).unwrap())
    }

    #[test]
    fn all_fields_entered() {
        let (res, _) = run("u\nh\n8443\npk\nsid\nexample.com\nMyNode\n");
        let req = res.unwrap();
        assert_eq!(
            req,
            LinkRequest::from_parts("u", "h", "8443", "pk", "sid", "example.com", "MyNode")
        );
    }

    #[test]
    fn empty_optional_fields_take_defaults() {
        let (res, _) = run("u\nh\n\npk\nsid\n\n\n");
        let req = res.unwrap();
        assert_eq!(req.port(), "443");
        assert_eq!(req.sni(), "www.microsoft.com");
        assert_eq!(req.remark(), "Xray-Reality");
    }

    #[test]
    fn empty_required_fields_stay_empty() {
        let (res, _) = run("\n\n\n\n\n\n\n");
        let req = res.unwrap();
        assert_eq!(req.identifier(), "");
        assert_eq!(req.server(), "");
        assert_eq!(req.public_key(), "");
        assert_eq!(req.short_id(), "");
        assert_eq!(req.port(), "443");
    }

    #[test]
    fn replies_are_trimmed() {
        let (res, _) = run("  u \r\n\th\n 443 \npk==\n sid\n  \nr\n");
        let req = res.unwrap();
        assert_eq!(req.identifier(), "u");
        assert_eq!(req.server(), "h");
        assert_eq!(req.port(), "443");
        assert_eq!(req.public_key(), "pk==");
        assert_eq!(req.sni(), "www.microsoft.com");
    }

    #[test]
    fn last_line_without_newline_is_read() {
        let (res, _) = run("u\nh\n\npk\nsid\n\nlast");
        assert_eq!(res.unwrap().remark(), "last");
    }

    #[test]
    fn eof_before_all_fields_is_error() {
        let (res, _) = run("u\nh\n");
        match res {
            Err(InputError::UnexpectedEof { field }) => assert_eq!(field, "port"),
            other => panic!("expected UnexpectedEof, got {other:?}"),
        }
    }

    #[test]
    fn prompts_show_defaults() {
        let defaults = LinkDefaults {
            port: "2053".to_string(),
            ..LinkDefaults::default()
        };
        let mut out = Vec::new();
        let req = prompt_request(Cursor::new("u\nh\n\npk\nsid\n\n\n"), &mut out, &defaults).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(req.port(), "2053");
        assert_eq!(
            out,
            "UUID: Server address: Port (default 2053): Public key: Short ID: \
             SNI (default www.microsoft.com): Remark (default Xray-Reality): "
        );
    }
}
