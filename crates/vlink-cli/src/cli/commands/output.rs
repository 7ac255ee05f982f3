//! Result output: the link alone on `out`, heading and hint on `notes`.

use super::RULE;
use std::io::{self, Write};

pub fn write_link<O: Write, N: Write>(link: &str, out: &mut O, notes: &mut N) -> io::Result<()> {
    writeln!(notes)?;
    writeln!(notes, "{RULE}")?;
    writeln!(notes, "Share link:")?;
    writeln!(notes, "{RULE}")?;
    notes.flush()?;

    writeln!(out, "{link}")?;
    out.flush()?;

    writeln!(notes)?;
    writeln!(notes, "Copy this link and import it in your client.")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_is_the_only_stdout_line() {
        let mut out = Vec::new();
        let mut notes = Vec::new();
        write_link("vless://u@h:443?x#r", &mut out, &mut notes).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "vless://u@h:443?x#r\n");

        let notes = String::from_utf8(notes).unwrap();
        assert!(notes.contains("Share link:"));
        assert!(!notes.contains("vless://"));
    }
}
