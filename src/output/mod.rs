//! Output formatting for CLI display
//!
//! Plain text for anything meant to be piped (paths, JSON) and colored
//! text for diagnostics on stderr.

use crate::store::Secret;
use colored::Colorize;
use std::io::{self, Write};

/// Write one path per line
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_lines<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()
}

/// Format a secret as indented JSON
///
/// # Errors
///
/// Returns an error if the secret cannot be serialized.
pub fn secret_json(secret: &Secret) -> serde_json::Result<String> {
    serde_json::to_string_pretty(secret)
}

/// Write a secret as indented JSON followed by a newline
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_secret<W: Write>(out: &mut W, secret: &Secret) -> crate::Result<()> {
    writeln!(out, "{}", secret_json(secret)?)?;
    out.flush()?;
    Ok(())
}

/// One-line fatal error message for stderr
#[must_use]
pub fn error_line(message: &str) -> String {
    format!("{} {message}", "error:".red().bold())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Map, json};

    #[test]
    fn test_write_lines() {
        let mut out = Vec::new();
        write_lines(&mut out, &["/bar/baz".to_string(), "/foo".to_string()]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "/bar/baz\n/foo\n");
    }

    #[test]
    fn test_write_secret() {
        let mut data = Map::new();
        data.insert("c".to_string(), json!("d"));
        let secret = Secret::new(Some(data), None).with_url("http://vault/ui/vault/secrets/secret/show/bar/baz");

        let mut out = Vec::new();
        write_secret(&mut out, &secret).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.ends_with("}\n"));
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["data"]["c"], "d");
        assert_eq!(parsed["metadata"], serde_json::Value::Null);
        assert_eq!(parsed["url"], "http://vault/ui/vault/secrets/secret/show/bar/baz");
    }

    #[test]
    fn test_error_line() {
        colored::control::set_override(false);
        assert_eq!(error_line("Environment variable VAULT_ADDR must be set"), "error: Environment variable VAULT_ADDR must be set");
    }
}
