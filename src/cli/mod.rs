//! CLI command handlers
//!
//! This module bridges clap argument parsing with the ledger: the
//! interactive session plus the one-shot formatting helpers.

pub mod session;

use std::io::Write;

use crate::config::{KakeiboPaths, Settings};
use crate::error::LedgerResult;
use crate::format::money::{display_or_invalid, input_or_invalid, parse};

pub use session::{Session, SessionControl};

/// Print `amount` with display formatting, or input formatting when `input` is set
pub fn handle_format_command<W: Write>(amount: f64, input: bool, out: &mut W) -> LedgerResult<()> {
    let text = if input {
        input_or_invalid(amount)
    } else {
        display_or_invalid(amount)
    };
    writeln!(out, "{}", text)?;
    Ok(())
}

/// Print the amount a piece of text sanitizes to
pub fn handle_parse_command<W: Write>(text: &str, out: &mut W) -> LedgerResult<()> {
    writeln!(out, "{}", parse(text).yen())?;
    Ok(())
}

/// Print the resolved paths and settings
pub fn handle_config_command<W: Write>(
    paths: &KakeiboPaths,
    settings: &Settings,
    out: &mut W,
) -> LedgerResult<()> {
    writeln!(out, "kakeibo configuration")?;
    writeln!(out, "=====================")?;
    writeln!(out, "Config directory: {}", paths.base_dir().display())?;
    writeln!(
        out,
        "Settings file:    {}{}",
        paths.settings_file().display(),
        if paths.is_initialized() { "" } else { " (not written, using defaults)" }
    )?;
    writeln!(out)?;
    writeln!(out, "Settings:")?;
    writeln!(out, "  Default export format: {}", settings.default_export_format)?;
    writeln!(out, "  Log filter:            {}", settings.log_filter)?;
    match settings.history_limit {
        Some(limit) => writeln!(out, "  History limit:         {} day(s)", limit)?,
        None => writeln!(out, "  History limit:         none")?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::INVALID_AMOUNT_LABEL;
    use tempfile::TempDir;

    fn capture(f: impl FnOnce(&mut Vec<u8>) -> LedgerResult<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_format_command() {
        assert_eq!(capture(|o| handle_format_command(15000.0, false, o)), "¥15,000\n");
        assert_eq!(capture(|o| handle_format_command(0.0, true, o)), "\n");
        assert_eq!(
            capture(|o| handle_format_command(1e20, false, o)),
            format!("{}\n", INVALID_AMOUNT_LABEL)
        );
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(capture(|o| handle_parse_command("abc123def", o)), "123\n");
    }

    #[test]
    fn test_config_command() {
        let temp_dir = TempDir::new().unwrap();
        let paths = KakeiboPaths::with_base_dir(temp_dir.path().to_path_buf());
        let output = capture(|o| handle_config_command(&paths, &Settings::default(), o));

        assert!(output.contains("not written, using defaults"));
        assert!(output.contains("Default export format: json"));
    }
}
