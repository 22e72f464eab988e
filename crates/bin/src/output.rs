//! Output formatting helpers for JSON output.

use serde::Serialize;

/// Output style selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Compact,
    Pretty,
}

impl From<bool> for OutputFormat {
    fn from(pretty: bool) -> Self {
        if pretty {
            OutputFormat::Pretty
        } else {
            OutputFormat::Compact
        }
    }
}

/// Render a value as JSON in the selected style.
pub fn render<T: Serialize + ?Sized>(
    value: &T,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Compact => serde_json::to_string(value),
        OutputFormat::Pretty => serde_json::to_string_pretty(value),
    }
}

/// Print a value as JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(
    value: &T,
    format: OutputFormat,
) -> Result<(), serde_json::Error> {
    println!("{}", render(value, format)?);
    Ok(())
}
