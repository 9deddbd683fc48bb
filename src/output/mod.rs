// Thu Oct 15 2026 - Alex

pub mod formatter;
pub mod json;

pub use formatter::TextFormatter;
pub use json::JsonSerializer;

use crate::coff::SymbolTableReport;
use crate::config::{OutputConfig, OutputFormat};

pub fn render(report: &SymbolTableReport, config: &OutputConfig) -> Result<String, serde_json::Error> {
    match config.format {
        OutputFormat::Text => Ok(TextFormatter::new().with_color(config.color).format(report)),
        OutputFormat::Json => JsonSerializer::new().with_pretty_print(config.pretty).serialize(report),
    }
}
