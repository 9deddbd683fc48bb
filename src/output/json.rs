// Thu Oct 15 2026 - Alex

use crate::coff::SymbolTableReport;
use serde_json::{to_string, to_string_pretty};

pub struct JsonSerializer {
    pretty_print: bool,
}

impl JsonSerializer {
    pub fn new() -> Self {
        Self { pretty_print: true }
    }

    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    pub fn serialize(&self, report: &SymbolTableReport) -> Result<String, serde_json::Error> {
        if self.pretty_print {
            to_string_pretty(report)
        } else {
            to_string(report)
        }
    }
}

impl Default for JsonSerializer {
    fn default() -> Self {
        Self::new()
    }
}
