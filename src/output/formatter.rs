// Thu Oct 15 2026 - Alex

use crate::coff::SymbolTableReport;
use colored::Colorize;
use std::fmt::Write;

const LABEL_WIDTH: usize = 25;

pub struct TextFormatter {
    color: bool,
}

impl TextFormatter {
    pub fn new() -> Self {
        Self { color: true }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn format(&self, report: &SymbolTableReport) -> String {
        let mut out = String::new();

        self.field(&mut out, "Symbol table offset:", report.symbol_table_offset);
        self.field(&mut out, "Number of symbols:", report.number_of_symbols);
        self.field(&mut out, "String table size [B]:", report.string_table_size);
        self.field(&mut out, "String table offset:", report.string_table_offset);

        let _ = writeln!(out, "{}", self.heading("Symbol table entries:"));
        for symbol in &report.symbols {
            if self.color {
                let _ = writeln!(out, "  {} {}", symbol.index.to_string().dimmed(), symbol.name.cyan());
            } else {
                let _ = writeln!(out, "  {}", symbol);
            }
        }

        out
    }

    fn field<T: ToString>(&self, out: &mut String, label: &str, value: T) {
        let value = value.to_string();
        let label = format!("{:<width$}", label, width = LABEL_WIDTH);
        if self.color {
            let _ = writeln!(out, "{}{}", label.bold(), value.green());
        } else {
            let _ = writeln!(out, "{}{}", label, value);
        }
    }

    fn heading(&self, text: &str) -> String {
        if self.color {
            text.yellow().bold().to_string()
        } else {
            text.to_string()
        }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}
