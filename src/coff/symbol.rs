// Thu Oct 15 2026 - Alex

use crate::coff::header::CoffHeader;
use crate::coff::string_table::StringTable;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoffSymbol {
    /// Position among primary entries; auxiliary records are not counted.
    pub index: usize,
    pub table_slot: u32,
    pub name: String,
    pub aux_count: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub string_table_offset: Option<u32>,
}

impl CoffSymbol {
    pub fn is_long_name(&self) -> bool {
        self.string_table_offset.is_some()
    }
}

impl fmt::Display for CoffSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.index, self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolTableReport {
    pub symbol_table_offset: u32,
    pub number_of_symbols: u32,
    pub string_table_offset: u64,
    pub string_table_size: u32,
    pub symbols: Vec<CoffSymbol>,
}

impl SymbolTableReport {
    pub fn new(header: &CoffHeader, strings: &StringTable, symbols: Vec<CoffSymbol>) -> Self {
        Self {
            symbol_table_offset: header.symbol_table_offset,
            number_of_symbols: header.number_of_symbols,
            string_table_offset: strings.offset(),
            string_table_size: strings.size(),
            symbols,
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.symbols.iter().map(|s| s.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
