// Thu Oct 15 2026 - Alex

use crate::error::ParseError;
use crate::reader::ByteReader;
use serde::Serialize;
use std::io::{Read, Seek};

/// File offset of `PointerToSymbolTable` in the COFF file header.
pub const SYMBOL_TABLE_POINTER_OFFSET: u64 = 8;
pub const SYMBOL_ENTRY_SIZE: u64 = 18;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CoffHeader {
    pub symbol_table_offset: u32,
    pub number_of_symbols: u32,
}

impl CoffHeader {
    pub fn new(symbol_table_offset: u32, number_of_symbols: u32) -> Self {
        Self {
            symbol_table_offset,
            number_of_symbols,
        }
    }

    pub fn read<R: Read + Seek>(reader: &mut ByteReader<R>) -> Result<Self, ParseError> {
        reader.seek(SYMBOL_TABLE_POINTER_OFFSET)?;
        let symbol_table_offset = reader.read_u32_le()?;
        let number_of_symbols = reader.read_u32_le()?;

        log::debug!(
            "symbol table at {} with {} entries",
            symbol_table_offset,
            number_of_symbols
        );

        Ok(Self::new(symbol_table_offset, number_of_symbols))
    }

    pub fn entry_offset(&self, slot: u32) -> u64 {
        u64::from(self.symbol_table_offset) + u64::from(slot) * SYMBOL_ENTRY_SIZE
    }

    pub fn string_table_offset(&self) -> u64 {
        self.entry_offset(self.number_of_symbols)
    }
}
