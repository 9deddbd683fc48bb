// Thu Oct 15 2026 - Alex

use crate::coff::header::{CoffHeader, SYMBOL_ENTRY_SIZE};
use crate::coff::string_table::decode_name;
use crate::error::ParseError;
use crate::reader::{read_u32_le_at, ByteReader};
use std::io::{Cursor, Read, Seek};

pub const SHORT_NAME_LEN: usize = 8;
const AUX_COUNT_AT: usize = 17;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameLocation {
    Inline([u8; SHORT_NAME_LEN]),
    StringTable(u32),
}

/// One raw 18-byte symbol table record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolEntry {
    raw: [u8; SYMBOL_ENTRY_SIZE as usize],
}

impl SymbolEntry {
    pub fn from_bytes(raw: [u8; SYMBOL_ENTRY_SIZE as usize]) -> Self {
        Self { raw }
    }

    pub fn read<R: Read + Seek>(
        reader: &mut ByteReader<R>,
        header: &CoffHeader,
        slot: u32,
    ) -> Result<Self, ParseError> {
        reader.seek(header.entry_offset(slot))?;
        Ok(Self::from_bytes(reader.read_array()?))
    }

    pub fn name_field(&self) -> [u8; SHORT_NAME_LEN] {
        let mut name = [0u8; SHORT_NAME_LEN];
        name.copy_from_slice(&self.raw[..SHORT_NAME_LEN]);
        name
    }

    pub fn aux_count(&self) -> u8 {
        self.raw[AUX_COUNT_AT]
    }

    /// A zero first word means bytes 4..8 hold a string table offset.
    pub fn name_location(&self) -> NameLocation {
        match (read_u32_le_at(&self.raw, 0), read_u32_le_at(&self.raw, 4)) {
            (Some(0), Some(offset)) => NameLocation::StringTable(offset),
            _ => NameLocation::Inline(self.name_field()),
        }
    }
}

/// Leading non-NUL bytes of the name field, at most all eight.
pub fn inline_name(field: &[u8; SHORT_NAME_LEN]) -> Result<String, ParseError> {
    let mut reader = ByteReader::new(Cursor::new(field));
    let bytes = reader.read_until_nul(Some(SHORT_NAME_LEN))?;
    Ok(decode_name(&bytes))
}
