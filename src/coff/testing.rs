// Thu Oct 15 2026 - Alex

use crate::coff::header::{SYMBOL_ENTRY_SIZE, SYMBOL_TABLE_POINTER_OFFSET};

const FILE_HEADER_SIZE: u32 = 20;
const IMAGE_FILE_MACHINE_I386: u16 = 0x14c;
const ENTRY_SIZE: usize = SYMBOL_ENTRY_SIZE as usize;

/// Builds small COFF images: a file header, a symbol table and a string table.
pub struct ImageBuilder {
    symbol_table_offset: u32,
    entries: Vec<[u8; ENTRY_SIZE]>,
    strings: Vec<u8>,
}

impl ImageBuilder {
    pub fn new() -> Self {
        Self {
            symbol_table_offset: FILE_HEADER_SIZE,
            entries: Vec::new(),
            strings: Vec::new(),
        }
    }

    pub fn with_symbol_table_offset(mut self, offset: u32) -> Self {
        assert!(offset >= FILE_HEADER_SIZE);
        self.symbol_table_offset = offset;
        self
    }

    pub fn short(mut self, name: &str) -> Self {
        assert!(!name.is_empty() && name.len() <= 8, "not a short name: {}", name);
        let mut entry = [0u8; ENTRY_SIZE];
        entry[..name.len()].copy_from_slice(name.as_bytes());
        self.entries.push(entry);
        self
    }

    pub fn long(mut self, name: &str) -> Self {
        let offset = self.string_offset_for(name);
        let mut entry = [0u8; ENTRY_SIZE];
        entry[4..8].copy_from_slice(&offset.to_le_bytes());
        self.entries.push(entry);
        self
    }

    /// Picks the encoding a compiler would: inline when it fits.
    pub fn symbol(self, name: &str) -> Self {
        if !name.is_empty() && name.len() <= 8 {
            self.short(name)
        } else {
            self.long(name)
        }
    }

    /// Marks the last entry as followed by `count` auxiliary records and
    /// appends them. Their name bytes are non-zero so a scanner that fails
    /// to skip them would report garbage.
    pub fn with_aux(mut self, count: u8) -> Self {
        self = self.with_declared_aux(count);
        for _ in 0..count {
            let mut aux = [0xAAu8; ENTRY_SIZE];
            aux[..8].copy_from_slice(b"AUXDATA!");
            self.entries.push(aux);
        }
        self
    }

    /// Sets the aux count of the last entry without appending records.
    pub fn with_declared_aux(mut self, count: u8) -> Self {
        let last = self.entries.last_mut().expect("no entry to annotate");
        last[ENTRY_SIZE - 1] = count;
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut image = vec![0u8; self.symbol_table_offset as usize];
        image[0..2].copy_from_slice(&IMAGE_FILE_MACHINE_I386.to_le_bytes());

        let pointer = SYMBOL_TABLE_POINTER_OFFSET as usize;
        image[pointer..pointer + 4].copy_from_slice(&self.symbol_table_offset.to_le_bytes());
        image[pointer + 4..pointer + 8].copy_from_slice(&(self.entries.len() as u32).to_le_bytes());

        for entry in &self.entries {
            image.extend_from_slice(entry);
        }

        let size = 4 + self.strings.len() as u32;
        image.extend_from_slice(&size.to_le_bytes());
        image.extend_from_slice(&self.strings);
        image
    }

    fn string_offset_for(&mut self, name: &str) -> u32 {
        let offset = 4 + self.strings.len() as u32;
        self.strings.extend_from_slice(name.as_bytes());
        self.strings.push(0);
        offset
    }
}
