// Thu Oct 15 2026 - Alex

use crate::coff::entry::{inline_name, NameLocation, SymbolEntry};
use crate::coff::header::CoffHeader;
use crate::coff::string_table::StringTable;
use crate::coff::symbol::CoffSymbol;
use crate::error::ParseError;
use crate::reader::ByteReader;
use std::io::{Read, Seek};

/// Walks every declared table slot in file order. Auxiliary records occupy
/// slots but never produce a symbol; an aux count that runs past the last
/// declared slot simply ends the walk.
pub fn scan_symbols<R: Read + Seek>(
    reader: &mut ByteReader<R>,
    header: &CoffHeader,
    strings: &StringTable,
) -> Result<Vec<CoffSymbol>, ParseError> {
    let mut symbols = Vec::new();
    let mut pending_aux = 0u8;

    for slot in 0..header.number_of_symbols {
        if pending_aux > 0 {
            pending_aux -= 1;
            log::trace!("slot {} is an auxiliary record", slot);
            continue;
        }

        let entry = SymbolEntry::read(reader, header, slot)?;
        pending_aux = entry.aux_count();

        let (name, string_table_offset) = match entry.name_location() {
            NameLocation::Inline(field) => (inline_name(&field)?, None),
            NameLocation::StringTable(offset) => (strings.resolve(reader, offset)?, Some(offset)),
        };

        log::trace!("slot {}: {} ({} aux)", slot, name, pending_aux);

        symbols.push(CoffSymbol {
            index: symbols.len(),
            table_slot: slot,
            name,
            aux_count: pending_aux,
            string_table_offset,
        });
    }

    Ok(symbols)
}
