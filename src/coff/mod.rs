// Thu Oct 15 2026 - Alex

pub mod entry;
pub mod header;
pub mod string_table;
pub mod symbol;
pub mod table;

#[cfg(test)]
pub(crate) mod testing;

pub use entry::{NameLocation, SymbolEntry};
pub use header::{CoffHeader, SYMBOL_ENTRY_SIZE};
pub use string_table::StringTable;
pub use symbol::{CoffSymbol, SymbolTableReport};
pub use table::scan_symbols;

use crate::error::ParseError;
use crate::reader::{ByteReader, FileSource, SourceMode};
use std::io::{Read, Seek};
use std::path::Path;

/// Reads the symbol table of a COFF image in one pass: file header, string
/// table size, then every symbol entry. Any read that runs out of data fails
/// the whole parse.
pub fn parse<R: Read + Seek>(source: R) -> Result<SymbolTableReport, ParseError> {
    let mut reader = ByteReader::new(source);

    let header = CoffHeader::read(&mut reader)?;
    let strings = StringTable::locate(&mut reader, &header)?;
    let symbols = scan_symbols(&mut reader, &header, &strings)?;

    log::debug!(
        "resolved {} symbols from {} table slots",
        symbols.len(),
        header.number_of_symbols
    );

    Ok(SymbolTableReport::new(&header, &strings, symbols))
}

pub fn parse_file<P: AsRef<Path>>(path: P, mode: SourceMode) -> Result<SymbolTableReport, ParseError> {
    let path = path.as_ref();
    let source = FileSource::open(path, mode)?;
    log::info!("reading {} ({:?})", path.display(), source.mode());

    parse(source)
}
