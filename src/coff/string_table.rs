// Thu Oct 15 2026 - Alex

use crate::coff::header::CoffHeader;
use crate::error::ParseError;
use crate::reader::ByteReader;
use std::io::{Read, Seek};

/// The string table that follows the symbol table. Its first four bytes hold
/// the table size including that size field; names are addressed by offset
/// from the start of the table, so offsets below 4 alias the size field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringTable {
    offset: u64,
    size: u32,
}

impl StringTable {
    pub fn new(offset: u64, size: u32) -> Self {
        Self { offset, size }
    }

    pub fn locate<R: Read + Seek>(
        reader: &mut ByteReader<R>,
        header: &CoffHeader,
    ) -> Result<Self, ParseError> {
        let offset = header.string_table_offset();
        reader.seek(offset)?;
        let size = reader.read_u32_le()?;

        log::debug!("string table at {} holds {} bytes", offset, size);

        Ok(Self::new(offset, size))
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn resolve<R: Read + Seek>(
        &self,
        reader: &mut ByteReader<R>,
        name_offset: u32,
    ) -> Result<String, ParseError> {
        reader.seek(self.offset + u64::from(name_offset))?;
        let bytes = reader.read_until_nul(None)?;
        Ok(decode_name(&bytes))
    }
}

/// Names are ASCII; every byte outside it becomes one U+FFFD.
pub fn decode_name(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| if b.is_ascii() { b as char } else { char::REPLACEMENT_CHARACTER })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn table_image() -> (Vec<u8>, CoffHeader) {
        let header = CoffHeader::new(16, 0);
        let mut data = vec![0u8; 16];
        let strings = b"longSymbolName\0another_long_one\0";
        data.extend_from_slice(&(4 + strings.len() as u32).to_le_bytes());
        data.extend_from_slice(strings);
        (data, header)
    }

    #[test]
    fn test_locate_reads_size() {
        let (data, header) = table_image();
        let mut reader = ByteReader::new(Cursor::new(data));
        let table = StringTable::locate(&mut reader, &header).unwrap();
        assert_eq!(table.offset(), 16);
        assert_eq!(table.size(), 36);
    }

    #[test]
    fn test_resolve_by_offset() {
        let (data, header) = table_image();
        let mut reader = ByteReader::new(Cursor::new(data));
        let table = StringTable::locate(&mut reader, &header).unwrap();

        assert_eq!(table.resolve(&mut reader, 4).unwrap(), "longSymbolName");
        assert_eq!(table.resolve(&mut reader, 19).unwrap(), "another_long_one");
        assert_eq!(table.resolve(&mut reader, 8).unwrap(), "SymbolName");
    }

    #[test]
    fn test_offset_zero_reads_size_field_bytes() {
        let header = CoffHeader::new(0, 0);
        let mut data = 0x41u32.to_le_bytes().to_vec();
        data.extend_from_slice(b"x\0");
        let mut reader = ByteReader::new(Cursor::new(data));
        let table = StringTable::locate(&mut reader, &header).unwrap();

        // 0x41 0x00 .. : "A" then the terminator
        assert_eq!(table.resolve(&mut reader, 0).unwrap(), "A");
    }

    #[test]
    fn test_missing_size_field() {
        let header = CoffHeader::new(16, 0);
        let mut reader = ByteReader::new(Cursor::new(vec![0u8; 18]));
        assert!(StringTable::locate(&mut reader, &header)
            .unwrap_err()
            .is_unexpected_eof());
    }

    #[test]
    fn test_unterminated_name() {
        let header = CoffHeader::new(0, 0);
        let mut data = 10u32.to_le_bytes().to_vec();
        data.extend_from_slice(b"cut");
        let mut reader = ByteReader::new(Cursor::new(data));
        let table = StringTable::locate(&mut reader, &header).unwrap();
        assert!(table.resolve(&mut reader, 4).unwrap_err().is_unexpected_eof());
    }

    #[test]
    fn test_decode_name_non_ascii() {
        assert_eq!(decode_name(b"ok"), "ok");
        assert_eq!(decode_name(&[b'a', 0xff]), "a\u{fffd}");
    }

    #[test]
    fn test_decode_name_multibyte_is_not_combined() {
        // a valid UTF-8 "é" is still two non-ASCII bytes
        assert_eq!(decode_name(&[0xC3, 0xA9]), "\u{fffd}\u{fffd}");
    }

    #[test]
    fn test_resolve_non_ascii_long_name() {
        let header = CoffHeader::new(0, 0);
        let mut data = 9u32.to_le_bytes().to_vec();
        data.extend_from_slice(&[b'f', 0xC3, 0xA9, b'e', 0]);
        let mut reader = ByteReader::new(Cursor::new(data));
        let table = StringTable::locate(&mut reader, &header).unwrap();
        assert_eq!(table.resolve(&mut reader, 4).unwrap(), "f\u{fffd}\u{fffd}e");
    }
}
