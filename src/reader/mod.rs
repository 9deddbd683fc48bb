// Thu Oct 15 2026 - Alex

pub mod byte_reader;
pub mod source;

pub use byte_reader::ByteReader;
pub use source::{FileSource, SourceMode};

pub fn read_u32_le_at(data: &[u8], offset: usize) -> Option<u32> {
    let bytes = data.get(offset..offset.checked_add(4)?)?;
    Some(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}
