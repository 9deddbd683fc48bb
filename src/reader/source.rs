// Thu Oct 15 2026 - Alex

use crate::error::ParseError;
use memmap2::Mmap;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufReader, Cursor, Read, Seek, SeekFrom};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceMode {
    #[default]
    Buffered,
    Mapped,
}

/// An opened input file. The handle (or mapping) is released on drop.
pub enum FileSource {
    Buffered(BufReader<File>),
    Mapped(Cursor<Mmap>),
}

impl FileSource {
    pub fn open<P: AsRef<Path>>(path: P, mode: SourceMode) -> Result<Self, ParseError> {
        let file = File::open(path.as_ref())?;

        match mode {
            SourceMode::Buffered => Ok(FileSource::Buffered(BufReader::new(file))),
            SourceMode::Mapped => {
                // empty files cannot be mapped on every platform
                if file.metadata()?.len() == 0 {
                    log::debug!("{} is empty, reading it unmapped", path.as_ref().display());
                    return Ok(FileSource::Buffered(BufReader::new(file)));
                }
                // The mapping is read-only and dropped together with this source.
                let mmap = unsafe { Mmap::map(&file) }?;
                Ok(FileSource::Mapped(Cursor::new(mmap)))
            }
        }
    }

    pub fn mode(&self) -> SourceMode {
        match self {
            FileSource::Buffered(_) => SourceMode::Buffered,
            FileSource::Mapped(_) => SourceMode::Mapped,
        }
    }
}

impl Read for FileSource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            FileSource::Buffered(r) => r.read(buf),
            FileSource::Mapped(r) => r.read(buf),
        }
    }
}

impl Seek for FileSource {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        match self {
            FileSource::Buffered(r) => r.seek(pos),
            FileSource::Mapped(r) => r.seek(pos),
        }
    }
}
