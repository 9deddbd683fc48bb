// Thu Oct 15 2026 - Alex

pub mod coff;
pub mod config;
pub mod error;
pub mod output;
pub mod reader;

pub use coff::{parse, parse_file, CoffSymbol, SymbolTableReport};
pub use config::{Config, OutputFormat};
pub use error::ParseError;
pub use reader::{ByteReader, SourceMode};
