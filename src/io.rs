//! Input handling for GenBank files
//!
//! The parser works on a fully materialized line buffer, so this module's job
//! is getting file bytes into memory efficiently and transparently:
//!
//! - [`DataSource`] opens a local file, memory-mapping it once it crosses
//!   [`MMAP_THRESHOLD`] so large records avoid double-buffered reads.
//! - [`CompressedReader`] sniffs the gzip magic bytes and decompresses on the
//!   fly, so `.gb` and `.gb.gz` inputs parse identically.
//! - [`read_lines`] turns any buffered reader into the line buffer the parser
//!   owns, with line terminators stripped.

use crate::error::Result;
use flate2::read::GzDecoder;
use memmap2::Mmap;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

/// Memory-mapped file threshold (50 MB)
///
/// Below this, standard buffered I/O wins; above it, mapping the file avoids
/// a copy through the read buffer.
pub const MMAP_THRESHOLD: u64 = 50 * 1024 * 1024;

/// Data source abstraction for parser input
#[derive(Debug, Clone)]
pub enum DataSource {
    /// Local file path
    Local(PathBuf),
}

impl DataSource {
    /// Create a local file data source
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        DataSource::Local(path.as_ref().to_path_buf())
    }

    /// Open the data source and return a buffered reader
    pub fn open(&self) -> Result<Box<dyn BufRead + Send>> {
        match self {
            DataSource::Local(path) => open_local_file(path),
        }
    }
}

/// Open a local file, choosing the I/O method by file size
fn open_local_file(path: &Path) -> Result<Box<dyn BufRead + Send>> {
    let metadata = std::fs::metadata(path)?;
    let file = File::open(path)?;

    if metadata.len() >= MMAP_THRESHOLD {
        // Safety: the map is read-only and dropped with the reader.
        let mmap = unsafe { Mmap::map(&file)? };
        Ok(Box::new(io::Cursor::new(mmap)))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Reader with transparent gzip decompression
///
/// Sniffs the two gzip magic bytes instead of trusting the file extension, so
/// a misnamed `.gb` that is really gzipped still parses.
pub struct CompressedReader {
    inner: Box<dyn BufRead + Send>,
}

impl CompressedReader {
    /// Wrap a data source, decompressing if the content is gzipped
    pub fn new(source: DataSource) -> Result<Self> {
        let mut reader = source.open()?;

        let is_gzipped = {
            let peeked = reader.fill_buf()?;
            peeked.len() >= 2 && peeked[0] == 31 && peeked[1] == 139
        };

        if is_gzipped {
            Ok(Self {
                inner: Box::new(BufReader::new(GzDecoder::new(reader))),
            })
        } else {
            Ok(Self { inner: reader })
        }
    }
}

impl Read for CompressedReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl BufRead for CompressedReader {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        self.inner.fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        self.inner.consume(amt)
    }
}

/// Read an entire input into a line buffer, terminators stripped
///
/// Trailing `\n` and `\r\n` are removed; nothing else is trimmed, because the
/// parser's classification rules depend on leading-column whitespace.
pub fn read_lines<R: BufRead>(mut reader: R) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        if reader.read_line(&mut buffer)? == 0 {
            break;
        }
        let mut line = buffer.as_str();
        if let Some(stripped) = line.strip_suffix('\n') {
            line = stripped;
        }
        if let Some(stripped) = line.strip_suffix('\r') {
            line = stripped;
        }
        lines.push(line.to_string());
    }

    Ok(lines)
}
