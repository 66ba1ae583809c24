//! Low-level helpers shared by the reader and the status classifier.

use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};

/// Decode UTF-8, silently dropping malformed byte sequences.
pub(crate) fn decode_lenient(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    text
}

/// Read at most `max_bytes` from the end of an open file.
///
/// The read is bounded by `max_bytes` even if the file grows meanwhile.
pub(crate) fn read_tail(file: &mut File, size: u64, max_bytes: u64) -> io::Result<Vec<u8>> {
    let start = size.saturating_sub(max_bytes);
    file.seek(SeekFrom::Start(start))?;

    let expected = usize::try_from(size - start).unwrap_or(0);
    let mut buf = Vec::with_capacity(expected);
    file.take(max_bytes).read_to_end(&mut buf)?;
    Ok(buf)
}
