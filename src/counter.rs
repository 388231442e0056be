// src/counter.rs
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

/// Counts `\n`-terminated lines in the file at `path`.
///
/// A trailing line without a final newline is not counted.
///
/// # Errors
/// Returns the I/O error if the file cannot be opened or read.
pub fn count_lines(path: &Path) -> io::Result<usize> {
    let file = File::open(path)?;
    count_reader(file)
}

/// Streaming variant of [`count_lines`] for any reader.
///
/// # Errors
/// Propagates read errors other than `Interrupted`.
pub fn count_reader<R: Read>(reader: R) -> io::Result<usize> {
    let mut reader = BufReader::new(reader);
    let mut lines = 0;
    loop {
        let buf = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if buf.is_empty() {
            break;
        }
        lines += bytecount::count(buf, b'\n');
        let len = buf.len();
        reader.consume(len);
    }
    Ok(lines)
}
