//! Character range scanner.
//!
//! Reads a file in fixed-size chunks and yields every character above the
//! allowed code point ceiling together with its 1-indexed line and column.
//! Properties:
//! - The file is opened on the first call to `next`, not when the scanner is built
//! - A chunk is fully UTF-8 decoded before any of its characters are looked at,
//!   so an invalid byte suppresses every violation in the same chunk
//! - A multi-byte sequence cut by a chunk boundary is carried into the next chunk
//! - `\n`, `\r\n` and a lone `\r` all end a line
//! - Columns count characters, not bytes
//! - The first open/read/decode failure is yielded once, then the scanner is
//!   exhausted and the file handle is released

use std::fs::File;
use std::io::Read;
use std::iter::FusedIterator;
use std::path::{Path, PathBuf};
use std::str::Utf8Error;

use crate::error::{ScanError, ScanErrorKind, Violation};

/// Bytes read and decoded at a time.
pub const DECODE_CHUNK_SIZE: usize = 8192;

enum State {
    Unopened,
    Reading(File),
    Done,
}

/// Lazy sequence of disallowed characters in one file.
///
/// Built by [`find_disallowed_chars`].
pub struct DisallowedChars {
    path: PathBuf,
    max_code_point: u32,
    state: State,
    text: String,
    pos: usize,
    /// Trailing bytes of an incomplete UTF-8 sequence from the last chunk.
    carry: Vec<u8>,
    /// Bytes decoded so far, for error offsets.
    decoded: usize,
    line: usize,
    column: usize,
    line_ended: bool,
    after_cr: bool,
}

/// Scan `path` for characters whose code point is greater than `max_code_point`.
///
/// Each call starts a fresh scan of the file.
#[must_use]
pub fn find_disallowed_chars(path: &Path, max_code_point: u32) -> DisallowedChars {
    DisallowedChars {
        path: path.to_owned(),
        max_code_point,
        state: State::Unopened,
        text: String::new(),
        pos: 0,
        carry: Vec::new(),
        decoded: 0,
        line: 1,
        column: 0,
        line_ended: false,
        after_cr: false,
    }
}

impl DisallowedChars {
    /// Advance through the decoded text until the next violation.
    fn next_in_text(&mut self) -> Option<Violation> {
        while let Some(ch) = self.text[self.pos..].chars().next() {
            self.pos += ch.len_utf8();

            // `\r\n` is one line end, even when split across chunks.
            if self.line_ended && !(self.after_cr && ch == '\n') {
                self.line += 1;
                self.column = 0;
                self.line_ended = false;
            }
            self.after_cr = ch == '\r';
            self.column += 1;
            if matches!(ch, '\n' | '\r') {
                self.line_ended = true;
            }

            if u32::from(ch) > self.max_code_point {
                return Some(Violation {
                    ch,
                    line: self.line,
                    column: self.column,
                });
            }
        }
        None
    }

    /// Read and decode the next chunk.
    ///
    /// Returns `Ok(false)` at end of file.
    fn fill_text(&mut self) -> Result<bool, ScanError> {
        if matches!(self.state, State::Unopened) {
            match File::open(&self.path) {
                Ok(file) => self.state = State::Reading(file),
                Err(e) => {
                    self.state = State::Done;
                    return Err(ScanError::from_io(
                        self.path.clone(),
                        ScanErrorKind::Open,
                        &e,
                    ));
                }
            }
        }

        let State::Reading(file) = &mut self.state else {
            return Ok(false);
        };

        let mut bytes = std::mem::take(&mut self.carry);
        let read = file
            .by_ref()
            .take(DECODE_CHUNK_SIZE as u64)
            .read_to_end(&mut bytes);
        match read {
            Ok(0) if bytes.is_empty() => {
                self.state = State::Done;
                Ok(false)
            }
            Ok(n) => self.decode_chunk(bytes, n == 0),
            Err(e) => {
                self.state = State::Done;
                Err(ScanError::from_io(self.path.clone(), ScanErrorKind::Read, &e))
            }
        }
    }

    fn decode_chunk(&mut self, mut bytes: Vec<u8>, at_eof: bool) -> Result<bool, ScanError> {
        if !at_eof
            && let Err(e) = std::str::from_utf8(&bytes)
            && e.error_len().is_none()
        {
            self.carry = bytes.split_off(e.valid_up_to());
        }

        match String::from_utf8(bytes) {
            Ok(text) => {
                self.decoded += text.len();
                self.text = text;
                self.pos = 0;
                Ok(true)
            }
            Err(e) => {
                self.state = State::Done;
                self.carry.clear();
                Err(ScanError {
                    path: self.path.clone(),
                    kind: ScanErrorKind::InvalidEncoding,
                    message: decode_error_message(e.utf8_error(), self.decoded),
                })
            }
        }
    }
}

fn decode_error_message(err: Utf8Error, chunk_offset: usize) -> String {
    let offset = chunk_offset + err.valid_up_to();
    if err.error_len().is_some() {
        format!("invalid UTF-8 at byte offset {offset}")
    } else {
        format!("incomplete UTF-8 sequence at byte offset {offset}")
    }
}

impl Iterator for DisallowedChars {
    type Item = Result<Violation, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(violation) = self.next_in_text() {
                return Some(Ok(violation));
            }
            match self.fill_text() {
                Ok(true) => {}
                Ok(false) => return None,
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

impl FusedIterator for DisallowedChars {}
