use std::io::{self, Read};
use std::mem;

use memchr::memchr;

/// Buffer growth step. The source is asked for bytes in chunks of this size.
pub const BUF_SIZE_INCREMENT: usize = 1024;

/// Incremental line reader over any byte source.
///
/// Grows an internal buffer in fixed-size steps until a newline arrives, then
/// moves the completed line out and keeps the unconsumed tail pending for the
/// next call. No byte is read from the source twice, and extraction moves the
/// buffer rather than copying it.
pub struct LineReader<R> {
    source: R,
    /// Bytes read from the source but not yet returned as part of a line.
    pending: Vec<u8>,
    /// The source reported end of input; `pending` holds everything left.
    exhausted: bool,
    /// Read error held back until the bytes accumulated before it have been
    /// delivered as a final line.
    deferred: Option<io::Error>,
}

impl<R: Read> LineReader<R> {
    pub fn new(source: R) -> Self {
        Self {
            source,
            pending: Vec::new(),
            exhausted: false,
            deferred: None,
        }
    }

    /// Return the next logical line without its trailing newline, or
    /// `Ok(None)` at end of input.
    ///
    /// A read error that interrupts a partially accumulated line still yields
    /// that line; the error surfaces on the call after it. An error with
    /// nothing accumulated is returned immediately.
    pub fn next_line(&mut self) -> io::Result<Option<Vec<u8>>> {
        if let Some(err) = self.deferred.take() {
            return Err(err);
        }

        // Offset up to which `pending` has been searched for a newline.
        // Only newly arrived bytes are examined on each growth iteration.
        let mut scanned = 0;

        loop {
            if let Some(i) = memchr(b'\n', &self.pending[scanned..]) {
                return Ok(Some(self.take_line(scanned + i)));
            }
            scanned = self.pending.len();

            if self.exhausted {
                break;
            }

            match self.fill() {
                Ok(0) => self.exhausted = true,
                Ok(_) => {}
                Err(e) => {
                    if self.pending.is_empty() {
                        return Err(e);
                    }
                    // Deliver what we have; report the error next call.
                    self.deferred = Some(e);
                    break;
                }
            }
        }

        if self.pending.is_empty() {
            return Ok(None);
        }

        // Input ended without a terminator. The remainder is the final line.
        Ok(Some(mem::take(&mut self.pending)))
    }

    /// Split the line ending at `newline_idx` out of the pending buffer,
    /// moving the buffer to the caller and retaining the tail.
    fn take_line(&mut self, newline_idx: usize) -> Vec<u8> {
        let tail = self.pending.split_off(newline_idx + 1);
        let mut line = mem::replace(&mut self.pending, tail);
        line.pop(); // the newline itself
        line
    }

    /// Grow the buffer by one increment and read into the new region.
    /// Returns how many bytes arrived; 0 means end of input.
    fn fill(&mut self) -> io::Result<usize> {
        let old_len = self.pending.len();
        self.pending.resize(old_len + BUF_SIZE_INCREMENT, 0);
        loop {
            match self.source.read(&mut self.pending[old_len..]) {
                Ok(n) => {
                    self.pending.truncate(old_len + n);
                    return Ok(n);
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => {
                    self.pending.truncate(old_len);
                    return Err(e);
                }
            }
        }
    }
}
