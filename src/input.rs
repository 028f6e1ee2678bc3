//! Line reader for the interactive prompt.
//!
//! Lines have no length limit. The buffer starts small and grows by a fixed
//! chunk each time it fills up before a newline shows up; every growth is a
//! fallible reservation so running out of memory is reported instead of
//! aborting the process.

use crate::error::{ShellError, ShellResult};
use std::io::{BufRead, ErrorKind};

pub const INITIAL_CAPACITY: usize = 32;
pub const CHUNK_SIZE: usize = 32;

pub struct LineReader<R> {
    inner: R,
    initial_capacity: usize,
    chunk_size: usize,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self::with_chunking(inner, INITIAL_CAPACITY, CHUNK_SIZE)
    }

    pub fn with_chunking(inner: R, initial_capacity: usize, chunk_size: usize) -> Self {
        Self {
            inner,
            initial_capacity,
            chunk_size: chunk_size.max(1),
        }
    }

    /// Read the next line, without its newline.
    ///
    /// Returns `Ok(None)` once the stream is exhausted and nothing was read.
    /// A final line that lacks a newline is still returned.
    pub fn read_line(&mut self) -> ShellResult<Option<String>> {
        let mut buf: Vec<u8> = Vec::new();
        buf.try_reserve_exact(self.initial_capacity)?;

        // bytes already scanned; only the region past this is ever looked at
        let mut read_len = 0;
        let mut saw_input = false;

        loop {
            if read_len == buf.capacity() {
                buf.try_reserve_exact(self.chunk_size)?;
                log::trace!("line buffer grown to {} bytes", buf.capacity());
            }

            let available = match self.inner.fill_buf() {
                Ok(bytes) => bytes,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(ShellError::Io(e)),
            };
            if available.is_empty() {
                if !saw_input {
                    return Ok(None);
                }
                break;
            }
            saw_input = true;

            let room = buf.capacity() - read_len;
            let window = &available[..available.len().min(room)];
            match window.iter().position(|&b| b == b'\n') {
                Some(pos) => {
                    buf.extend_from_slice(&window[..pos]);
                    self.inner.consume(pos + 1);
                    break;
                }
                None => {
                    let taken = window.len();
                    buf.extend_from_slice(window);
                    self.inner.consume(taken);
                    read_len += taken;
                }
            }
        }

        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
        buf.shrink_to_fit();

        let line = match String::from_utf8(buf) {
            Ok(line) => line,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        };
        Ok(Some(line))
    }
}
