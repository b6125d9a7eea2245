use crate::reader::entry::LogEntry;
use crate::reader::error::{ParseError, ReaderError};
use crate::reader::parse::{ParseFailure, parse_line};
use std::fs::File;
use std::io::{BufRead, BufReader, Seek};
use std::path::Path;

/// Restartable, lazily parsed sequence of [`LogEntry`] values.
///
/// The reader never rewinds by itself: every pass over the data starts with
/// [`LogReader::reset`]. Blank lines are skipped but still counted, so line
/// numbers in parse errors match what an editor shows.
#[derive(Debug)]
pub struct LogReader<R = BufReader<File>> {
    source: R,
    line_no: usize,
    // raw bytes of the next non-blank line, read ahead by has_next()
    pending: Option<Vec<u8>>,
}

impl LogReader<BufReader<File>> {
    /// Open `path` for reading. The file stays open until the reader is dropped.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ReaderError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| ReaderError::source_unavailable(path, e))?;

        tracing::info!(path = %path.display(), "opened access log");

        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead + Seek> LogReader<R> {
    pub fn new(source: R) -> Self {
        Self {
            source,
            line_no: 0,
            pending: None,
        }
    }

    /// Reposition at the first line. Safe to call any number of times.
    pub fn reset(&mut self) -> Result<(), ReaderError> {
        self.source.rewind().map_err(ReaderError::read)?;
        self.line_no = 0;
        self.pending = None;
        Ok(())
    }

    /// Whether at least one more entry line remains.
    pub fn has_next(&mut self) -> Result<bool, ReaderError> {
        self.fill_pending()
    }

    /// Consume and parse the next entry line.
    pub fn next_entry(&mut self) -> Result<LogEntry, ReaderError> {
        self.fill_pending()?;
        let Some(raw) = self.pending.take() else {
            return Err(ReaderError::Exhausted);
        };

        let line = match String::from_utf8(raw) {
            Ok(line) => line,
            Err(e) => {
                let text = String::from_utf8_lossy(e.as_bytes());
                return Err(self.parse_error(text.trim_end(), ParseFailure::NotUtf8));
            }
        };

        let text = line.trim_end();
        parse_line(text).map_err(|failure| self.parse_error(text, failure))
    }

    fn parse_error(&self, text: &str, failure: ParseFailure) -> ReaderError {
        ReaderError::Parse(ParseError {
            line: self.line_no,
            text: text.to_string(),
            failure,
        })
    }

    fn fill_pending(&mut self) -> Result<bool, ReaderError> {
        if self.pending.is_some() {
            return Ok(true);
        }

        loop {
            // bytes, not read_line: a bad line must still advance line_no
            let mut buf = Vec::new();
            let read = self
                .source
                .read_until(b'\n', &mut buf)
                .map_err(ReaderError::read)?;
            if read == 0 {
                return Ok(false);
            }

            self.line_no += 1;
            if buf.trim_ascii().is_empty() {
                continue;
            }

            self.pending = Some(buf);
            return Ok(true);
        }
    }
}

impl<R: BufRead + Seek> Iterator for LogReader<R> {
    type Item = Result<LogEntry, ReaderError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.has_next() {
            Ok(true) => Some(self.next_entry()),
            Ok(false) => None,
            Err(e) => Some(Err(e)),
        }
    }
}
