#![warn(clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc, // error cases are in the type, not prose
    clippy::must_use_candidate
)]

pub mod error;
pub mod format;
pub mod reader;

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use error::LongLinesError;
use reader::LineReader;

/// Lines longer than this many bytes are reported.
pub const MAX_LINE_LENGTH: usize = 80;

/// Outcome of one pass over a file.
///
/// `failure` is set when a read error cut the pass short; the tallies still
/// cover everything read before it.
#[derive(Debug)]
pub struct Report {
    /// Lines the reader returned.
    pub total_lines: u64,
    /// 1-based numbers of the lines longer than [`MAX_LINE_LENGTH`].
    pub over_length: Vec<u64>,
    pub failure: Option<io::Error>,
}

/// The single public entry point: open `path`, measure every line, tally the
/// ones over the limit. The file is closed on every path out of here.
pub fn check_file(path: &Path) -> Result<Report, LongLinesError> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(LongLinesError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
            return Err(LongLinesError::PermissionDenied {
                path: path.to_path_buf(),
            });
        }
        Err(e) => {
            return Err(LongLinesError::Open {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    Ok(check(LineReader::new(file)))
}

/// Drive a reader to exhaustion, measuring each line as it comes back.
fn check<R: Read>(mut reader: LineReader<R>) -> Report {
    let mut report = Report {
        total_lines: 0,
        over_length: Vec::new(),
        failure: None,
    };

    loop {
        match reader.next_line() {
            Ok(Some(line)) => {
                report.total_lines += 1;
                if line.len() > MAX_LINE_LENGTH {
                    report.over_length.push(report.total_lines);
                }
            }
            Ok(None) => break,
            Err(e) => {
                report.failure = Some(e);
                break;
            }
        }
    }

    report
}
