//! Command Stream Runner
//!
//! Reads a count-prefixed command stream and writes replies.
//!
//! # Framing
//! ```text
//! 3          <- number of command lines that follow
//! BOUND 2
//! SET a 1
//! GET a
//! ```

use std::io::{BufRead, Write};

use tracing::{debug, warn};

use crate::command::Session;
use crate::error::{CacheError, Result};

// == Run Summary ==
/// Counts of what happened during one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Count announced on the first line
    pub expected: usize,
    /// Commands executed successfully
    pub executed: usize,
    /// Lines rejected as malformed or issued before BOUND
    pub rejected: usize,
}

impl RunSummary {
    /// Returns true if the stream held as many lines as announced.
    pub fn is_complete(&self) -> bool {
        self.executed + self.rejected == self.expected
    }
}

/// Runs a stream against a fresh session.
pub fn run_stream<R: BufRead, W: Write>(input: R, output: W) -> Result<RunSummary> {
    let mut session = Session::new();
    run_session(&mut session, input, output)
}

/// Runs a stream against an existing session.
///
/// Rejected lines, including lines that are not valid UTF-8, are logged and
/// skipped. A missing or malformed count line and read/write failures end the
/// run with an error.
pub fn run_session<R: BufRead, W: Write>(
    session: &mut Session,
    mut input: R,
    mut output: W,
) -> Result<RunSummary> {
    let mut buf = Vec::new();

    if input.read_until(b'\n', &mut buf)? == 0 {
        return Err(CacheError::InvalidRequest(
            "missing command count".to_string(),
        ));
    }
    let header = String::from_utf8_lossy(&buf);
    let expected = header.trim().parse::<usize>().map_err(|_| {
        CacheError::InvalidRequest(format!("invalid command count: {}", header.trim()))
    })?;

    let mut summary = RunSummary {
        expected,
        ..RunSummary::default()
    };

    while summary.executed + summary.rejected < expected {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line,
            Err(err) => {
                warn!(error = %err, "rejected command line that is not UTF-8");
                summary.rejected += 1;
                continue;
            }
        };

        match session.execute_line(line) {
            Ok(reply) => {
                write!(output, "{}", reply)?;
                summary.executed += 1;
            }
            Err(err) => {
                warn!(line = %line.trim(), error = %err, "rejected command");
                summary.rejected += 1;
            }
        }
    }

    if !summary.is_complete() {
        warn!(
            expected,
            received = summary.executed + summary.rejected,
            "command stream ended early"
        );
    }

    output.flush()?;
    debug!(?summary, "command stream finished");
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str) -> (String, RunSummary) {
        let mut output = Vec::new();
        let summary = run_stream(input.as_bytes(), &mut output).unwrap();
        (String::from_utf8(output).unwrap(), summary)
    }

    #[test]
    fn test_run_simple_stream() {
        let (output, summary) = run("4\nBOUND 1\nSET a 1\nGET a\nGET b\n");

        assert_eq!(output, "1\nNULL\n");
        assert_eq!(summary.executed, 4);
        assert!(summary.is_complete());
    }

    #[test]
    fn test_lines_past_count_are_ignored() {
        let (output, summary) = run("2\nBOUND 1\nDUMP\nSET a 1\nGET a\n");

        assert_eq!(output, "");
        assert_eq!(summary.executed, 2);
    }

    #[test]
    fn test_short_stream_stops_early() {
        let (output, summary) = run("5\nBOUND 2\nSET a 1\nPEEK a");

        assert_eq!(output, "1\n");
        assert_eq!(summary.executed, 3);
        assert!(!summary.is_complete());
    }

    #[test]
    fn test_rejected_lines_are_skipped() {
        let (output, summary) = run("5\nGET a\nBOUND 2\nFROB x\nSET a 1\nGET a\n");

        assert_eq!(output, "1\n");
        assert_eq!(summary.executed, 3);
        assert_eq!(summary.rejected, 2);
    }

    #[test]
    fn test_non_utf8_line_is_skipped() {
        let mut output = Vec::new();
        let summary = run_stream(
            &b"4\nBOUND 2\nSET k \xff\xfe\nSET a 1\nGET a\n"[..],
            &mut output,
        )
        .unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), "1\n");
        assert_eq!(summary.executed, 3);
        assert_eq!(summary.rejected, 1);
        assert!(summary.is_complete());
    }

    #[test]
    fn test_crlf_lines() {
        let (output, _) = run("3\r\nBOUND 1\r\nSET a 1\r\nPEEK a\r\n");
        assert_eq!(output, "1\n");
    }

    #[test]
    fn test_missing_count_is_an_error() {
        let err = run_stream("".as_bytes(), Vec::new()).unwrap_err();
        assert!(matches!(err, CacheError::InvalidRequest(_)));
    }

    #[test]
    fn test_bad_count_is_an_error() {
        let err = run_stream("lots\nDUMP\n".as_bytes(), Vec::new()).unwrap_err();
        assert!(matches!(err, CacheError::InvalidRequest(msg) if msg.contains("lots")));
    }

    #[test]
    fn test_zero_count() {
        let (output, summary) = run("0\nBOUND 1\n");
        assert_eq!(output, "");
        assert_eq!(summary, RunSummary::default());
    }
}
