use crate::domain::{FinalTiming, TimingRecord};
use crate::ports::{LineSource, Result, TimingWriter};
use crate::utils::{is_final_timing_line, is_marker_line, parse_real_seconds};
use tracing::{debug, trace};

/// Scans benchmark output and keeps the timing that follows each query's result line
///
/// A block is a marker line (`v43,v44`), one result line, then the final
/// `Run Time (s):` line. Blocks whose third line is missing or carries no
/// `real <seconds>` value contribute nothing.
pub fn extract_final_timings<S: AsRef<str>>(lines: &[S]) -> TimingRecord {
    let mut record = TimingRecord::new();
    let mut i = 0;

    while i < lines.len() {
        if is_marker_line(lines[i].as_ref()) {
            let marker_line = i;

            // Skip the query result line
            i += 1;
            if i < lines.len() {
                i += 1;

                let seconds = lines
                    .get(i)
                    .map(|line| line.as_ref())
                    .filter(|line: &&str| is_final_timing_line(line))
                    .and_then(parse_real_seconds);

                match seconds {
                    Some(seconds) => record.push(FinalTiming {
                        marker_line,
                        seconds,
                    }),
                    None => debug!(marker_line, "no final timing for block"),
                }
            } else {
                debug!(marker_line, "marker at end of input");
            }
        }

        i += 1;
    }

    record
}

/// Application service for extracting final timings and handing them to an output
pub struct ExtractionServiceImpl {
    line_source: Box<dyn LineSource>,
    timing_writer: Box<dyn TimingWriter>,
}

impl ExtractionServiceImpl {
    /// Creates a new ExtractionServiceImpl with the given dependencies
    pub fn new(line_source: Box<dyn LineSource>, timing_writer: Box<dyn TimingWriter>) -> Self {
        Self {
            line_source,
            timing_writer,
        }
    }

    /// Reads all lines, extracts the final timings and writes them
    pub fn execute_extraction(&self) -> Result<TimingRecord> {
        let lines = self.line_source.read_lines()?;
        let record = extract_final_timings(&lines);
        debug!(lines = lines.len(), timings = record.len(), "scan complete");
        for timing in record.timings() {
            trace!(marker_line = timing.marker_line, seconds = timing.seconds, "final timing");
        }
        self.timing_writer.write(&record)?;
        Ok(record)
    }
}
