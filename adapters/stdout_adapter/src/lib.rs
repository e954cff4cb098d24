use std::io::{self, Write};
use timings_core::domain::TimingRecord;
use timings_core::ports::{Result, TimingWriter};

/// Prints one timing per line to standard output
pub struct StdoutTimingWriter;

impl StdoutTimingWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutTimingWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders seconds as the shortest text that round-trips
///
/// Values in `[1e-4, 1e16)` keep a fractional part (`2.0`, `1.234`); anything
/// outside uses a signed two-digit exponent (`1e-05`, `1.5e+16`).
pub fn format_seconds(seconds: f64) -> String {
    if !seconds.is_finite() {
        return format!("{seconds:?}");
    }

    // `{:e}` yields the shortest round-trip digits, e.g. `1.234e0`, `1e-5`
    let sci = format!("{seconds:e}");
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return sci;
    };

    if seconds != 0.0 && !(-4..16).contains(&exp) {
        let sign = if exp < 0 { '-' } else { '+' };
        return format!("{mantissa}e{sign}{:02}", exp.abs());
    }

    let (negative, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, mantissa),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let int_len = exp + 1;

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    if int_len <= 0 {
        out.push_str("0.");
        out.push_str(&"0".repeat(int_len.unsigned_abs() as usize));
        out.push_str(&digits);
    } else {
        let int_len = int_len as usize;
        if digits.len() <= int_len {
            out.push_str(&digits);
            out.push_str(&"0".repeat(int_len - digits.len()));
            out.push_str(".0");
        } else {
            out.push_str(&digits[..int_len]);
            out.push('.');
            out.push_str(&digits[int_len..]);
        }
    }
    out
}

/// Writes every timing of the record as its own line, in record order
pub fn write_record<W: Write>(out: &mut W, record: &TimingRecord) -> io::Result<()> {
    for seconds in record.seconds() {
        writeln!(out, "{}", format_seconds(seconds))?;
    }
    out.flush()
}

impl TimingWriter for StdoutTimingWriter {
    fn write(&self, record: &TimingRecord) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        write_record(&mut out, record)?;
        Ok(())
    }
}
