use regex::Regex;
use std::sync::LazyLock;

/// Literal prefix of every timing line written by the benchmark shell
pub const RUN_TIME_PREFIX: &str = "Run Time (s):";

static MARKER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^v\d+").unwrap());
static REAL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"real (\d+\.\d+)").unwrap());

/// Checks for a query variable line such as `v43,v44`
/// Surrounding whitespace is ignored
pub fn is_marker_line(line: &str) -> bool {
    MARKER_RE.is_match(line.trim())
}

/// Checks the untrimmed line for the `Run Time (s):` prefix
pub fn is_final_timing_line(line: &str) -> bool {
    line.starts_with(RUN_TIME_PREFIX)
}

/// Extracts the `real` seconds from a timing line
/// Returns None unless the value has a fractional part (e.g. `real 12.345`)
pub fn parse_real_seconds(line: &str) -> Option<f64> {
    let caps = REAL_RE.captures(line.trim())?;
    caps.get(1)?.as_str().parse().ok()
}
