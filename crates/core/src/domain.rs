/// One extracted final timing and the marker line that opened its block
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinalTiming {
    pub marker_line: usize, // 0-based index into the input lines
    pub seconds: f64,
}

/// Final timings in the order their blocks appear in the input
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimingRecord {
    timings: Vec<FinalTiming>,
}

impl TimingRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, timing: FinalTiming) {
        self.timings.push(timing);
    }

    pub fn timings(&self) -> &[FinalTiming] {
        &self.timings
    }

    pub fn seconds(&self) -> impl Iterator<Item = f64> + '_ {
        self.timings.iter().map(|t| t.seconds)
    }

    pub fn len(&self) -> usize {
        self.timings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timings.is_empty()
    }
}
