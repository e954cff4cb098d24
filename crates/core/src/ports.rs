use crate::domain::TimingRecord;
use crate::error::ExtractError;

pub type Result<T> = std::result::Result<T, ExtractError>;

/// Source of input lines, in file order
pub trait LineSource {
    fn read_lines(&self) -> Result<Vec<String>>;
}

/// Trait for emitting extracted timings
/// This is a port (interface) that defines how the core communicates with output adapters
pub trait TimingWriter {
    fn write(&self, record: &TimingRecord) -> Result<()>;
}
