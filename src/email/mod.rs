pub mod common;
pub mod processor_base;
pub mod sources;

// Re-export commonly used items
pub use common::{RawEmail, ProcessingResult};
pub use processor_base::{EmailSource, TriageProcessor};
pub use sources::{GmailSource, JsonFileSource};
