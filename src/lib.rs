// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod errors;
pub mod writer;

// Re-export commonly used types
pub use crate::errors::WriteError;
pub use crate::writer::{write, write_many, BatchOutcome, WriteReport, PREVIEW_CHARS};
