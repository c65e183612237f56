pub mod output;

pub use output::{OutputFormatter, OutputMode, COMPLETION_MESSAGE};
