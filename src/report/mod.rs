pub mod output_writer;

pub use output_writer::{render_result, write_listing, write_result_file, LIST_FILE, RESULT_FILE};
