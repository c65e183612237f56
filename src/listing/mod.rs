pub mod directory_lister;

pub use directory_lister::list_entries;
