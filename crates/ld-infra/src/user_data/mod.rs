mod file_store;

pub use file_store::{FileUserDataStore, DEFAULT_USER_DATA_FILE};
