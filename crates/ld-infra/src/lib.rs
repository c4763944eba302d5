pub mod fs;
pub mod settings;
pub mod time;
pub mod user_data;

pub use settings::FileSettingsRepository;
pub use time::SystemClock;
pub use user_data::FileUserDataStore;
