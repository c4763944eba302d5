//! Port interfaces for the application layer
//!
//! Ports define the contract between the use cases and the infrastructure
//! implementations. The daily status engine itself depends on none of them;
//! use cases fetch through ports and then hand plain values to the engine.

mod clock;
pub mod daily_info_view;
pub mod data_provider;
pub mod settings;
pub mod user_data_writer;

pub use clock::ClockPort;
pub use daily_info_view::DailyInfoViewPort;
pub use data_provider::{DataProviderPort, UserDataEvent};
pub use settings::SettingsPort;
pub use user_data_writer::UserDataWriterPort;
