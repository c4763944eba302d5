//! LineDiet host: command line, configuration, logging bootstrap, dependency
//! wiring and a console rendering of today's status.

pub mod bootstrap;
pub mod cli;
pub mod view;

pub use bootstrap::run_app;
