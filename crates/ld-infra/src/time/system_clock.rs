use chrono::{Local, NaiveDate};
use ld_core::ports::ClockPort;

/// Clock reading the local calendar date of the machine.
pub struct SystemClock;

impl ClockPort for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
