use chrono::NaiveDate;

pub trait ClockPort: Send + Sync {
    /// The user's current calendar date.
    fn today(&self) -> NaiveDate;
}
