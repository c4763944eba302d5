use std::sync::Arc;

use chrono::NaiveDate;
use ld_core::ports::UserDataWriterPort;
use ld_core::{WeightEntry, WeightUnit};
use tracing::{info, info_span, Instrument};

use super::UserDataError;

/// Use case for logging the weight for a date.
///
/// Any entry already stored for the same date is replaced.
pub struct RecordWeightEntry {
    writer: Arc<dyn UserDataWriterPort>,
}

impl RecordWeightEntry {
    pub fn new(writer: Arc<dyn UserDataWriterPort>) -> Self {
        Self { writer }
    }

    pub async fn execute(
        &self,
        date: NaiveDate,
        weight: f64,
        unit: WeightUnit,
    ) -> Result<WeightEntry, UserDataError> {
        let span = info_span!("usecase.record_weight_entry.execute", %date, weight, %unit);

        async {
            let entry = WeightEntry::new(date, weight, unit)?;

            self.writer
                .save_weight_entry(&entry)
                .await
                .map_err(UserDataError::Storage)?;

            info!(display = %entry.display_weight(), "Weight entry recorded");
            Ok(entry)
        }
        .instrument(span)
        .await
    }
}
