use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::{validate_weight, WeightError};
use super::unit::WeightUnit;

/// A single recorded weight for one calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WeightEntryRecord")]
pub struct WeightEntry {
    date: NaiveDate,
    weight: f64,
    unit: WeightUnit,
}

impl WeightEntry {
    pub fn new(date: NaiveDate, weight: f64, unit: WeightUnit) -> Result<Self, WeightError> {
        Ok(Self {
            date,
            weight: validate_weight(weight)?,
            unit,
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn unit(&self) -> WeightUnit {
        self.unit
    }

    /// The recorded weight expressed in `unit`.
    pub fn weight_in(&self, unit: WeightUnit) -> f64 {
        self.unit.convert(self.weight, unit)
    }

    /// Formatted weight in the unit it was recorded in.
    pub fn display_weight(&self) -> String {
        self.unit.format(self.weight)
    }
}

/// Unvalidated wire shape; deserialization funnels through [`WeightEntry::new`].
#[derive(Deserialize)]
struct WeightEntryRecord {
    date: NaiveDate,
    weight: f64,
    #[serde(default)]
    unit: WeightUnit,
}

impl TryFrom<WeightEntryRecord> for WeightEntry {
    type Error = WeightError;

    fn try_from(record: WeightEntryRecord) -> Result<Self, Self::Error> {
        WeightEntry::new(record.date, record.weight, record.unit)
    }
}
