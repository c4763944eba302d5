use serde::{Deserialize, Serialize};

/// Exact definition of the international avoirdupois pound.
pub const KILOGRAMS_PER_POUND: f64 = 0.453_592_37;

/// Unit a weight measurement was recorded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightUnit {
    #[default]
    Pounds,
    Kilograms,
}

impl WeightUnit {
    /// Short suffix shown after a formatted weight.
    pub fn suffix(self) -> &'static str {
        match self {
            WeightUnit::Pounds => "lbs",
            WeightUnit::Kilograms => "kg",
        }
    }

    /// Convert `value`, expressed in `self`, into `target` units.
    pub fn convert(self, value: f64, target: WeightUnit) -> f64 {
        match (self, target) {
            (WeightUnit::Pounds, WeightUnit::Kilograms) => value * KILOGRAMS_PER_POUND,
            (WeightUnit::Kilograms, WeightUnit::Pounds) => value / KILOGRAMS_PER_POUND,
            _ => value,
        }
    }

    /// Format `value` with one decimal place and the unit suffix, e.g. `"182.4 lbs"`.
    pub fn format(self, value: f64) -> String {
        format!("{:.1} {}", value, self.suffix())
    }
}

impl std::fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.suffix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_unit_conversion_is_identity() {
        assert_eq!(WeightUnit::Pounds.convert(180.0, WeightUnit::Pounds), 180.0);
        assert_eq!(WeightUnit::Kilograms.convert(80.0, WeightUnit::Kilograms), 80.0);
    }

    #[test]
    fn pounds_to_kilograms_uses_fixed_factor() {
        let kg = WeightUnit::Pounds.convert(100.0, WeightUnit::Kilograms);
        assert!((kg - 45.359237).abs() < 1e-9);

        let lbs = WeightUnit::Kilograms.convert(kg, WeightUnit::Pounds);
        assert!((lbs - 100.0).abs() < 1e-9);
    }

    #[test]
    fn format_uses_one_decimal_and_suffix() {
        assert_eq!(WeightUnit::Pounds.format(185.0), "185.0 lbs");
        assert_eq!(WeightUnit::Kilograms.format(82.46), "82.5 kg");
    }

    #[test]
    fn serializes_as_snake_case() {
        let json = serde_json::to_string(&WeightUnit::Kilograms).unwrap();
        assert_eq!(json, "\"kilograms\"");
    }
}
