//! Labelled data points fed to the metrics.

use serde::Deserialize;

/// Labelled data point whose class value may be missing.
pub trait Instance {
    fn class_value(&self) -> Option<f64>;

    #[inline]
    fn class_is_missing(&self) -> bool {
        self.class_value().is_none()
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Deserialize)]
pub struct LabeledInstance {
    pub actual: Option<f64>,
}

impl LabeledInstance {
    /// Instance with a missing class value.
    pub const fn missing() -> Self {
        Self { actual: None }
    }
}

impl From<f64> for LabeledInstance {
    fn from(actual: f64) -> Self {
        Self {
            actual: Some(actual),
        }
    }
}

impl Instance for LabeledInstance {
    #[inline]
    fn class_value(&self) -> Option<f64> {
        self.actual
    }
}

/// Single input line: a prediction and the labelled value it is checked against.
///
/// `null` or an absent field stands for a missing value.
#[derive(Debug, Default, Copy, Clone, PartialEq, Deserialize)]
pub struct Record {
    pub predicted: Option<f64>,
    pub actual: Option<f64>,
}

impl Record {
    pub const fn instance(&self) -> LabeledInstance {
        LabeledInstance {
            actual: self.actual,
        }
    }
}
