use crate::instance::Instance;
use crate::metrics::EvaluationMetric;

pub const STATISTIC_NAME: &str = "log rmse";

const SUMMARY_LABEL: &str = "Log root mean square error";

/// Root mean square error of the log of predicted versus actual values.
///
/// Only instances with both values present contribute. Non-positive values are not
/// guarded against: they turn the statistic into `NaN` or infinity for the rest of the run.
#[derive(Debug, Default, Copy, Clone)]
pub struct LogRmse {
    sum_squared_log_error: f64,

    /// Number of contributing instances.
    n_with_class: f64,
}

impl LogRmse {
    /// `NaN` until at least one instance has contributed.
    #[must_use]
    pub fn current_statistic(&self) -> f64 {
        (self.sum_squared_log_error / self.n_with_class).sqrt()
    }

    #[must_use]
    pub const fn n_with_class(&self) -> f64 {
        self.n_with_class
    }
}

impl EvaluationMetric for LogRmse {
    fn record_classifier_prediction(&mut self, _distribution: &[f64], _instance: &dyn Instance) {}

    fn record_predictor_prediction(&mut self, predicted: Option<f64>, instance: &dyn Instance) {
        let (Some(predicted), Some(actual)) = (predicted, instance.class_value()) else {
            tracing::trace!(?predicted, "skipped the instance with a missing value");
            return;
        };
        let diff = predicted.ln() - actual.ln();
        let was_finite = self.sum_squared_log_error.is_finite();
        self.sum_squared_log_error += diff * diff;
        self.n_with_class += 1.0;
        if was_finite && !self.sum_squared_log_error.is_finite() {
            tracing::warn!(
                predicted,
                actual,
                n_with_class = self.n_with_class,
                "non-positive value passed to the logarithm, the statistic is no longer finite",
            );
        }
    }

    fn applies_to_nominal_class(&self) -> bool {
        false
    }

    fn applies_to_numeric_class(&self) -> bool {
        true
    }

    fn metric_name(&self) -> &'static str {
        "Log RMSE"
    }

    fn metric_description(&self) -> &'static str {
        "Root Mean Square Error of the log of predicted versus actual"
    }

    fn statistic_names(&self) -> &'static [&'static str] {
        &[STATISTIC_NAME]
    }

    fn statistic_value(&self, name: &str) -> Option<f64> {
        (name == STATISTIC_NAME).then(|| self.current_statistic())
    }

    fn summary_line(&self) -> String {
        format!("{SUMMARY_LABEL:<35}{:>12.4}\n", self.current_statistic())
    }
}
