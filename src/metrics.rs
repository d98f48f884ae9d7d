//! Evaluation metrics a driver can iterate over uniformly.

use crate::instance::Instance;

pub mod log_rmse;

pub use self::log_rmse::LogRmse;

pub trait EvaluationMetric {
    /// Updates the metric with a predicted class distribution of a nominal-class instance.
    fn record_classifier_prediction(&mut self, distribution: &[f64], instance: &dyn Instance);

    /// Updates the metric with a predicted value of a numeric-class instance.
    /// `None` stands for a missing prediction.
    fn record_predictor_prediction(&mut self, predicted: Option<f64>, instance: &dyn Instance);

    fn applies_to_nominal_class(&self) -> bool;

    fn applies_to_numeric_class(&self) -> bool;

    /// Short display label.
    fn metric_name(&self) -> &'static str;

    fn metric_description(&self) -> &'static str;

    /// Names of the statistics the metric publishes.
    fn statistic_names(&self) -> &'static [&'static str];

    /// Computes the named statistic, `None` if the metric does not publish it.
    fn statistic_value(&self, name: &str) -> Option<f64>;

    /// Formatted line for a plain-text evaluation report.
    fn summary_line(&self) -> String;
}

/// Metrics shipped with the crate.
#[must_use]
pub fn standard() -> Vec<Box<dyn EvaluationMetric>> {
    vec![Box::new(LogRmse::default())]
}
