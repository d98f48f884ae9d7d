//! Drives a set of metrics over a stream of predictions.

use serde::Serialize;

use crate::instance::Instance;
use crate::metrics::EvaluationMetric;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ClassKind {
    Nominal,
    Numeric,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistic {
    pub metric: &'static str,
    pub name: &'static str,

    /// `None` when the metric can't compute the statistic.
    pub value: Option<f64>,
}

pub struct Evaluation {
    class_kind: ClassKind,
    metrics: Vec<Box<dyn EvaluationMetric>>,
    n_instances: usize,
}

impl Evaluation {
    /// Creates an evaluation run, leaving out the metrics that don't apply to the class kind.
    pub fn new(class_kind: ClassKind, metrics: Vec<Box<dyn EvaluationMetric>>) -> Self {
        let metrics = metrics
            .into_iter()
            .filter(|metric| {
                let applies = match class_kind {
                    ClassKind::Nominal => metric.applies_to_nominal_class(),
                    ClassKind::Numeric => metric.applies_to_numeric_class(),
                };
                if !applies {
                    tracing::debug!(
                        metric = metric.metric_name(),
                        ?class_kind,
                        "the metric does not apply",
                    );
                }
                applies
            })
            .collect();
        Self {
            class_kind,
            metrics,
            n_instances: 0,
        }
    }

    #[must_use]
    pub const fn class_kind(&self) -> ClassKind {
        self.class_kind
    }

    #[must_use]
    pub const fn n_instances(&self) -> usize {
        self.n_instances
    }

    pub fn evaluate_numeric(&mut self, predicted: Option<f64>, instance: &dyn Instance) {
        debug_assert_eq!(self.class_kind, ClassKind::Numeric);
        for metric in &mut self.metrics {
            metric.record_predictor_prediction(predicted, instance);
        }
        self.n_instances += 1;
    }

    pub fn evaluate_nominal(&mut self, distribution: &[f64], instance: &dyn Instance) {
        debug_assert_eq!(self.class_kind, ClassKind::Nominal);
        for metric in &mut self.metrics {
            metric.record_classifier_prediction(distribution, instance);
        }
        self.n_instances += 1;
    }

    #[must_use]
    pub fn statistics(&self) -> Vec<Statistic> {
        self.metrics
            .iter()
            .flat_map(|metric| {
                metric.statistic_names().iter().map(move |&name| Statistic {
                    metric: metric.metric_name(),
                    name,
                    value: metric.statistic_value(name),
                })
            })
            .collect()
    }

    /// Plain-text report assembled from the metric summary lines.
    #[must_use]
    pub fn summary(&self) -> String {
        self.metrics
            .iter()
            .map(|metric| metric.summary_line())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::E;

    use super::*;
    use crate::instance::LabeledInstance;
    use crate::metrics;

    #[test]
    fn numeric_evaluation_ok() {
        let mut evaluation = Evaluation::new(ClassKind::Numeric, metrics::standard());
        evaluation.evaluate_numeric(Some(E * E), &LabeledInstance::from(E));
        evaluation.evaluate_numeric(None, &LabeledInstance::from(E));

        assert_eq!(evaluation.n_instances(), 2);
        let statistics = evaluation.statistics();
        assert_eq!(statistics.len(), 1);
        assert_eq!(statistics[0].metric, "Log RMSE");
        assert_eq!(statistics[0].name, "log rmse");
        assert!((statistics[0].value.unwrap() - 1.0).abs() < 1e-12);
        assert_eq!(
            evaluation.summary(),
            "Log root mean square error               1.0000\n",
        );
    }

    #[test]
    fn nominal_evaluation_skips_numeric_metrics() {
        let mut evaluation = Evaluation::new(ClassKind::Nominal, metrics::standard());
        evaluation.evaluate_nominal(&[0.1, 0.9], &LabeledInstance::from(1.0));

        assert_eq!(evaluation.n_instances(), 1);
        assert!(evaluation.statistics().is_empty());
        assert_eq!(evaluation.summary(), "");
    }

    #[test]
    fn serialize_statistic_ok() -> serde_json::Result<()> {
        let evaluation = Evaluation::new(ClassKind::Numeric, metrics::standard());
        let json = serde_json::to_string(&evaluation.statistics())?;
        assert_eq!(json, r#"[{"metric":"Log RMSE","name":"log rmse","value":null}]"#);
        Ok(())
    }
}
