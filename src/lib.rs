//! Log RMSE evaluation metric for numeric-class predictors.

pub mod evaluation;
pub mod helpers;
pub mod input;
pub mod instance;
pub mod metrics;
pub mod prelude;
