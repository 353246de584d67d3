//! Univariate linear regression over delimited data files
//!
//! This crate fits a straight line y = intercept + slope * x to paired
//! observations read from a comma-delimited file, organized in two stages:
//!
//! - [`dataset`]: file loading and the paired (x, y) observation sequence
//! - [`regression`]: the fitted model and its prediction queries
//!
//! ## Example
//!
//! ```rust
//! use linfit::prelude::*;
//!
//! let data = Dataset::new(vec![
//!     Observation::new(1.0, 5.0),
//!     Observation::new(2.0, 7.0),
//!     Observation::new(3.0, 9.0),
//! ]).unwrap();
//!
//! let mut model = LinearRegression::new();
//! model.fit(&data).unwrap();
//! let y = model.predict(2.5).unwrap();
//! ```

mod error;
pub mod dataset;
pub mod regression;

pub use dataset::{Dataset, Observation};
pub use error::{RegressionError, Result};
pub use regression::LinearRegression;

/// Common trait for regression models
pub trait Model {
    /// Fit the model to a dataset of paired observations
    fn fit(&mut self, data: &Dataset) -> Result<()>;

    /// Predict the dependent value for a new independent value
    fn predict(&self, x: f64) -> Result<f64>;

    /// Check if the model has been fitted
    fn is_fitted(&self) -> bool;
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::Model;
    pub use crate::dataset::{Dataset, Observation};
    pub use crate::regression::LinearRegression;
    pub use crate::{RegressionError, Result};
}
