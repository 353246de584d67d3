//! Univariate linear regression
//!
//! Fits y = intercept + slope * x with the closed-form ratio estimator
//!
//! ```text
//! slope     = sum(x*y) / sum(x^2)
//! intercept = mean(y) - slope * mean(x)
//! R^2       = (sum(x*y) / sqrt(sum(x^2) * sum(y^2)))^2
//! ```
//!
//! This is the uncentered formulation, kept for output parity with the
//! original tool rather than the textbook centered-covariance estimator.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::error::{RegressionError, Result};
use crate::Model;

/// Univariate linear regression model
///
/// Two states: unfitted (every query fails with `NotFitted`) and fitted
/// (queries are valid and read-only). Calling [`Model::fit`] again fully
/// resets the model onto the new dataset.
///
/// # Example
///
/// ```rust
/// use linfit::prelude::*;
///
/// let data = Dataset::new(vec![
///     Observation::new(1.0, 2.0),
///     Observation::new(2.0, 4.0),
///     Observation::new(3.0, 6.0),
/// ]).unwrap();
///
/// let mut model = LinearRegression::new();
/// model.fit(&data).unwrap();
/// assert!((model.predict(2.0).unwrap() - 4.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearRegression {
    /// Slope of the fitted line
    slope: f64,
    /// Y-intercept of the fitted line
    intercept: f64,
    /// Coefficient of determination
    r_squared: f64,
    /// Smallest independent value seen during fitting
    x_min: f64,
    /// Largest independent value seen during fitting
    x_max: f64,
    /// Number of observations used in fitting
    n_observations: usize,
    /// Whether model has been fitted
    fitted: bool,
}

impl Default for LinearRegression {
    fn default() -> Self {
        Self::new()
    }
}

impl LinearRegression {
    /// Create a new, unfitted model
    pub fn new() -> Self {
        Self {
            slope: 0.0,
            intercept: 0.0,
            r_squared: 0.0,
            x_min: 0.0,
            x_max: 0.0,
            n_observations: 0,
            fitted: false,
        }
    }

    /// Get the slope of the fitted line
    pub fn slope(&self) -> Result<f64> {
        self.ensure_fitted()?;
        Ok(self.slope)
    }

    /// Get the y-intercept of the fitted line
    pub fn intercept(&self) -> Result<f64> {
        self.ensure_fitted()?;
        Ok(self.intercept)
    }

    /// Get the coefficient of determination
    pub fn r_squared(&self) -> Result<f64> {
        self.ensure_fitted()?;
        Ok(self.r_squared)
    }

    /// Number of observations the model was fitted on
    pub fn n_observations(&self) -> usize {
        self.n_observations
    }

    /// Minimum and maximum independent values used in fitting
    pub fn range(&self) -> Result<(f64, f64)> {
        self.ensure_fitted()?;
        Ok((self.x_min, self.x_max))
    }

    /// Whether `x` falls outside the fitted range
    pub fn is_out_of_range(&self, x: f64) -> Result<bool> {
        let (min, max) = self.range()?;
        Ok(x < min || x > max)
    }

    /// Draw x uniformly from the fitted range and predict its y
    ///
    /// The random source is injected so callers can seed it for
    /// reproducible sampling.
    pub fn predict_random<R: Rng>(&self, rng: &mut R) -> Result<(f64, f64)> {
        let (min, max) = self.range()?;
        let x = rng.gen::<f64>() * (max - min) + min;
        Ok((x, self.intercept + self.slope * x))
    }

    /// Human-readable `"min - max"` rendering of the fitted range
    pub fn format_range(&self) -> Result<String> {
        let (min, max) = self.range()?;
        Ok(format!("{} - {}", min, max))
    }

    fn ensure_fitted(&self) -> Result<()> {
        if !self.fitted {
            return Err(RegressionError::NotFitted);
        }
        Ok(())
    }
}

impl Model for LinearRegression {
    fn fit(&mut self, data: &Dataset) -> Result<()> {
        if data.len() < 2 {
            return Err(RegressionError::InsufficientData {
                required: 2,
                actual: data.len(),
            });
        }

        let first_x = data.observations()[0].x;
        if data.observations().iter().all(|o| o.x == first_x) {
            return Err(RegressionError::DegenerateData(
                "all independent values are identical".to_string(),
            ));
        }

        let n = data.len() as f64;
        let mut sum_x = 0.0;
        let mut sum_y = 0.0;
        let mut sum_xy = 0.0;
        let mut sum_x_squared = 0.0;
        let mut sum_y_squared = 0.0;

        for o in data.observations() {
            sum_x += o.x;
            sum_y += o.y;
            sum_xy += o.x * o.y;
            sum_x_squared += o.x * o.x;
            sum_y_squared += o.y * o.y;
        }

        self.slope = sum_xy / sum_x_squared;
        self.intercept = sum_y / n - self.slope * (sum_x / n);
        self.r_squared = (sum_xy / (sum_x_squared * sum_y_squared).sqrt()).powi(2);

        let (x_min, x_max) = data.x_range();
        self.x_min = x_min;
        self.x_max = x_max;
        self.n_observations = data.len();
        self.fitted = true;
        Ok(())
    }

    fn predict(&self, x: f64) -> Result<f64> {
        self.ensure_fitted()?;
        Ok(self.intercept + self.slope * x)
    }

    fn is_fitted(&self) -> bool {
        self.fitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Observation;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn dataset(pairs: &[(f64, f64)]) -> Dataset {
        Dataset::new(pairs.iter().map(|&(x, y)| Observation::new(x, y)).collect()).unwrap()
    }

    #[test]
    fn test_fit_matches_closed_form() {
        // y = 2x + 3 over x in {1, 2, 3, 4}:
        //   sum(xy) = 5 + 14 + 27 + 44 = 90, sum(x^2) = 30
        //   slope = 3, intercept = mean(y) - 3 * mean(x) = 8 - 7.5 = 0.5
        let data = dataset(&[(1.0, 5.0), (2.0, 7.0), (3.0, 9.0), (4.0, 11.0)]);
        let mut model = LinearRegression::new();
        model.fit(&data).unwrap();

        assert!((model.slope().unwrap() - 3.0).abs() < 1e-12);
        assert!((model.intercept().unwrap() - 0.5).abs() < 1e-12);
        // R^2 = (90 / sqrt(30 * 276))^2 = 8100 / 8280
        assert!((model.r_squared().unwrap() - 8100.0 / 8280.0).abs() < 1e-12);
    }

    #[test]
    fn test_perfect_through_origin_fit() {
        let data = dataset(&[(1.0, 2.0), (2.0, 4.0), (3.0, 6.0), (4.0, 8.0)]);
        let mut model = LinearRegression::new();
        model.fit(&data).unwrap();

        assert!((model.slope().unwrap() - 2.0).abs() < 1e-12);
        assert!(model.intercept().unwrap().abs() < 1e-12);
        assert!((model.r_squared().unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_predict_reproduces_line() {
        let data = dataset(&[(1.0, 5.0), (2.0, 7.0), (3.0, 9.0), (4.0, 11.0)]);
        let mut model = LinearRegression::new();
        model.fit(&data).unwrap();

        let slope = model.slope().unwrap();
        let intercept = model.intercept().unwrap();
        for x in [1.0, 2.0, 3.0, 4.0] {
            assert_eq!(model.predict(x).unwrap(), intercept + slope * x);
        }
    }

    #[test]
    fn test_range_and_bounds() {
        let data = dataset(&[(3.0, 1.0), (1.0, 2.0), (4.0, 3.0), (2.0, 4.0)]);
        let mut model = LinearRegression::new();
        model.fit(&data).unwrap();

        assert_eq!(model.range().unwrap(), (1.0, 4.0));
        assert!(!model.is_out_of_range(1.0).unwrap());
        assert!(!model.is_out_of_range(4.0).unwrap());
        assert!(!model.is_out_of_range(2.5).unwrap());
        assert!(model.is_out_of_range(0.999).unwrap());
        assert!(model.is_out_of_range(4.001).unwrap());
    }

    #[test]
    fn test_format_range() {
        let data = dataset(&[(1.0, 2.0), (4.0, 8.0)]);
        let mut model = LinearRegression::new();
        model.fit(&data).unwrap();
        assert_eq!(model.format_range().unwrap(), "1 - 4");
    }

    #[test]
    fn test_predict_random_is_seeded_and_in_range() {
        let data = dataset(&[(1.0, 2.0), (2.0, 4.0), (3.0, 6.0)]);
        let mut model = LinearRegression::new();
        model.fit(&data).unwrap();

        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..10 {
            let (xa, ya) = model.predict_random(&mut a).unwrap();
            let (xb, yb) = model.predict_random(&mut b).unwrap();
            assert_eq!((xa, ya), (xb, yb));
            assert!((1.0..=3.0).contains(&xa));
            assert_eq!(ya, model.predict(xa).unwrap());
        }
    }

    #[test]
    fn test_degenerate_x_rejected() {
        let data = dataset(&[(2.0, 1.0), (2.0, 5.0), (2.0, 9.0)]);
        let mut model = LinearRegression::new();
        let err = model.fit(&data).unwrap_err();
        assert!(matches!(err, RegressionError::DegenerateData(_)));
        assert!(!model.is_fitted());
    }

    #[test]
    fn test_queries_fail_before_fit() {
        let model = LinearRegression::new();
        assert_eq!(model.predict(1.0).unwrap_err(), RegressionError::NotFitted);
        assert_eq!(model.range().unwrap_err(), RegressionError::NotFitted);
        assert_eq!(model.slope().unwrap_err(), RegressionError::NotFitted);
        assert_eq!(
            model.format_range().unwrap_err(),
            RegressionError::NotFitted
        );
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            model.predict_random(&mut rng).unwrap_err(),
            RegressionError::NotFitted
        );
    }

    #[test]
    fn test_refit_resets_model() {
        let mut model = LinearRegression::new();
        model
            .fit(&dataset(&[(1.0, 2.0), (2.0, 4.0)]))
            .unwrap();
        model
            .fit(&dataset(&[(10.0, 1.0), (20.0, 2.0)]))
            .unwrap();
        assert_eq!(model.range().unwrap(), (10.0, 20.0));
        assert_eq!(model.n_observations(), 2);
    }
}
