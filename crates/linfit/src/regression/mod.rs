//! Regression models
//!
//! This module contains models that fit a line to paired observations.
//!
//! ## Models
//!
//! - **Linear Regression**: univariate closed-form least squares

pub mod linear;

pub use linear::LinearRegression;
