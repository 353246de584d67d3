//! Basic example demonstrating fitting and querying a model
//!
//! Run with: cargo run --example basic -p linfit

use linfit::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    // Effort (hours) versus fish harvested, already paired
    let data = Dataset::new(vec![
        Observation::new(2.0, 14.0),
        Observation::new(4.0, 30.0),
        Observation::new(6.0, 41.0),
        Observation::new(8.0, 62.0),
        Observation::new(10.0, 73.0),
    ])?;

    let mut model = LinearRegression::new();
    model.fit(&data)?;

    println!("=== Linear Regression Example ===\n");
    println!("Slope:     {:.4}", model.slope()?);
    println!("Intercept: {:.4}", model.intercept()?);
    println!("R^2:       {:.4}", model.r_squared()?);
    println!("Range:     {}\n", model.format_range()?);

    let x = 5.0;
    println!("predict({}) = {:.4}", x, model.predict(x)?);

    let mut rng = StdRng::seed_from_u64(42);
    for i in 0..3 {
        let (rx, ry) = model.predict_random(&mut rng)?;
        println!("random {}: x = {:.4}, y = {:.4}", i, rx, ry);
    }

    Ok(())
}
