//! # linfit-cli
//!
//! Interactive command-line interface for the linfit regression library.
//!
//! Fits a linear regression model to a comma-delimited (label, x, y) file,
//! prints the fitted parameters, then answers prediction queries until the
//! user types `exit` or `quit`.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use linfit::{Dataset, LinearRegression, Model};
use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

type CliResult<T> = std::result::Result<T, String>;

/// Number of predictions produced by the `random` command
const RANDOM_PREDICTIONS: usize = 5;

#[derive(Parser)]
#[command(name = "linfit")]
#[command(about = "Fit a linear regression model to a CSV file and query it", long_about = None)]
struct Cli {
    /// Input file of comma-separated (label, x, y) rows; prompted for when omitted
    input: Option<PathBuf>,

    /// Seed for random predictions (OS-seeded when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Print the fitted model summary as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let path = match cli.input {
        Some(path) => path,
        None => match prompt("Enter the .csv or text file path: ")? {
            Some(answer) if !answer.is_empty() => PathBuf::from(answer),
            _ => return Err("no input file given".to_string()),
        },
    };

    println!("Retrieving data from file...");
    let data = Dataset::from_path(&path).map_err(|e| e.to_string())?;
    debug!("loaded {} observations from {}", data.len(), path.display());

    println!("Calculating model...\n");
    let mut model = LinearRegression::new();
    model.fit(&data).map_err(|e| e.to_string())?;

    print_summary(&model, cli.json)?;

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    println!("Enter a new independent variable value to have the model predict a dependent value.");
    println!(
        "Or, have {} independent values generated and modeled for you.",
        RANDOM_PREDICTIONS
    );

    loop {
        let answer = match prompt("Type a number or 'random'. ['exit' to quit] ")? {
            Some(answer) => answer,
            None => break,
        };

        if answer.eq_ignore_ascii_case("exit") || answer.eq_ignore_ascii_case("quit") {
            break;
        } else if answer.eq_ignore_ascii_case("random") {
            println!("\n--- Random Predictions ---");
            for i in 0..RANDOM_PREDICTIONS {
                let (x, y) = model.predict_random(&mut rng).map_err(|e| e.to_string())?;
                println!("{})  Random independent variable value:\t{}", i, x);
                println!("    Predicted dependent variable value:\t{}", y);
            }
            println!("--------------------------\n");
        } else if let Ok(x) = answer.parse::<f64>() {
            if model.is_out_of_range(x).map_err(|e| e.to_string())? {
                println!(
                    "The value you entered is outside of the range of values used to generate the model ({})",
                    model.format_range().map_err(|e| e.to_string())?
                );
            } else {
                println!("\n------ Prediction ------");
                println!("Independent variable value:\t\t{}", x);
                println!(
                    "Predicted dependent variable value:\t{}",
                    model.predict(x).map_err(|e| e.to_string())?
                );
                println!("------------------------\n");
            }
        } else {
            println!("Input not recognized. Please try again.");
        }
    }

    println!("Goodbye");
    Ok(())
}

/// Print the prompt and read one trimmed line; `None` on end of input
fn prompt(message: &str) -> CliResult<Option<String>> {
    print!("{}", message);
    io::stdout()
        .flush()
        .map_err(|e| format!("Failed to flush stdout: {}", e))?;

    let mut buf = String::new();
    match io::stdin().read_line(&mut buf) {
        Ok(0) => Ok(None),
        Ok(_) => Ok(Some(buf.trim().to_string())),
        Err(e) => Err(format!("Failed to read input: {}", e)),
    }
}

fn print_summary(model: &LinearRegression, json: bool) -> CliResult<()> {
    let slope = model.slope().map_err(|e| e.to_string())?;
    let intercept = model.intercept().map_err(|e| e.to_string())?;
    let r_squared = model.r_squared().map_err(|e| e.to_string())?;
    let (min, max) = model.range().map_err(|e| e.to_string())?;

    if json {
        let summary = serde_json::json!({
            "slope": slope,
            "intercept": intercept,
            "r_squared": r_squared,
            "range": { "min": min, "max": max },
            "observations": model.n_observations(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&summary)
                .map_err(|e| format!("Failed to render JSON: {}", e))?
        );
    } else {
        println!("--- Linear Regression Model ---");
        println!("Slope:\t\t\t\t{}", slope);
        println!("Intercept:\t\t\t{}", intercept);
        println!("Line function:\t\t\tf(x) = {}x + {}", slope, intercept);
        println!("Coefficient of determination:\tR^2 = {}", r_squared);
        println!(
            "Range of model:\t\t\t{}",
            model.format_range().map_err(|e| e.to_string())?
        );
        println!("-------------------------------\n");
    }

    Ok(())
}
