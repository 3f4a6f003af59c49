//! Angle Calculator
//!
//! Command line front end for the angle algebra: normalizes and compares
//! angles, tests range containment and computes range unions and differences.
//!
//! Angles take an optional unit suffix (`π`, `pi`, `deg`, `°`, `rad`); bare
//! numbers are radians. Ranges use the display notation, e.g. `"[0;0.5)"`,
//! where bare numbers are multiples of π.
//!
//! Usage:
//!   cargo run --bin angle_calc -- union "[0;0.5]" "[0.25;1)"
//!   cargo run --bin angle_calc -- --json divide 90deg 0

use std::f64::consts::PI;

use angular::{Angle, AngleRange, AngleRanges};
use clap::{ArgAction, Parser, Subcommand};
use serde_json::json;

/// Type alias for the error type used throughout this binary
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Angle Calculator
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Evaluates angle and angle range operations",
    long_about = None
)]
struct Args {
    /// Print results as JSON
    #[arg(long, action = ArgAction::SetTrue)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Reduce an angle into [0, 2π)
    Normalize {
        #[arg(allow_hyphen_values = true)]
        angle: Angle,
    },
    /// Compare two angles by raw value and by position on the circle
    Compare {
        #[arg(allow_hyphen_values = true)]
        a: Angle,
        #[arg(allow_hyphen_values = true)]
        b: Angle,
    },
    /// Check whether a range contains an angle
    Contains {
        range: AngleRange,
        #[arg(allow_hyphen_values = true)]
        angle: Angle,
    },
    /// Merge two ranges
    Union { a: AngleRange, b: AngleRange },
    /// Remove the second range from the first
    Difference { a: AngleRange, b: AngleRange },
    /// Divide an angle by a scalar
    Divide {
        #[arg(allow_hyphen_values = true)]
        angle: Angle,
        #[arg(allow_hyphen_values = true)]
        divisor: f64,
    },
}

/// Prints an angle in all supported units
fn print_angle(label: &str, angle: Angle) {
    println!(
        "{}: {} = {} rad = {}",
        label,
        angle,
        angle.to_radians(),
        angle.to_degrees_string()
    );
}

/// Prints a list of ranges, one per line
fn print_ranges(title: &str, ranges: &AngleRanges) {
    println!("{} ({} range(s)):", title, ranges.len());
    if ranges.is_empty() {
        println!("  (empty)");
    }
    for range in ranges {
        println!("  {}  length {:.4} rad", range, range.length());
    }
}

fn print_json(value: serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn run(args: &Args) -> Result<()> {
    match &args.command {
        Command::Normalize { angle } => {
            let normalized = angle.normalized();
            if args.json {
                return print_json(json!({ "input": angle, "normalized": normalized }));
            }
            print_angle("Input", *angle);
            print_angle("Normalized", normalized);
        }
        Command::Compare { a, b } => {
            let ordering = a.tolerance_cmp(b).map(|o| format!("{:?}", o));
            let equivalent = a.is_equivalent_mod_2pi(b);
            if args.json {
                return print_json(json!({
                    "ordering": ordering,
                    "equal": a == b,
                    "equivalent_mod_2pi": equivalent,
                }));
            }
            match ordering {
                Some(ordering) => println!("{} vs {}: {}", a, b, ordering),
                None => println!("{} vs {}: unordered", a, b),
            }
            println!("Equivalent modulo 2π: {}", equivalent);
        }
        Command::Contains { range, angle } => {
            let contained = range.contains_angle(*angle);
            if args.json {
                return print_json(json!({ "range": range, "angle": angle, "contains": contained }));
            }
            println!("{} contains {}: {}", range, angle, contained);
        }
        Command::Union { a, b } => {
            let ranges = a.union(b);
            if args.json {
                return print_json(json!({ "union": ranges }));
            }
            print_ranges(&format!("{} ∪ {}", a, b), &ranges);
        }
        Command::Difference { a, b } => {
            let ranges = a.difference(b);
            if args.json {
                return print_json(json!({ "difference": ranges }));
            }
            print_ranges(&format!("{} − {}", a, b), &ranges);
        }
        Command::Divide { angle, divisor } => {
            let quotient = angle.checked_div(*divisor)?;
            if args.json {
                return print_json(json!({ "quotient": quotient }));
            }
            print_angle(&format!("{} / {}", angle, divisor), quotient);
            println!("Turns: {:.4}", quotient.to_radians() / (2.0 * PI));
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    run(&args)
}
