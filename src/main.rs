use anyhow::{Context, Result};
use cart_eligibility::CriteriaLoader;
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;

/// Environment variable consulted when `--criteria` is omitted
const CRITERIA_ENV: &str = "ELIGIBILITY_CRITERIA";

/// Every cart is eligible
const EXIT_ELIGIBLE: u8 = 0;
/// At least one cart is not eligible
const EXIT_NOT_ELIGIBLE: u8 = 2;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check carts against criteria
    Check {
        /// Path to a cart file (one object or an array of objects)
        #[arg(short, long)]
        cart: PathBuf,

        /// Path to the criteria file (defaults to $ELIGIBILITY_CRITERIA)
        #[arg(short = 'r', long)]
        criteria: Option<PathBuf>,

        /// Print one JSON line per cart
        #[arg(long)]
        json: bool,
    },
    /// Parse criteria and print them in normalized form
    Validate {
        /// Path to the criteria file (defaults to $ELIGIBILITY_CRITERIA)
        #[arg(short = 'r', long)]
        criteria: Option<PathBuf>,
    },
}

#[derive(Serialize)]
struct CartReport {
    cart: usize,
    eligible: bool,
}

fn main() -> Result<ExitCode> {
    dotenv().ok();
    env_logger::init();

    let args = Args::parse();
    let loader = CriteriaLoader::new();

    match args.command {
        Commands::Check {
            cart,
            criteria,
            json,
        } => {
            let criteria_path = resolve_criteria_path(criteria)?;
            let criteria = loader
                .load_criteria(&criteria_path)
                .with_context(|| format!("loading criteria {}", criteria_path.display()))?;
            let carts = loader
                .load_carts(&cart)
                .with_context(|| format!("loading carts {}", cart.display()))?;

            log::info!(
                "Checking {} cart(s) against {} criteria",
                carts.len(),
                criteria.len()
            );

            let mut all_eligible = true;
            for (index, cart) in carts.iter().enumerate() {
                let eligible = criteria
                    .is_satisfied_by(cart)
                    .with_context(|| format!("evaluating cart {}", index))?;
                all_eligible &= eligible;

                if json {
                    let report = CartReport {
                        cart: index,
                        eligible,
                    };
                    println!("{}", serde_json::to_string(&report)?);
                } else {
                    let verdict = if eligible { "eligible" } else { "not eligible" };
                    println!("cart {}: {}", index, verdict);
                }
            }

            let code = if all_eligible {
                EXIT_ELIGIBLE
            } else {
                EXIT_NOT_ELIGIBLE
            };
            Ok(ExitCode::from(code))
        }
        Commands::Validate { criteria } => {
            let criteria_path = resolve_criteria_path(criteria)?;
            let criteria = loader
                .load_criteria(&criteria_path)
                .with_context(|| format!("loading criteria {}", criteria_path.display()))?;

            if criteria.is_empty() {
                println!("(no criteria: every cart is eligible)");
            } else {
                println!("{}", criteria);
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn resolve_criteria_path(arg: Option<PathBuf>) -> Result<PathBuf> {
    match arg {
        Some(path) => Ok(path),
        None => std::env::var(CRITERIA_ENV)
            .map(PathBuf::from)
            .with_context(|| format!("no --criteria given and {} is not set", CRITERIA_ENV)),
    }
}
