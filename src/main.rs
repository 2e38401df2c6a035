use anyhow::Result;
use rust_decimal::Decimal;
use std::env;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use budget_ledger::{create_spend_chart_with, Category, ReportConfig};

fn main() -> Result<()> {
    init_tracing();

    let args: Vec<String> = env::args().collect();

    let config = if args.len() > 1 {
        tracing::info!("Loading report config from {}", args[1]);
        ReportConfig::from_file(&args[1])?
    } else {
        ReportConfig::default()
    };

    run_demo(&config)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Reports go to stdout, logs to stderr
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}

fn record(operation: &str, accepted: bool) {
    if !accepted {
        tracing::warn!("{} rejected: insufficient funds", operation);
    }
}

fn run_demo(config: &ReportConfig) -> Result<()> {
    let mut food = Category::new("Food");
    let mut clothing = Category::new("Clothing");
    let mut auto = Category::new("Auto");

    food.deposit(Decimal::new(1000, 0), "initial deposit");
    record("withdraw", food.withdraw(Decimal::new(1015, 2), "groceries"));
    record(
        "withdraw",
        food.withdraw(Decimal::new(1589, 2), "restaurant and more food for dessert"),
    );
    record("transfer", food.transfer(Decimal::new(50, 0), &mut clothing));

    record("withdraw", clothing.withdraw(Decimal::new(2555, 2), ""));
    // Only 24.45 left, so this one is rejected
    record("withdraw", clothing.withdraw(Decimal::new(100, 0), "new shoes"));

    auto.deposit(Decimal::new(1000, 0), "initial deposit");
    record("withdraw", auto.withdraw(Decimal::new(15, 0), ""));

    for category in [&food, &clothing, &auto] {
        println!("{}\n", category.render(config));
    }

    let chart = create_spend_chart_with([&food, &clothing, &auto], config)?;
    println!("{}", chart);

    Ok(())
}
