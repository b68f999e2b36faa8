#![doc = include_str!("../README.md")]

mod cli;
mod core;
mod document;
mod error;
mod prelude;
mod quantity;
mod tables;

use std::process::ExitCode;

use clap::{Parser, crate_version};

use crate::{
    cli::Args,
    core::optimizer::Optimizer,
    document::{check_file_type, read_query, write_schedule},
    prelude::*,
    tables::{build_plan_table, build_summary_table},
};

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let args = Args::parse();
    tracing_subscriber::fmt()
        .without_time()
        .compact()
        .with_writer(std::io::stderr)
        .with_max_level(args.log_level)
        .init();
    info!(version = crate_version!(), "starting…");

    match run(&args) {
        Ok(()) => {
            info!("done!");
            ExitCode::SUCCESS
        }
        Err(error) => {
            // The user-facing report goes to the standard output:
            println!("{error:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result {
    check_file_type(&args.input)?;
    check_file_type(&args.output)?;

    let query = read_query(&args.input)?;
    let mut optimizer = Optimizer::builder().query(&query).now(args.now()).build();
    let plan = optimizer.optimize()?;
    info!(
        n_periods = plan.periods.len(),
        cost = %plan.summary.cost,
        is_desired_reached = plan.summary.is_desired_reached,
        "optimized"
    );

    write_schedule(&args.output, &plan.periods)?;
    println!("Result written in {}", args.output.display());

    if args.table {
        println!("{}", build_plan_table(plan));
        println!("{}", build_summary_table(&plan.summary));
    }
    Ok(())
}
