use std::error::Error;
use vlsm_subnet_calc::cli::{self, Invocation, OutputFormat, Request};
use vlsm_subnet_calc::models::{CalculationLog, CalculationRecord};
use vlsm_subnet_calc::{output, partition, processing};

fn main() {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default()).expect("Error initializing log4rs");
    log::info!("#Start main()");

    let invocation = match cli::parse_args(std::env::args().skip(1)) {
        Ok(invocation) => invocation,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("{}", cli::USAGE);
            std::process::exit(2);
        }
    };

    let mut history = CalculationLog::new();
    if let Err(e) = run(invocation, &mut history) {
        log::error!("{e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    log::info!("#End main() {history}");
}

fn run(invocation: Invocation, history: &mut CalculationLog) -> Result<(), Box<dyn Error>> {
    match invocation.request {
        Request::Partition {
            network,
            mode,
            value,
        } => {
            let subnets = partition(network, mode, value)?;
            history.add(CalculationRecord::new(network, mode, value, subnets.len()));
            match invocation.format {
                OutputFormat::Terminal => output::print_descriptors(&network, &subnets),
                OutputFormat::Csv => output::print_csv(&subnets),
                OutputFormat::Json => println!("{}", output::to_json(&subnets)?),
            }
        }
        Request::Describe { network } => {
            let described = processing::describe_network(network)?;
            match invocation.format {
                OutputFormat::Terminal => output::print_described(&described),
                OutputFormat::Csv => {
                    println!("{}", output::csv_header());
                    println!("{}", output::csv_row(&described));
                }
                OutputFormat::Json => {
                    println!("{}", output::to_json(std::slice::from_ref(&described))?)
                }
            }
        }
        Request::Wildcard { mask } => {
            let report = processing::wildcard_report(&mask)?;
            output::print_wildcard(&report);
        }
    }
    Ok(())
}
