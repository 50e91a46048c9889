use std::io;
use std::time::Instant;

use clap::Parser;
use eyre::Result;
use fibseq::Method;
use fibseq_cli::{Style, present, read_terms};
use log::{debug, info};

/// Print the Fibonacci sequence computed by loop and by recursion
#[derive(Parser)]
#[command(name = "fibseq", version, about)]
struct FibseqCli {
    /// highest term index to compute; prompts on stdin when omitted
    terms: Option<String>,

    /// method to run (repeatable); defaults to loop, then recursion
    #[arg(short = 'm', long = "method")]
    methods: Vec<Method>,

    /// how to lay out each sequence: bracketed, list or plain
    #[arg(short = 's', long, default_value = "bracketed")]
    style: Style,

    /// log level
    #[arg(short = 'l', long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = FibseqCli::parse();
    let level = match args.log_level.as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "error" => log::LevelFilter::Error,
        "off" => log::LevelFilter::Off,
        "warn" => log::LevelFilter::Warn,
        _ => log::LevelFilter::Warn,
    };

    pretty_env_logger::formatted_builder().filter_level(level).init();

    let n = match args.terms {
        Some(terms) => fibseq_cli::parse_terms(&terms)?,
        None => {
            debug!("no term count given, prompting");
            read_terms(io::stdin().lock(), io::stdout())?
        }
    };

    let methods = match args.methods.is_empty() {
        true => Method::ALL.to_vec(),
        false => args.methods,
    };

    let results = methods
        .into_iter()
        .map(|method| {
            let start = Instant::now();
            let sequence = method.sequence(n)?;
            info!("{} computed {} terms in {:?}", method, sequence.len(), start.elapsed());
            Ok((method, sequence))
        })
        .collect::<Result<Vec<_>>>()?;

    present(io::stdout().lock(), &results, args.style)?;
    Ok(())
}
