// src/main.rs

//! The demonstration binary: runs a configured pipeline over a request and
//! prints how the request changes along the way.

use anyhow::Result;
use handlerchain::Request;
use handlerchain::config::Config;
use handlerchain::core::chain::{Chain, Eater};
use handlerchain::core::handler::pipeline::{RunObserver, Step, StepOutcome};
use std::env;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::filter::EnvFilter;

/// Prints the request as each handler receives it.
struct ConsoleObserver;

impl RunObserver for ConsoleObserver {
    fn on_step(&self, step: &Step) {
        if step.outcome == StepOutcome::Applied {
            println!("{:>12} ({:>4}): {}", step.handler, step.priority, step.before);
        }
    }
}

fn main() -> Result<()> {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let args: Vec<String> = env::args().skip(1).collect();

    if args.contains(&"--version".to_string()) {
        println!("handlerchain version {VERSION}");
        return Ok(());
    }

    // The config path can be provided via a --config flag; otherwise, it defaults to "pipeline.toml".
    let config_index = args.iter().position(|arg| arg == "--config");
    let config_path = match config_index {
        Some(i) => match args.get(i + 1) {
            Some(path) => path.as_str(),
            None => {
                eprintln!("--config flag requires a value");
                std::process::exit(1);
            }
        },
        None => "pipeline.toml",
    };

    let config = match Config::from_file(config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration from \"{config_path}\": {e:#}");
            std::process::exit(1);
        }
    };

    let log_level = env::var("RUST_LOG").unwrap_or_else(|_| config.log_level.clone());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level))
        .compact()
        .with_ansi(true)
        .init();

    if args.iter().any(|arg| arg == "--chain") {
        run_chain_demo();
        return Ok(());
    }

    // The first free-standing argument, if any, overrides the configured request.
    let request_text = args
        .iter()
        .enumerate()
        .find(|(i, arg)| !arg.starts_with("--") && config_index.is_none_or(|c| *i != c + 1))
        .map(|(_, arg)| arg.clone())
        .unwrap_or_else(|| config.request.clone());

    let mut pipeline = config.build_pipeline()?;
    pipeline.attach(Arc::new(ConsoleObserver));
    info!(handlers = pipeline.registry().len(), "starting pipeline");

    let mut request = Request::new(request_text);
    match pipeline.run(&mut request) {
        Ok(report) => {
            println!("{request}");
            info!(changed_by = ?report.changed_by(), "done");
            Ok(())
        }
        Err(e) => {
            error!("Pipeline error: {}", e);
            Err(e.into())
        }
    }
}

fn run_chain_demo() {
    let chain = Chain::new()
        .then(Eater::new("Monkey", "Banana"))
        .then(Eater::new("Squirrel", "Nut"))
        .then(Eater::new("Dog", "MeatBall"));

    println!("Chain: {}", chain.labels().join(" > "));
    for food in ["Nut", "Banana", "Cup of coffee"] {
        println!("Client: Who wants a {food}?");
        match chain.handle(food) {
            Some(answer) => println!("  {answer}"),
            None => println!("  {food} was left untouched."),
        }
    }

    println!("Subchain: {}", chain.labels()[1..].join(" > "));
    for food in ["Nut", "Banana"] {
        println!("Client: Who wants a {food}?");
        match chain.handle_from(1, food) {
            Some(answer) => println!("  {answer}"),
            None => println!("  {food} was left untouched."),
        }
    }
}
