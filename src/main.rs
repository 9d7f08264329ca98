use clap::Parser;
use recur_solve::domain::ports::{ConfigProvider, Solver};
use recur_solve::utils::logger;
use recur_solve::{CliConfig, PatternSolver, Solution, SolverEngine, SolverSettings};
use std::io::{BufRead, Write};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting recur-solve CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let settings = match SolverSettings::resolve(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(2);
        }
    };

    let engine = SolverEngine::new(PatternSolver::new());

    match &cli.equation {
        Some(equation) => solve_once(&engine, &settings, equation),
        None => run_repl(&engine, &settings),
    }
}

fn solve_once<S: Solver>(
    engine: &SolverEngine<S>,
    settings: &SolverSettings,
    equation: &str,
) -> anyhow::Result<()> {
    match solve(engine, settings, equation) {
        Ok(rendered) => {
            println!("{}", rendered);
            Ok(())
        }
        Err(message) => {
            println!("{}", message);
            std::process::exit(1);
        }
    }
}

fn run_repl<S: Solver>(engine: &SolverEngine<S>, settings: &SolverSettings) -> anyhow::Result<()> {
    if settings.banner() {
        println!("Recurrence Relation Solver");
        println!("Solve recurrence relations using Master's Theorem!");
    }

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    loop {
        print!("{}", settings.prompt());
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF ends the session
        }

        let equation = line.trim();
        if equation.is_empty() {
            continue;
        }

        // A failed submission never ends the session; the fixed message is
        // printed and the next line is read.
        match solve(engine, settings, equation) {
            Ok(rendered) => println!("{}", rendered),
            Err(message) => println!("{}", message),
        }
    }

    Ok(())
}

/// Runs one submission and renders it per the configured output format. Any
/// failure along the way collapses into the one fixed user-visible message.
fn solve<S: Solver>(
    engine: &SolverEngine<S>,
    settings: &SolverSettings,
    equation: &str,
) -> std::result::Result<String, &'static str> {
    engine
        .run(equation)
        .and_then(|solution| render(&solution, settings.output_format()))
        .map_err(|e| {
            tracing::debug!("Submission failed: {}", e);
            e.user_friendly_message()
        })
}

fn render(solution: &Solution, format: &str) -> recur_solve::Result<String> {
    if format == "json" {
        Ok(serde_json::to_string(solution)?)
    } else {
        Ok(solution.bound.clone())
    }
}
