//! texlength CLI - manuscript length estimation tool

use std::time::Duration;

use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use texlength::{estimate_file, Error};

#[derive(Parser)]
#[command(name = "texlength")]
#[command(version)]
#[command(
    about = "Estimate the effective word count of a LaTeX manuscript",
    long_about = None
)]
struct Cli {
    /// Manuscript source, with or without the .tex suffix
    #[arg(value_name = "DOCUMENT")]
    document: Option<String>,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let Some(document) = cli.document else {
        println!("{}", "Usage: texlength <DOCUMENT>".yellow());
        println!("       texlength --help for more information");
        return;
    };

    // The pipeline may run a full LaTeX compile; keep the terminal alive.
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    spinner.set_message(format!("Estimating length of {}...", document));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = estimate_file(&document);
    spinner.finish_and_clear();

    match result {
        Ok(breakdown) => print!("{}", texlength::to_text(&breakdown)),
        Err(Error::CompilationFailed { log }) => {
            // The compiler's own diagnostics come first, verbatim.
            eprintln!("{}", log);
            eprintln!("{}: LaTeX compilation failed", "Error".red().bold());
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            std::process::exit(1);
        }
    }
}
