//! nativegen
//!
//! Prints Frege `native` declarations for a JVM class, read from its
//! reflective metadata.
//!
//! ```text
//! nativegen java.util.ArrayList known_types.properties --model-dir models
//! ```

mod generate;
mod output;

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::generate::GenerateOptions;
use crate::output::{resolve_color_choice, StyledOutput};

#[derive(Parser)]
#[command(name = "nativegen")]
#[command(about = "Generate Frege native declarations for a JVM class", long_about = None)]
#[command(version)]
struct Cli {
    /// Binary name of the class (e.g. java.util.ArrayList)
    class: String,

    /// Properties file of known types
    overrides: Option<PathBuf>,

    /// Directory holding <class>.json metadata files
    #[arg(long, value_name = "DIR")]
    model_dir: Option<PathBuf>,

    /// Project config file (default: ./nativegen.toml if present)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log generator decisions to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Color output: auto, always, never
    #[arg(long, value_parser = ["auto", "always", "never"])]
    color: Option<String>,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = GenerateOptions {
        class: cli.class,
        overrides: cli.overrides,
        model_dir: cli.model_dir,
        config: cli.config,
    };

    match generate::execute(&options) {
        Ok(declarations) => print!("{}", declarations),
        Err(err) => {
            let mut out = StyledOutput::new(resolve_color_choice(cli.color.as_deref()));
            out.error(&format!("{:#}", err));
            std::process::exit(1);
        }
    }
}
