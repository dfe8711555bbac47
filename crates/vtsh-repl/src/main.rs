//! vtsh CLI entry point.
//!
//! Usage:
//!   vtsh --path <dir>              # Import <dir> and start the REPL
//!   vtsh --script start.txt        # Run a start script first
//!   vtsh --prompt work             # Custom prompt name

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use vtsh_kernel::{Shell, Tree};
use vtsh_repl::Repl;

#[derive(Debug, Parser)]
#[command(name = "vtsh", version, about = "In-memory virtual filesystem shell")]
struct Args {
    /// Source directory imported into the virtual tree.
    #[arg(long, default_value = ".")]
    path: PathBuf,

    /// Prompt name shown before the current path.
    #[arg(long, default_value = "myVFS")]
    prompt: String,

    /// Start script executed before the interactive loop.
    #[arg(long)]
    script: Option<PathBuf>,
}

fn main() -> ExitCode {
    // Respects RUST_LOG.
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("vtsh: {e:?}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let args = Args::parse();

    println!("vtsh configuration");
    println!("  name:   {}", args.prompt);
    println!("  source: {}", args.path.display());
    match &args.script {
        Some(script) => println!("  script: {}", script.display()),
        None => println!("  script: none"),
    }

    // An import failure is reported and the shell continues over the
    // empty tree.
    let mut tree = Tree::new();
    match tree.build_from_source(&args.path) {
        Ok(()) => println!("loaded VFS from '{}'", args.path.display()),
        Err(e) => eprintln!("vtsh: {e}"),
    }
    println!();

    let mut repl = Repl::new(Shell::new(tree), args.prompt);

    if let Some(script) = &args.script {
        match repl.run_script(script) {
            // The script hit `exit`; do not enter the interactive loop.
            Ok(true) => return Ok(ExitCode::SUCCESS),
            Ok(false) => {}
            Err(e) => eprintln!("vtsh: {e:#}"),
        }
    }

    repl.run_interactive()?;
    Ok(ExitCode::SUCCESS)
}
