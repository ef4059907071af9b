//! LS-8 virtual machine CLI.
//!
//! This binary provides the entry point for running and inspecting programs. It performs:
//! 1. **Run:** Load an `.ls8` program, execute it, and print PRN output to stdout.
//! 2. **Disassemble:** Print an address/bytes/mnemonic listing of a program.
//!
//! Logging goes through `tracing`; set `RUST_LOG` (e.g. `RUST_LOG=ls8_core=trace`)
//! or pass `--verbose` to see engine events on stderr.

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use ls8_core::config::{Config, StackMode};
use ls8_core::isa::disasm::disassemble_program;
use ls8_core::sim::loader;
use ls8_core::{ConsoleSink, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "ls8",
    author,
    version,
    about = "LS-8 eight-bit virtual machine",
    long_about = "Run or disassemble LS-8 programs.\n\nPrograms are text files with one binary byte per line; `#` starts a comment.\n\nExamples:\n  ls8 run programs/mult.ls8\n  ls8 run programs/stack.ls8 --stack ram --trace\n  ls8 disasm programs/print8.ls8"
)]
struct Cli {
    /// Log engine events at debug level (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load and execute a program.
    Run {
        /// Program file (.ls8).
        file: PathBuf,

        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print a state snapshot to stderr before each instruction.
        #[arg(long)]
        trace: bool,

        /// Print run statistics after the program stops.
        #[arg(long)]
        stats: bool,

        /// Stack placement (overrides the config file).
        #[arg(long, value_enum)]
        stack: Option<StackArg>,

        /// Entry point address (overrides the config file).
        #[arg(long)]
        start_pc: Option<u8>,
    },

    /// Print a disassembly listing of a program.
    Disasm {
        /// Program file (.ls8).
        file: PathBuf,
    },
}

/// Command-line spelling of [`StackMode`].
#[derive(Clone, Copy, Debug, ValueEnum)]
enum StackArg {
    /// Unbounded stack outside main memory.
    Growable,
    /// Stack in main memory addressed by R7.
    Ram,
}

impl From<StackArg> for StackMode {
    fn from(arg: StackArg) -> Self {
        match arg {
            StackArg::Growable => Self::Growable,
            StackArg::Ram => Self::Ram,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Run {
            file,
            config,
            trace,
            stats,
            stack,
            start_pc,
        } => cmd_run(&file, config.as_deref(), trace, stats, stack, start_pc),
        Commands::Disasm { file } => cmd_disasm(&file),
    }
}

/// Installs the `tracing` subscriber; `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Prints a fatal error and exits with status 1.
fn fatal(msg: impl std::fmt::Display) -> ! {
    eprintln!("[!] FATAL: {msg}");
    process::exit(1);
}

/// Loads the program, runs it to completion, and exits non-zero on a fault.
fn cmd_run(
    file: &Path,
    config_path: Option<&Path>,
    trace: bool,
    stats: bool,
    stack: Option<StackArg>,
    start_pc: Option<u8>,
) {
    let mut config = match config_path {
        Some(path) => Config::from_file(path).unwrap_or_else(|e| fatal(e)),
        None => Config::default(),
    };
    config.general.trace_instructions |= trace;
    if let Some(stack) = stack {
        config.memory.stack = stack.into();
    }
    if let Some(pc) = start_pc {
        config.general.start_pc = pc;
    }

    let program = loader::load_program_file(file).unwrap_or_else(|e| fatal(e));

    let mut sim = Simulator::new(&config, ConsoleSink);
    if let Err(e) = sim.load_program(&program) {
        fatal(e);
    }

    let result = sim.run();
    if stats {
        sim.stats.print();
    }

    match result {
        Ok(reason) => tracing::debug!(?reason, "run finished"),
        Err(fault) => {
            eprintln!("{}", sim.cpu.regs.dump());
            fatal(fault);
        }
    }
}

/// Prints a listing of every instruction in the program.
fn cmd_disasm(file: &Path) {
    let program = loader::load_program_file(file).unwrap_or_else(|e| fatal(e));
    for line in disassemble_program(&program) {
        println!("{line}");
    }
}
