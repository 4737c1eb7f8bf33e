pub mod form;
pub mod format;
pub mod init;
pub mod sum;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Sum durations given as HH:MM or HHMM", arg_required_else_help = true)]
    Sum(sum::SumArgs),
    #[command(about = "Format raw four-digit values as HH:MM", arg_required_else_help = true)]
    Format(format::FormatArgs),
    #[command(about = "Enter durations in an interactive form")]
    Form(form::FormArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Sum(args) => sum::cmd(args),
            Commands::Format(args) => format::cmd(args),
            Commands::Form(args) => form::cmd(args),
        }
    }
}
