use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "tl", about = concat!("[x] tasklist v", env!("CARGO_PKG_VERSION"), " - a task list for this terminal session"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Use a different config directory (holds config.toml and prefs.json)
    #[arg(long = "config-dir", global = true)]
    pub config_dir: Option<PathBuf>,

    /// Keep display preference changes in memory only
    #[arg(long, global = true)]
    pub no_persist: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show or set the dark/light display preference
    Theme(ThemeArgs),
    /// Print the config and preference file locations
    Paths,
}

#[derive(Args)]
pub struct ThemeArgs {
    /// New display mode (omit to print the current one)
    pub mode: Option<ThemeChoice>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeChoice {
    Dark,
    Light,
    Toggle,
}
