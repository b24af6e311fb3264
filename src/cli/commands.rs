use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::model::task::ClockTime;

#[derive(Parser)]
#[command(name = "docket", about = concat!("docket v", env!("CARGO_PKG_VERSION"), " - a to-do list for the terminal"), version)]
pub struct Cli {
    /// Omit to open the interactive UI
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Task document (default: `[storage] file` from config, else ./tasks.json)
    #[arg(long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Config file (default: <config dir>/docket/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a task to the end of the list
    Add(AddArgs),
    /// List tasks with their row numbers
    List(ListArgs),
    /// Show one task
    Show(RowArg),
    /// Change a task's fields
    Update(UpdateArgs),
    /// Delete a task
    Delete(DeleteArgs),
    /// Flip a task between pending and complete
    Toggle(RowArg),
}

#[derive(Args)]
pub struct AddArgs {
    #[arg(long)]
    pub topic: String,
    #[arg(long)]
    pub description: String,
    /// YYYY-MM-DD
    #[arg(long)]
    pub date: String,
    /// e.g. "9:30 AM"
    #[arg(long, default_value = "12:00 PM")]
    pub time: ClockTime,
    /// High, Medium or Low
    #[arg(long, default_value = "Medium")]
    pub priority: String,
}

#[derive(Args)]
pub struct ListArgs {
    /// Only tasks whose topic or description contains this text (any case)
    #[arg(long)]
    pub search: Option<String>,
}

#[derive(Args)]
pub struct RowArg {
    /// Row number as shown by `list`
    pub row: usize,
}

#[derive(Args)]
pub struct UpdateArgs {
    /// Row number as shown by `list`
    pub row: usize,
    #[arg(long)]
    pub topic: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub date: Option<String>,
    #[arg(long)]
    pub time: Option<ClockTime>,
    #[arg(long)]
    pub priority: Option<String>,
}

#[derive(Args)]
pub struct DeleteArgs {
    /// Row number as shown by `list`
    pub row: usize,
    /// Confirm the deletion
    #[arg(long)]
    pub yes: bool,
}
