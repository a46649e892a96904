mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "decor",
    version,
    about = "Custom window frame engine for Win32 windows"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open a demo window with a custom frame
    Demo(commands::demo::DemoArgs),
    /// Show frame metrics and detected OS capabilities
    Info,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Demo(args) => commands::demo::execute(&args),
        Commands::Info => commands::info::execute(),
    }
}
