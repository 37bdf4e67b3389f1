use crate::demo::{run_generate, run_score, GenerateArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use moving_leads::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Moving Leads",
    about = "Serve, generate, and score mock moving-intent leads",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print freshly generated mock leads
    Generate(GenerateArgs),
    /// Score a set of signals and print the breakdown
    Score(ScoreArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Generate(args) => run_generate(args),
        Command::Score(args) => run_score(args),
    }
}
