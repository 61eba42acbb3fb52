use crate::report::{run_portfolio, run_score, PortfolioArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use mortgage_risk::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Mortgage Risk Rating Service",
    about = "Score mortgage loans and rate portfolios from the command line or over HTTP",
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
    /// Score a single loan and print the factor breakdown
    Score(ScoreArgs),
    /// Rate every loan in a CSV file and the pool as a whole
    Portfolio(PortfolioArgs),
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
        Command::Score(args) => run_score(args),
        Command::Portfolio(args) => run_portfolio(args),
    }
}
