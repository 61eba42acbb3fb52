mod cli;
mod infra;
mod report;
mod routes;
mod server;

use mortgage_risk::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
