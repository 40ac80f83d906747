mod check;
mod cli;
mod infra;
mod routes;
mod server;

use listing_audit::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
