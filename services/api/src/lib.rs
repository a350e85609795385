mod analyze;
mod cli;
mod infra;
mod routes;
mod server;

use anemia_screen::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
