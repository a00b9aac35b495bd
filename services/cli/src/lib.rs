mod cli;
mod infra;
mod output;

use brsr_core::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
