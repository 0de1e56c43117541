mod cli;
mod commands;

use divorce_intake::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
