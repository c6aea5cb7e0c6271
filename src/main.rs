mod cli;
mod form;
mod services;

use cli::cli;
use services::shared::logger::init_logger;

async fn run_coinbooth() -> anyhow::Result<()> {
    init_logger();
    cli().await?;
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    run_coinbooth().await?;
    Ok(())
}
