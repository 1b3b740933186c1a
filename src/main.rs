use anyhow::Result;
use carehub::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
