use anyhow::Result;
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    info!("oriel starting");
    oriel_cli::run()?;
    Ok(())
}
