use anyhow::Result;
use tracing::info;

use chessvar_cli::Session;

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    info!("chessvar starting");
    Session::new().run()?;
    Ok(())
}
