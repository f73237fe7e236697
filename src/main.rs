use std::io;

use anyhow::Result;
use tracing::info;

use sovereign_api::Session;

fn main() -> Result<()> {
    // Replies go to stdout, so logs must not.
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    info!("sovereign starting");

    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new().run(stdin.lock(), stdout.lock())?;
    Ok(())
}
