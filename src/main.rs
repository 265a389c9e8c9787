use anyhow::Result;
use cxkitty_notify::cli::CliApp;

fn main() -> Result<()> {
    CliApp::run()
}
