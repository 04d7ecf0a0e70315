use clap::Parser;
use dotenv::dotenv;
use tracing::Level;

use rivalsapi::{ClientConfig, ErrorMode, RivalsClient};

mod cmd;

use crate::cmd::Cmd;

#[derive(Parser, Debug)]
#[command(name = "rivals", about = "Query the Marvel Rivals API")]
struct Cli {
    /// Fail on API errors instead of printing "no ... found"
    #[arg(long, global = true)]
    raise: bool,

    /// Log requests
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Cmd,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // requires MARVEL_RIVALS_API_KEY, .env works too
    dotenv().ok();
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    let mut config = ClientConfig::from_env()?;
    if cli.raise {
        config = config.error_mode(ErrorMode::Raise);
    }

    let mut client = RivalsClient::with_config(config)?;
    let result = cli.cmd.run(&client).await;
    client.close();

    result
}
