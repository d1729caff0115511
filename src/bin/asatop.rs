use std::io::{BufWriter, Write};

use clap::Parser;

use asatop::{
    cli::{normalize_args, Cli},
    log, Config,
};

#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    log::init();

    let config: Config = Cli::parse_from(normalize_args(std::env::args_os())).into();

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    asatop::run(&config, &mut out).await?;
    out.flush()?;

    Ok(())
}
