mod cli;
mod repl;

use crate::cli::{Cli, GeneratorArg, LogFormatArg};
use clap::Parser;
use microurl_generator::{IdGenerator, ObfuscatedGenerator, Obfuscator, SeqGenerator};
use microurl_shortener::{MicroUrlService, ServiceSettings};
use microurl_storage::InMemoryRepository;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Cli::try_parse()?;
    init_tracing(config.log_format);

    info!(
        base_url = %config.base_url,
        generator = %config.generator,
        seq_offset = config.seq_offset,
        "starting microurl"
    );

    let seq = SeqGenerator::with_offset(config.seq_offset);
    let generator: Box<dyn IdGenerator> = match config.generator {
        GeneratorArg::Seq => Box::new(seq),
        GeneratorArg::Obfuscated => Box::new(ObfuscatedGenerator::new(seq, Obfuscator::default())?),
    };

    let settings = ServiceSettings::builder().base_url(config.base_url).build();
    let service = MicroUrlService::with_parts(InMemoryRepository::new(), generator, settings);

    eprintln!("{}", repl::USAGE);
    repl::run(
        &service,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    )
    .await?;

    info!(records = service.len().await?, "shutting down");
    Ok(())
}

fn init_tracing(format: LogFormatArg) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match format {
        LogFormatArg::Text => builder.init(),
        LogFormatArg::Json => builder.json().init(),
    }
}
