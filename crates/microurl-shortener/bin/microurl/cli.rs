use clap::{Parser, ValueEnum};
use microurl_core::codec::DEFAULT_BASE_URL;
use std::fmt::{Display, Formatter};

pub const BASE_URL_ENV: &str = "MICROURL_BASE_URL";
pub const GENERATOR_ENV: &str = "MICROURL_GENERATOR";
pub const SEQ_OFFSET_ENV: &str = "MICROURL_SEQ_OFFSET";
pub const LOG_FORMAT_ENV: &str = "MICROURL_LOG_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GeneratorArg {
    #[value(name = "seq")]
    Seq,
    #[value(name = "obfuscated")]
    Obfuscated,
}

impl Display for GeneratorArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GeneratorArg::Seq => write!(f, "seq"),
            GeneratorArg::Obfuscated => write!(f, "obfuscated"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    #[value(name = "text")]
    Text,
    #[value(name = "json")]
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "microurl", about = "Shorten, click and inspect URLs from stdin")]
pub struct Cli {
    #[arg(long, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(
        long,
        env = GENERATOR_ENV,
        value_enum,
        default_value_t = GeneratorArg::Seq
    )]
    pub generator: GeneratorArg,

    #[arg(long, env = SEQ_OFFSET_ENV, default_value_t = 0)]
    pub seq_offset: u64,

    #[arg(
        long,
        env = LOG_FORMAT_ENV,
        value_enum,
        default_value_t = LogFormatArg::Text
    )]
    pub log_format: LogFormatArg,
}
