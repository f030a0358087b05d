use microurl_shortener::{IdGenerator, MicroUrlService, Shortener, UrlRecord};
use microurl_storage::InMemoryRepository;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

pub const USAGE: &str =
    "commands: shorten <url> | click <short-url> | stats <short-url> | list | quit";

#[derive(Debug, PartialEq, Eq)]
pub enum Command<'a> {
    Shorten(&'a str),
    Click(&'a str),
    Stats(&'a str),
    List,
    Quit,
}

impl<'a> Command<'a> {
    /// Parses one input line. Returns `None` for blank lines and unknown commands.
    pub fn parse(line: &'a str) -> Option<Self> {
        let line = line.trim();
        let (verb, arg) = match line.split_once(char::is_whitespace) {
            Some((verb, arg)) => (verb, arg.trim()),
            None => (line, ""),
        };

        let command = match (verb, arg) {
            ("shorten", arg) if !arg.is_empty() => Command::Shorten(arg),
            ("click", arg) if !arg.is_empty() => Command::Click(arg),
            ("stats", arg) if !arg.is_empty() => Command::Stats(arg),
            ("list", "") => Command::List,
            ("quit" | "exit", "") => Command::Quit,
            _ => return None,
        };
        Some(command)
    }
}

/// Reads commands from `input` until EOF or `quit`, writing one reply per command.
pub async fn run<G, I, O>(
    service: &MicroUrlService<InMemoryRepository, G>,
    input: I,
    mut output: O,
) -> anyhow::Result<()>
where
    G: IdGenerator,
    I: AsyncBufRead + Unpin,
    O: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let reply = match Command::parse(&line) {
            Some(Command::Quit) => break,
            Some(command) => execute(service, command).await?,
            None => USAGE.to_string(),
        };

        output.write_all(reply.as_bytes()).await?;
        output.write_all(b"\n").await?;
        output.flush().await?;
    }
    Ok(())
}

async fn execute<G: IdGenerator>(
    service: &MicroUrlService<InMemoryRepository, G>,
    command: Command<'_>,
) -> anyhow::Result<String> {
    let reply = match command {
        Command::Shorten(url) => match service.shorten(url).await {
            Ok(short_url) => short_url,
            Err(e) => format!("error: {e}"),
        },
        Command::Click(short_url) => service
            .click_url(short_url)
            .await?
            .unwrap_or_else(|| "not found".to_string()),
        Command::Stats(short_url) => match service.stats(short_url).await? {
            Some(record) => serde_json::to_string(&record)?,
            None => "not found".to_string(),
        },
        Command::List => {
            let mut records: Vec<UrlRecord> = Vec::new();
            service.visit_urls(|r| records.push(r.clone())).await?;
            records.sort();
            records
                .iter()
                .map(|r| format!("{} -> {} ({} clicks)", r.short_url, r.original_url, r.clicks))
                .collect::<Vec<_>>()
                .join("\n")
        }
        Command::Quit => String::new(),
    };
    Ok(reply)
}
