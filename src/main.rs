use anyhow::Context;
use clap::Parser;
use cron_expand::CronExpression;
use tracing_subscriber::EnvFilter;

/// Expand cron expressions into the concrete values of each field.
#[derive(Debug, Parser)]
#[command(name = "cron-expand", version)]
struct Cli {
    /// Cron expression(s), e.g. "*/15 0 1,15 * 1-5 /usr/bin/find"
    #[arg(required = true, value_name = "EXPRESSION")]
    expressions: Vec<String>,

    /// Print each expression as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    for (index, text) in cli.expressions.iter().enumerate() {
        let expression: CronExpression = text.parse()?;
        if cli.json {
            let json = serde_json::to_string_pretty(&expression)
                .with_context(|| format!("failed to serialize {text:?}"))?;
            println!("{json}");
        } else {
            if index > 0 {
                println!();
            }
            println!("{expression}");
        }
    }
    Ok(())
}

/// Human readable logs on stderr, filtered by `RUST_LOG` (default `warn`).
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
