use anyhow::{Context, Result};
use autotranslate::config::{CaseFormat, Config, ServiceName};
use autotranslate::interactive::run_interactive;
use autotranslate::TranslationOrchestrator;
use clap::Parser;
use std::io::Read;
use std::path::PathBuf;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "autotranslate")]
#[command(version, about = "Translate between Chinese and English")]
#[command(long_about = "Translate text between Chinese and English using MyMemory, Google or Baidu, \
falling back through providers in order. English output can be reshaped into an identifier case style.")]
struct Cli {
    /// Text to translate (reads stdin when omitted)
    text: Option<String>,

    /// Provider priority, comma separated: mymemory, google, baidu
    #[arg(short, long, value_delimiter = ',')]
    services: Option<Vec<String>>,

    /// Case style for English output: pascal, camel, snake, space, none
    #[arg(short = 'f', long)]
    case_format: Option<String>,

    /// Config file (defaults to the user config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Prompt for text repeatedly
    #[arg(short, long)]
    interactive: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };

    FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::load().context("Failed to load configuration")?,
    };

    if let Some(ref services) = cli.services {
        config.translation_services = canonical_services(services)?;
    }

    if let Some(ref format) = cli.case_format {
        let format: CaseFormat = format.parse().map_err(|e: String| anyhow::anyhow!(e))?;
        config.english_case_format = format.to_string();
    }

    Ok(config)
}

/// Validate `--services` leniently and store the canonical identifiers.
fn canonical_services(services: &[String]) -> Result<Vec<String>> {
    services
        .iter()
        .map(|service| {
            service
                .parse::<ServiceName>()
                .map(|s| s.to_string())
                .map_err(|e: String| anyhow::anyhow!(e))
        })
        .collect()
}

fn read_input(text: Option<String>) -> Result<String> {
    let raw = match text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        anyhow::bail!("Nothing to translate: provide text as an argument or on stdin");
    }
    Ok(trimmed.to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let config = load_config(&cli)?;
    debug!("Provider order: {:?}", config.provider_order());

    if cli.interactive {
        return run_interactive(config).await;
    }

    let input = read_input(cli.text)?;
    let translated = TranslationOrchestrator::from_config(&config)
        .translate(&input)
        .await
        .context("Translation failed")?;

    println!("{}", translated);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_input_trims() {
        assert_eq!(read_input(Some("  你好 \n".to_string())).unwrap(), "你好");
    }

    #[test]
    fn test_read_input_rejects_blank() {
        assert!(read_input(Some("   ".to_string())).is_err());
    }

    #[test]
    fn test_canonical_services() {
        let services = vec!["Google".to_string(), " BAIDU".to_string()];
        let canonical = canonical_services(&services).unwrap();
        assert_eq!(canonical, vec!["google", "baidu"]);

        let config = Config {
            translation_services: canonical,
            ..Config::default()
        };
        assert_eq!(
            config.provider_order(),
            vec![ServiceName::Google, ServiceName::Baidu]
        );

        assert!(canonical_services(&["deepl".to_string()]).is_err());
    }

    #[test]
    fn test_cli_parses_services_list() {
        let cli = Cli::parse_from(["autotranslate", "--services", "google,baidu", "-f", "snake", "hi"]);
        assert_eq!(
            cli.services,
            Some(vec!["google".to_string(), "baidu".to_string()])
        );
        assert_eq!(cli.case_format.as_deref(), Some("snake"));
        assert_eq!(cli.text.as_deref(), Some("hi"));
    }
}
