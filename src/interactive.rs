use crate::config::{CaseFormat, Config, ServiceName};
use crate::translate::{Translation, TranslationOrchestrator};
use console::style;
use dialoguer::{Confirm, Input, Select};

const CASE_FORMATS: &[(CaseFormat, &str)] = &[
    (CaseFormat::None, "leave translation untouched"),
    (CaseFormat::Pascal, "GetUserName"),
    (CaseFormat::Camel, "getUserName"),
    (CaseFormat::Snake, "get_user_name"),
    (CaseFormat::Space, "Get User Name"),
];

/// Words that end the session.
const EXIT_COMMANDS: &[&str] = &[":q", ":quit", "exit"];

/// Prompt for text repeatedly until the user enters nothing or an exit command.
pub async fn run_interactive(config: Config) -> anyhow::Result<()> {
    print_header();

    let mut config = setup_baidu_credentials(config)?;
    config.english_case_format = select_case_format(config.case_format())?.to_string();

    println!(
        "  Providers: {}",
        style(format_services(&config.provider_order())).cyan()
    );
    println!("  Enter an empty line or :q to quit.\n");

    loop {
        let line: String = Input::new()
            .with_prompt("Text")
            .allow_empty(true)
            .interact_text()?;

        let text = line.trim();
        if text.is_empty() || EXIT_COMMANDS.contains(&text) {
            break;
        }

        // Config is read fresh for every request.
        match TranslationOrchestrator::from_config(&config)
            .translate_detailed(text)
            .await
        {
            Ok(translation) => {
                println!("{} {}", style("→").green(), style(&translation.text).bold());
                println!("  {}\n", style(describe(text, &translation)).dim());
            }
            Err(e) => {
                println!("{} {}\n", style("✗").red(), e);
            }
        }
    }

    Ok(())
}

const HEADER: [&str; 3] = [
    "╔═══════════════════════════════════════════════════╗",
    "║         autotranslate - Chinese ⇄ English         ║",
    "╚═══════════════════════════════════════════════════╝",
];

fn print_header() {
    println!();
    for line in HEADER {
        println!("{}", style(line).cyan());
    }
    println!();
}

fn setup_baidu_credentials(mut config: Config) -> anyhow::Result<Config> {
    if !config.provider_order().contains(&ServiceName::Baidu) || config.has_baidu_credentials() {
        return Ok(config);
    }

    println!(
        "{} Baidu credentials not configured; baidu will be skipped",
        style("!").yellow()
    );

    if !Confirm::new()
        .with_prompt("Configure Baidu App ID and key now?")
        .default(false)
        .interact()?
    {
        return Ok(config);
    }

    let app_id: String = Input::new().with_prompt("Baidu App ID").interact_text()?;
    let app_key: String = Input::new().with_prompt("Baidu App Key").interact_text()?;

    if app_id.trim().is_empty() || app_key.trim().is_empty() {
        anyhow::bail!("Both App ID and App Key are required");
    }

    config.baidu_app_id = Some(app_id.trim().to_string());
    config.baidu_app_key = Some(app_key.trim().to_string());

    if Confirm::new()
        .with_prompt("Save credentials to config file?")
        .default(true)
        .interact()?
    {
        let path = config.save()?;
        println!(
            "{} Credentials saved to {}\n",
            style("✓").green(),
            path.display()
        );
    }

    Ok(config)
}

fn select_case_format(current: CaseFormat) -> anyhow::Result<CaseFormat> {
    let items: Vec<String> = CASE_FORMATS
        .iter()
        .map(|(format, example)| format!("{} ({})", format, example))
        .collect();

    let default = CASE_FORMATS
        .iter()
        .position(|(format, _)| *format == current)
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Case style for English output")
        .items(&items)
        .default(default)
        .interact()?;

    Ok(CASE_FORMATS[selection].0)
}

fn format_services(services: &[ServiceName]) -> String {
    services
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" → ")
}

fn describe(input: &str, translation: &Translation) -> String {
    let mut line = format!("{} via {}", translation.languages, translation.provider);
    if translation.source_text != input {
        line.push_str(&format!(", sent as {:?}", translation.source_text));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::LanguagePair;

    #[test]
    fn test_header_rows_have_equal_width() {
        let widths: Vec<usize> = HEADER
            .iter()
            .map(|line| console::measure_text_width(line))
            .collect();
        assert!(widths.iter().all(|w| *w == widths[0]), "{widths:?}");
        assert!(HEADER[1].starts_with('║') && HEADER[1].ends_with('║'));
    }

    #[test]
    fn test_format_services() {
        assert_eq!(
            format_services(&[ServiceName::Google, ServiceName::Baidu]),
            "google → baidu"
        );
        assert_eq!(format_services(&[]), "");
    }

    #[test]
    fn test_case_formats_cover_every_style() {
        for format in [
            CaseFormat::None,
            CaseFormat::Pascal,
            CaseFormat::Camel,
            CaseFormat::Snake,
            CaseFormat::Space,
        ] {
            assert!(CASE_FORMATS.iter().any(|(f, _)| *f == format));
        }
    }

    #[test]
    fn test_describe_mentions_provider() {
        let translation = Translation {
            text: "获取用户名".to_string(),
            source_text: "get user name".to_string(),
            languages: LanguagePair::for_text("getUserName"),
            provider: ServiceName::MyMemory,
        };
        assert_eq!(
            describe("getUserName", &translation),
            "en->zh via mymemory, sent as \"get user name\""
        );

        let translation = Translation {
            text: "Hello".to_string(),
            source_text: "你好".to_string(),
            languages: LanguagePair::for_text("你好"),
            provider: ServiceName::Google,
        };
        assert_eq!(describe("你好", &translation), "zh->en via google");
    }
}
