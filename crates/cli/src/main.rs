//! Streetlight command-line entry point
//!
//! Reads sign text from the arguments or stdin (one sign per line) and prints
//! it in the requested script.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use streetlight_config::{load_settings, Settings};
use streetlight_core::Script;
use streetlight_transliteration::{romanize, TransliterationService};

#[derive(Parser, Debug)]
#[command(name = "streetlight")]
#[command(about = "Detect the script of sign text and transliterate it into another Indian script")]
#[command(version)]
struct Cli {
    /// Target script: ISO 15924 code (Taml), script name or language name
    #[arg(short, long)]
    to: Option<Script>,

    /// Source script; detected from the text when omitted or unrecognised
    #[arg(short, long)]
    from: Option<String>,

    /// Print the ISO 15919 romanization instead
    #[arg(long, conflicts_with = "detect_only")]
    latin: bool,

    /// Only report the detected script
    #[arg(long)]
    detect_only: bool,

    /// Print JSON records
    #[arg(long)]
    json: bool,

    /// Text to convert; read from stdin when absent
    text: Vec<String>,
}

#[derive(Debug, Serialize)]
struct Detection<'a> {
    text: &'a str,
    script: Option<Script>,
    code: Option<&'static str>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Priority: env vars > config/{env} > config/default > defaults
    let env = std::env::var("STREETLIGHT_ENV").ok();
    let settings = match load_settings(env.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            // Tracing not yet initialized
            eprintln!("Warning: Failed to load config: {}. Using defaults.", e);
            Settings::default()
        }
    };

    init_tracing(&settings);
    tracing::debug!(
        environment = ?settings.environment,
        config_env = env.as_deref().unwrap_or("default"),
        "Configuration loaded"
    );

    let service = TransliterationService::new(&settings.transliteration);
    let source = cli.from.as_deref().and_then(resolve_source);
    let target = cli.to.unwrap_or_else(|| service.default_target());

    let lines: Vec<String> = if cli.text.is_empty() {
        match io::stdin().lock().lines().collect::<Result<Vec<_>, _>>() {
            Ok(lines) => lines,
            Err(e) => {
                eprintln!("error: failed to read stdin: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        vec![cli.text.join(" ")]
    };

    let mut stdout = io::stdout().lock();
    for line in lines.iter().filter(|l| !l.trim().is_empty()) {
        let rendered = match render_line(&cli, &service, line, source, target) {
            Ok(rendered) => rendered,
            Err(e) => {
                eprintln!("error: {}", e);
                return ExitCode::FAILURE;
            }
        };
        if writeln!(stdout, "{}", rendered).is_err() {
            // Closed pipe
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}

/// Parse `--from`, falling back to detection for names we do not know
fn resolve_source(raw: &str) -> Option<Script> {
    let script = Script::from_str_loose(raw);
    if script.is_none() {
        tracing::warn!(from = raw, "Unknown source script, detecting from text");
    }
    script
}

fn render_line(
    cli: &Cli,
    service: &TransliterationService,
    line: &str,
    source: Option<Script>,
    target: Script,
) -> serde_json::Result<String> {
    if cli.detect_only {
        let script = source.or_else(|| service.detect_script(line));
        return if cli.json {
            serde_json::to_string(&Detection {
                text: line,
                script,
                code: script.map(|s| s.code()),
            })
        } else {
            Ok(script.map_or_else(|| "unknown".to_string(), |s| format!("{} ({})", s.code(), s)))
        };
    }

    if cli.latin {
        let latin = romanize(line, source);
        return if cli.json {
            serde_json::to_string(&serde_json::json!({ "text": line, "latin": latin }))
        } else {
            Ok(latin)
        };
    }

    let result = service.transliterate(line, target, source);
    if cli.json {
        serde_json::to_string(&result)
    } else {
        Ok(result.transliterated_text)
    }
}

/// Initialize tracing (stderr, so stdout carries only results)
fn init_tracing(config: &Settings) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = &config.observability.log_level;
        format!(
            "streetlight={level},streetlight_transliteration={level},streetlight_config={level}"
        )
        .into()
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);
    let fmt_layer = if config.observability.log_json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(io::stderr)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer().with_writer(io::stderr).boxed()
    };
    subscriber.with(fmt_layer).init();
}
