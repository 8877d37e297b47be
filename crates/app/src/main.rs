mod logging;

use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use network::config::{BASE_URL_ENV, DEFAULT_BASE_URL};
use network::{ApiConfig, HttpQuestionsApi};
use services::{QuestionsRepo, QuestionsRepository};
use tracing::info;
use ui::{App, UiApp, build_app_context};

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidBaseUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidBaseUrl { raw } => write!(f, "invalid --base-url value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    questions_repo: Arc<dyn QuestionsRepository>,
}

impl UiApp for DesktopApp {
    fn app_name(&self) -> &str {
        "Quiz"
    }

    fn questions_repo(&self) -> Arc<dyn QuestionsRepository> {
        Arc::clone(&self.questions_repo)
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    base_url: Option<String>,
    help: bool,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut parsed = Self::default();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--base-url" => {
                    let value = require_value(args, "--base-url")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidBaseUrl { raw: value });
                    }
                    parsed.base_url = Some(value);
                }
                "--help" | "-h" => parsed.help = true,
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }

    fn api_config(&self) -> Result<ApiConfig, Box<dyn std::error::Error>> {
        let config = match self.base_url.as_deref() {
            Some(raw) => ApiConfig::new(raw)?,
            None => ApiConfig::from_env()?,
        };
        Ok(config)
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--base-url <url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --base-url {DEFAULT_BASE_URL}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {BASE_URL_ENV}, RUST_LOG");
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let args = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    if args.help {
        print_usage();
        return Ok(());
    }

    logging::init();

    let config = args.api_config()?;
    info!(base_url = %config.base_url(), "starting quiz");

    let api = Arc::new(HttpQuestionsApi::new(config));
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        questions_repo: Arc::new(QuestionsRepo::new(api)),
    });
    let context = build_app_context(&app);

    // Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Quiz")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
