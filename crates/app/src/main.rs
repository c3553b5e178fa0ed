use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::voice::SpeechCapabilities;
use services::{AppServices, Clock, OnboardingConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
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
    services: AppServices,
    speech_enabled: bool,
}

impl UiApp for DesktopApp {
    fn services(&self) -> AppServices {
        self.services.clone()
    }

    fn speech_enabled(&self) -> bool {
        self.speech_enabled
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    /// `None` keeps the session in memory for the lifetime of the window.
    db_url: Option<String>,
    speech_enabled: bool,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--db <sqlite_url>] [--no-speech]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  session state in memory, speech probed from the webview");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  ONBOARD_DB_URL, ONBOARD_DISABLE_SPEECH=1, RUST_LOG");
}

impl Args {
    fn parse(
        args: impl IntoIterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Option<Self>, ArgsError> {
        let mut db_url = env("ONBOARD_DB_URL")
            .filter(|value| !value.trim().is_empty())
            .map(normalize_sqlite_url);
        let mut speech_enabled = env("ONBOARD_DISABLE_SPEECH").as_deref() != Some("1");

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(&mut args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = Some(normalize_sqlite_url(value));
                }
                "--no-speech" => speech_enabled = false,
                "--help" | "-h" => return Ok(None),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Some(Self {
            db_url,
            speech_enabled,
        }))
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let parsed = Args::parse(std::env::args().skip(1), |key| std::env::var(key).ok()).map_err(
        |e| {
            eprintln!("{e}");
            print_usage();
            e
        },
    )?;
    let Some(args) = parsed else {
        print_usage();
        return Ok(());
    };

    init_tracing();

    let clock = Clock::default_clock();
    let config = OnboardingConfig::default();
    // Capabilities stay closed here; the UI probes the webview once it is up.
    let services = match &args.db_url {
        Some(db_url) => {
            prepare_sqlite_file(db_url)?;
            info!(%db_url, "session state in sqlite");
            AppServices::new_sqlite(db_url, clock, config, SpeechCapabilities::none()).await?
        }
        None => {
            info!("session state in memory");
            AppServices::in_memory(clock, config, SpeechCapabilities::none())
        }
    };

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        services,
        speech_enabled: args.speech_enabled,
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Career Compass")
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

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str], env: &[(&str, &str)]) -> Result<Option<Args>, ArgsError> {
        let env: Vec<(String, String)> = env
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Args::parse(args.iter().map(|a| (*a).to_string()), |key| {
            env.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
        })
    }

    #[test]
    fn defaults_to_memory_with_speech() {
        let args = parse(&[], &[]).unwrap().unwrap();
        assert_eq!(
            args,
            Args {
                db_url: None,
                speech_enabled: true
            }
        );
    }

    #[test]
    fn flags_override_environment() {
        let args = parse(
            &["--db", "sqlite:///tmp/onboard.sqlite3", "--no-speech"],
            &[("ONBOARD_DB_URL", "sqlite://other.sqlite3")],
        )
        .unwrap()
        .unwrap();
        assert_eq!(args.db_url.as_deref(), Some("sqlite:///tmp/onboard.sqlite3"));
        assert!(!args.speech_enabled);
    }

    #[test]
    fn environment_disables_speech() {
        let args = parse(&[], &[("ONBOARD_DISABLE_SPEECH", "1")]).unwrap().unwrap();
        assert!(!args.speech_enabled);
    }

    #[test]
    fn help_and_bad_input() {
        assert!(parse(&["--help"], &[]).unwrap().is_none());
        assert!(matches!(
            parse(&["--db"], &[]),
            Err(ArgsError::MissingValue { flag: "--db" })
        ));
        assert!(matches!(
            parse(&["--db", " "], &[]),
            Err(ArgsError::InvalidDbUrl { .. })
        ));
        assert!(matches!(
            parse(&["--deck"], &[]),
            Err(ArgsError::UnknownArg(_))
        ));
    }

    #[test]
    fn relative_sqlite_paths_become_absolute() {
        let url = normalize_sqlite_url("sqlite:onboard.sqlite3".into());
        assert!(url.starts_with("sqlite:///"), "{url}");
        assert!(url.ends_with("onboard.sqlite3"), "{url}");
        assert_eq!(
            normalize_sqlite_url("sqlite::memory:".into()),
            "sqlite::memory:"
        );
    }
}
