//! modhelper - inspect what a mod manager would display
//!
//! Feeds host-shaped JSON records through the display helpers so they can be
//! checked from a shell.
//!
//! # Usage
//!
//! ```bash
//! modhelper --game lethal-company icon mod.json    # Icon source of a mod
//! cat mod.json | modhelper outdated -             # true/false
//! modhelper separator entry.json                  # {"type":"custom","char":";"}
//! modhelper community Bob/CoolMod                 # Community page URL
//! modhelper size 1536                             # 1.5kB
//! modhelper since 2024-01-01T00:00:00Z            # 2 years
//! modhelper case title someConfigKey              # Some Config Key
//! ```

use clap::{Parser, Subcommand};
use modhelper::config::{self, AppConfig};
use modhelper::helpers::{self, CaseStyle, Locale};
use modhelper::{Dependant, Error, Game, Mod, icon_src};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "modhelper")]
#[command(about = "Display helpers for a Thunderstore mod manager", long_about = None)]
#[command(version)]
struct Cli {
    /// Slug of the active game (overrides the config file)
    #[arg(short, long, global = true, value_name = "SLUG")]
    game: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the icon source of a mod (`-` reads stdin)
    Icon {
        file: PathBuf,
        /// Read the record as a dependency reference instead of a mod
        #[arg(short, long)]
        dependant: bool,
    },
    /// Print whether a newer version of a mod is known
    Outdated { file: PathBuf },
    /// Print the list separator of a config entry as JSON
    Separator { file: PathBuf },
    /// Print the community page URL for `{author}/{name}`
    Community { path: String },
    /// Shorten a byte count
    Size { bytes: u64 },
    /// Shorten a number
    Num { value: u64 },
    /// Format seconds as H:MM:SS
    Duration { seconds: u64 },
    /// Print how long ago an RFC 3339 timestamp was
    Since {
        timestamp: String,
        /// Label language (en, zh-cn)
        #[arg(short, long)]
        locale: Option<Locale>,
    },
    /// Convert text to sentence, title or capitalized case
    Case { style: CaseStyle, text: String },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let config = config::load_config();

    match handle_cli(cli, &config) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn handle_cli(cli: Cli, config: &AppConfig) -> modhelper::Result<String> {
    let game = cli.game.map(Game::new).or_else(|| config.active_game.clone());

    let output = match cli.command {
        Commands::Icon { file, dependant } => {
            let converter = config.file_src_converter();
            let json = read_input(&file)?;
            if dependant {
                let dep: Dependant = serde_json::from_str(&json)?;
                icon_src(&dep, &game, &converter)
            } else {
                let m: Mod = serde_json::from_str(&json)?;
                icon_src(&m, &game, &converter)
            }
        }
        Commands::Outdated { file } => {
            let m: Mod = serde_json::from_str(&read_input(&file)?)?;
            m.is_outdated().to_string()
        }
        Commands::Separator { file } => {
            let entry: modhelper::ConfigEntry = serde_json::from_str(&read_input(&file)?)?;
            serde_json::to_string(&modhelper::get_list_separator(&entry))?
        }
        Commands::Community { path } => modhelper::community_url(&game, &path),
        Commands::Size { bytes } => helpers::shorten_file_size(bytes),
        Commands::Num { value } => helpers::shorten_num(value),
        Commands::Duration { seconds } => helpers::format_time(seconds),
        Commands::Since { timestamp, locale } => {
            let date = chrono::DateTime::parse_from_rfc3339(&timestamp).map_err(|source| {
                Error::InvalidTimestamp {
                    input: timestamp.clone(),
                    source,
                }
            })?;
            let locale = locale.unwrap_or(config.locale);
            helpers::time_since_now(date.with_timezone(&chrono::Utc), locale)
        }
        Commands::Case { style, text } => style.apply(&text),
    };

    Ok(output)
}

/// Reads a JSON record from a file, or stdin for `-`
fn read_input(path: &Path) -> modhelper::Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        tracing::debug!("Reading {}", path.display());
        Ok(std::fs::read_to_string(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn run(args: &[&str]) -> modhelper::Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("modhelper").chain(args.iter().copied()))
            .unwrap();
        handle_cli(cli, &AppConfig::default())
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_formatting_commands() {
        assert_eq!(run(&["size", "1536"]).unwrap(), "1.5kB");
        assert_eq!(run(&["num", "12345"]).unwrap(), "12.3k");
        assert_eq!(run(&["duration", "3661"]).unwrap(), "1:01:01");
        assert_eq!(run(&["case", "title", "someConfigKey"]).unwrap(), "Some Config Key");
    }

    #[test]
    fn test_community_uses_game_flag() {
        assert_eq!(
            run(&["--game", "valheim", "community", "Bob/CoolMod"]).unwrap(),
            "https://thunderstore.io/c/valheim/p/Bob/CoolMod/"
        );
    }

    #[test]
    fn test_since_rejects_bad_timestamp() {
        let err = run(&["since", "yesterday"]).unwrap_err();
        assert!(matches!(err, Error::InvalidTimestamp { .. }));
    }

    #[test]
    fn test_icon_from_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "type": "local", "name": "Patch", "icon": null }}"#).unwrap();
        let path = file.path().to_str().unwrap();

        assert_eq!(
            run(&["-g", "lethal-company", "icon", path]).unwrap(),
            "games/lethal-company.webp"
        );
        assert_eq!(
            run(&["-g", "lethal-company", "icon", "--dependant", path]).unwrap(),
            "games/lethal-company.webp"
        );
    }

    #[test]
    fn test_separator_from_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "name": "Keys", "description": "ListSeparator=|" }}"#).unwrap();
        let path = file.path().to_str().unwrap();

        assert_eq!(run(&["separator", path]).unwrap(), r#"{"type":"custom","char":"|"}"#);
    }
}
