//! `lumen` - inspect and change the persisted theme preference.

use std::path::PathBuf;
use std::rc::Rc;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use lumen::{
    FileStore, OsSignal, Preference, ResolverConfig, RootStyle, SharedSurface, SystemSignal,
    ThemeResolver,
};
use tracing::{debug, info, warn};

mod output;

#[derive(Parser)]
#[command(
    name = "lumen",
    version,
    about = "Resolve and persist a light, dark or system theme preference"
)]
struct Cli {
    /// Preferences file (defaults to <config dir>/lumen/preferences.json)
    #[arg(long, value_name = "FILE", global = true)]
    store: Option<PathBuf>,

    /// YAML config overriding the storage key or palettes
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Print machine-readable JSON
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the persisted preference
    Get,
    /// Persist a new preference
    Set {
        #[arg(value_enum)]
        preference: PreferenceArg,
    },
    /// Switch to the next preference (light, dark, system)
    Cycle,
    /// Print the preference, resolved mode and toast palette
    Status,
    /// Print the root CSS for the resolved mode
    Css,
    /// Follow system color scheme changes until interrupted
    Watch {
        /// Polling interval in milliseconds
        #[arg(long, value_name = "MS", default_value_t = 1000, value_parser = clap::value_parser!(u64).range(50..))]
        interval: u64,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PreferenceArg {
    Light,
    Dark,
    System,
}

impl From<PreferenceArg> for Preference {
    fn from(arg: PreferenceArg) -> Self {
        match arg {
            PreferenceArg::Light => Preference::Light,
            PreferenceArg::Dark => Preference::Dark,
            PreferenceArg::System => Preference::System,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => ResolverConfig::from_yaml_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ResolverConfig::default(),
    };
    let store = match &cli.store {
        Some(path) => FileStore::new(path),
        None => FileStore::open_default().context("locating preferences file")?,
    };
    debug!(path = %store.path().display(), "using preferences file");

    let signal = Rc::new(OsSignal::new());
    let root = SharedSurface::new(RootStyle::new());
    let mut resolver = ThemeResolver::initialize(store, Rc::clone(&signal), root.clone(), config);

    match cli.command {
        Command::Get => println!("{}", output::preference(resolver.preference(), cli.json)?),
        Command::Set { preference } => {
            resolver.set_preference(preference.into());
            println!("{}", output::status(&resolver.snapshot(), signal.current(), cli.json)?);
        }
        Command::Cycle => {
            resolver.cycle();
            println!("{}", output::status(&resolver.snapshot(), signal.current(), cli.json)?);
        }
        Command::Status => {
            println!("{}", output::status(&resolver.snapshot(), signal.current(), cli.json)?);
        }
        Command::Css => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&resolver.binding())?);
            } else {
                print!("{}", root.borrow().to_css());
            }
        }
        Command::Watch { interval } => watch(&resolver, &signal, interval, cli.json),
    }
    Ok(())
}

fn watch(resolver: &ThemeResolver, signal: &OsSignal, interval: u64, json: bool) -> ! {
    if !resolver.is_following_system() {
        warn!(
            preference = %resolver.preference(),
            "preference is not 'system'; system changes will not affect the theme"
        );
    }
    resolver.on_change(move |mode| match output::mode_change(mode, json) {
        Ok(line) => println!("{line}"),
        Err(err) => warn!(%err, "could not format mode change"),
    });

    info!(interval_ms = interval, "watching system color scheme");
    loop {
        thread::sleep(Duration::from_millis(interval));
        signal.poll();
    }
}

fn init_logging(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("lumen={level},lumen_cli={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_set_accepts_tokens() {
        let cli = Cli::try_parse_from(["lumen", "set", "dark"]).unwrap();
        match cli.command {
            Command::Set { preference } => {
                assert_eq!(Preference::from(preference), Preference::Dark)
            }
            _ => panic!("expected set"),
        }
    }

    #[test]
    fn test_set_rejects_unknown_token() {
        assert!(Cli::try_parse_from(["lumen", "set", "sepia"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["lumen", "status", "--json", "-vv", "--store", "p.json"])
            .unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.store, Some(PathBuf::from("p.json")));
    }

    #[test]
    fn test_watch_interval_lower_bound() {
        assert!(Cli::try_parse_from(["lumen", "watch", "--interval", "10"]).is_err());
        let cli = Cli::try_parse_from(["lumen", "watch", "--interval", "250"]).unwrap();
        assert!(matches!(cli.command, Command::Watch { interval: 250 }));
    }
}
