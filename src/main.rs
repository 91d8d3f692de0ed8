// SPDX-License-Identifier: MPL-2.0
use datastore_home::app::{self, Flags};
use datastore_home::i18n::{keys, CatalogStore};
use std::process::ExitCode;

const HELP: &str = "\
BAM Data Store home

USAGE:
  datastore_home [OPTIONS]

OPTIONS:
  -h, --help              Print this help
  --route <PATH>          Open this route, e.g. /de
  --lang <CODE>           Open the home page of this language, e.g. de
  --config-dir <DIR>      Read settings.toml from this directory
                          (also DATASTORE_HOME_CONFIG_DIR)
";

fn parse_args() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        route: args.opt_value_from_str("--route")?,
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    Ok(Some(flags))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let flags = match parse_args() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("{err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    let catalogs = match CatalogStore::load_all(keys::ALL) {
        Ok(catalogs) => catalogs,
        Err(err) => {
            tracing::error!(%err, "cannot start without message catalogs");
            return ExitCode::FAILURE;
        }
    };

    match app::run(flags, catalogs) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "application error");
            ExitCode::FAILURE
        }
    }
}
