// SPDX-License-Identifier: MPL-2.0
use image_finder::app::{self, paths, Flags};
use image_finder::config;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
image_finder - search Pixabay and browse the results

USAGE:
    image_finder [OPTIONS] [QUERY]

OPTIONS:
    --lang <ID>         UI language (e.g. en-US, fr)
    --config-dir <DIR>  Directory holding settings.toml
    --api-key <KEY>     Pixabay API key (overrides PIXABAY_API_KEY and settings.toml)
    --init-config       Write a default settings.toml if none exists, then exit
    -h, --help          Print this help
";

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("image_finder=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> ExitCode {
    init_tracing();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    let parsed = (|| -> Result<_, pico_args::Error> {
        let lang: Option<String> = args.opt_value_from_str("--lang")?;
        let config_dir: Option<String> = args.opt_value_from_str("--config-dir")?;
        let api_key: Option<String> = args.opt_value_from_str("--api-key")?;
        let init_config = args.contains("--init-config");
        Ok((lang, config_dir, api_key, init_config))
    })();

    let (lang, config_dir, api_key, init_config) = match parsed {
        Ok(values) => values,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    // Remaining free arguments form the initial query ("red fox" or red fox).
    let words: Vec<String> = args
        .finish()
        .into_iter()
        .filter_map(|arg| arg.into_string().ok())
        .collect();
    let query = (!words.is_empty()).then(|| words.join(" "));

    paths::init_cli_overrides(config_dir);

    if init_config {
        return match config::init_default(None) {
            Ok(Some((path, true))) => {
                println!("Created {}", path.display());
                ExitCode::SUCCESS
            }
            Ok(Some((path, false))) => {
                println!("{} already exists", path.display());
                ExitCode::SUCCESS
            }
            Ok(None) => {
                eprintln!("error: no configuration directory available");
                ExitCode::FAILURE
            }
            Err(err) => {
                eprintln!("error: {err}");
                ExitCode::FAILURE
            }
        };
    }

    let flags = Flags {
        lang,
        api_key,
        query,
    };

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "application exited with an error");
            ExitCode::FAILURE
        }
    }
}
