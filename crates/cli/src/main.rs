use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use tinyalsa_version::{exit_code_for, init_logger, load_config, version_command, ConfigOverrides};

/// Print the tinyalsa version string for the Meson build.
///
/// Reads `TINYALSA_VERSION_STRING` from `include/tinyalsa/version.h` under the
/// source root (`MESON_SOURCE_ROOT`, or the current directory) and prints it.
#[derive(Parser, Debug)]
#[command(
    name = "tinyalsa-version",
    version,
    about = "Extract the tinyalsa version string from its public header",
    long_about = None
)]
struct Cli {
    /// Source root directory. Overrides MESON_SOURCE_ROOT.
    #[arg(long)]
    root: Option<PathBuf>,

    /// JSON file overriding the header namespace, file name, or macro name.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory under `include/` holding the header.
    #[arg(long)]
    namespace: Option<String>,

    /// Header file name.
    #[arg(long)]
    header: Option<String>,

    /// Macro carrying the version literal.
    #[arg(long)]
    macro_name: Option<String>,

    /// Increase logging level (repeatable).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let overrides = ConfigOverrides {
        namespace: cli.namespace,
        header: cli.header,
        macro_name: cli.macro_name,
    };

    let result = load_config(cli.config.as_deref(), overrides)
        .and_then(|config| version_command(cli.root, config));

    match result {
        Ok(version) => {
            println!("{version}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Warning: {err:#}");
            ExitCode::from(exit_code_for(&err))
        }
    }
}
