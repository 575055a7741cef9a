// SPDX-License-Identifier: MPL-2.0
use candidate_studio::app::{self, paths, Flags};
use std::process::ExitCode;

fn main() -> ExitCode {
    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(error) => {
            eprintln!("Invalid command line arguments: {error}");
            return ExitCode::FAILURE;
        }
    };

    // Must happen before anything resolves data or config paths.
    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());

    if let Err(error) = app::run(flags) {
        eprintln!("Failed to start Candidate Studio: {error}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        i18n_dir: args.opt_value_from_str("--i18n-dir")?,
        data_dir: args.opt_value_from_str("--data-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    })
}
