// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Arbor-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Arbor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Arbor CLI entrypoint.
//!
//! By default this runs the interactive TUI. Use `--dump` to print the initial scene as JSON.

use std::error::Error;

use arbor::config::EditorConfig;
use arbor::editor::Editor;

fn print_usage(program: &str) {
    eprintln!("Usage:");
    eprintln!("  {program} [--config <path>] [--log-file <path>]");
    eprintln!("  {program} [--config <path>] --dump");
    eprintln!();
    eprintln!("--config reads a JSON editor config; omitted fields keep their defaults.");
    eprintln!("--log-file appends logs to the given file (filter via ARBOR_LOG, default info).");
    eprintln!("--dump prints the initial scene as JSON and exits; logs go to stderr.");
    eprintln!();
    eprintln!("ARBOR_PALETTE overrides the TUI colors (fg,bg,level0..level6).");
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    config_path: Option<String>,
    log_file: Option<String>,
    dump: bool,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                if options.config_path.is_some() {
                    return Err(());
                }
                options.config_path = Some(args.next().ok_or(())?);
            }
            "--log-file" => {
                if options.log_file.is_some() {
                    return Err(());
                }
                options.log_file = Some(args.next().ok_or(())?);
            }
            "--dump" => {
                if options.dump {
                    return Err(());
                }
                options.dump = true;
            }
            _ => return Err(()),
        }
    }

    if options.dump && options.log_file.is_some() {
        return Err(());
    }

    Ok(options)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "arbor".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        if options.dump {
            arbor::logging::init_stderr()?;
        } else if let Some(path) = options.log_file.as_deref() {
            arbor::logging::init_file(path)?;
        }

        let config = match options.config_path.as_deref() {
            Some(path) => EditorConfig::load(path)?,
            None => EditorConfig::default(),
        };

        if options.dump {
            let editor = Editor::new(config, None);
            println!("{}", editor.scene().to_json_pretty()?);
            return Ok(());
        }

        arbor::tui::run(config)
    })();

    if let Err(err) = result {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
