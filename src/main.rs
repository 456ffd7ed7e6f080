// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Daybands-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Daybands and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Daybands CLI entrypoint.
//!
//! Reads a JSON schedule document (from a path or stdin), lays out every day and prints either
//! the layout as JSON or a text preview of the rows.
//!
//! Log verbosity follows `RUST_LOG` (default `warn`); logs go to stderr.

use std::error::Error;
use std::fs::File;
use std::io::{self, BufReader, Write};

use daybands::format::{DocumentError, LayoutDocument, ScheduleDocument};
use daybands::render::{render_days_text, TextRenderOptions};
use daybands::{layout_days, LayoutConfig};
use tracing_subscriber::EnvFilter;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<document.json>] [--config <config.json>] [--row-height <px>]\n  {program} [<document.json>] [--config <config.json>] --text [--columns <n>] [--rows <n>]\n\nWithout a document path the schedule is read from stdin.\n--config loads layout settings from JSON; --row-height overrides the configured row height.\n--text prints a preview of the rows instead of the layout JSON."
    );
}

#[derive(Debug, Default, Clone, PartialEq)]
struct CliOptions {
    document: Option<String>,
    config: Option<String>,
    row_height: Option<f64>,
    text: bool,
    columns: Option<usize>,
    rows: Option<usize>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                if options.config.is_some() {
                    return Err(());
                }
                options.config = Some(args.next().ok_or(())?);
            }
            "--row-height" => {
                if options.row_height.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                let px: f64 = raw.parse().map_err(|_| ())?;
                options.row_height = Some(px);
            }
            "--text" => {
                if options.text {
                    return Err(());
                }
                options.text = true;
            }
            "--columns" => {
                if options.columns.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.columns = Some(raw.parse().map_err(|_| ())?);
            }
            "--rows" => {
                if options.rows.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.rows = Some(raw.parse().map_err(|_| ())?);
            }
            _ if arg.starts_with('-') && arg != "-" => return Err(()),
            _ => {
                if options.document.is_some() {
                    return Err(());
                }
                options.document = Some(arg);
            }
        }
    }

    if !options.text && (options.columns.is_some() || options.rows.is_some()) {
        return Err(());
    }

    Ok(options)
}

fn load_config(options: &CliOptions) -> Result<LayoutConfig, Box<dyn Error>> {
    let mut config = match &options.config {
        Some(path) => LayoutConfig::from_json_file(path)?,
        None => LayoutConfig::default(),
    };
    if let Some(row_height) = options.row_height {
        config.row_height = row_height;
        config.validate()?;
    }
    Ok(config)
}

fn read_document(options: &CliOptions) -> Result<ScheduleDocument, DocumentError> {
    match options.document.as_deref() {
        None | Some("-") => ScheduleDocument::from_reader(io::stdin().lock()),
        Some(path) => {
            let file = File::open(path)
                .map_err(|source| DocumentError::Io { path: Some(path.into()), source })?;
            ScheduleDocument::from_reader(BufReader::new(file))
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "daybands".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        init_logging();

        let config = load_config(&options)?;
        let days = read_document(&options)?.into_days(config.anchor)?;
        tracing::info!(days = days.len(), "loaded schedule");

        let layouts = layout_days(&days, &config);

        let stdout = io::stdout();
        let mut out = stdout.lock();
        if options.text {
            let defaults = TextRenderOptions::default();
            let render_options = TextRenderOptions {
                columns: options.columns.unwrap_or(defaults.columns),
                rows: options.rows.unwrap_or(defaults.rows),
                show_hours: true,
            };
            let text = render_days_text(&days, &layouts, &config, &render_options)?;
            writeln!(out, "{text}")?;
        } else {
            LayoutDocument::new(&days, &layouts, &config).write_pretty(&mut out)?;
            writeln!(out)?;
        }

        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("daybands: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_options, CliOptions};

    fn parse(args: &[&str]) -> Result<CliOptions, ()> {
        parse_options(args.iter().map(|arg| (*arg).to_owned()))
    }

    #[test]
    fn parses_empty_args() {
        let options = parse(&[]).expect("parse options");
        assert_eq!(options, CliOptions::default());
    }

    #[test]
    fn parses_document_and_config() {
        let options =
            parse(&["week.json", "--config", "layout.json"]).expect("parse options");
        assert_eq!(options.document.as_deref(), Some("week.json"));
        assert_eq!(options.config.as_deref(), Some("layout.json"));
        assert!(!options.text);
    }

    #[test]
    fn parses_stdin_dash_as_document() {
        let options = parse(&["-"]).expect("parse options");
        assert_eq!(options.document.as_deref(), Some("-"));
    }

    #[test]
    fn parses_text_preview_options() {
        let options =
            parse(&["--text", "--columns", "48", "--rows", "4"]).expect("parse options");
        assert!(options.text);
        assert_eq!(options.columns, Some(48));
        assert_eq!(options.rows, Some(4));
    }

    #[test]
    fn parses_row_height() {
        let options = parse(&["--row-height", "60"]).expect("parse options");
        assert_eq!(options.row_height, Some(60.0));
    }

    #[test]
    fn rejects_preview_options_without_text() {
        parse(&["--columns", "48"]).unwrap_err();
        parse(&["--rows", "4"]).unwrap_err();
    }

    #[test]
    fn rejects_unknown_args() {
        parse(&["--nope"]).unwrap_err();
    }

    #[test]
    fn rejects_duplicate_flags_and_documents() {
        parse(&["--text", "--text"]).unwrap_err();
        parse(&["--config", "a.json", "--config", "b.json"]).unwrap_err();
        parse(&["one.json", "two.json"]).unwrap_err();
    }

    #[test]
    fn rejects_missing_and_malformed_values() {
        parse(&["--config"]).unwrap_err();
        parse(&["--row-height", "tall"]).unwrap_err();
        parse(&["--text", "--columns", "-3"]).unwrap_err();
    }
}
