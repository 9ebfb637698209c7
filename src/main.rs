// Network Manager - Main Entry Point
// Copyright (C) 2026 Christos A. Daggas
// SPDX-License-Identifier: MIT

//! # nm-meta
//!
//! Command-line introspection of the property registry: list settings and
//! properties, show help and legal values, inspect the companion graph and
//! try values against a scratch connection.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use nm_meta::env::{Environment, RecordingWarnSink, WarnLevel};
use nm_meta::inventory::SysfsInventory;
use nm_meta::meta::{registry, SetValue};
use nm_meta::models::{MetaConfig, OutputMode, CRATE_VERSION};
use nm_meta::store::Connection;
use nm_meta::Result;

/// Human-readable application name.
pub const APP_NAME: &str = "nm-meta";

/// Print version information and exit.
fn print_version() {
    println!("{} {}", APP_NAME, CRATE_VERSION);
    println!("Copyright (C) 2026 Christos A. Daggas");
    println!("License: MIT");
}

/// Print help information and exit.
fn print_help() {
    println!("Usage: {} [OPTIONS] <COMMAND>", APP_NAME);
    println!();
    println!("Inspect the network connection property registry.");
    println!();
    println!("Commands:");
    println!("  list [setting]                       List settings, or the properties of one");
    println!("  describe <setting>.<property>        Show the help text of a property");
    println!("  values <setting>.<property>          Show the legal values of a property");
    println!("  parts <type> [master-type]           Show the settings a connection may carry");
    println!("  check <setting>.<property> <text>    Apply text to a scratch connection");
    println!();
    println!("Options:");
    println!("  -h, --help           Show this help message and exit");
    println!("  -v, --version        Show version information and exit");
    println!("  -d, --debug          Enable debug logging");
    println!("      --pretty         Render values in pretty mode");
    println!("      --show-secrets   Reveal secret values");
    println!("      --config <path>  Read configuration from <path>");
    println!();
    println!("Environment variables:");
    println!("  RUST_LOG             Set log level (trace, debug, info, warn, error)");
}

/// Command-line options after parsing.
#[derive(Debug, Default)]
struct Options {
    debug: bool,
    pretty: bool,
    show_secrets: bool,
    config: Option<PathBuf>,
    command: Vec<String>,
}

enum Parsed {
    Run(Options),
    Exit(ExitCode),
}

fn parse_args(args: &[String]) -> Parsed {
    let mut opts = Options::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                return Parsed::Exit(ExitCode::SUCCESS);
            }
            "-v" | "--version" => {
                print_version();
                return Parsed::Exit(ExitCode::SUCCESS);
            }
            "-d" | "--debug" => opts.debug = true,
            "--pretty" => opts.pretty = true,
            "--show-secrets" => opts.show_secrets = true,
            "--config" => match iter.next() {
                Some(path) => opts.config = Some(PathBuf::from(path)),
                None => {
                    eprintln!("Option '--config' requires a path.");
                    return Parsed::Exit(ExitCode::FAILURE);
                }
            },
            _ => {
                if arg.starts_with('-') && opts.command.is_empty() {
                    eprintln!("Unknown option: {}", arg);
                    eprintln!("Try '--help' for more information.");
                    return Parsed::Exit(ExitCode::FAILURE);
                }
                opts.command.push(arg.clone());
            }
        }
    }
    Parsed::Run(opts)
}

fn init_logging(level: &str, debug: bool) {
    let level = if debug { "debug" } else { level };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_list(setting: Option<&str>, config: &MetaConfig) -> Result<()> {
    let reg = registry();
    match setting {
        None => {
            for s in reg.settings() {
                let alias = s.alias.map(|a| format!(" ({})", a)).unwrap_or_default();
                let marker = if s.is_connection_type() { "*" } else { " " };
                println!("{} {}{} - {}", marker, s.name, alias, s.pretty_name);
            }
        }
        Some(name) => {
            let s = reg.setting(name)?;
            let empty = Connection::new();
            for prop in s.iter() {
                let mut notes = Vec::new();
                if let Some(alias) = prop.alias {
                    notes.push(format!("alias {}", alias));
                }
                if prop.is_secret {
                    notes.push("secret".to_string());
                }
                if prop.read_only {
                    notes.push("read-only".to_string());
                }
                let notes = if notes.is_empty() {
                    String::new()
                } else {
                    format!(" [{}]", notes.join(", "))
                };
                let default = prop.get(&empty, config.output, config.show_secrets);
                println!(
                    "{}.{} ({}){} = '{}'",
                    s.name,
                    prop.name,
                    prop.contract.kind(),
                    notes,
                    default.text
                );
            }
        }
    }
    Ok(())
}

fn cmd_describe(qualified: &str) -> Result<()> {
    print!("{}", registry().lookup(qualified)?.describe());
    Ok(())
}

fn cmd_values(qualified: &str) -> Result<()> {
    let prop = registry().lookup(qualified)?;
    let inventory = SysfsInventory::new();
    let sink = RecordingWarnSink::new();
    let values = prop.values(&Environment::new(&sink, &inventory));
    if values.is_empty() {
        println!("(free-form)");
    }
    for value in values {
        println!("{}", value);
    }
    Ok(())
}

fn cmd_parts(connection_type: &str, master: Option<&str>) -> Result<()> {
    for part in registry().resolve_companions(connection_type, master)? {
        let kind = if part.mandatory { "mandatory" } else { "optional" };
        println!("{} ({})", part.setting, kind);
    }
    Ok(())
}

fn cmd_check(qualified: &str, text: &str, config: &MetaConfig) -> Result<()> {
    let prop = registry().lookup(qualified)?;
    let sink = RecordingWarnSink::new();
    let env = Environment::with_warnings(&sink);
    let mut conn = Connection::new();

    let result = prop.set(&env, &mut conn, SetValue::Value(text.to_string()));
    for (level, message) in sink.take() {
        match level {
            WarnLevel::Info => println!("info: {}", message),
            WarnLevel::Warn => println!("warning: {}", message),
        }
    }
    result?;

    let parsable = prop.get(&conn, OutputMode::Parsable, config.show_secrets);
    let pretty = prop.get(&conn, OutputMode::Pretty, config.show_secrets);
    println!("parsable: {}", parsable.text);
    println!("pretty:   {}", pretty.text);
    if parsable.is_default {
        println!("(default value)");
    }
    Ok(())
}

fn run(opts: &Options, config: &MetaConfig) -> Result<bool> {
    let args: Vec<&str> = opts.command.iter().map(String::as_str).collect();
    match args.as_slice() {
        ["list"] => cmd_list(None, config)?,
        ["list", setting] => cmd_list(Some(*setting), config)?,
        ["describe", qualified] => cmd_describe(qualified)?,
        ["values", qualified] => cmd_values(qualified)?,
        ["parts", ty] => cmd_parts(ty, None)?,
        ["parts", ty, master] => cmd_parts(ty, Some(*master))?,
        ["check", qualified, text] => cmd_check(qualified, text, config)?,
        _ => return Ok(false),
    }
    Ok(true)
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let mut opts = match parse_args(&args) {
        Parsed::Run(opts) => opts,
        Parsed::Exit(code) => return code,
    };

    let mut config = match MetaConfig::load_or_default(opts.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    if opts.pretty {
        config.output = OutputMode::Pretty;
    }
    opts.show_secrets |= config.show_secrets;
    config.show_secrets = opts.show_secrets;

    init_logging(&config.log_level, opts.debug);
    tracing::debug!("Starting {} v{} ({} output)", APP_NAME, CRATE_VERSION, config.output.as_str());

    match run(&opts, &config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => {
            eprintln!("Missing or unknown command.");
            eprintln!("Try '--help' for more information.");
            ExitCode::FAILURE
        }
        Err(e) => {
            match e.property() {
                Some(property) if e.is_parse_error() => {
                    eprintln!("Error: failed to set '{}' property: {}", property, e)
                }
                _ => eprintln!("Error: {}", e),
            }
            ExitCode::FAILURE
        }
    }
}
