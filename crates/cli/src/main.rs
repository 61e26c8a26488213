// FILE: crates/cli/src/main.rs

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{Arg, Command};

mod commands;

fn build_cli() -> Command {
    Command::new("audioengine")
        .version("1.0.0")
        .author("HyperRoute Team")
        .about("HyperRoute Audio Engine - playback device and audio session queries")
        .override_usage(
            "audioengine list-devices\n       \
             audioengine list-sessions\n       \
             audioengine route <APP> <DEVICE>",
        )
        .subcommand(Command::new("list-devices").about("List active playback devices as JSON"))
        .subcommand(Command::new("list-sessions").about("List application audio sessions as JSON"))
        .subcommand(
            Command::new("route")
                .about("Route an application's audio to a device (not implemented yet)")
                .arg(
                    Arg::new("app")
                        .required(true)
                        .value_name("APP")
                        .help("Process name of the application"),
                )
                .arg(
                    Arg::new("device")
                        .required(true)
                        .value_name("DEVICE")
                        .help("Name of the target playback device"),
                ),
        )
}

/// What one process run was asked to do.
#[derive(Debug, PartialEq)]
enum Invocation {
    ListDevices,
    ListSessions,
    Route { app: String, device: String },
    Version,
    Help,
    RenderedHelp(String),
}

/// Maps raw argv to an invocation. The command token is case-insensitive,
/// and anything unparseable asks for the usage text instead of failing.
fn parse_invocation(mut args: Vec<String>) -> Invocation {
    if let Some(command) = args.get_mut(1) {
        *command = command.to_lowercase();
    }

    let matches = match build_cli().try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(err) if err.kind() == ErrorKind::DisplayVersion => return Invocation::Version,
        // Explicit help requests keep clap's rendering for the requested
        // scope; `route --help` carries the route usage line.
        Err(err) if err.kind() == ErrorKind::DisplayHelp => {
            return Invocation::RenderedHelp(err.to_string())
        }
        Err(_) => return Invocation::Help,
    };

    match matches.subcommand() {
        Some(("list-devices", _)) => Invocation::ListDevices,
        Some(("list-sessions", _)) => Invocation::ListSessions,
        Some(("route", sub_matches)) => {
            let app = sub_matches.get_one::<String>("app");
            let device = sub_matches.get_one::<String>("device");
            match (app, device) {
                (Some(app), Some(device)) => Invocation::Route {
                    app: app.clone(),
                    device: device.clone(),
                },
                _ => Invocation::Help,
            }
        }
        _ => Invocation::Help,
    }
}

fn run() -> Result<()> {
    match parse_invocation(std::env::args().collect()) {
        Invocation::ListDevices => commands::list_devices(),
        Invocation::ListSessions => commands::list_sessions(),
        Invocation::Route { app, device } => commands::route(&app, &device),
        Invocation::Version => {
            print!("{}", build_cli().render_version());
            Ok(())
        }
        Invocation::Help => {
            build_cli().print_help()?;
            Ok(())
        }
        Invocation::RenderedHelp(text) => {
            print!("{}", text);
            Ok(())
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // The plugin reads stdout; a failure is exactly one line on stderr.
    if let Err(error) = run() {
        eprintln!("Error: {:#}", error);
        std::process::exit(1);
    }
}
