use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{arg, Command};
use route_optimizer::api::handle_optimize_request;
use route_optimizer::config::{Config, OPTIONAL_VARIABLES};
use route_optimizer::RouteOptimizer;

fn cli() -> Command {
    Command::new("route-optimizer")
        .about("Orders waypoints into a short round trip from an origin")
        .after_help(format!(
            "Environment: {}, RUST_LOG",
            OPTIONAL_VARIABLES.join(", ")
        ))
        .arg(
            arg!([INPUT] "Path to a request json file; reads stdin when omitted or '-'")
                .value_parser(clap::value_parser!(PathBuf)),
        )
}

/// `None` means the request comes from stdin.
fn input_path(matches: &clap::ArgMatches) -> Option<&Path> {
    matches
        .get_one::<PathBuf>("INPUT")
        .map(PathBuf::as_path)
        .filter(|path| *path != Path::new("-"))
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let matches = cli().get_matches();
    match run(input_path(&matches)) {
        Ok(code) => code,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn read_request(input: Option<&Path>) -> anyhow::Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading request from {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading request from stdin")?;
            Ok(buf)
        }
    }
}

fn run(input: Option<&Path>) -> anyhow::Result<ExitCode> {
    let config = Config::env().inspect_err(|e| {
        log::error!(
            "config: {e}. Check the optional environment variables ({}).",
            OPTIONAL_VARIABLES.join(", ")
        );
    })?;

    config.log();

    let body = read_request(input)?;

    let optimizer = RouteOptimizer::new(config.optimizer_config());
    let response = handle_optimize_request(&optimizer, &body);
    log::info!("status {}", response.status);

    println!("{}", response.body);

    Ok(if response.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(2)
    })
}
