// SPDX-License-Identifier: GPL-3.0-only

use clap::{App, Arg};
use fido_build::{build, BuildArguments};
use std::io::{self, Write};
use std::process;

fn fido_build() -> Result<(), String> {
    let matches = App::new("fido-build")
        .about("Build pico-fido release images for every supported board")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .takes_value(true)
                .help("Configuration file"),
        )
        .arg(
            Arg::new("jobs")
                .short('j')
                .long("jobs")
                .takes_value(true)
                .help("Compile concurrency (defaults to the number of logical processors)"),
        )
        .arg(
            Arg::new("isolated")
                .long("isolated")
                .help("Build each board in its own workspace subdirectory"),
        )
        .get_matches();

    let jobs = match matches.value_of("jobs") {
        Some(value) => match value.parse::<usize>() {
            Ok(jobs) if jobs > 0 => Some(jobs),
            _ => return Err(format!("invalid jobs count: {}", value)),
        },
        None => None,
    };

    build(BuildArguments {
        config_path: matches.value_of("config"),
        jobs,
        isolated: matches.is_present("isolated"),
    })
    .map_err(|err| err.to_string())
}

fn main() {
    env_logger::init();

    match fido_build() {
        Ok(()) => (),
        Err(err) => {
            writeln!(io::stderr(), "fido-build: {}", err).unwrap();
            process::exit(1);
        }
    }
}
