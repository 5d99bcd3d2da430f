// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use clap::{value_t, App, Arg, ArgMatches};
use failure::{err_msg, ResultExt};
use seamcarve::{Job, Operation, PixelGrid};
use std::process;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn app() -> App<'static, 'static> {
    App::new("seamcarve")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Content-aware image shrinking by seam carving")
        .arg(
            Arg::with_name("in")
                .long("in")
                .value_name("PATH")
                .help("The image to read")
                .required(true)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("out")
                .long("out")
                .value_name("PATH")
                .help("Where to write the result; the extension picks the format")
                .required(true)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("width")
                .long("width")
                .value_name("N")
                .help("Columns to remove when reducing")
                .default_value("0")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("height")
                .long("height")
                .value_name("N")
                .help("Rows to remove when reducing")
                .default_value("0")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("operation")
                .long("operation")
                .value_name("OP")
                .help("What to do with the image")
                .possible_values(&["energy", "seam", "reduce"])
                .case_insensitive(true)
                .default_value("reduce")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("Log every removed seam"),
        )
}

// Accept the single-dash long spelling (`-in`, `-operation`) as well
// as clap's own `--in`.
fn normalize_args<I: IntoIterator<Item = String>>(args: I) -> Vec<String> {
    args.into_iter()
        .enumerate()
        .map(|(i, arg)| {
            let single_dash_word = arg.len() > 2
                && arg.starts_with('-')
                && arg[1..].chars().all(|c| c.is_ascii_alphabetic());
            if i > 0 && single_dash_word {
                format!("-{}", arg)
            } else {
                arg
            }
        })
        .collect()
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("seamcarve={}", level))),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(matches: &ArgMatches) -> Result<(), failure::Error> {
    let input = matches
        .value_of("in")
        .ok_or_else(|| err_msg("no input image given"))?;
    let output = matches
        .value_of("out")
        .ok_or_else(|| err_msg("no output path given"))?;
    let operation: Operation = matches.value_of("operation").unwrap_or("reduce").parse()?;
    let job = Job::new(
        operation,
        value_t!(matches, "width", u32)?,
        value_t!(matches, "height", u32)?,
    );

    let image = image::open(input).context(format!("cannot read {}", input))?;
    let grid = PixelGrid::from_image(&image)?;
    info!(
        %operation,
        width = grid.width(),
        height = grid.height(),
        "loaded {}",
        input
    );

    let result = job.run(grid)?;
    result
        .to_rgb_image()
        .save(output)
        .context(format!("cannot write {}", output))?;
    info!(
        width = result.width(),
        height = result.height(),
        "wrote {}",
        output
    );
    Ok(())
}

fn main() {
    let matches = app().get_matches_from(normalize_args(std::env::args()));
    init_logging(matches.is_present("verbose"));

    if let Err(err) = run(&matches) {
        let chain: Vec<String> = err.iter_chain().map(|c| c.to_string()).collect();
        error!("{}", chain.join(": "));
        process::exit(1);
    }
}
