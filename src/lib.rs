#![deny(clippy::all)]

//! Load a weighted map with 2-D node coordinates, search it with one of
//! four strategies, report the path, and optionally plot it.

use std::fs::File;
use std::io;

use anyhow::Error;
use clap::{App, Arg, ArgMatches};

use pathsearch::{search, Outcome, Strategy};

pub mod input;
pub mod plot;

pub fn run() -> Result<(), Error> {
    let matches = App::new("wayfinder")
        .version("0.1.0")
        .about("Search a weighted map with breadth-first, depth-first, best-first or A*")
        .arg(
            Arg::with_name("map")
                .value_name("FILE")
                .required(true)
                .takes_value(true)
                .help("Map file to load, or - for stdin"),
        )
        .arg(
            Arg::with_name("start")
                .long("start")
                .short("s")
                .value_name("NODE")
                .required(true)
                .takes_value(true)
                .help("Start node"),
        )
        .arg(
            Arg::with_name("goal")
                .long("goal")
                .short("g")
                .value_name("NODE")
                .required(true)
                .takes_value(true)
                .help("Goal node"),
        )
        .arg(
            Arg::with_name("search")
                .long("search")
                .value_name("STRATEGY")
                .takes_value(true)
                .default_value("BREADTH")
                .help("BREADTH, DEPTH, BEST or A*"),
        )
        .arg(
            Arg::with_name("plot")
                .long("plot")
                .value_name("SVG")
                .takes_value(true)
                .help("Write the map with the path highlighted to an SVG file"),
        )
        .arg(
            Arg::with_name("verbose")
                .long("verbose")
                .short("v")
                .help("Report every node expansion"),
        )
        .get_matches();

    driver(&matches)
}

fn driver(matches: &ArgMatches) -> Result<(), Error> {
    // An invalid strategy selector fails before any map work begins.
    let strategy: Strategy = matches.value_of("search").unwrap().parse()?;

    let filename = matches.value_of("map").unwrap();
    let reader: Box<dyn io::Read> = match filename {
        "-" => Box::new(io::stdin()),
        path => Box::new(File::open(path)?),
    };
    let graph = input::load(reader)?;

    let start = matches.value_of("start").unwrap().to_uppercase();
    let goal = matches.value_of("goal").unwrap().to_uppercase();
    println!(
        "{} search over {} nodes: {} -> {}",
        strategy,
        graph.len(),
        start,
        goal
    );

    let result = search(&graph, &start, &goal, strategy)?;

    if matches.is_present("verbose") {
        for (step, node) in result.trace.iter().enumerate() {
            println!("{:>4}: expanding {}", step + 1, node);
        }
    }

    match &result.outcome {
        Outcome::Found { path, cost } => {
            println!("Path to goal: {}", path.join(" -> "));
            println!("Total path cost: {}", cost);
        }
        Outcome::NoPath => println!("No path found."),
    }

    if let Some(output) = matches.value_of("plot") {
        plot::save(&graph, result.path(), &start, &goal, output)?;
        println!("Graph saved as {}", output);
    }

    Ok(())
}
