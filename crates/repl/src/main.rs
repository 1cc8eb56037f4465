//! Interactive shell around the campus navigation core.
//!
//! Builds the graph once (the built-in campus map, or two CSV files
//! given on the command line), then answers route queries until EOF.
use std::fmt::Write;
use std::path::Path;

use nav_core::{edge, prelude::*};
use reedline_repl_rs::clap::{Arg, ArgMatches, Command};
use reedline_repl_rs::{Repl, Result};

struct Context {
    graph: Graph,
}

impl Context {
    fn new(graph: Graph) -> Self {
        Self { graph }
    }
}

/// Print graph info
fn info(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    Ok(Some(format!(
        "Graph has {} locations and {} edges",
        context.graph.locations.len(),
        context.graph.edges.len()
    )))
}

/// List all locations with their menu numbers
fn locations(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let mut out = String::from("Campus Locations (Buildings):\n");
    for (i, location) in context.graph.locations().enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, location.name);
    }
    Ok(Some(out))
}

/// List every walkway once, with its length
fn map(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let g = &context.graph;
    let mut out = String::from("Connections (distance in meters):\n");
    for edge in g.edges().filter(|edge| edge.source < edge.target) {
        let _ = writeln!(
            out,
            "{} <--{}--> {}",
            g.name(edge.source).unwrap_or("?"),
            edge.weight,
            g.name(edge.target).unwrap_or("?"),
        );
    }
    Ok(Some(out))
}

/// Accepts either a display name or a 1-based menu number.
fn resolve(graph: &Graph, ident: &str) -> Option<NodeIndex> {
    if let Ok(menu_number) = ident.parse::<usize>() {
        if (1..=graph.locations.len()).contains(&menu_number) {
            return Some(node_index(menu_number - 1));
        }
        return None;
    }
    graph.index_of(ident)
}

fn route(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let from = args.get_one::<String>("from").unwrap();
    let to = args.get_one::<String>("to").unwrap();

    let g = &context.graph;
    let Some(src) = resolve(g, from) else {
        return Ok(Some(format!("Unknown location: {from}")));
    };
    let Some(dst) = resolve(g, to) else {
        return Ok(Some(format!("Unknown location: {to}")));
    };

    let mut dijkstra = Dijkstra::new(g);
    let route = match dijkstra.search(src, dst) {
        Ok(Some(route)) => route,
        Ok(None) => return Ok(Some("No path found.".to_string())),
        Err(e) => return Ok(Some(format!("Route query failed: {e}"))),
    };

    let mut out = format!(
        "Directions to reach {} from {}:\n",
        g.name(dst).unwrap_or("?"),
        g.name(src).unwrap_or("?"),
    );
    for (i, step) in route.steps.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. Move from {} to {} ({} meters)",
            i + 1,
            g.name(step.from).unwrap_or("?"),
            g.name(step.to).unwrap_or("?"),
            step.distance
        );
    }
    let _ = write!(out, "\nTotal distance: {} meters", route.total_distance);
    let _ = write!(out, "\nTook: {:?}", dijkstra.stats.duration);

    Ok(Some(out))
}

/// The hardcoded campus map from the original navigation system.
fn campus_graph() -> std::result::Result<Graph, GraphError> {
    let mut g = Graph::with_capacity(5, 12);

    let gate = g.add_location(Location::new("Gate"))?;
    let library = g.add_location(Location::new("Library"))?;
    let admin = g.add_location(Location::new("Admin"))?;
    let lab = g.add_location(Location::new("Lab"))?;
    let cafeteria = g.add_location(Location::new("Cafeteria"))?;

    g.add_edges(edge!(gate, library, 100))?;
    g.add_edges(edge!(library, lab, 30))?;
    g.add_edges(edge!(lab, cafeteria, 80))?;
    g.add_edges(edge!(gate, admin, 200))?;
    g.add_edges(edge!(library, admin, 50))?;
    g.add_edges(edge!(admin, cafeteria, 120))?;

    Ok(g)
}

fn main() -> Result<()> {
    env_logger::init();

    // A broken map is a configuration error, so fail at startup
    let args: Vec<String> = std::env::args().skip(1).collect();
    let graph = match args.as_slice() {
        [] => campus_graph().expect("Failed to build campus map"),
        [locations, paths] => Graph::from_csv(Path::new(locations), Path::new(paths))
            .expect("Failed to load graph from CSV"),
        _ => panic!("usage: repl [locations.csv paths.csv]"),
    };
    let context = Context::new(graph);

    let mut repl = Repl::new(context)
        .with_name("Campus Navigator")
        .with_version("v0.1.0")
        .with_description("Shortest-path directions between campus locations")
        .with_banner("======Welcome to the Campus Navigation System======")
        .with_command(Command::new("info").about("Print graph info"), info)
        .with_command(
            Command::new("locations").about("List campus locations"),
            locations,
        )
        .with_command(
            Command::new("map").about("List connections and their distances"),
            map,
        )
        .with_command(
            Command::new("route")
                .arg(
                    Arg::new("from")
                        .required(true)
                        .help("Name or menu number of the start location"),
                )
                .arg(
                    Arg::new("to")
                        .required(true)
                        .help("Name or menu number of the end location"),
                )
                .about("Turn-by-turn shortest route between two locations"),
            route,
        );

    repl.run()
}
