use dijkstra_sssp::algorithm::{run, validate};
use dijkstra_sssp::config::{CliCommand, CliConfig, USAGE};
use dijkstra_sssp::graph::Graph;
use dijkstra_sssp::io::load_graph_from_file;
use dijkstra_sssp::report;
use log::warn;
use std::env;
use std::process;

fn execute(config: &CliConfig) -> dijkstra_sssp::Result<()> {
    let graph = load_graph_from_file(&config.input)?;
    println!("Graph loaded successfully from '{}'", config.input.display());

    if !graph.has_vertex(&config.start) {
        eprintln!("Available vertices: {:?}", graph.vertices());
        return Err(dijkstra_sssp::Error::UnknownSource(config.start.clone()));
    }

    let validation = validate(&graph);
    if config.strict {
        validation.into_result()?;
    } else if let Some(reason) = validation.reason() {
        warn!("{}", reason);
    }

    println!("Running Dijkstra's algorithm from vertex '{}'...", config.start);
    let result = run(&graph, &config.start)?;

    println!("{}", report::render(&graph, &result, config.end.as_ref())?);

    if let Some(output) = &config.output {
        report::save(output, &graph, &result)?;
        println!("\nResults saved to '{}'", output.display());
    }

    Ok(())
}

fn main() {
    // Initialize logging
    env_logger::init();

    let config = match CliConfig::from_args(env::args().skip(1)) {
        Ok(CliCommand::Run(config)) => config,
        Ok(CliCommand::Help) => {
            println!("{}", USAGE);
            return;
        }
        Err(e) => {
            eprintln!("Error: {}\n\n{}", e, USAGE);
            process::exit(1);
        }
    };

    if let Err(e) = execute(&config) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
