use detour_sssp::scenario::Scenario;
use log::error;
use std::env;
use std::process;

fn main() {
    // Initialize logging to stderr
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("usage: {} <scenario.json>", args[0]);
        process::exit(2);
    }

    let scenario = match Scenario::from_path(&args[1]) {
        Ok(scenario) => scenario,
        Err(e) => {
            error!("cannot load {}: {}", args[1], e);
            process::exit(2);
        }
    };

    match scenario.solve() {
        Ok(Some(route)) => {
            println!("cost: {}", route.cost);
            println!("path: {:?}", route.path);
            if let Some(hop) = route.detour {
                println!("detour: {} -> {} (cost {})", hop.node, hop.target, hop.cost);
            }
        }
        Ok(None) => println!("no route"),
        Err(e) => {
            error!("invalid scenario: {}", e);
            process::exit(2);
        }
    }
}
