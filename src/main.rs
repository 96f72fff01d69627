use routing_with_aco::fleet_experiment::FleetExperiment;

use std::env;
use std::path::Path;
use std::process;

fn main() {
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| String::from("res/lorry_network.yaml"));

    let routes = match FleetExperiment::run_config_file(Path::new(&path)) {
        Ok(routes) => routes,
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    };

    for lorry in routes {
        match lorry.outcome {
            Ok(Some(route)) => println!(
                "Lorry {} optimized path: {} (total distance {})",
                lorry.lorry, route.solution, route.length
            ),
            Ok(None) => println!("Lorry {}: no path found", lorry.lorry),
            Err(err) => println!("Lorry {}: {}", lorry.lorry, err),
        }
    }
}
