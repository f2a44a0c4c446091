/*!
 * rr-sim - Main Entry Point
 *
 * Usage: rr-sim [--json] [WORKLOAD.json]
 *
 * Without a workload file the built-in demo workload runs.
 */

use rr_sim::report::{render_stats, render_table, render_timeline};
use rr_sim::monitoring::tracer::init_tracing_with;
use rr_sim::{Report, SimConfig, Simulator, Workload};
use tracing::info;

fn main() -> miette::Result<()> {
    let config = SimConfig::from_env()?;
    init_tracing_with(config.trace_json);

    let mut json = false;
    let mut path = None;
    for arg in std::env::args().skip(1) {
        if arg == "--json" {
            json = true;
        } else {
            path = Some(arg);
        }
    }

    let workload = match path {
        Some(path) => Workload::from_path(path)?,
        None => {
            info!("No workload file given, running demo workload");
            Workload::demo()
        }
    };
    let config = config.with_workload(&workload);

    let mut simulator = Simulator::builder()
        .with_config(&config)
        .with_workload(&workload)
        .build()?;
    let stats = simulator.run()?;

    if json {
        println!("{}", Report::new(&simulator, &stats).to_json()?);
    } else {
        print!("{}", render_table(simulator.all_processes()));
        println!();
        println!("{}", render_timeline(simulator.timeline()));
        print!("{}", render_stats(&stats));
    }

    Ok(())
}
