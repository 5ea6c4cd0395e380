use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use vqe_dashboard::{
    read_run_config, ConsoleDisplay, DisplaySink, IntervalScheduler, RunConfig, RunController,
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// YAML run configuration; built-in defaults apply when omitted.
    #[arg(short, long)]
    config: Option<String>,
    /// Override the RNG seed from the config for a reproducible run.
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() {
    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => read_run_config(path),
        None => RunConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let rng: Box<dyn RngCore> = match config.seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(rand::thread_rng()),
    };
    let mut controller = RunController::new(rng);
    let mut display = ConsoleDisplay::stdout(config.verbose);

    println!("VQE Quantum Simulator");
    println!("---------------------");
    println!(
        "Real-time VQE simulation - data updates every {} seconds",
        config.tick_interval_secs
    );
    println!();

    let interval = Duration::from_secs_f64(config.tick_interval_secs);
    let mut scheduler = IntervalScheduler::new(interval, Instant::now());
    let mut ticks = 0usize;

    loop {
        let now = Instant::now();
        let deadline = scheduler.next_deadline();
        if deadline > now {
            thread::sleep(deadline - now);
        }
        if !scheduler.poll(Instant::now()) {
            continue;
        }

        let report = match controller.tick() {
            Some(report) => report,
            None => break,
        };
        let snapshot = controller.snapshot();

        // A failing sink never aborts the tick loop.
        for event in &report.events {
            if let Err(err) = display.on_convergence(event) {
                eprintln!("display error: {}", err);
            }
        }
        if let Err(err) = display.render(&snapshot) {
            eprintln!("display error: {}", err);
        }
        if report.completed {
            if let Err(err) = display.on_complete(&snapshot) {
                eprintln!("display error: {}", err);
            }
            break;
        }

        ticks += 1;
        if let Some(max) = config.max_ticks {
            if ticks >= max {
                println!("Reached max_ticks = {}, stopping.", max);
                break;
            }
        }
    }
}
