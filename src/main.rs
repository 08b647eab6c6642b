//! Dashboard entry point: CLI wiring, headless runner, and TUI launch.

use std::path::Path;
use std::process;

use home_dash::config::DashboardConfig;
use home_dash::devices::UniformSampler;
use home_dash::export::{self, TelemetryRow};
use home_dash::report::{DashboardReport, TickLine};
use home_dash::view::{FrameBuffer, RANK_SLOTS, ViewSync};

/// Parsed CLI arguments.
struct CliArgs {
    config_path: Option<String>,
    preset: Option<String>,
    seed_override: Option<u64>,
    ticks_override: Option<usize>,
    telemetry_out: Option<String>,
    #[cfg(feature = "tui")]
    tui: bool,
}

fn print_help() {
    eprintln!("home-dash — terminal home-energy dashboard");
    eprintln!();
    eprintln!("Usage: home-dash [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config <path>          Load dashboard config from TOML file");
    eprintln!("  --preset <name>          Use a built-in preset (demo)");
    eprintln!("  --seed <u64>             Override random seed");
    eprintln!("  --ticks <n>              Number of simulation ticks in headless mode");
    eprintln!("  --telemetry-out <path>   Export per-tick device telemetry to CSV");
    #[cfg(feature = "tui")]
    eprintln!("  --tui                    Launch the interactive terminal dashboard");
    eprintln!("  --help                   Show this help message");
    eprintln!();
    eprintln!("If no --config or --preset is given, the demo preset is used.");
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        config_path: None,
        preset: None,
        seed_override: None,
        ticks_override: None,
        telemetry_out: None,
        #[cfg(feature = "tui")]
        tui: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--config" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --config requires a path argument");
                    process::exit(1);
                }
                cli.config_path = Some(args[i].clone());
            }
            "--preset" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --preset requires a name argument");
                    process::exit(1);
                }
                cli.preset = Some(args[i].clone());
            }
            "--seed" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --seed requires a u64 argument");
                    process::exit(1);
                }
                if let Ok(s) = args[i].parse::<u64>() {
                    cli.seed_override = Some(s);
                } else {
                    eprintln!("error: --seed value \"{}\" is not a valid u64", args[i]);
                    process::exit(1);
                }
            }
            "--ticks" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --ticks requires a count argument");
                    process::exit(1);
                }
                if let Ok(n) = args[i].parse::<usize>() {
                    cli.ticks_override = Some(n);
                } else {
                    eprintln!("error: --ticks value \"{}\" is not a valid count", args[i]);
                    process::exit(1);
                }
            }
            "--telemetry-out" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --telemetry-out requires a path argument");
                    process::exit(1);
                }
                cli.telemetry_out = Some(args[i].clone());
            }
            #[cfg(feature = "tui")]
            "--tui" => {
                cli.tui = true;
            }
            other => {
                eprintln!("error: unknown argument \"{other}\"");
                print_help();
                process::exit(1);
            }
        }
        i += 1;
    }

    cli
}

/// Runs the configured number of ticks headless and returns the collected
/// telemetry along with the final report.
fn run_headless(config: &DashboardConfig) -> (Vec<TelemetryRow>, DashboardReport) {
    let registry = config.build_registry();
    let mut frame = FrameBuffer::for_dashboard(&registry, RANK_SLOTS);
    let mut controller = ViewSync::new(
        registry,
        config.build_store(),
        UniformSampler::new(config.simulation.seed),
    );
    controller.refresh_all(&mut frame);

    let mut rows = export::capture_rows(0, controller.registry());
    for _ in 0..config.simulation.ticks {
        let tick = controller.on_tick(&mut frame);
        println!("{}", TickLine::capture(tick, controller.registry()));
        rows.extend(export::capture_rows(tick, controller.registry()));
    }

    let report = DashboardReport::compute(controller.registry(), controller.store(), controller.mode());
    (rows, report)
}

fn main() {
    let cli = parse_args();

    // Load config: --config takes priority, then --preset, then the demo default
    let mut config = if let Some(ref path) = cli.config_path {
        match DashboardConfig::from_toml_file(Path::new(path)) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else if let Some(ref name) = cli.preset {
        match DashboardConfig::from_preset(name) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else {
        DashboardConfig::demo()
    };

    // Apply overrides
    if let Some(seed) = cli.seed_override {
        config.simulation.seed = seed;
    }
    if let Some(ticks) = cli.ticks_override {
        config.simulation.ticks = ticks;
    }

    // Validate
    let errors = config.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    #[cfg(feature = "tui")]
    if cli.tui {
        home_dash::tui::run(config);
        return;
    }

    let (rows, report) = run_headless(&config);
    println!("\n{report}");

    if let Some(ref path) = cli.telemetry_out {
        if let Err(e) = export::export_csv(&rows, Path::new(path)) {
            eprintln!("error: failed to write CSV: {e}");
            process::exit(1);
        }
        eprintln!("Telemetry written to {path}");
    }
}
