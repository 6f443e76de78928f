//! # Blink Host Daemon
//!
//! Polls an interval timer against the host clock and prints each blink.

use blinkd::{BlinkRunner, BlinkdConfig};
use hal_host::HostTimerDevice;
use std::env;
use std::process;
use std::thread;
use std::time::Duration;
use timer_config::TimerConfig;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let config = parse_args(&args).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        print_usage(&args[0]);
        process::exit(1);
    });

    let rate = config.timer.tick_rate().unwrap_or_else(|e| {
        eprintln!("Invalid configuration: {}", e);
        process::exit(1);
    });

    let mut runner = BlinkRunner::new(&config.timer, HostTimerDevice::new(rate)).unwrap_or_else(|e| {
        eprintln!("Failed to create runner: {}", e);
        process::exit(1);
    });

    let poll_interval = config.poll_interval;
    runner.run(
        config.max_fires,
        || thread::sleep(poll_interval),
        |event| println!("{}", event),
    );
}

fn parse_args(args: &[String]) -> Result<BlinkdConfig, String> {
    let mut config = BlinkdConfig::default();
    let mut interval_override = None;
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for --config".to_string());
                }
                config.timer = TimerConfig::load(&args[i])
                    .map_err(|e| format!("Failed to load {}: {}", args[i], e))?;
            }
            "--interval-ms" | "-i" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for --interval-ms".to_string());
                }
                let interval_ms: u64 = args[i]
                    .parse()
                    .map_err(|_| format!("Invalid interval-ms value: {}", args[i]))?;
                interval_override = Some(interval_ms);
            }
            "--toggles" | "-n" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for --toggles".to_string());
                }
                config.max_fires = args[i]
                    .parse()
                    .map_err(|_| format!("Invalid toggles value: {}", args[i]))?;
            }
            "--poll-us" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for --poll-us".to_string());
                }
                let micros: u64 = args[i]
                    .parse()
                    .map_err(|_| format!("Invalid poll-us value: {}", args[i]))?;
                config.poll_interval = Duration::from_micros(micros);
            }
            "--help" | "-h" => {
                print_usage(&args[0]);
                process::exit(0);
            }
            other => {
                return Err(format!("Unknown option: {}", other));
            }
        }
        i += 1;
    }

    // Applied last so it wins over a config file regardless of order.
    if let Some(interval_ms) = interval_override {
        config.timer.interval_ms = interval_ms;
    }

    Ok(config)
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [OPTIONS]", program);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -c, --config <FILE>      Timer configuration (JSON)");
    eprintln!("  -i, --interval-ms <MS>   Blink interval in milliseconds (default 340)");
    eprintln!("  -n, --toggles <N>        Stop after N blinks (0 = run forever)");
    eprintln!("  --poll-us <US>           Sleep between polls in microseconds (default 1000)");
    eprintln!("  -h, --help               Show this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} --interval-ms 500 --toggles 10", program);
    eprintln!("  RUST_LOG=info {} --config blink.json", program);
}
