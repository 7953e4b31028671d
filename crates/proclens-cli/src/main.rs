use proclens::ProcessScanner;
use serde::Serialize;

/// Command-line arguments for the scanner binary.
struct Args {
    check: Option<String>,
    json: bool,
}

fn parse_args() -> Args {
    let mut args = std::env::args().skip(1);
    let mut check = None;
    let mut json = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--check" => check = args.next(),
            "--json" => json = true,
            _ => {}
        }
    }

    Args { check, json }
}

/// JSON shape for `--check --json`.
#[derive(Serialize)]
struct CheckReport<'a> {
    name: &'a str,
    running: bool,
}

/// JSON shape for the default listing with `--json`.
#[derive(Serialize)]
struct ScanReport {
    count: usize,
    processes: Vec<String>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = parse_args();
    let scanner = ProcessScanner::new().expect("process inspection is unavailable on this host");

    if let Some(name) = args.check {
        let running = scanner.is_running(&name).expect("failed to scan processes");
        if args.json {
            let report = CheckReport {
                name: &name,
                running,
            };
            println!("{}", serde_json::to_string(&report).expect("report serializes"));
        } else {
            println!("{}", if running { "running" } else { "not running" });
        }
        std::process::exit(i32::from(!running));
    }

    let processes = scanner.list_all().expect("failed to scan processes");
    tracing::debug!(count = processes.len(), "listing complete");
    if args.json {
        let report = ScanReport {
            count: processes.len(),
            processes,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&report).expect("report serializes")
        );
    } else {
        for name in &processes {
            println!("{name}");
        }
    }
}
