//! Route board entry point — CLI wiring and config-driven view derivation.

use std::path::Path;
use std::process;

use chrono::{Local, NaiveDate};

use routeboard::config::BoardConfig;
use routeboard::io::export::export_csv;
use routeboard::schedule::apply_schedule;
use routeboard::table::view::{TableView, ViewSummary};

/// Parsed CLI arguments.
struct CliArgs {
    board_path: Option<String>,
    preset: Option<String>,
    date_override: Option<NaiveDate>,
    export_out: Option<String>,
    #[cfg(feature = "api")]
    serve: bool,
    #[cfg(feature = "api")]
    port: u16,
    #[cfg(feature = "tui")]
    tui: bool,
}

fn print_help() {
    eprintln!("routeboard — customizable route board with power scheduling");
    eprintln!();
    eprintln!("Usage: routeboard [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --board <path>       Load board from TOML config file");
    eprintln!("  --preset <name>      Use a built-in preset (routes)");
    eprintln!("  --date <YYYY-MM-DD>  Evaluate power schedules for this date");
    eprintln!("  --export-out <path>  Export the derived view to CSV");
    #[cfg(feature = "api")]
    {
        eprintln!("  --serve              Start REST API server after derivation");
        eprintln!("  --port <u16>         API server port (default: 3000)");
    }
    #[cfg(feature = "tui")]
    eprintln!("  --tui                Open the interactive terminal browser");
    eprintln!("  --help               Show this help message");
    eprintln!();
    eprintln!("If no --board or --preset is given, the routes preset is used.");
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        board_path: None,
        preset: None,
        date_override: None,
        export_out: None,
        #[cfg(feature = "api")]
        serve: false,
        #[cfg(feature = "api")]
        port: 3000,
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
            "--board" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --board requires a path argument");
                    process::exit(1);
                }
                cli.board_path = Some(args[i].clone());
            }
            "--preset" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --preset requires a name argument");
                    process::exit(1);
                }
                cli.preset = Some(args[i].clone());
            }
            "--date" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --date requires a YYYY-MM-DD argument");
                    process::exit(1);
                }
                match NaiveDate::parse_from_str(&args[i], "%Y-%m-%d") {
                    Ok(d) => cli.date_override = Some(d),
                    Err(_) => {
                        eprintln!("error: --date value \"{}\" is not a valid date", args[i]);
                        process::exit(1);
                    }
                }
            }
            "--export-out" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --export-out requires a path argument");
                    process::exit(1);
                }
                cli.export_out = Some(args[i].clone());
            }
            #[cfg(feature = "api")]
            "--serve" => {
                cli.serve = true;
            }
            #[cfg(feature = "api")]
            "--port" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --port requires a u16 argument");
                    process::exit(1);
                }
                if let Ok(p) = args[i].parse::<u16>() {
                    cli.port = p;
                } else {
                    eprintln!("error: --port value \"{}\" is not a valid u16", args[i]);
                    process::exit(1);
                }
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

fn main() {
    let cli = parse_args();

    // Load config: --board takes priority, then --preset, then routes default
    let board = if let Some(ref path) = cli.board_path {
        match BoardConfig::from_toml_file(Path::new(path)) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else if let Some(ref name) = cli.preset {
        match BoardConfig::from_preset(name) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else {
        BoardConfig::routes()
    };

    // Validate
    let errors = board.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    let today = cli
        .date_override
        .unwrap_or_else(|| Local::now().date_naive());

    #[cfg(feature = "tui")]
    if cli.tui {
        let name = if cli.board_path.is_some() {
            "custom"
        } else {
            cli.preset.as_deref().unwrap_or("routes")
        };
        routeboard::tui::run(board, name, today);
        return;
    }

    // Build and derive
    let (columns, mut rows, spec) = board.build();
    apply_schedule(&mut rows, today);
    let view = TableView::derive(&columns, &rows, &spec);
    let summary = ViewSummary::compute(&columns, &rows, &spec);

    // Print the derived view and its summary
    println!("{view}");
    println!("\n{summary}");

    // Export CSV if requested
    if let Some(ref path) = cli.export_out {
        if let Err(e) = export_csv(&view, Path::new(path)) {
            eprintln!("error: failed to write CSV: {e}");
            process::exit(1);
        }
        eprintln!("View written to {path}");
    }

    // Start API server if requested
    #[cfg(feature = "api")]
    if cli.serve {
        use std::net::SocketAddr;
        use std::sync::Arc;

        let state = Arc::new(routeboard::api::AppState {
            view,
            summary,
            rows,
        });
        let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
        let rt = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
            eprintln!("error: failed to create tokio runtime: {e}");
            process::exit(1);
        });
        rt.block_on(routeboard::api::serve(state, addr));
    }
}
