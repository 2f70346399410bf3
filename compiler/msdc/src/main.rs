//! msdscript CLI

use msdc::commands::{format_file, run_file, FormatStyle, Input};
use msdc::tracing_setup::init_tracing;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    let ok = match command.as_str() {
        "run" => {
            let mut path = None;
            for arg in args.iter().skip(2) {
                if path.is_some() {
                    eprintln!("error: unexpected argument '{arg}'");
                    eprintln!("Usage: msd run [FILE|-]");
                    std::process::exit(1);
                }
                path = Some(arg.as_str());
            }
            run_file(&Input::from_arg(path))
        }
        "fmt" => {
            let mut style = FormatStyle::Pretty;
            let mut path = None;
            for arg in args.iter().skip(2) {
                if arg == "--inline" || arg == "-i" {
                    style = FormatStyle::Inline;
                } else if arg == "-" || !arg.starts_with('-') {
                    if path.is_some() {
                        eprintln!("error: unexpected argument '{arg}'");
                        std::process::exit(1);
                    }
                    path = Some(arg.as_str());
                } else {
                    eprintln!("error: unknown option '{arg}'");
                    eprintln!("Usage: msd fmt [--inline] [FILE|-]");
                    std::process::exit(1);
                }
            }
            format_file(&Input::from_arg(path), style)
        }
        "help" | "--help" | "-h" => {
            print_usage();
            true
        }
        "version" | "--version" | "-V" => {
            println!("msd {}", env!("CARGO_PKG_VERSION"));
            true
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    if !ok {
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("msdscript interpreter");
    println!();
    println!("Usage: msd <command> [options]");
    println!();
    println!("Commands:");
    println!("  run [FILE|-]             Evaluate a program and print its value");
    println!("  fmt [--inline] [FILE|-]  Print a program in canonical form");
    println!("  help                     Show this message");
    println!("  version                  Show version information");
    println!();
    println!("Programs are read from standard input when FILE is `-` or omitted.");
    println!("Set MSD_LOG (or RUST_LOG) to enable logging, e.g. MSD_LOG=msd_eval=trace.");
}
