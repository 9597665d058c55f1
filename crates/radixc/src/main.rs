//! Radix CLI
//!
//! Decimal, hex, binary and ASCII conversion with live expressions.

use radixc::commands::{run_convert, run_eval, run_highlight, run_repl, CliError, CliOptions};

fn main() {
    radixc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    let (options, rest) = match CliOptions::parse(&args[2..]) {
        Ok(parsed) => parsed,
        Err(error) => fail(&error),
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let result = match command.as_str() {
        "convert" => run_convert(&rest, &options, &mut out),
        "eval" => run_eval(&rest, &options, &mut out),
        "highlight" => run_highlight(&rest, &options, &mut out),
        "repl" => run_repl(std::io::stdin().lock(), &options, &mut out),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "version" | "--version" | "-v" => {
            println!("radix {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(error) = result {
        fail(&error);
    }
}

fn fail(error: &CliError) -> ! {
    eprintln!("error: {error}");
    std::process::exit(1);
}

fn print_usage() {
    println!("Radix number converter");
    println!();
    println!("Usage: radix <command> [options]");
    println!();
    println!("Commands:");
    println!("  convert <field> <text...>              Convert a field's text into all four fields");
    println!("  eval <base> <expr...>                  Evaluate an expression in base 2, 10 or 16");
    println!("  highlight <field> <position> <text...> Show the ranges linked to a hovered position");
    println!("  repl                                   Edit and hover fields line by line");
    println!("  help                                   Show this help message");
    println!("  version                                Show version information");
    println!();
    println!("Fields: decimal (dec), hex, binary (bin), ascii");
    println!();
    println!("Options:");
    println!("  --json    Print results as JSON");
    println!();
    println!("Environment:");
    println!("  RUST_LOG=radix_eval=trace   Log why expressions are rejected");
    println!("  RADIX_LOG_TREE=1            Log as an indented span tree");
}
