// Trundle: parser driver for the robot-command language

use std::fs;
use std::process;

use trundle::diagnostics;
use trundle::parser::parser;

/// The bundled demonstration programs, run when no file is given.
const DEMO_PROGRAMS: &str = "\
program end
program go end
program go right go right go right go right end
program repeat 4 go right end end
program repeat 4 repeat 3 go right go left end right end end
";

fn usage(program_name: &str) {
    eprintln!("Usage: {} [--json] [file]", program_name);
    eprintln!();
    eprintln!("Parses each non-empty line of <file> as one robot-command program.");
    eprintln!("With no file, runs the bundled demonstration programs.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --json    print each parsed program as JSON instead of bracket form");
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.get(0).map(|s| s.as_str()).unwrap_or("trundle");

    let mut json = false;
    let mut file: Option<&str> = None;

    for arg in &args[1..] {
        match arg.as_str() {
            "--json" => json = true,
            "--help" | "-h" => {
                usage(program_name);
                return;
            }
            other if other.starts_with('-') => {
                eprintln!("Error: Unknown option '{}'", other);
                eprintln!();
                usage(program_name);
                process::exit(2);
            }
            other => {
                if file.is_some() {
                    eprintln!("Error: More than one input file given");
                    eprintln!();
                    usage(program_name);
                    process::exit(2);
                }
                file = Some(other);
            }
        }
    }

    let source = match file {
        Some(path) => match fs::read_to_string(path) {
            Ok(source) => source,
            Err(err) => {
                eprintln!("Error: Cannot read '{}': {}", path, err);
                process::exit(1);
            }
        },
        None => DEMO_PROGRAMS.to_string(),
    };

    let mut failures = 0;

    for line in source.lines() {
        if line.trim().is_empty() {
            continue;
        }

        match parser::parse(line) {
            Ok(program) => {
                if json {
                    match serde_json::to_string(&program) {
                        Ok(rendered) => println!("{}", rendered),
                        Err(err) => {
                            eprintln!("Error: Cannot serialize '{}': {}", line, err);
                            process::exit(1);
                        }
                    }
                } else {
                    println!("text = \"{}\"", line);
                    println!("node = {}", program);
                }
            }
            Err(err) => {
                // A malformed line is reported and skipped; the remaining
                // lines are still parsed.
                eprintln!("{}", diagnostics::render(line, &err));
                failures += 1;
            }
        }
    }

    if failures > 0 {
        process::exit(1);
    }
}
