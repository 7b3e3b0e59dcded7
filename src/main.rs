use std::{env, io, path::Path, process, time::Instant};

use loxscan::{
    config::{EXIT_DATA_ERROR, EXIT_NO_INPUT, EXIT_USAGE, LANG_NAME, VERSION},
    driver::{Driver, DriverError},
};

fn main() {
    let mut args: Vec<String> = env::args().skip(1).collect();

    let verbose = args.first().is_some_and(|arg| arg == "--verbose");
    if verbose {
        args.remove(0);
    }

    let mut driver = Driver::new(io::stdout(), io::stderr()).verbose(verbose);

    match args.as_slice() {
        [] => {
            if let Err(e) = driver.run_prompt(io::stdin().lock()) {
                eprintln!("{}", e);
                process::exit(1);
            }
        }
        [flag] if flag == "--version" || flag == "-v" => {
            println!("{} {}", LANG_NAME, VERSION);
        }
        [flag] if flag == "--help" || flag == "-h" => {
            println!("{}", usage());
        }
        [path] => {
            let start = Instant::now();
            let result = driver.run_file(Path::new(path));

            if verbose {
                eprintln!("Total time: {:?}", start.elapsed());
            }

            match result {
                Ok(()) => {}
                // Already rendered by the driver.
                Err(DriverError::Lex(_)) => process::exit(EXIT_DATA_ERROR),
                Err(e @ DriverError::Read { .. }) => {
                    eprintln!("{}", e);
                    process::exit(EXIT_NO_INPUT);
                }
                Err(e) => {
                    eprintln!("{}", e);
                    process::exit(1);
                }
            }
        }
        _ => {
            eprintln!("{}", usage());
            process::exit(EXIT_USAGE);
        }
    }
}

fn usage() -> String {
    format!("Usage: {} [--verbose] [script]", LANG_NAME)
}
