use std::io::{self, Read};
use std::env::VarError;
use std::{env, fs, process};

use sieve_mongo::{FieldMapper, translate_query_with};
use sieve_query::Query;
use tracing::Level;

fn main() {
    let verbose = env_flag("SIEVE_VERBOSE");
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(if verbose { Level::DEBUG } else { Level::INFO })
        .init();

    let input = match env::var("SIEVE_QUERY_PATH") {
        Ok(path) => fs::read_to_string(&path).unwrap_or_else(|e| {
            eprintln!("failed to read {path}: {e}");
            process::exit(1);
        }),
        Err(VarError::NotPresent) => {
            let mut buf = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buf) {
                eprintln!("failed to read stdin: {e}");
                process::exit(1);
            }
            buf
        }
        Err(e) => {
            eprintln!("invalid SIEVE_QUERY_PATH: {e}");
            process::exit(1);
        }
    };

    let fields = match env::var("SIEVE_FIELDS") {
        Ok(json) => serde_json::from_str::<FieldMapper>(&json).unwrap_or_else(|e| {
            eprintln!("invalid SIEVE_FIELDS: {e}");
            process::exit(1);
        }),
        Err(VarError::NotPresent) => FieldMapper::default(),
        Err(e) => {
            eprintln!("invalid SIEVE_FIELDS: {e}");
            process::exit(1);
        }
    };

    let query: Query = serde_json::from_str(&input).unwrap_or_else(|e| {
        eprintln!("invalid query: {e}");
        process::exit(1);
    });

    let request = translate_query_with(&fields, &query).unwrap_or_else(|e| {
        eprintln!("{}: {e}", e.status_code());
        process::exit(2);
    });

    let output = if env_flag("SIEVE_COMPACT") {
        serde_json::to_string(&request)
    } else {
        serde_json::to_string_pretty(&request)
    };
    match output {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("failed to encode request: {e}");
            process::exit(1);
        }
    }
}

fn env_flag(name: &str) -> bool {
    env::var(name).is_ok_and(|v| v == "1" || v.eq_ignore_ascii_case("true"))
}
