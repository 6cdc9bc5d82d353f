//! `summary-dump` — decode a tracer values buffer to JSON (stdout).
//!
//! Usage:
//!   summary-dump [--shapes shapes.json] [--index N] [file|-]
//!
//! The shapes file is a JSON array of shapes, each an array of strings
//! (`[["ClassName", "prop", ...], ...]`). `--index` is the byte offset of
//! the argument list (default 4, the first slot after the version word);
//! the -1/-2 sentinel values are accepted.

use std::io::{self, Read, Write};

use value_summary::{argument_summaries, arguments_to_json, Shape};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut shapes_path: Option<String> = None;
    let mut index: i64 = 4;
    let mut input: Option<String> = None;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--shapes" => {
                i += 1;
                shapes_path = args.get(i).cloned();
            }
            "--index" => {
                i += 1;
                if let Some(n) = args.get(i) {
                    match n.parse::<i64>() {
                        Ok(n) => index = n,
                        Err(_) => {
                            eprintln!("Invalid --index value: {n}");
                            std::process::exit(1);
                        }
                    }
                }
            }
            path => {
                input = Some(path.to_string());
            }
        }
        i += 1;
    }

    let mut buffer = Vec::new();
    match input.as_deref() {
        None | Some("-") => {
            if let Err(e) = io::stdin().read_to_end(&mut buffer) {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
        Some(path) => match std::fs::read(path) {
            Ok(data) => buffer = data,
            Err(e) => {
                eprintln!("{path}: {e}");
                std::process::exit(1);
            }
        },
    }

    let shapes: Vec<Shape> = match shapes_path {
        None => Vec::new(),
        Some(path) => {
            let text = match std::fs::read_to_string(&path) {
                Ok(text) => text,
                Err(e) => {
                    eprintln!("{path}: {e}");
                    std::process::exit(1);
                }
            };
            match serde_json::from_str(&text) {
                Ok(shapes) => shapes,
                Err(e) => {
                    eprintln!("{path}: {e}");
                    std::process::exit(1);
                }
            }
        }
    };

    match argument_summaries(&buffer, &shapes, index) {
        Ok(summaries) => {
            let json = arguments_to_json(&summaries);
            let mut stdout = io::stdout();
            serde_json::to_writer_pretty(&mut stdout, &json).unwrap();
            stdout.write_all(b"\n").unwrap();
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
