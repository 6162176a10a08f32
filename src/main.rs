use mx2svg::{convert, parse_diagram, ConvertOptions};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

fn print_help() {
    println!("mx2svg - Convert draw.io / mxGraph flowchart XML to SVG");
    println!();
    println!("Usage: mx2svg [OPTIONS] [INPUT] [OUTPUT]");
    println!();
    println!("Reads mxGraph XML from INPUT (or stdin) and writes SVG.");
    println!("OUTPUT defaults to INPUT with an .svg extension; with stdin input the");
    println!("SVG goes to stdout.");
    println!();
    println!("Options:");
    println!("  -h, --help           Show this help message");
    println!("  -p, --padding <N>    Space around the drawing (default: 20)");
    println!("      --json           Print the extracted graph as JSON instead of SVG");
    println!();
    println!("Example:");
    println!("  mx2svg flowchart.xml");
    println!("  cat flowchart.xml | mx2svg > flowchart.svg");
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|a| a == "-h" || a == "--help") {
        print_help();
        return;
    }

    let mut options = ConvertOptions::default();
    let mut json = false;
    let mut positional: Vec<&str> = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-p" | "--padding" => {
                let value = iter
                    .next()
                    .unwrap_or_else(|| fail("--padding requires a value"));
                options.padding = value
                    .parse()
                    .unwrap_or_else(|_| fail(format!("invalid padding: {}", value)));
            }
            "--json" => json = true,
            other if other.starts_with('-') && other != "-" => {
                fail(format!("unknown option: {}", other))
            }
            other => positional.push(other),
        }
    }

    let input_path = positional.first().copied().filter(|p| *p != "-");
    let input = match input_path {
        Some(path) => std::fs::read_to_string(path)
            .unwrap_or_else(|e| fail(format!("failed to read {}: {}", path, e))),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .unwrap_or_else(|e| fail(format!("failed to read from stdin: {}", e)));
            buf
        }
    };

    if input.trim().is_empty() {
        fail("No input provided");
    }

    let output = if json {
        parse_diagram(&input)
            .map_err(|e| e.to_string())
            .and_then(|d| serde_json::to_string_pretty(&d).map_err(|e| e.to_string()))
    } else {
        convert(&input, &options).map_err(|e| e.to_string())
    };
    let output = output.unwrap_or_else(|e| fail(e));

    let out_path: Option<PathBuf> = match (positional.get(1), input_path) {
        (Some(out), _) => Some(PathBuf::from(out)),
        (None, Some(input)) if !json => Some(Path::new(input).with_extension("svg")),
        _ => None,
    };

    match out_path {
        Some(path) => {
            std::fs::write(&path, output)
                .unwrap_or_else(|e| fail(format!("failed to write {}: {}", path.display(), e)));
            println!("Wrote {}", path.display());
        }
        None => println!("{}", output),
    }
}
