use dictmark_parser::{parse, Entry};
use std::env;
use std::fs;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <path-to-dictionary-file> [--json]", args[0]);
        std::process::exit(1);
    }

    let path = &args[1];
    let as_json = args.iter().skip(2).any(|arg| arg == "--json");

    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("ERROR: Failed to read {}", path);
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    };

    match parse(&text) {
        Ok(entries) => {
            if as_json {
                print_json(&entries);
            } else {
                print_summary(&entries);
            }
        }
        Err(e) => {
            eprintln!("ERROR: Failed to parse dictionary");
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    }
}

fn print_json(entries: &[Entry]) {
    match serde_json::to_string_pretty(entries) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("ERROR: Failed to serialize entries: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_summary(entries: &[Entry]) {
    let definitions: usize = entries.iter().map(|e| e.definitions.len()).sum();
    let meanings: usize = entries
        .iter()
        .flat_map(|e| &e.definitions)
        .map(|d| d.meanings.len())
        .sum();
    let examples: usize = entries
        .iter()
        .flat_map(|e| &e.definitions)
        .flat_map(|d| &d.meanings)
        .map(|m| m.examples.len())
        .sum();

    println!("Statistics:");
    println!("  Entries: {}", entries.len());
    println!("  Part-of-speech blocks: {}", definitions);
    println!("  Meanings: {}", meanings);
    println!("  Examples: {}", examples);

    println!("\nSample Entries (first 10):");
    for (i, entry) in entries.iter().take(10).enumerate() {
        let pos_labels: Vec<&str> = entry.definitions.iter().map(|d| d.pos.as_str()).collect();
        println!("  {}. {} [{}]", i + 1, entry.term, pos_labels.join(", "));
    }

    if entries.len() > 10 {
        println!("  ... and {} more", entries.len() - 10);
    }
}
