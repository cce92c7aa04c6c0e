// hyphen-word: propose hyphenation points for words.
//
// Reads words from the command line, or from stdin (one per line), and
// prints each word with hyphens inserted at the accepted break points.
//
// Usage:
//   hyphen-word [OPTIONS] [WORD...]
//
// Options:
//   --asset PATH        Load an external data asset instead of the
//                       embedded English tables
//   --threshold N       Acceptance threshold (default: 0)
//   --min-length N      Minimum word length (default: 5)
//   --all               Insert a hyphen at every accepted point instead
//                       of only the strongest one
//   --exception ENTRY   Add an exception entry such as ta-ble (repeatable)
//   -h, --help          Print help

use std::io::{self, BufRead, Write};

use hyphen_en::HyphenationEngine;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (asset_path, args) = hyphen_cli::parse_asset_path(&args);

    if hyphen_cli::wants_help(&args) {
        println!("hyphen-word: propose hyphenation points for words.");
        println!();
        println!("Usage: hyphen-word [OPTIONS] [WORD...]");
        println!();
        println!("If WORD arguments are given, hyphenates each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  --asset PATH        Use an external data asset");
        println!("  --threshold N       Acceptance threshold (default: 0)");
        println!("  --min-length N      Minimum word length (default: 5)");
        println!("  --all               Mark every accepted point, not just the best");
        println!("  --exception ENTRY   Add an exception entry such as ta-ble");
        println!("  -h, --help          Print this help");
        return;
    }

    let mut threshold: i8 = 0;
    let mut min_length: usize = 5;
    let mut all_points = false;
    let mut exceptions: Vec<String> = Vec::new();
    let mut words: Vec<String> = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        match arg.as_str() {
            "--threshold" => {
                if i + 1 < args.len() {
                    threshold = args[i + 1]
                        .parse()
                        .unwrap_or_else(|_| hyphen_cli::fatal("invalid number for --threshold"));
                    skip_next = true;
                }
            }
            "--min-length" => {
                if i + 1 < args.len() {
                    min_length = args[i + 1]
                        .parse()
                        .unwrap_or_else(|_| hyphen_cli::fatal("invalid number for --min-length"));
                    skip_next = true;
                }
            }
            "--all" => all_points = true,
            "--exception" => {
                if i + 1 < args.len() {
                    exceptions.push(args[i + 1].clone());
                    skip_next = true;
                }
            }
            s if !s.starts_with('-') => words.push(arg.clone()),
            _ => hyphen_cli::fatal(&format!("unknown option: {arg}")),
        }
    }

    let tables = hyphen_cli::load_tables(asset_path.as_deref())
        .unwrap_or_else(|e| hyphen_cli::fatal(&e));

    let mut engine = HyphenationEngine::with_suffixes(&tables.digrams, &tables.suffixes);
    engine.set_threshold(threshold);
    engine.set_min_word_length(min_length);
    for entry in &exceptions {
        if let Err(e) = engine.exceptions_mut().add(entry) {
            hyphen_cli::fatal(&format!("bad --exception entry {entry:?}: {e}"));
        }
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if words.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = line.unwrap_or_else(|e| hyphen_cli::fatal(&format!("read error: {e}")));
            let word = line.trim();
            if !word.is_empty() {
                print_word(&mut out, &engine, word, all_points);
            }
        }
    } else {
        for word in &words {
            print_word(&mut out, &engine, word, all_points);
        }
    }
}

fn print_word(out: &mut impl Write, engine: &HyphenationEngine<'_>, word: &str, all: bool) {
    let positions: Vec<usize> = if all {
        let mut ps: Vec<usize> = engine.hyphenate(word).iter().map(|p| p.position).collect();
        ps.sort_unstable();
        ps
    } else {
        engine.best_hyphenation(word).map(|p| p.position).into_iter().collect()
    };

    let rendered = insert_hyphens(word, &positions);
    if writeln!(out, "{rendered}").is_err() {
        std::process::exit(0); // downstream pipe closed
    }
}

/// Insert a '-' before each byte position in `positions` (ascending).
fn insert_hyphens(word: &str, positions: &[usize]) -> String {
    let mut rendered = String::with_capacity(word.len() + positions.len());
    let mut last = 0;
    for &pos in positions {
        rendered.push_str(&word[last..pos]);
        rendered.push('-');
        last = pos;
    }
    rendered.push_str(&word[last..]);
    rendered
}
