// hyphen-points: dump per-position weights for words.
//
// For each word, prints one line per candidate position with its score
// and whether it clears the threshold. Useful when tuning a data asset.
//
// Usage:
//   hyphen-points [OPTIONS] WORD...
//
// Options:
//   --asset PATH     Use an external data asset
//   --threshold N    Acceptance threshold (default: 0)
//   -h, --help       Print help

use hyphen_en::HyphenationEngine;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (asset_path, args) = hyphen_cli::parse_asset_path(&args);

    if hyphen_cli::wants_help(&args) || args.is_empty() {
        println!("hyphen-points: dump per-position weights for words.");
        println!();
        println!("Usage: hyphen-points [OPTIONS] WORD...");
        println!();
        println!("Options:");
        println!("  --asset PATH     Use an external data asset");
        println!("  --threshold N    Acceptance threshold (default: 0)");
        println!("  -h, --help       Print this help");
        return;
    }

    let mut threshold: i8 = 0;
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
            s if !s.starts_with('-') => words.push(arg.clone()),
            _ => hyphen_cli::fatal(&format!("unknown option: {arg}")),
        }
    }

    let tables = hyphen_cli::load_tables(asset_path.as_deref())
        .unwrap_or_else(|e| hyphen_cli::fatal(&e));

    let mut engine = HyphenationEngine::with_suffixes(&tables.digrams, &tables.suffixes);
    engine.set_threshold(threshold);

    for word in &words {
        println!("{word}");
        for pos in 0..word.len() {
            match engine.position_weight(word, pos) {
                Some(weight) => {
                    let mark = if weight > threshold { '*' } else { ' ' };
                    println!("  {pos:3}  {:>4}  {mark}  {}-{}", weight, &word[..pos], &word[pos..]);
                }
                None => println!("  {pos:3}     -     (invalid)"),
            }
        }
    }
}
