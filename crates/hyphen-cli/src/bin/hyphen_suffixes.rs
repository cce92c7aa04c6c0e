// hyphen-suffixes: decode the suffix pattern table.
//
// Prints the stored suffix records for the given starting letters, or for
// the whole alphabet when no letters are given.
//
// Usage:
//   hyphen-suffixes [OPTIONS] [LETTER...]
//
// Options:
//   --asset PATH   Use an external data asset
//   -h, --help     Print help

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (asset_path, args) = hyphen_cli::parse_asset_path(&args);

    if hyphen_cli::wants_help(&args) {
        println!("hyphen-suffixes: decode the suffix pattern table.");
        println!();
        println!("Usage: hyphen-suffixes [OPTIONS] [LETTER...]");
        println!();
        println!("Options:");
        println!("  --asset PATH   Use an external data asset");
        println!("  -h, --help     Print this help");
        return;
    }

    let letters: Vec<u8> = if args.is_empty() {
        (b'a'..=b'z').collect()
    } else {
        args.iter()
            .map(|a| {
                let bytes = a.as_bytes();
                if bytes.len() != 1 {
                    hyphen_cli::fatal(&format!("expected a single letter, got {a:?}"));
                }
                bytes[0]
            })
            .collect()
    };

    let tables = hyphen_cli::load_tables(asset_path.as_deref())
        .unwrap_or_else(|e| hyphen_cli::fatal(&e));

    for letter in letters {
        let count = tables.suffixes.for_each(letter, |entry| {
            let mut flags = String::new();
            if entry.allow_break_before {
                flags.push_str(" break-before");
            }
            if entry.priority {
                flags.push_str(" priority");
            }
            println!(
                "{}  {}{}",
                letter as char,
                String::from_utf8_lossy(entry.pattern),
                flags
            );
        });
        match count {
            Ok(0) => {
                if !args.is_empty() {
                    println!("{}  (no entries)", letter as char);
                }
            }
            Ok(_) => {}
            Err(e) => hyphen_cli::fatal(&format!("suffix lookup for {:?}: {e}", letter as char)),
        }
    }
}
