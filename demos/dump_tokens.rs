//! Dumps every token of a file with its line and span
//!
//! ```text
//! cargo run --example dump_tokens -- TEXTURES.txt --hash --semicolon
//! RUST_LOG=debug cargo run --example dump_tokens -- TEXTURES.txt --echo
//! ```

use asset_tokenizer::{CommentMode, Tokenizer};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut path = None;
    let mut mode = CommentMode::default();
    let mut echo = false;
    let mut specials = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--no-c" => mode = mode.with_c_comments(false),
            "--hash" => mode = mode.with_hash_comments(true),
            "--semicolon" => mode = mode.with_semicolon_comments(true),
            "--echo" => echo = true,
            "--special" => specials = args.next(),
            _ => path = Some(arg),
        }
    }

    let Some(path) = path else {
        eprintln!(
            "usage: dump_tokens <file> [--no-c] [--hash] [--semicolon] [--special CHARS] [--echo]"
        );
        std::process::exit(2);
    };

    let mut tz = Tokenizer::new(mode);
    if let Some(chars) = specials {
        tz.set_special(&chars);
    }
    tz.set_debug(echo);
    tz.open_file(&path, 0, 0)?;

    let mut count = 0;
    for token in tz.tokens() {
        let marker = if token.quoted { "\"" } else { "" };
        println!(
            "{:>5}  {:<24}  {marker}{}{marker}",
            token.span.start.line,
            token.span.to_string(),
            token.text
        );
        count += 1;
    }
    println!("{count} tokens");

    Ok(())
}
