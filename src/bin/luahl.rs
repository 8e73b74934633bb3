//! Command-line front end: highlight a Lua snippet as HTML.
//!
//! Usage:
//!   luahl [FILE] [--force] [--tokens] [--class-prefix PREFIX]
//!
//! Reads stdin when FILE is omitted.

use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use luahl::highlight::{ClassMap, HighlightConfig, LuaHighlighter, escape_html};

#[derive(Parser, Debug)]
#[command(name = "luahl", version, about = "Highlight Lua configuration snippets as HTML")]
struct Args {
    /// Source file (defaults to stdin)
    file: Option<PathBuf>,

    /// Highlight even if the text does not look like Lua
    #[arg(long)]
    force: bool,

    /// Print the token list instead of HTML
    #[arg(long)]
    tokens: bool,

    /// Prefix for the emitted class names
    #[arg(long, default_value = "lua-")]
    class_prefix: String,
}

fn read_source(file: Option<&PathBuf>) -> luahl::Result<String> {
    match file {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn run(args: &Args) -> luahl::Result<()> {
    let source = read_source(args.file.as_ref())?;
    let config =
        HighlightConfig::lua().with_classes(ClassMap::new(args.class_prefix.as_str()));
    let highlighter = LuaHighlighter::new(config)?;
    let detected = args.force || highlighter.looks_like_lua(&source);

    let mut stdout = io::stdout().lock();
    if args.tokens {
        if detected {
            for token in highlighter.tokenize(&source) {
                writeln!(
                    stdout,
                    "{}..{}\t{}\t{:?}",
                    token.start,
                    token.end,
                    token.category,
                    token.text(&source)
                )?;
            }
        }
    } else if detected {
        stdout.write_all(highlighter.highlight(&source).as_bytes())?;
    } else {
        stdout.write_all(escape_html(&source).as_bytes())?;
    }
    stdout.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("luahl: {err}");
            ExitCode::FAILURE
        }
    }
}
