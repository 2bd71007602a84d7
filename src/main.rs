use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use lparse::lexer::lex;
use lparse::parser::{parse, ParseState};

#[derive(Parser)]
#[command(name = "lparse")]
#[command(version)]
#[command(about = "Parser for the L language")]
struct Cli {
    /// Source file to parse
    file: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let source = fs::read_to_string(&cli.file)
        .with_context(|| format!("failed to read {}", cli.file.display()))?;

    let tokens = lex(&source)?;
    let mut state = ParseState::new(tokens);
    let (tree, errors) = parse(&mut state);

    match tree {
        Some(tree) => {
            print!("{tree}");
            Ok(())
        }
        None => {
            for error in &errors {
                eprintln!("{error}");
            }
            bail!("{} syntax error(s)", errors.len());
        }
    }
}
