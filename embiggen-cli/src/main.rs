//! Embiggen CLI
//!
//! Reads shorthand lines from stdin (or a file) and prints the generated
//! HTML for each.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use embiggen::{RenderOptions, compile};
use embiggen_dom::print_tree;
use owo_colors::OwoColorize;

/// Embiggen embiggens your HTML generation
#[derive(Parser, Debug)]
#[command(name = "embiggen")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Expand a line from stdin
    echo 'div#header > span{Hello}' | embiggen

    # Expand every line of a file, indenting with four spaces
    embiggen --indent-string '    ' snippets.txt

    # Annotate closing div tags with their ids
    echo 'div#nav > ul > li{Home}' | embiggen --close-tag-guides

    # Inspect the parse tree instead of rendering
    echo 'div > span{x}' | embiggen --dump-tree
"#)]
struct Cli {
    /// File of shorthand lines to expand (defaults to stdin)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// The string to prepend at each indentation level
    #[arg(long, value_name = "INDENT_STRING", default_value = "\t")]
    indent_string: String,

    /// Add comments at the end of divs that carry an id
    #[arg(long)]
    close_tag_guides: bool,

    /// Print the parse tree instead of the generated HTML
    #[arg(long)]
    dump_tree: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let input = match &cli.file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read '{}'", path.display()))?,
        None => {
            let mut buffer = String::new();
            let _ = std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            buffer
        }
    };

    let options = RenderOptions {
        indent_unit: cli.indent_string.clone(),
        newline: "\n".to_string(),
        close_tag_guides: cli.close_tag_guides,
    };

    for (line_number, line) in input.lines().enumerate() {
        if cli.dump_tree {
            match embiggen::parse(line) {
                Ok(tree) => print_tree(&tree, tree.root(), 0),
                Err(err) => report_and_exit(line_number + 1, &err),
            }
            continue;
        }

        match compile(line, &options) {
            // Each fragment is followed by one blank line.
            Ok(html) => println!("{html}"),
            Err(err) => report_and_exit(line_number + 1, &err),
        }
    }

    Ok(())
}

/// Print a diagnostic for a line that failed to compile, then abort.
fn report_and_exit(line_number: usize, err: &embiggen::CompileError) -> ! {
    eprintln!("{} line {line_number}: {err}", "error:".red().bold());
    std::process::exit(1);
}
