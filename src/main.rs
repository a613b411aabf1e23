//! propsub CLI
//!
//! Usage:
//!   propsub [OPTIONS] [FILE]
//!
//! Options:
//!   -p, --properties <FILE>  TOML property file (repeatable)
//!       --env                Fall back to environment variables
//!       --strict             Fail on unresolvable placeholders
//!       --prefix <STR>       Placeholder prefix (default "${")
//!       --suffix <STR>       Placeholder suffix (default "}")
//!       --separator <STR>    Inline-default separator (default ":")
//!   -h, --help               Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;

use propsub::{Expander, Properties, Syntax};

#[derive(Parser)]
#[command(name = "propsub")]
#[command(about = "Expand ${name} placeholders in text using property files")]
struct Cli {
    /// Input file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// TOML property file; may be given several times, later files override
    /// earlier ones
    #[arg(short, long = "properties", value_name = "FILE")]
    properties: Vec<PathBuf>,

    /// Fall back to environment variables for placeholders missing from the
    /// property files
    #[arg(long)]
    env: bool,

    /// Fail on placeholders that cannot be resolved
    #[arg(long)]
    strict: bool,

    /// Placeholder prefix
    #[arg(long, default_value = "${")]
    prefix: String,

    /// Placeholder suffix
    #[arg(long, default_value = "}")]
    suffix: String,

    /// Separator between a placeholder name and its inline default
    #[arg(long, default_value = ":")]
    separator: String,

    /// Disable the inline-default syntax entirely
    #[arg(long)]
    no_separator: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    // Load and overlay property files in the order given
    let mut properties = Properties::new();
    for path in &cli.properties {
        match Properties::from_file(path) {
            Ok(loaded) => properties.merge(loaded),
            Err(e) => {
                eprintln!("Error loading properties '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        }
    }

    // Read input
    let (source, filename) = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => (buffer, "<stdin>".to_string()),
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    if cli.prefix.is_empty() || cli.suffix.is_empty() {
        eprintln!("Error: --prefix and --suffix must not be empty");
        std::process::exit(2);
    }

    let mut syntax = Syntax::new(cli.prefix.as_str(), cli.suffix.as_str());
    if !cli.no_separator {
        syntax = syntax.with_value_separator(cli.separator.as_str());
    }
    let expander = Expander::new(syntax).with_ignore_unresolvable(!cli.strict);

    let use_env = cli.env;
    let resolver = move |name: &str| {
        properties
            .get(name)
            .map(str::to_string)
            .or_else(|| use_env.then(|| std::env::var(name).ok()).flatten())
    };

    match expander.expand(&source, &resolver) {
        Ok(expanded) => {
            print!("{}", expanded);
        }
        Err(e) => {
            eprintln!("{}", e.report(&filename));
            std::process::exit(1);
        }
    }
}

fn print_intro() {
    println!(
        r#"propsub - expand ${{name}} placeholders using property files

USAGE:
    propsub [OPTIONS] [FILE]
    echo 'host=${{db.host}}' | propsub -p app.toml

OPTIONS:
    -p, --properties <FILE>  TOML property file (repeatable, later wins)
        --env                Fall back to environment variables
        --strict             Fail on unresolvable placeholders
        --prefix <STR>       Placeholder prefix (default "${{")
        --suffix <STR>       Placeholder suffix (default "}}")
        --separator <STR>    Inline-default separator (default ":")
        --no-separator       Disable inline defaults
    -h, --help               Print help

QUICK START:
    echo 'listening on ${{port:8080}}' | propsub

Placeholders resolve recursively: a value may contain further placeholders,
and ${{${{which}}.host}} first resolves `which`, then looks up the result.
Unresolvable placeholders pass through unchanged unless --strict is given."#
    );
}
