// Logic Expression Parser
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/main.rs
// Interactive and batch front end for the parser

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use logic_expr::{
    parse_atom, parse_clause_body, parse_formula, parse_function, parse_include, parse_rule,
    parse_signature, parse_term, parse_term_list, reformat, ParseResult, Variable,
};
use std::collections::HashSet;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Parse and pretty-print logic expressions", long_about = None)]
struct Args {
    /// Construct each statement is parsed as
    #[arg(short, long, value_enum, default_value_t = Mode::Formula)]
    mode: Mode,

    /// Lay out reformatted rules with one literal per line
    #[arg(long)]
    multiline: bool,

    /// Normalize each statement before parsing it
    #[arg(short, long)]
    reformat: bool,

    /// Read statements from a file instead of the prompt
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Also print the parsed structure and its variables
    #[arg(short, long)]
    verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Term,
    List,
    Function,
    Atom,
    Body,
    Rule,
    Formula,
    Include,
    Signature,
    Reformat,
}

/// What a statement turned into, ready for printing.
struct Outcome {
    text: String,
    debug: String,
    variables: Vec<String>,
}

impl Outcome {
    fn new<T: fmt::Display + fmt::Debug>(value: &T, variables: &HashSet<Variable>) -> Self {
        let mut variables: Vec<String> = variables.iter().map(|v| v.to_string()).collect();
        variables.sort();
        Outcome {
            text: value.to_string(),
            debug: format!("{:?}", value),
            variables,
        }
    }

    fn plain(text: String) -> Self {
        Outcome {
            debug: format!("{:?}", text),
            text,
            variables: vec![],
        }
    }
}

fn evaluate(args: &Args, statement: &str) -> ParseResult<Outcome> {
    let normalized;
    let text = if args.reformat && args.mode != Mode::Reformat {
        normalized = reformat(statement, args.multiline)?;
        log::debug!("normalized {:?} to {:?}", statement, normalized);
        normalized.as_str()
    } else {
        statement
    };

    let outcome = match args.mode {
        Mode::Term => {
            let t = parse_term(text)?;
            Outcome::new(&t, &t.variables())
        }
        Mode::List => {
            let l = parse_term_list(text)?;
            Outcome::new(&l, l.variables())
        }
        Mode::Function => {
            let f = parse_function(text)?;
            Outcome::new(&f, f.variables())
        }
        Mode::Atom => {
            let a = parse_atom(text)?;
            Outcome::new(&a, a.variables())
        }
        Mode::Body => {
            let b = parse_clause_body(text)?;
            Outcome::new(&b, b.variables())
        }
        Mode::Rule => {
            let r = parse_rule(text)?;
            let mut outcome = Outcome::new(&r, r.variables());
            if args.multiline {
                outcome.text = r.to_pretty_string(4);
            }
            outcome
        }
        Mode::Formula => {
            let f = parse_formula(text)?;
            let mut outcome = Outcome::new(&f, f.variables());
            if let (true, Some(r)) = (args.multiline, f.as_rule()) {
                outcome.text = r.to_pretty_string(4);
            }
            outcome
        }
        Mode::Include => {
            let i = parse_include(text)?;
            Outcome::new(&i, &HashSet::new())
        }
        Mode::Signature => {
            let sig = parse_signature(text)?;
            Outcome::new(&sig, &HashSet::new())
        }
        Mode::Reformat => Outcome::plain(reformat(text, args.multiline)?),
    };
    Ok(outcome)
}

fn print_outcome(args: &Args, statement: &str) {
    match evaluate(args, statement) {
        Err(e) => {
            println!("Parse error: {}", e);
        }
        Ok(outcome) => {
            println!("{}", outcome.text);
            if args.verbose {
                println!("  {}", outcome.debug);
                println!("  variables: {{{}}}", outcome.variables.join(", "));
            }
        }
    }
}

/// Statements in a file may span lines; each one ends with a `.`.
fn run_file(args: &Args, reader: impl BufRead) -> Result<()> {
    let mut statement = String::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if statement.is_empty() && (trimmed.is_empty() || trimmed.starts_with('%')) {
            continue;
        }
        if !statement.is_empty() {
            statement.push('\n');
        }
        statement.push_str(&line);
        if trimmed.ends_with('.') {
            print_outcome(args, statement.trim());
            statement.clear();
        }
    }
    if !statement.trim().is_empty() {
        log::warn!("statement without a closing '.' at end of input");
        print_outcome(args, statement.trim());
    }
    Ok(())
}

fn run_prompt(args: &Args) -> Result<()> {
    println!("Logic Expression Parser v{}", env!("CARGO_PKG_VERSION"));
    println!("Mode: {:?}. Type statements to parse, or Ctrl-D to exit", args.mode);
    println!();

    let mut infile = io::stdin().lock();

    loop {
        print!("logic> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match infile.read_line(&mut line) {
            Ok(0) => {
                println!("\nGoodbye!");
                break;
            }
            Err(e) => {
                println!("Error reading input: {}", e);
                break;
            }
            Ok(_) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                print_outcome(args, trimmed);
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    log::debug!("{:?}", args);

    match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("cannot open input file {}", path.display()))?;
            run_file(&args, BufReader::new(file))
        }
        None => run_prompt(&args),
    }
}
