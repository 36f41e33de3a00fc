use std::fs;
use std::process;

use clap::Parser;
use owo_colors::OwoColorize;

mod repl;

#[derive(Parser)]
#[command(name = "crowjs", about = "A JavaScript parser in Rust", version)]
struct Cli {
    /// Path to a .js file to parse
    file: Option<String>,
    /// Print the token stream instead of the AST
    #[arg(long)]
    tokens: bool,
    /// Only report diagnostics; do not print the AST
    #[arg(long)]
    check: bool,
    /// Parse inline JavaScript source
    #[arg(long)]
    eval: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let (name, source) = if let Some(source) = cli.eval {
        ("<eval>".to_string(), source)
    } else if let Some(file) = cli.file {
        match fs::read_to_string(&file) {
            Ok(source) => (file, source),
            Err(err) => {
                eprintln!("{} could not read '{file}': {err}", "error:".red().bold());
                process::exit(1);
            }
        }
    } else {
        if let Err(err) = repl::run() {
            eprintln!("{} {err}", "repl error:".red().bold());
            process::exit(1);
        }
        return;
    };

    if cli.tokens {
        let (tokens, diagnostics) = crowjs::lexer::lex(&source);
        for token in &tokens {
            println!("{:>4}:{:<4} {:?}", token.line, token.column, token.kind);
        }
        report_diagnostics(&name, &source, &diagnostics);
        if !diagnostics.is_empty() {
            process::exit(1);
        }
        return;
    }

    let result = crowjs::parse(&source);
    report_diagnostics(&name, &source, &result.diagnostics);

    if !cli.check {
        if let Some(program) = &result.program {
            match serde_json::to_string_pretty(program) {
                Ok(json) => println!("{json}"),
                Err(err) => {
                    eprintln!("{} could not serialize AST: {err}", "error:".red().bold());
                    process::exit(1);
                }
            }
        }
    }

    if !result.diagnostics.is_empty() {
        process::exit(1);
    }
}

fn report_diagnostics(name: &str, source: &str, diagnostics: &[crowjs::SyntaxError]) {
    for diagnostic in diagnostics {
        let report = miette::Report::new(diagnostic.clone())
            .with_source_code(miette::NamedSource::new(name, source.to_string()));
        eprintln!("{report:?}");
    }
}
