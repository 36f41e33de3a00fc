mod completer;
mod helper;
mod highlighter;

use owo_colors::OwoColorize;
use rustyline::error::ReadlineError;
use rustyline::{Config, EditMode, Editor};

use self::helper::ReplHelper;

pub fn run() -> Result<(), ReadlineError> {
    let config = Config::builder()
        .history_ignore_dups(true)?
        .completion_type(rustyline::CompletionType::List)
        .edit_mode(EditMode::Emacs)
        .build();

    let mut rl: Editor<ReplHelper, rustyline::history::DefaultHistory> =
        Editor::with_config(config)?;
    rl.set_helper(Some(ReplHelper));

    println!(
        "{} {}",
        "crowjs".bright_cyan().bold(),
        env!("CARGO_PKG_VERSION").bright_black()
    );
    println!("{}", "Type .help for REPL commands".bright_black());

    let mut show_tokens = false;

    loop {
        match rl.readline("> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                if handle_command(trimmed, &mut show_tokens) {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);
                parse_snippet(trimmed, show_tokens);
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "^C".yellow());
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "bye".bright_black());
                break;
            }
            Err(err) => return Err(err),
        }
    }

    Ok(())
}

fn handle_command(trimmed: &str, show_tokens: &mut bool) -> bool {
    match trimmed {
        ".exit" | "exit" => std::process::exit(0),
        ".help" => {
            println!("{}", ".help      show commands".bright_blue());
            println!("{}", ".tokens    toggle token dump".bright_blue());
            println!("{}", ".exit      exit REPL".bright_blue());
            true
        }
        ".tokens" => {
            *show_tokens = !*show_tokens;
            let state = if *show_tokens { "on" } else { "off" };
            println!("{}", format!("token dump {state}").green());
            true
        }
        _ => false,
    }
}

fn parse_snippet(source: &str, show_tokens: bool) {
    if show_tokens {
        let (tokens, _) = crowjs::lexer::lex(source);
        for token in &tokens {
            println!("{:>4}:{:<4} {:?}", token.line, token.column, token.kind);
        }
    }

    let result = crowjs::parse(source);
    for diagnostic in &result.diagnostics {
        let report =
            miette::Report::new(diagnostic.clone()).with_source_code(source.to_string());
        eprintln!("{report:?}");
    }

    if result.diagnostics.is_empty() {
        if let Some(program) = &result.program {
            match serde_json::to_string_pretty(program) {
                Ok(json) => println!("{json}"),
                Err(err) => eprintln!("{} {err}", "error:".red().bold()),
            }
        }
    }
}

/// Whether the snippet is visibly unfinished (open brackets or strings),
/// so the REPL should keep reading lines.
pub fn needs_more_input(source: &str) -> bool {
    let mut parens = 0i32;
    let mut braces = 0i32;
    let mut brackets = 0i32;
    let mut in_single = false;
    let mut in_double = false;
    let mut escaped = false;

    for ch in source.chars() {
        if escaped {
            escaped = false;
            continue;
        }
        if ch == '\\' {
            escaped = true;
            continue;
        }
        if !in_double && ch == '\'' {
            in_single = !in_single;
            continue;
        }
        if !in_single && ch == '"' {
            in_double = !in_double;
            continue;
        }
        if in_single || in_double {
            continue;
        }
        match ch {
            '(' => parens += 1,
            ')' => parens -= 1,
            '{' => braces += 1,
            '}' => braces -= 1,
            '[' => brackets += 1,
            ']' => brackets -= 1,
            _ => {}
        }
    }

    in_single
        || in_double
        || parens > 0
        || braces > 0
        || brackets > 0
        || source.trim_end().ends_with('\\')
}
