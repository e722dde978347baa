use clap::Parser;
use exprwhizz::{eval_line, interpreter::store::VarStore};
use rustyline::{DefaultEditor, error::ReadlineError};

/// exprwhizz is an interactive calculator for arithmetic expressions with
/// named variables.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluate a single expression and exit instead of starting the
    /// interactive session.
    #[arg(short, long)]
    expr: Option<String>,
}

fn main() {
    let args = Args::parse();
    let mut vars = VarStore::new();

    if let Some(expr) = args.expr {
        match eval_line(&expr, &mut vars) {
            Ok(Some(evaluation)) => {
                println!("{}  ==> {}", evaluation.canonical, evaluation.value);
            },
            Ok(None) => {},
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
        return;
    }

    let mut rl = DefaultEditor::new().unwrap_or_else(|e| {
                                         eprintln!("Failed to initialize line editing: {e}");
                                         std::process::exit(1);
                                     });

    println!("Welcome to ExpressionWhizz!");

    loop {
        match rl.readline("\nExpr? ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if line.eq_ignore_ascii_case("quit") {
                    break;
                }

                let _ = rl.add_history_entry(line);

                match eval_line(line, &mut vars) {
                    Ok(Some(evaluation)) => {
                        println!("{}  ==> {}", evaluation.canonical, evaluation.value);
                    },
                    Ok(None) => {},
                    Err(e) => eprintln!("{e}"),
                }
            },
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("{e}");
                break;
            },
        }
    }
}
