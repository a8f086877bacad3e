//! Interactive REPL and script runner for Ratlisp
//!
//! Usage: `ratlisp` for an interactive session, or `ratlisp FILE` to
//! evaluate a script (one expression per line) before the prompt.

use std::fs;
use std::io::{self, Write};

use anyhow::Context;
use ratlisp::{Interpreter, Scanner, SExprParser, SymbolicTree};

fn main() -> anyhow::Result<()> {
    let mut interpreter = Interpreter::new();

    // Load any script files given on the command line first; their
    // definitions stay available in the interactive session
    for path in std::env::args().skip(1) {
        load_file(&mut interpreter, &path)?;
    }

    println!("Ratlisp v{}", ratlisp::VERSION);
    println!("Type expressions and press Enter. Ctrl-D or 'exit' to quit.");
    println!();

    loop {
        print!("ratlisp> ");
        io::stdout().flush()?;

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) => break, // EOF
            Ok(_) => {}
            Err(err) => {
                eprintln!("Error reading input: {}", err);
                continue;
            }
        }

        let input = input.trim();

        match input {
            "" => continue,
            "exit" | "quit" => break,
            _ => {}
        }

        // One expression per line; errors never kill the session
        match execute_line(&mut interpreter, input) {
            Ok(result) => println!("{}", result),
            Err(err) => eprintln!("Error: {}", err),
        }
    }

    Ok(())
}

fn load_file(interpreter: &mut Interpreter, path: &str) -> anyhow::Result<()> {
    let source = fs::read_to_string(path).with_context(|| format!("cannot read '{}'", path))?;

    for (lineno, line) in source.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with(';') {
            continue;
        }
        execute_line(interpreter, line)
            .with_context(|| format!("{}:{}: {}", path, lineno + 1, line))?;
    }

    Ok(())
}

fn execute_line(interpreter: &mut Interpreter, source: &str) -> ratlisp::Result<SymbolicTree> {
    let tokens = Scanner::new(source).scan_tokens()?;
    let tree = SExprParser::new(tokens).parse()?;
    interpreter.interpret(tree)
}
