use std::{env, process::ExitCode};

use minic_lexer::errors::errors::StreamError;
use minic_lexer::lexer::tokens::TokenKind;
use minic_lexer::tokenize_file;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("{}", StreamError::Usage);
        return ExitCode::FAILURE;
    }

    let tokens = match tokenize_file(&args[1]) {
        Ok(tokens) => tokens,
        Err(error) => {
            eprintln!("{}", error);
            return ExitCode::FAILURE;
        }
    };

    for token in &tokens {
        if token.kind != TokenKind::EOF {
            println!("{}", token);
        }
    }

    ExitCode::SUCCESS
}
