#![allow(clippy::module_inception)]

use std::{fs::File, io::BufReader, path::Path};

use crate::errors::errors::StreamError;
use crate::lexer::scanner::Scanner;
use crate::lexer::tokens::Token;

pub mod errors;
pub mod lexer;

/// Opens a source file and scans it to completion, EOF token included.
pub fn tokenize_file(path: impl AsRef<Path>) -> Result<Vec<Token>, StreamError> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|source| StreamError::Open {
        path: path.display().to_string(),
        source,
    })?;

    Ok(Scanner::new(BufReader::new(file)).tokenize())
}

#[cfg(test)]
mod tests {
    use crate::errors::errors::StreamError;

    #[test]
    fn test_tokenize_file_missing() {
        let result = super::tokenize_file("does_not_exist.mc");
        assert!(matches!(result, Err(StreamError::Open { .. })));
    }
}
