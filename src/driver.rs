//! File and interactive front ends for the scanner.
//!
//! A `Driver` owns the writers it reports to, so the binary hands it
//! stdout/stderr while tests hand it byte buffers.

use std::{
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    time::Instant,
};

use thiserror::Error;

use crate::{
    config::{PROMPT, QUIT_MESSAGE},
    display_error,
    errors::errors::Error as LexError,
    lexer::lexer::scan,
};

#[derive(Error, Debug)]
pub enum DriverError {
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Lex(#[from] LexError),
}

pub struct Driver<W: Write, E: Write> {
    out: W,
    err: E,
    verbose: bool,
}

impl<W: Write, E: Write> Driver<W, E> {
    pub fn new(out: W, err: E) -> Self {
        Driver {
            out,
            err,
            verbose: false,
        }
    }

    /// Also report scan timings to the error writer.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn into_writers(self) -> (W, E) {
        (self.out, self.err)
    }

    /// Scans `source` and prints the token count followed by one token per
    /// line. A lexical error is rendered to the error writer and returned.
    pub fn run(&mut self, source: &str) -> Result<(), DriverError> {
        let start = Instant::now();
        let result = scan(source);

        if self.verbose {
            writeln!(self.err, "Scanned in {:?}", start.elapsed())?;
        }

        let tokens = match result {
            Ok(tokens) => tokens,
            Err(error) => {
                display_error(&error, source, &mut self.err)?;
                return Err(DriverError::Lex(error));
            }
        };

        writeln!(self.out, "{}", tokens.len())?;
        for token in &tokens {
            writeln!(self.out, "{}", token)?;
        }

        Ok(())
    }

    pub fn run_file(&mut self, path: &Path) -> Result<(), DriverError> {
        let source = fs::read_to_string(path).map_err(|source| DriverError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        self.run(&source)
    }

    /// Runs one line at a time until an empty line or the end of `input`.
    ///
    /// Lexical errors only abandon the line they occur on. Bytes that are not
    /// UTF-8 become U+FFFD and are reported by the scanner like any other
    /// unexpected character.
    pub fn run_prompt<R: BufRead>(&mut self, mut input: R) -> Result<(), DriverError> {
        let mut buffer = Vec::new();

        loop {
            write!(self.out, "{}", PROMPT)?;
            self.out.flush()?;

            buffer.clear();
            if input.read_until(b'\n', &mut buffer)? == 0 {
                break;
            }

            let text = String::from_utf8_lossy(&buffer);
            let line = text.strip_suffix('\n').unwrap_or(&text);
            let line = line.strip_suffix('\r').unwrap_or(line);

            if line.is_empty() {
                writeln!(self.out, "{}", QUIT_MESSAGE)?;
                break;
            }

            match self.run(line) {
                Ok(()) | Err(DriverError::Lex(_)) => {}
                Err(other) => return Err(other),
            }
        }

        Ok(())
    }
}
