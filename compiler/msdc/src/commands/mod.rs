//! Subcommands of the `msd` binary.
//!
//! Each command prints its result to stdout, reports failures to stderr and
//! returns whether it succeeded; `main` turns that into the exit status.

use std::io::{self, Read};

use crate::{evaluate, format, format_inline, report, MsdError};

/// Where a program comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(String),
}

impl Input {
    /// `-` and a missing argument both mean stdin.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None | Some("-") => Input::Stdin,
            Some(path) => Input::File(path.to_owned()),
        }
    }

    /// Name shown in diagnostics.
    pub fn display_name(&self) -> &str {
        match self {
            Input::Stdin => "<stdin>",
            Input::File(path) => path,
        }
    }

    /// Read the whole program, or describe why that failed.
    pub fn read(&self) -> Result<String, String> {
        match self {
            Input::Stdin => {
                let mut content = String::new();
                io::stdin()
                    .read_to_string(&mut content)
                    .map_err(|e| format!("error reading standard input: {e}"))?;
                Ok(content)
            }
            Input::File(path) => std::fs::read_to_string(path).map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
                io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
                _ => format!("error reading '{path}': {e}"),
            }),
        }
    }
}

/// How `msd fmt` lays out its output.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum FormatStyle {
    #[default]
    Pretty,
    Inline,
}

/// `msd run`: interpret the program and print its value.
pub fn run_file(input: &Input) -> bool {
    execute(input, evaluate)
}

/// `msd fmt`: print the program back in canonical form.
pub fn format_file(input: &Input, style: FormatStyle) -> bool {
    match style {
        FormatStyle::Pretty => execute(input, format),
        FormatStyle::Inline => execute(input, format_inline),
    }
}

fn execute(input: &Input, action: fn(&str) -> Result<String, MsdError>) -> bool {
    let source = match input.read() {
        Ok(source) => source,
        Err(msg) => {
            eprintln!("error: {msg}");
            return false;
        }
    };
    match action(&source) {
        Ok(output) => {
            println!("{output}");
            true
        }
        Err(error) => {
            report::emit(&error, &source, input.display_name());
            false
        }
    }
}
