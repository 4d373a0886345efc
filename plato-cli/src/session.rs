//! Interactive lookup session
//!
//! Reads a tag, looks it up, and on a miss shows the known tags and gives the
//! user exactly one more try. A second miss is returned to the caller.
//!
//! In JSON mode stdout carries only the JSON record; prompts and the miss
//! report go to the diagnostic writer instead.

use plato_core::{ConstantRecord, LookupError};
use plato_registry::{Constant, ConstantEntry, SharedRegistry};
use plato_std::constants::{distance, fundamental};
use std::fmt;
use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Lookup(#[from] LookupError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SessionError {
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            SessionError::Lookup(err) => Some(err.suggestion()),
            SessionError::Io(_) | SessionError::Json(_) => None,
        }
    }
}

/// Output options
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    pub json: bool,
    pub quiet: bool,
}

/// Read one line, without its line terminator. End of input reads as empty.
fn read_tag<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    let len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(len);
    Ok(line)
}

/// Write prose to stdout, or to the diagnostic writer in JSON mode
fn say<W: Write, E: Write>(options: Options, out: &mut W, diag: &mut E, text: fmt::Arguments<'_>) -> io::Result<()> {
    if options.json {
        diag.write_fmt(text)?;
        diag.flush()
    } else {
        out.write_fmt(text)?;
        out.flush()
    }
}

pub fn greet<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Welcome to Plato.Constant v{}!", ConstantRecord::version())?;
    writeln!(out)?;

    // Compile time usage
    writeln!(out, "- Hello, light-year, who are you?")?;
    writeln!(out, "- Hi! I am {}.", distance::LightYear::DESCRIPTION)?;
    writeln!(out, "  That is {}", distance::LightYear::SI)?;
    writeln!(out, "  or {} if you prefer.", distance::LightYear::CGS)?;
    writeln!(out)?;

    // With alias
    writeln!(out, "- Hello, Planck constant, or should I say... h?")?;
    writeln!(out, "- I am {}", fundamental::h::SI)?;
    writeln!(out, "  id est {}", fundamental::Planck::CGS)?;
    writeln!(out)?;
    Ok(())
}

pub fn list<W: Write>(registry: &SharedRegistry, options: Options, out: &mut W) -> Result<(), SessionError> {
    if options.json {
        let snapshot = registry.snapshot();
        serde_json::to_writer_pretty(&mut *out, &snapshot.entries())?;
        writeln!(out)?;
    } else {
        for tag in registry.tags() {
            writeln!(out, "{}", tag)?;
        }
    }
    Ok(())
}

/// Run one lookup, retrying once on a miss
///
/// `tag` is the first attempt; when absent it is read from `input` after a
/// prompt.
pub fn run<R: BufRead, W: Write, E: Write>(
    registry: &SharedRegistry,
    tag: Option<String>,
    options: Options,
    input: &mut R,
    out: &mut W,
    diag: &mut E,
) -> Result<(), SessionError> {
    if !options.quiet && !options.json {
        greet(out)?;
    }

    let tag = match tag {
        Some(tag) => tag,
        None => {
            say(options, out, diag, format_args!("Please enter the name of a constant you wish to learn about:\n"))?;
            read_tag(input)?
        }
    };

    let (tag, record) = match registry.lookup(&tag) {
        Ok(record) => (tag, record),
        Err(err) => {
            tracing::info!(tag = %tag, "first lookup missed, asking again");
            say(options, out, diag, format_args!("{}\nTry again!\n", err))?;
            let retry = read_tag(input)?;
            let record = registry.lookup(&retry)?;
            (retry, record)
        }
    };

    if options.json {
        serde_json::to_writer_pretty(&mut *out, &ConstantEntry { tag: &tag, record: &record })?;
        writeln!(out)?;
    } else {
        writeln!(out, "{} is {}.", record.description, record.si)?;
        writeln!(out)?;
    }
    Ok(())
}

/// Report a failed session
pub fn report<E: Write>(err: &SessionError, diag: &mut E) -> io::Result<()> {
    writeln!(diag, "{}", err)?;
    if let Some(suggestion) = err.suggestion() {
        writeln!(diag, "suggestion: {}", suggestion)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn registry() -> SharedRegistry {
        SharedRegistry::new(plato_std::standard_registry())
    }

    fn quiet() -> Options {
        Options { json: false, quiet: true }
    }

    struct Transcript {
        result: Result<(), SessionError>,
        out: String,
        diag: String,
    }

    fn transcript(tag: Option<&str>, input: &str, options: Options) -> Transcript {
        let mut input = Cursor::new(input.as_bytes().to_vec());
        let mut out = Vec::new();
        let mut diag = Vec::new();
        let result = run(&registry(), tag.map(str::to_string), options, &mut input, &mut out, &mut diag);
        Transcript {
            result,
            out: String::from_utf8(out).unwrap(),
            diag: String::from_utf8(diag).unwrap(),
        }
    }

    fn session(tag: Option<&str>, input: &str, options: Options) -> (Result<(), SessionError>, String) {
        let t = transcript(tag, input, options);
        (t.result, t.out)
    }

    #[test]
    fn test_lookup_from_stdin() {
        let (result, out) = session(None, "Distance::LightYear\n", quiet());
        assert!(result.is_ok());
        assert!(out.starts_with("Please enter the name of a constant you wish to learn about:\n"));
        assert!(out.contains("The distance that light travels in one year is 92276118600000 m.\n"));
    }

    #[test]
    fn test_crlf_is_stripped() {
        let (result, out) = session(None, "Fundamental::Planck\r\n", quiet());
        assert!(result.is_ok());
        assert!(out.contains("The Planck constant is 6.62607015e-34 J.s."));
    }

    #[test]
    fn test_tag_argument_skips_prompt() {
        let (result, out) = session(Some("Fundamental::ElectronMass"), "", quiet());
        assert!(result.is_ok());
        assert!(!out.contains("Please enter"));
        assert!(out.starts_with("The mass of the electron is 9.1093837e-31 kg."));
    }

    #[test]
    fn test_retry_once_then_succeed() {
        let (result, out) = session(None, "bogus\nFundamental::Planck\n", quiet());
        assert!(result.is_ok());
        assert!(out.contains("No constant named: bogus.\nList of known constants: [Astronomy::SolarMass, "));
        assert!(out.contains("]\nTry again!\n"));
        assert!(out.contains("The Planck constant is"));
    }

    #[test]
    fn test_second_miss_propagates() {
        let (result, out) = session(None, "bogus\nstill bogus\nFundamental::Planck\n", quiet());
        match result {
            Err(SessionError::Lookup(err)) => assert_eq!(err.tag(), "still bogus"),
            other => panic!("expected lookup error, got {:?}", other),
        }
        assert_eq!(out.matches("Try again!").count(), 1);
        assert!(!out.contains("The Planck constant is"));
    }

    #[test]
    fn test_end_of_input_is_a_miss() {
        let (result, _) = session(None, "", quiet());
        match result {
            Err(SessionError::Lookup(err)) => assert_eq!(err.tag(), ""),
            other => panic!("expected lookup error, got {:?}", other),
        }
    }

    #[test]
    fn test_greeting() {
        let (result, out) = session(Some("Distance::Parsec"), "", Options::default());
        assert!(result.is_ok());
        assert!(out.starts_with("Welcome to Plato.Constant v1.0.0!\n\n"));
        assert!(out.contains("- Hi! I am The distance that light travels in one year.\n"));
        assert!(out.contains("  That is 92276118600000 m\n"));
        assert!(out.contains("  or 9227611860000000 cm if you prefer.\n"));
        assert!(out.contains("- I am 6.62607015e-34 J.s\n"));
        assert!(out.contains("  id est 6.62607015e-27 erg.s\n"));
    }

    #[test]
    fn test_json_output() {
        let options = Options { json: true, quiet: true };
        let (result, out) = session(Some("Fundamental::Planck"), "", options);
        assert!(result.is_ok());
        let value: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
        assert_eq!(value["tag"], "Fundamental::Planck");
        let si = value["si"]["value"].as_f64().unwrap();
        assert!((si - 6.62607015e-34).abs() < 1e-45, "si value: {}", si);
        assert_eq!(value["cgs"]["unit"], "erg.s");
        assert_eq!(value["description"], "The Planck constant");
    }

    #[test]
    fn test_list_tags() {
        let mut out = Vec::new();
        list(&registry(), quiet(), &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines, registry().tags());
    }

    #[test]
    fn test_list_json() {
        let mut out = Vec::new();
        list(&registry(), Options { json: true, quiet: true }, &mut out).unwrap();
        let entries: Vec<serde_json::Value> = serde_json::from_slice(&out).unwrap();
        assert_eq!(entries.len(), registry().len());
        assert_eq!(entries[0]["tag"], "Astronomy::SolarMass");
    }

    #[test]
    fn test_json_output_without_quiet_is_pure_json() {
        let options = Options { json: true, quiet: false };
        let t = transcript(Some("Fundamental::Planck"), "", options);
        assert!(t.result.is_ok());
        let value: serde_json::Value = serde_json::from_str(t.out.trim()).unwrap();
        assert_eq!(value["tag"], "Fundamental::Planck");
        assert!(!t.diag.contains("Welcome"));
    }

    #[test]
    fn test_json_retry_prose_goes_to_diagnostics() {
        let options = Options { json: true, quiet: false };
        let t = transcript(None, "bogus\nDistance::LightYear\n", options);
        assert!(t.result.is_ok());
        let value: serde_json::Value = serde_json::from_str(t.out.trim()).unwrap();
        assert_eq!(value["tag"], "Distance::LightYear");
        assert!(t.diag.starts_with("Please enter the name of a constant you wish to learn about:\n"));
        assert!(t.diag.contains("No constant named: bogus.\n"));
        assert!(t.diag.ends_with("Try again!\n"));
    }

    #[test]
    fn test_text_mode_leaves_diagnostics_empty() {
        let t = transcript(None, "bogus\nDistance::LightYear\n", quiet());
        assert!(t.result.is_ok());
        assert!(t.diag.is_empty());
        assert!(t.out.contains("Try again!"));
    }

    #[test]
    fn test_report_includes_suggestion_once() {
        let t = transcript(None, "bogus\nnope\n", quiet());
        let err = t.result.unwrap_err();
        let mut diag = Vec::new();
        report(&err, &mut diag).unwrap();
        let diag = String::from_utf8(diag).unwrap();
        assert_eq!(diag.matches("No constant named: nope.").count(), 1);
        assert!(diag.ends_with("suggestion: Use a tag of the form Group::Name from the list\n"));
    }

    #[test]
    fn test_io_errors_have_no_suggestion() {
        let err = SessionError::from(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        assert_eq!(err.suggestion(), None);
    }
}
