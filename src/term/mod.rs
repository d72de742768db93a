extern crate ansi_term;
use crate::exit_codes;
use crate::mach::{Event, Listing, Runtime};
use ansi_term::Style;
use std::io::Write;
use tracing::debug;

const CYCLES: usize = 5000;

pub fn main(listing_only: bool) -> i32 {
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();
    let listing = Listing::values();
    let result = if listing_only {
        list(&listing, &mut out).map(|_| true)
    } else {
        run(&mut Runtime::new(listing), &mut out, &mut err)
    };
    exit_code(result, &mut err)
}

/// Map the outcome of `run` or `list` to a process exit code, reporting
/// any I/O error to `err`.
pub fn exit_code<E: Write>(result: std::io::Result<bool>, err: &mut E) -> i32 {
    match result {
        Ok(true) => exit_codes::OK,
        Ok(false) => exit_codes::FAILED,
        Err(error) => {
            let _ = writeln!(err, "{}", Style::new().bold().paint(error.to_string()));
            exit_codes::FAILED
        }
    }
}

/// Write the annotated source of a listing.
pub fn list<W: Write>(listing: &Listing, out: &mut W) -> std::io::Result<()> {
    write!(out, "{}", listing)?;
    out.flush()
}

/// Drive the runtime until it stops, writing printed lines to `out` and
/// errors to `err`. Returns `false` if the program reported any errors.
pub fn run<W: Write, E: Write>(
    runtime: &mut Runtime,
    out: &mut W,
    err: &mut E,
) -> std::io::Result<bool> {
    let mut success = true;
    loop {
        match runtime.execute(CYCLES) {
            Event::Stopped => break,
            Event::Running => {}
            Event::Print(s) => {
                out.write_all(s.as_bytes())?;
            }
            Event::Errors(errors) => {
                success = false;
                out.flush()?;
                for error in errors.iter() {
                    err.write_fmt(format_args!(
                        "{}\n",
                        Style::new().bold().paint(format!("?{}", error))
                    ))?;
                }
            }
        }
    }
    debug!(success, "program stopped");
    out.flush()?;
    Ok(success)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ast::{Expression, Statement};
    use std::io::{Error, ErrorKind};

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(Error::new(ErrorKind::BrokenPipe, "broken pipe"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Err(Error::new(ErrorKind::BrokenPipe, "broken pipe"))
        }
    }

    #[test]
    fn test_run_writes_lines() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut runtime = Runtime::new(Listing::values());
        assert!(run(&mut runtime, &mut out, &mut err).unwrap());
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "kotlin\n2\n2.3333333333333335\nfalse\ntrue\nfalse\n"
        );
        assert!(err.is_empty());
    }

    #[test]
    fn test_run_reports_errors() {
        let mut listing = Listing::default();
        listing.push(None, Statement::Print(Expression::not(1))).unwrap();
        let mut out = Vec::new();
        let mut err = Vec::new();
        assert!(!run(&mut Runtime::new(listing), &mut out, &mut err).unwrap());
        assert!(out.is_empty());
        assert!(String::from_utf8(err)
            .unwrap()
            .contains("?TYPE MISMATCH IN 1"));
    }

    #[test]
    fn test_list() {
        let mut out = Vec::new();
        list(&Listing::values(), &mut out).unwrap();
        let s = String::from_utf8(out).unwrap();
        assert!(s.contains("fun main() {\n"));
        assert!(s.contains("    println(7.0 / 3.0)\n"));
    }

    #[test]
    fn test_closed_pipe() {
        let mut err = Vec::new();
        let mut runtime = Runtime::new(Listing::values());
        let result = run(&mut runtime, &mut ClosedPipe, &mut err);
        assert_eq!(
            result.as_ref().map_err(|e| e.kind()),
            Err(ErrorKind::BrokenPipe)
        );
        assert_eq!(exit_code(result, &mut err), exit_codes::FAILED);
        assert!(String::from_utf8(err).unwrap().contains("broken pipe"));
    }

    #[test]
    fn test_exit_codes() {
        let mut err = Vec::new();
        assert_eq!(exit_code(Ok(true), &mut err), exit_codes::OK);
        assert_eq!(exit_code(Ok(false), &mut err), exit_codes::FAILED);
        assert!(err.is_empty());
    }
}
