//! Console input producing IO actions.
//!
//! Standard input is read only when the returned action is run, one line per
//! run. End of input is a fault, so an exhausted console cannot be mistaken
//! for an empty line.

use std::io::{self, BufRead, Write};

use super::error::Fault;
use super::io::IO;

impl IO<String, Fault> {
    /// Reads one line from standard input, without its line terminator.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use rivulet::effect::IO;
    ///
    /// let name = IO::read_line().map(|line| line.trim().to_string());
    /// let greeting = name.flat_map(|name| IO::print_line(format!("Hello, {name}!")));
    /// greeting.run()?;
    /// # Ok::<(), rivulet::effect::Fault>(())
    /// ```
    pub fn read_line() -> Self {
        IO::new(|| {
            #[cfg(feature = "tracing")]
            tracing::trace!("reading line from stdin");
            read_line_from(&mut io::stdin().lock())
        })
    }

    /// Writes `message` to standard output without a newline, then reads one
    /// line from standard input.
    pub fn prompt(message: impl Into<String>) -> Self {
        let message = message.into();
        IO::new(move || {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(message.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(Fault::Console)?;
            drop(stdout);
            read_line_from(&mut io::stdin().lock())
        })
    }
}

fn read_line_from(reader: &mut impl BufRead) -> Result<String, Fault> {
    let mut line = String::new();
    if reader.read_line(&mut line).map_err(Fault::Console)? == 0 {
        return Err(Fault::Console(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "end of input",
        )));
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::{Cursor, Read};

    #[rstest]
    #[case("alice\n", "alice")]
    #[case("bob\r\n", "bob")]
    #[case("no terminator", "no terminator")]
    #[case("\n", "")]
    #[case("first\nsecond\n", "first")]
    fn test_read_line_strips_one_terminator(#[case] input: &str, #[case] expected: &str) {
        let mut reader = Cursor::new(input.as_bytes());
        assert_eq!(read_line_from(&mut reader).unwrap(), expected);
    }

    #[rstest]
    fn test_read_line_consumes_one_line_per_call() {
        let mut reader = Cursor::new("one\ntwo\n".as_bytes());
        assert_eq!(read_line_from(&mut reader).unwrap(), "one");
        assert_eq!(read_line_from(&mut reader).unwrap(), "two");
    }

    #[rstest]
    fn test_read_line_at_end_of_input_is_console_fault() {
        let mut reader = Cursor::new(&b""[..]);
        let fault = read_line_from(&mut reader).unwrap_err();
        assert!(matches!(fault, Fault::Console(_)));
        assert_eq!(fault.io_kind(), Some(io::ErrorKind::UnexpectedEof));
    }

    struct Broken;

    impl Read for Broken {
        fn read(&mut self, _buffer: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }
    }

    #[rstest]
    fn test_read_error_becomes_console_fault() {
        let mut reader = io::BufReader::new(Broken);
        let fault = read_line_from(&mut reader).unwrap_err();
        assert_eq!(fault.io_kind(), Some(io::ErrorKind::BrokenPipe));
        assert_eq!(fault.to_string(), "console: pipe closed");
    }

    #[rstest]
    fn test_read_line_is_deferred() {
        let io = IO::read_line();
        assert_eq!(format!("{io:?}"), "IO(<effect>)");
    }
}
