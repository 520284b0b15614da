use std::io::{self, BufRead, Write};
use std::time::Duration;

/// Waiting and prompting for a [`super::BreakReminder`].
pub trait ReminderHost {
    /// Block for `duration`.
    fn pause(&mut self, duration: Duration);

    /// Write `prompt` and read one line of response, without the line ending.
    ///
    /// Returns an `UnexpectedEof` error when input is closed.
    fn ask(&mut self, prompt: &str) -> io::Result<String>;
}

/// Sleeps the current thread and talks over a reader/writer pair.
pub struct TerminalHost<R, W> {
    input: R,
    output: W,
}

impl TerminalHost<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalHost<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> ReminderHost for TerminalHost<R, W> {
    fn pause(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }

    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        self.output.write_all(prompt.as_bytes())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before an answer was given",
            ));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn ask_writes_prompt_and_strips_newline() {
        let mut host = TerminalHost::new(Cursor::new("Yes\r\n"), Vec::new());
        let answer = host.ask("Restart timer?\n(Yes/No)\n").unwrap();
        assert_eq!(answer, "Yes");
        assert_eq!(host.into_output(), b"Restart timer?\n(Yes/No)\n");
    }

    #[test]
    fn ask_on_closed_input_is_eof() {
        let mut host = TerminalHost::new(Cursor::new(""), Vec::new());
        let err = host.ask("?").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
