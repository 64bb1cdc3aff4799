use std::io::BufRead;

use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

/// A source of user input lines.
pub trait LineInput {
    /// Read the next line without its terminator. `None` means the user
    /// closed the input.
    fn read_line(&mut self) -> Result<Option<String>>;
}

/// Line editor with history, used when stdin is a terminal.
pub struct ReadlineInput {
    editor: DefaultEditor,
}

impl ReadlineInput {
    pub fn new() -> Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineInput for ReadlineInput {
    fn read_line(&mut self) -> Result<Option<String>> {
        match self.editor.readline("> ") {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

/// Plain buffered reader, used for piped input.
pub struct BufReadInput<R> {
    reader: R,
}

impl<R: BufRead> BufReadInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineInput for BufReadInput<R> {
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(len);
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_bufread_input() {
        let mut input = BufReadInput::new(Cursor::new("1\r\nall\n\nlast"));
        assert_eq!(input.read_line().unwrap().as_deref(), Some("1"));
        assert_eq!(input.read_line().unwrap().as_deref(), Some("all"));
        assert_eq!(input.read_line().unwrap().as_deref(), Some(""));
        assert_eq!(input.read_line().unwrap().as_deref(), Some("last"));
        assert_eq!(input.read_line().unwrap(), None);
    }
}
