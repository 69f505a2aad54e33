//! [`Connector`] speaking a line protocol over any reader/writer pair.
//!
//! Each input line is a position, `<cells> <side>`; blank lines are skipped.
//! Each reply is written on its own line.

use super::{Connector, Reply};
use panda_othello::{ParsePositionError, Position};
use std::io::{self, BufRead, Write};

pub struct TextConnector<R, W> {
    reader: R,
    writer: W,
    line: String,
}

impl<R: BufRead, W: Write> TextConnector<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            line: String::new(),
        }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl<R: BufRead, W: Write> Connector for TextConnector<R, W> {
    fn set_ready(&mut self) -> io::Result<()> {
        writeln!(self.writer, "ready")?;
        self.writer.flush()
    }

    fn next_position(&mut self) -> io::Result<Option<Result<Position, ParsePositionError>>> {
        loop {
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }

            let line = self.line.trim();
            if !line.is_empty() {
                return Ok(Some(line.parse()));
            }
        }
    }

    fn send_reply(&mut self, reply: &Reply) -> io::Result<()> {
        writeln!(self.writer, "{}", reply)?;
        self.writer.flush()
    }
}
