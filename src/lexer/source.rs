use std::io::Read;

/// Character source feeding the scanner.
///
/// Wraps a byte stream with single-byte lookahead (one-slot pushback) and
/// running line/column bookkeeping. Lines are 1-based; the column starts at
/// 0 and counts bytes consumed on the current line, resetting on `\n`.
///
/// The pushback slot holds at most one byte. Pushing back twice without an
/// intervening `next` overwrites the slot; the scanner never does this.
pub struct CharSource<R> {
    input: R,
    line: usize,
    col: usize,
    pushback: Option<u8>,
}

impl<R: Read> CharSource<R> {
    pub fn new(input: R) -> CharSource<R> {
        CharSource {
            input,
            line: 1,
            col: 0,
            pushback: None,
        }
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// Returns the next byte, or `None` at end of stream. The pushback slot
    /// is drained first.
    pub fn next(&mut self) -> Option<u8> {
        let ch = match self.pushback.take() {
            Some(ch) => Some(ch),
            None => self.read_byte(),
        };

        match ch {
            Some(b'\n') => {
                self.line += 1;
                self.col = 0;
            }
            Some(_) => self.col += 1,
            None => {}
        }

        ch
    }

    /// Returns one previously read byte to be re-delivered by the next call
    /// to `next`, reversing the position bookkeeping. `None` (end of
    /// stream) is a no-op.
    pub fn pushback(&mut self, ch: Option<u8>) {
        let Some(ch) = ch else {
            return;
        };

        self.pushback = Some(ch);

        if ch == b'\n' {
            self.line -= 1;
        } else {
            self.col = self.col.saturating_sub(1);
        }
    }

    fn read_byte(&mut self) -> Option<u8> {
        let mut buf = [0u8; 1];

        // A mid-stream read error ends the stream, the same way fgetc
        // reports both conditions as EOF.
        match self.input.read(&mut buf) {
            Ok(1) => Some(buf[0]),
            _ => None,
        }
    }
}
