use std::io::{self, BufRead};

/// `scanf`-style reader: whitespace-delimited tokens that may span lines, and
/// free-text fields that skip leading whitespace and run to end of line.
#[derive(Debug)]
pub struct InputReader<R> {
    inner: R,
    line: String,
    pos: usize,
}

impl<R: BufRead> InputReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            line: String::new(),
            pos: 0,
        }
    }

    /// Next whitespace-delimited token, or `None` at end of input.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        if !self.skip_whitespace()? {
            return Ok(None);
        }
        let rest = &self.line[self.pos..];
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let token = rest[..end].to_string();
        self.pos += end;
        Ok(Some(token))
    }

    /// Remainder of the current line after skipping leading whitespace,
    /// including any blank lines. `None` at end of input.
    pub fn rest_of_line(&mut self) -> io::Result<Option<String>> {
        if !self.skip_whitespace()? {
            return Ok(None);
        }
        let text = self.line[self.pos..]
            .trim_end_matches(['\n', '\r'])
            .to_string();
        self.pos = self.line.len();
        Ok(Some(text))
    }

    fn skip_whitespace(&mut self) -> io::Result<bool> {
        loop {
            let rest = &self.line[self.pos..];
            match rest.find(|c: char| !c.is_whitespace()) {
                Some(offset) => {
                    self.pos += offset;
                    return Ok(true);
                }
                None => {
                    if !self.fill_line()? {
                        return Ok(false);
                    }
                }
            }
        }
    }

    fn fill_line(&mut self) -> io::Result<bool> {
        self.line.clear();
        self.pos = 0;
        Ok(self.inner.read_line(&mut self.line)? > 0)
    }
}
