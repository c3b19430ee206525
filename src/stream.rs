use crate::error::SeeDataError;

/// Sequential reader over a fixed byte range. Fixed-width reads validate
/// `pos + width <= end` before touching the bytes, so a truncated buffer is
/// reported without any over-read.
pub struct ReadCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ReadCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.data.len()
    }

    pub fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    pub fn bump(&mut self) {
        self.pos += 1;
    }

    fn fixed<const N: usize>(&mut self) -> Result<[u8; N], SeeDataError> {
        if self.pos + N > self.data.len() {
            return Err(SeeDataError::MalformedBinary(format!(
                "truncated read of {} bytes at offset {}",
                N, self.pos
            )));
        }
        let mut out = [0u8; N];
        out.copy_from_slice(&self.data[self.pos..self.pos + N]);
        self.pos += N;
        Ok(out)
    }

    pub fn read_u8(&mut self) -> Result<u8, SeeDataError> {
        Ok(self.fixed::<1>()?[0])
    }

    pub fn read_i16(&mut self) -> Result<i16, SeeDataError> {
        Ok(i16::from_le_bytes(self.fixed()?))
    }

    pub fn read_i32(&mut self) -> Result<i32, SeeDataError> {
        Ok(i32::from_le_bytes(self.fixed()?))
    }

    pub fn read_f32(&mut self) -> Result<f32, SeeDataError> {
        Ok(f32::from_le_bytes(self.fixed()?))
    }

    pub fn take(&mut self, len: usize) -> Result<&'a [u8], SeeDataError> {
        if self.pos + len > self.data.len() {
            return Err(SeeDataError::MalformedBinary(format!(
                "truncated read of {} bytes at offset {}",
                len, self.pos
            )));
        }
        let bytes = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }

    fn prev_is_backslash(&self) -> bool {
        self.pos > 0 && self.data[self.pos - 1] == b'\\'
    }

    /// Scan forward to the next quoted string and return its raw contents.
    /// The seek phase skips anything that is not an unescaped `"`, but gives
    /// up at a `[` or `{` so a scan cannot wander into a nested block. The
    /// bytes between the quotes are returned as-is; values need not be
    /// valid UTF-8.
    pub fn scan_quoted(&mut self) -> Result<&'a [u8], SeeDataError> {
        while let Some(b) = self.peek() {
            if b == b'[' || b == b'{' {
                break;
            }
            if b == b'"' && !self.prev_is_backslash() {
                break;
            }
            self.bump();
        }
        if self.peek() != Some(b'"') {
            return Err(SeeDataError::MalformedText(
                "expected quoted string".to_string(),
            ));
        }
        self.bump();

        let start = self.pos;
        while let Some(b) = self.peek() {
            if b == b'"' && !self.prev_is_backslash() {
                break;
            }
            self.bump();
        }
        if self.at_end() {
            return Err(SeeDataError::MalformedText(
                "unterminated quoted string".to_string(),
            ));
        }
        let value = &self.data[start..self.pos];
        self.bump();
        Ok(value)
    }

    fn seek_number(&mut self) -> Result<(), SeeDataError> {
        while let Some(b) = self.peek() {
            if b.is_ascii_digit() || b == b'-' || b == b',' {
                break;
            }
            self.bump();
        }
        match self.peek() {
            Some(b) if b.is_ascii_digit() || b == b'-' => Ok(()),
            _ => Err(SeeDataError::MalformedText("expected number".to_string())),
        }
    }

    fn number_token(&mut self, allow_dot: bool) -> String {
        let start = self.pos;
        if self.peek() == Some(b'-') {
            self.bump();
        }
        while let Some(b) = self.peek() {
            if b.is_ascii_digit() || (allow_dot && b == b'.') {
                self.bump();
            } else {
                break;
            }
        }
        String::from_utf8_lossy(&self.data[start..self.pos]).into_owned()
    }

    /// Scan forward past any non-numeric characters and parse an integer.
    pub fn scan_int(&mut self) -> Result<i32, SeeDataError> {
        self.seek_number()?;
        let token = self.number_token(false);
        token
            .parse()
            .map_err(|_| SeeDataError::MalformedText(format!("bad integer \"{}\"", token)))
    }

    /// Scan forward past any non-numeric characters and parse a float.
    pub fn scan_float(&mut self) -> Result<f32, SeeDataError> {
        self.seek_number()?;
        let token = self.number_token(true);
        token
            .parse()
            .map_err(|_| SeeDataError::MalformedText(format!("bad float \"{}\"", token)))
    }

    /// Scan forward to `byte` and consume it.
    pub fn advance_past(&mut self, byte: u8) -> Result<(), SeeDataError> {
        while let Some(b) = self.peek() {
            if b == byte {
                self.bump();
                return Ok(());
            }
            self.bump();
        }
        Err(SeeDataError::MalformedText(format!(
            "expected '{}' before end of data",
            byte as char
        )))
    }

    /// Advance while `pred` holds, stopping at end of range.
    pub fn skip_while(&mut self, pred: impl Fn(u8) -> bool) {
        while let Some(b) = self.peek() {
            if !pred(b) {
                break;
            }
            self.bump();
        }
    }
}

/// Growing output buffer with an optional hard capacity cap. With a cap set,
/// a write that would exceed it fails with `BufferTooSmall` reporting the
/// required size, and leaves the buffer untouched.
pub struct WriteCursor {
    buf: Vec<u8>,
    limit: Option<usize>,
}

impl WriteCursor {
    pub fn new() -> Self {
        Self {
            buf: Vec::new(),
            limit: None,
        }
    }

    pub fn with_limit(limit: usize) -> Self {
        Self {
            buf: Vec::new(),
            limit: Some(limit),
        }
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    fn check(&self, extra: usize) -> Result<(), SeeDataError> {
        if let Some(limit) = self.limit {
            let required = self.buf.len() + extra;
            if required > limit {
                return Err(SeeDataError::BufferTooSmall {
                    required,
                    available: limit,
                });
            }
        }
        Ok(())
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), SeeDataError> {
        self.check(bytes.len())?;
        self.buf.extend_from_slice(bytes);
        Ok(())
    }

    pub fn write_str(&mut self, s: &str) -> Result<(), SeeDataError> {
        self.write_bytes(s.as_bytes())
    }

    pub fn write_u8(&mut self, v: u8) -> Result<(), SeeDataError> {
        self.write_bytes(&[v])
    }

    pub fn write_i16(&mut self, v: i16) -> Result<(), SeeDataError> {
        self.write_bytes(&v.to_le_bytes())
    }

    pub fn write_i32(&mut self, v: i32) -> Result<(), SeeDataError> {
        self.write_bytes(&v.to_le_bytes())
    }

    pub fn write_f32(&mut self, v: f32) -> Result<(), SeeDataError> {
        self.write_bytes(&v.to_le_bytes())
    }

    /// Two spaces per nesting level.
    pub fn write_indent(&mut self, depth: usize) -> Result<(), SeeDataError> {
        self.check(depth * 2)?;
        for _ in 0..depth {
            self.buf.extend_from_slice(b"  ");
        }
        Ok(())
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

impl Default for WriteCursor {
    fn default() -> Self {
        Self::new()
    }
}
