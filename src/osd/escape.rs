//! Tokenizer for style-tagged OSD strings.
//!
//! OSD text arrives from the host wrapped in format-escape marker bytes and
//! interspersed with `{...}` override groups and `\`-prefixed inline
//! directives. Only the bold toggle inside groups and the `\N`/`\h` layout
//! directives carry meaning here; everything else is consumed and dropped.
//!
//! The tokenizer is a lazy, finite, non-restartable iterator over the input.
//! Bold state is iterator state: a `{\b1}` group flips it for every literal
//! run that follows until a `{\b0}` group flips it back.

/// Reserved marker byte opening a format-escaped OSD string.
pub const FORMAT_MARKER_0: u8 = 0xfd;
/// Reserved marker byte; terminates scanning when seen mid-string.
pub const FORMAT_MARKER_1: u8 = 0xfe;
/// Marker byte introducing a single-byte icon code.
pub const ICON_MARKER: u8 = 0xff;

/// Layout directive produced by a two-character `\X` escape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Directive {
    /// `\N`: new line, reset horizontal position.
    Newline,
    /// `\h`: indent by one average glyph width.
    Indent,
}

/// One parsed token. Literal runs borrow from the input string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token<'a> {
    Literal { text: &'a str, bold: bool },
    Directive(Directive),
}

/// Lazy token stream over a style-tagged byte string.
///
/// Re-parse by constructing a fresh `EscapeTokens` from the original input.
#[derive(Debug)]
pub struct EscapeTokens<'a> {
    rest: &'a [u8],
    bold: bool,
    done: bool,
}

impl<'a> EscapeTokens<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            rest: input,
            bold: false,
            done: false,
        }
    }

    /// Scan a `{...}` group for `\b0` / `\b1`, mutating the bold state.
    /// Everything else inside the group is ignored. Stops at the first `}`
    /// or end of input.
    fn scan_group(&mut self) {
        #[derive(Clone, Copy, PartialEq)]
        enum S {
            Plain,
            Backslash,
            BoldTag,
        }

        let mut state = S::Plain;
        while let [b, tail @ ..] = self.rest {
            self.rest = tail;
            match *b {
                b'}' => return,
                b'\\' => state = S::Backslash,
                b'b' if state == S::Backslash => state = S::BoldTag,
                b'0' if state == S::BoldTag => {
                    self.bold = false;
                    state = S::Plain;
                }
                b'1' if state == S::BoldTag => {
                    self.bold = true;
                    state = S::Plain;
                }
                _ => state = S::Plain,
            }
        }
    }

    /// Length of the literal run starting at the head of `rest`.
    fn literal_len(&self) -> usize {
        self.rest
            .iter()
            .position(|&b| matches!(b, b'{' | b'\\' | FORMAT_MARKER_0 | FORMAT_MARKER_1))
            .unwrap_or(self.rest.len())
    }
}

impl<'a> Iterator for EscapeTokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        while !self.done {
            match self.rest.first() {
                None => self.done = true,
                Some(&(FORMAT_MARKER_0 | FORMAT_MARKER_1)) => {
                    // Treated as end-of-input for this call.
                    self.done = true;
                }
                Some(&b'{') => {
                    self.rest = &self.rest[1..];
                    self.scan_group();
                }
                Some(&b'\\') => {
                    if self.rest.len() < 2 {
                        // Trailing lone backslash: no partial directive.
                        self.done = true;
                        break;
                    }
                    let c = self.rest[1];
                    self.rest = &self.rest[2..];
                    match c {
                        b'N' => return Some(Token::Directive(Directive::Newline)),
                        b'h' => return Some(Token::Directive(Directive::Indent)),
                        // Any other \X is consumed with no layout effect.
                        _ => {}
                    }
                }
                Some(_) => {
                    let len = self.literal_len();
                    let (run, tail) = self.rest.split_at(len);
                    self.rest = tail;
                    let text = match std::str::from_utf8(run) {
                        Ok(s) => s,
                        Err(e) => {
                            // Emit the valid prefix, then stop: malformed
                            // input must not produce garbage runs.
                            self.done = true;
                            let valid = &run[..e.valid_up_to()];
                            std::str::from_utf8(valid).unwrap_or_default()
                        }
                    };
                    if text.is_empty() {
                        continue;
                    }
                    return Some(Token::Literal {
                        text,
                        bold: self.bold,
                    });
                }
            }
        }
        None
    }
}
