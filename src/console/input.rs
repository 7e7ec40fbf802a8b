//! Line-oriented field prompts.
//!
//! `Prompter` writes a prompt, reads one line, and hands it to a field
//! parser. Rejected lines print the parser's message and the prompt is
//! repeated until a valid value arrives. Only the end of input, or a
//! failing stream, escapes the loop.

use std::borrow::Cow;
use std::io::{BufRead, Write};

use tracing::debug;

use crate::cards::{parse_decimal, parse_int, CardCode, CityName, Region};
use crate::core::{Bounds, FieldError, SessionError};
use crate::rules::Attribute;

pub const REGION_PROMPT: &str = "Estado (A..H): ";
pub const CODE_PROMPT: &str = "Código da carta (ex.: A01, B03): ";
pub const NAME_PROMPT: &str = "Nome da cidade: ";
pub const SELECTION_PROMPT: &str = "Seleção: ";

/// Console prompter over any line reader and writer.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writer used for prompts, for callers that print between reads.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn show_prompt(&mut self, prompt: &str) -> Result<(), SessionError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Read one line without its terminator. `None` at end of input.
    ///
    /// Bytes that are not UTF-8 (legacy console code pages) become U+FFFD
    /// and the line goes to the field parser like any other text.
    fn read_raw_line(&mut self) -> Result<Option<String>, SessionError> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        while matches!(buf.last(), Some(b'\n' | b'\r')) {
            buf.pop();
        }

        match String::from_utf8_lossy(&buf) {
            Cow::Borrowed(line) => Ok(Some(line.to_owned())),
            Cow::Owned(line) => {
                debug!(input = %line, "replaced undecodable input bytes");
                Ok(Some(line))
            }
        }
    }

    /// Prompt until `parse` accepts a line.
    ///
    /// Silent rejections (blank lines) re-prompt with no message.
    pub fn read_valid<T>(
        &mut self,
        prompt: &str,
        field: &'static str,
        parse: impl Fn(&str) -> Result<T, FieldError>,
    ) -> Result<T, SessionError> {
        loop {
            self.show_prompt(prompt)?;
            let line = self
                .read_raw_line()?
                .ok_or(SessionError::InputClosed { field })?;

            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(err) if err.is_silent() => continue,
                Err(err) => {
                    debug!(field, input = %line, %err, "input rejected");
                    writeln!(self.output, "  {err}")?;
                }
            }
        }
    }

    /// Signed integer in `[min, max]`.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    pub fn read_int(&mut self, prompt: &str, min: i64, max: i64) -> Result<i64, SessionError> {
        let bounds = Bounds::new(min, max);
        self.read_valid(prompt, "integer", |s| parse_int(s, bounds))
    }

    /// Decimal number in `[min, max]`.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    pub fn read_decimal(&mut self, prompt: &str, min: f64, max: f64) -> Result<f64, SessionError> {
        let bounds = Bounds::new(min, max);
        self.read_valid(prompt, "decimal", |s| parse_decimal(s, bounds))
    }

    pub fn read_region(&mut self) -> Result<Region, SessionError> {
        self.read_valid(REGION_PROMPT, "region", str::parse)
    }

    pub fn read_code(&mut self) -> Result<CardCode, SessionError> {
        self.read_valid(CODE_PROMPT, "code", str::parse)
    }

    pub fn read_name(&mut self, min_len: usize, max_len: usize) -> Result<CityName, SessionError> {
        self.read_valid(NAME_PROMPT, "name", |s| CityName::new(s, min_len, max_len))
    }

    /// Menu selector `1..=5`, parsed through the integer validator.
    pub fn read_attribute(&mut self) -> Result<Attribute, SessionError> {
        self.read_valid(SELECTION_PROMPT, "attribute", str::parse)
    }

    /// Yes/no question answered with `S` (case-insensitive).
    ///
    /// Blank lines are skipped without re-prompting. Only the first
    /// non-whitespace character counts; the rest of its line is discarded.
    /// End of input answers no.
    pub fn read_confirm(&mut self, prompt: &str) -> Result<bool, SessionError> {
        self.show_prompt(prompt)?;
        loop {
            let Some(line) = self.read_raw_line()? else {
                debug!("input closed at confirmation, treating as no");
                return Ok(false);
            };
            if let Some(answer) = line.chars().find(|c| !c.is_whitespace()) {
                return Ok(answer.eq_ignore_ascii_case(&'S'));
            }
        }
    }
}
