use std::io::Write;

use bytesize::ByteSize;
use thousands::Separable;

use crate::error::{Error, Result};
use crate::interpreter::{Interpreter, Toggles};
use crate::parser::{Token, TokenConsumerTrait};

pub struct Statser<W: Write> {
    w: W,

    // Size of the normalized text, in bytes.
    input_bytes: usize,

    muls_enabled: usize,
    muls_disabled: usize,
    enables: usize,
    disables: usize,

    // One pass that respects do()/don't() and one that pretends they aren't there.
    honored: Interpreter,
    ignored: Interpreter,
}

fn conv(size: usize) -> String {
    let byte_size = ByteSize::b(size as u64);
    byte_size.to_string()
}

impl<W: Write> Statser<W> {
    pub fn new(w: W) -> Self {
        Statser {
            w,
            input_bytes: 0,
            muls_enabled: 0,
            muls_disabled: 0,
            enables: 0,
            disables: 0,
            honored: Interpreter::new(Toggles::Honored),
            ignored: Interpreter::new(Toggles::Ignored),
        }
    }

    pub fn sum_enabled(&self) -> u64 {
        self.honored.total()
    }

    pub fn sum_all(&self) -> u64 {
        self.ignored.total()
    }

    pub fn into_inner(self) -> W {
        self.w
    }

    fn write_stats(&mut self) -> std::io::Result<()> {
        let tokens = self.muls_enabled + self.muls_disabled + self.enables + self.disables;

        writeln!(self.w, "{:<16} {:>15}", "input", conv(self.input_bytes))?;
        writeln!(self.w, "{:<16} {:>15}", "tokens", tokens.separate_with_commas())?;
        writeln!(
            self.w,
            "{:<16} {:>15}",
            "  mul",
            (self.muls_enabled + self.muls_disabled).separate_with_commas()
        )?;
        writeln!(
            self.w,
            "{:<16} {:>15}",
            "    enabled",
            self.muls_enabled.separate_with_commas()
        )?;
        writeln!(
            self.w,
            "{:<16} {:>15}",
            "    disabled",
            self.muls_disabled.separate_with_commas()
        )?;
        writeln!(self.w, "{:<16} {:>15}", "  do()", self.enables.separate_with_commas())?;
        writeln!(self.w, "{:<16} {:>15}", "  don't()", self.disables.separate_with_commas())?;
        writeln!(
            self.w,
            "{:<16} {:>15}",
            "sum all",
            self.sum_all().separate_with_commas()
        )?;
        writeln!(
            self.w,
            "{:<16} {:>15}",
            "sum enabled",
            self.sum_enabled().separate_with_commas()
        )?;
        self.w.flush()
    }
}

impl<W: Write> TokenConsumerTrait for Statser<W> {
    fn start(&mut self, text: &str) -> Result<()> {
        self.input_bytes = text.len();
        Ok(())
    }

    fn consume_token(&mut self, t: &Token) -> Result<()> {
        match t {
            Token::Multiply { .. } => {
                if self.honored.counts() {
                    self.muls_enabled += 1;
                } else {
                    self.muls_disabled += 1;
                }
            }
            Token::Enable => self.enables += 1,
            Token::Disable => self.disables += 1,
        }
        self.honored.step(t);
        self.ignored.step(t);
        Ok(())
    }

    fn done(&mut self) -> Result<()> {
        self.write_stats().map_err(Error::Write)
    }
}
