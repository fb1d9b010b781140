use std::io::Write;

use crate::error::{Error, Result};
use crate::interpreter::Interpreter;
use crate::parser::{Token, TokenConsumerTrait};

/// Writes one line per token, noting which multiplications were switched off.
pub struct Logger<W: Write> {
    w: W,
    interp: Interpreter,
}

impl<W: Write> Logger<W> {
    pub fn new(w: W) -> Self {
        Self {
            w,
            interp: Interpreter::default(),
        }
    }

    pub fn into_inner(self) -> W {
        self.w
    }
}

impl<W: Write> TokenConsumerTrait for Logger<W> {
    fn consume_token(&mut self, t: &Token) -> Result<()> {
        let added = self.interp.step(t);
        let res = match t {
            Token::Multiply { a, b } => {
                let p = t.product().unwrap_or_default();
                if added.is_some() {
                    writeln!(self.w, "mul({a},{b}) = {p}")
                } else {
                    writeln!(self.w, "mul({a},{b}) = {p} (disabled)")
                }
            }
            Token::Enable => writeln!(self.w, "do()"),
            Token::Disable => writeln!(self.w, "don't()"),
        };
        res.map_err(Error::Write)
    }

    fn done(&mut self) -> Result<()> {
        writeln!(self.w, "done:-)! total: {}", self.interp.total()).map_err(Error::Write)?;
        self.w.flush().map_err(Error::Write)
    }
}
