use std::io::Write;

use tracing::debug;

use crate::error::{Error, Result};
use crate::parser::{Token, TokenConsumerTrait};

/// Whether `do()` / `don't()` gate the multiplications that follow them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Toggles {
    #[default]
    Honored,
    /// Every multiplication counts, toggles are seen but have no effect.
    Ignored,
}

/// The running state of one pass over the tokens.
#[derive(Debug, Clone)]
pub struct Interpreter {
    toggles: Toggles,
    enabled: bool,
    total: u64,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new(Toggles::Honored)
    }
}

impl Interpreter {
    pub fn new(toggles: Toggles) -> Self {
        Interpreter {
            toggles,
            enabled: true,
            total: 0,
        }
    }

    /// Applies one token. Returns the product that was added, if any.
    pub fn step(&mut self, t: &Token) -> Option<u64> {
        match t {
            Token::Enable => {
                self.enabled = true;
                None
            }
            Token::Disable => {
                self.enabled = false;
                None
            }
            Token::Multiply { .. } => {
                let p = t.product().filter(|_| self.counts())?;
                self.total += p;
                Some(p)
            }
        }
    }

    /// Would a multiplication right now be added to the total?
    pub fn counts(&self) -> bool {
        self.enabled || self.toggles == Toggles::Ignored
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Folds a whole token sequence into a total.
    pub fn run<I: IntoIterator<Item = Token>>(mut self, tokens: I) -> u64 {
        for t in tokens {
            self.step(&t);
        }
        self.total
    }
}

/// Consumer that interprets the tokens and writes the final total as one
/// decimal line.
pub struct Summer<W: Write> {
    w: W,
    interp: Interpreter,
}

impl<W: Write> Summer<W> {
    pub fn new(w: W) -> Self {
        Summer {
            w,
            interp: Interpreter::default(),
        }
    }

    pub fn total(&self) -> u64 {
        self.interp.total()
    }

    pub fn into_inner(self) -> W {
        self.w
    }
}

impl<W: Write> TokenConsumerTrait for Summer<W> {
    fn consume_token(&mut self, t: &Token) -> Result<()> {
        self.interp.step(t);
        Ok(())
    }

    fn done(&mut self) -> Result<()> {
        debug!(total = self.interp.total(), "done");
        writeln!(self.w, "{}", self.interp.total()).map_err(Error::Write)?;
        self.w.flush().map_err(Error::Write)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{Parser, normalize, slurp, tokens};

    fn total(text: &str) -> u64 {
        Interpreter::default().run(tokens(&normalize(text)))
    }

    fn total_ignoring_toggles(text: &str) -> u64 {
        Interpreter::new(Toggles::Ignored).run(tokens(&normalize(text)))
    }

    const FIRST: &str = "xmul(2,4)%&mul[3,7]!@^do_not_mul(5,5)+mul(32,64]then(mul(11,8)mul(8,5))";
    const SECOND: &str = "xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))";

    #[test]
    fn first_example() {
        // 2*4 + 5*5 + 11*8 + 8*5; the mul(5,5) inside do_not_ is a real token.
        assert_eq!(total(FIRST), 161);
    }

    #[test]
    fn second_example() {
        // don't() silences 5*5 and 11*8 until undo() turns things back on.
        assert_eq!(total(SECOND), 48);
        assert_eq!(total_ignoring_toggles(SECOND), 161);
    }

    #[test]
    fn nothing_to_match_is_zero() {
        assert_eq!(total(""), 0);
        assert_eq!(total("\n\n   \n"), 0);
        assert_eq!(total("mul(4*, 6) mul ( 2 , 4 ) mul(1234,5)"), 0);
    }

    #[test]
    fn token_split_by_newline_still_counts() {
        assert_eq!(total("mul(2,\n4)"), 8);
        assert_eq!(total("mu\nl(3,3)"), 9);
        assert_eq!(total("don\n't()mul(2,2)do(\n)mul(1,1)"), 1);
    }

    #[test]
    fn disabled_from_the_start_of_the_text_until_reenabled() {
        assert_eq!(total("don't()mul(9,9)mul(8,8)"), 0);
        assert_eq!(total("don't()don't()do()mul(2,3)"), 6);
        assert_eq!(total("do()do()mul(2,3)don't()"), 6);
    }

    #[test]
    fn step_reports_what_was_added() {
        let mut interp = Interpreter::default();
        assert!(interp.counts());
        assert_eq!(interp.step(&Token::Multiply { a: 3, b: 4 }), Some(12));
        assert_eq!(interp.step(&Token::Disable), None);
        assert!(!interp.counts());
        assert_eq!(interp.step(&Token::Multiply { a: 5, b: 5 }), None);
        assert_eq!(interp.total(), 12);
        interp.step(&Token::Enable);
        assert_eq!(interp.step(&Token::Multiply { a: 1, b: 1 }), Some(1));
        assert_eq!(interp.total(), 13);
    }

    #[test]
    fn largest_products_do_not_overflow() {
        let text = "mul(999,999)".repeat(10_000);
        assert_eq!(total(&text), 998_001 * 10_000);
    }

    #[test]
    fn summer_prints_total_line() {
        let p = slurp(SECOND.as_bytes(), Parser::new(Summer::new(Vec::new()))).unwrap();
        let summer = p.into_inner();
        assert_eq!(summer.total(), 48);
        assert_eq!(summer.into_inner(), b"48\n");
    }

    #[test]
    fn summer_prints_zero_for_empty_input() {
        let p = slurp(&b""[..], Parser::new(Summer::new(Vec::new()))).unwrap();
        assert_eq!(p.into_inner().into_inner(), b"0\n");
    }
}
