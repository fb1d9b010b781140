use std::io::{BufRead, Read};
use std::sync::OnceLock;

use regex::{CaptureMatches, Captures, Regex};
use tracing::{debug, trace};

use crate::error::{Error, Result};

/// All three token shapes as one alternation. Leftmost-first, so `don't()`
/// is never mistaken for `do()`: the `do\(\)` branch fails at the `n`.
const TOKEN_PATTERN: &str = r"mul\((?<a>[0-9]{1,3}),(?<b>[0-9]{1,3})\)|do\(\)|don't\(\)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Multiply { a: u64, b: u64 },
    Enable,
    Disable,
}

impl Token {
    /// `a * b` for a multiplication, `None` for a toggle.
    pub fn product(&self) -> Option<u64> {
        match self {
            Token::Multiply { a, b } => Some(a * b),
            Token::Enable | Token::Disable => None,
        }
    }
}

pub trait TokenConsumerTrait {
    /// Called once with the whole normalized text before the first token.
    fn start(&mut self, _text: &str) -> Result<()> {
        Ok(())
    }
    fn consume_token(&mut self, t: &Token) -> Result<()>;
    fn done(&mut self) -> Result<()>;
}

/// Trims every line and glues them back together with nothing in between,
/// so `"mul(2,\n4)"` becomes `"mul(2,4)"`.
pub fn normalize(raw: &str) -> String {
    raw.split('\n').map(|l| l.trim_matches(is_line_edge)).collect()
}

// Unicode whitespace plus the ASCII file/group/record/unit separators,
// which also count as line-edge space.
fn is_line_edge(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

static TOKEN_REGEX: OnceLock<Regex> = OnceLock::new();

fn token_regex() -> &'static Regex {
    TOKEN_REGEX.get_or_init(|| Regex::new(TOKEN_PATTERN).expect("valid token regex"))
}

/// Lazily scans `text` for tokens, left to right, without overlap.
pub fn tokens(text: &str) -> Tokens<'_> {
    Tokens {
        inner: token_regex().captures_iter(text),
    }
}

pub struct Tokens<'h> {
    inner: CaptureMatches<'static, 'h>,
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.inner.next().map(|caps| token_from_captures(&caps))
    }
}

fn token_from_captures(caps: &Captures<'_>) -> Token {
    match &caps[0] {
        "do()" => Token::Enable,
        "don't()" => Token::Disable,
        _ => Token::Multiply {
            a: operand(caps, "a"),
            b: operand(caps, "b"),
        },
    }
}

// The pattern only admits 1 to 3 ASCII digits, so this cannot overflow or
// see a non-digit. Both groups take part in every mul match.
fn operand(caps: &Captures<'_>, name: &str) -> u64 {
    caps[name]
        .bytes()
        .fold(0, |n, d| n * 10 + u64::from(d - b'0'))
}

pub struct Parser<T: TokenConsumerTrait> {
    tokenconsumer: T,
    consumedtokens: usize,
}

impl<T: TokenConsumerTrait> Parser<T> {
    pub fn new(tokenconsumer: T) -> Self {
        Parser {
            tokenconsumer,
            consumedtokens: 0,
        }
    }

    /// Feeds every token in `text` to the consumer. Returns how many tokens
    /// were found.
    pub fn consume_text(&mut self, text: &str) -> Result<usize> {
        let mut n = 0;
        for t in tokens(text) {
            trace!(?t, "token");
            self.tokenconsumer.consume_token(&t)?;
            n += 1;
        }
        self.consumedtokens += n;

        Ok(n)
    }

    pub fn consumed_tokens(&self) -> usize {
        self.consumedtokens
    }

    pub fn done(&mut self) -> Result<()> {
        self.tokenconsumer.done()
    }

    pub fn into_inner(self) -> T {
        self.tokenconsumer
    }
}

/// Reads `r` to the end, normalizes it, and runs the whole thing through `p`.
/// Returns the parser so the caller can get at its consumer afterwards.
pub fn slurp<R: BufRead, T: TokenConsumerTrait>(mut r: R, mut p: Parser<T>) -> Result<Parser<T>> {
    let mut raw = String::new();
    r.read_to_string(&mut raw).map_err(Error::Read)?;

    let text = normalize(&raw);
    debug!(
        raw_bytes = raw.len(),
        normalized_bytes = text.len(),
        "normalized input"
    );

    p.tokenconsumer.start(&text)?;
    p.consume_text(&text)?;
    debug!(tokens = p.consumed_tokens(), "scanned input");
    p.done()?;

    Ok(p)
}
