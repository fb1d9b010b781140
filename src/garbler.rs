//! Random "corrupted memory" generator with a known answer.
//!
//! The text is built from fragments that each either are exactly one token or
//! can never take part in a match, even when glued to their neighbours. That
//! keeps the expected sums computable without scanning.

use rand::Rng;

/// Things that look like tokens but must not match. None of them ends with a
/// prefix of a token that any fragment could complete.
const NEAR_MISSES: &[&str] = &[
    "mul[3,7]",
    "mul(4*",
    "mul ( 2 , 4 )",
    "mul(1000,1)",
    "mul(32,64]",
    "mul(6,9!",
    "mul(,5)",
    "Mul(2,2)",
    "?(12,34)",
    "do_not_",
    "undo",
    "don't",
    "don't[]",
    "do(",
];

// No letters from mul/do/don't, no digits, no parens, comma or quote.
const JUNK: &[u8] = b"xyz!@#$%^&*[]{}<>+-_?;:= abcefghijkpqrsvw";

const PADS: &[&str] = &["", " ", "\t", "  "];

#[derive(Debug, Clone)]
pub struct Garbled {
    pub text: String,
    /// Sum of every product, as if do()/don't() were not there.
    pub expected_all: u64,
    /// Sum of the products that come while enabled.
    pub expected_enabled: u64,
    pub muls: usize,
}

pub fn garble<R: Rng + ?Sized>(rng: &mut R, fragments: usize) -> Garbled {
    let mut g = Garbled {
        text: String::new(),
        expected_all: 0,
        expected_enabled: 0,
        muls: 0,
    };
    let mut enabled = true;

    for _ in 0..fragments {
        match rng.random_range(0..10) {
            0..=3 => {
                let a: u64 = rng.random_range(0..1000);
                let b: u64 = rng.random_range(0..1000);
                push_token(rng, &mut g.text, &format!("mul({a},{b})"));
                g.expected_all += a * b;
                if enabled {
                    g.expected_enabled += a * b;
                }
                g.muls += 1;
            }
            4 => {
                push_token(rng, &mut g.text, "do()");
                enabled = true;
            }
            5 => {
                push_token(rng, &mut g.text, "don't()");
                enabled = false;
            }
            6 | 7 => {
                g.text
                    .push_str(NEAR_MISSES[rng.random_range(0..NEAR_MISSES.len())]);
            }
            _ => {
                for _ in 0..rng.random_range(1..=6) {
                    g.text.push(char::from(JUNK[rng.random_range(0..JUNK.len())]));
                }
            }
        }
    }

    g
}

// Sometimes breaks the token over a line, padded with whitespace that the
// normalizer will strip back off.
fn push_token<R: Rng + ?Sized>(rng: &mut R, text: &mut String, tok: &str) {
    if rng.random_bool(0.25) {
        let at = rng.random_range(1..tok.len());
        text.push_str(&tok[..at]);
        text.push_str(PADS[rng.random_range(0..PADS.len())]);
        text.push('\n');
        text.push_str(PADS[rng.random_range(0..PADS.len())]);
        text.push_str(&tok[at..]);
    } else {
        text.push_str(tok);
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::interpreter::{Interpreter, Toggles};
    use crate::parser::{Token, normalize, tokens};

    #[test]
    fn scanner_agrees_with_garbler() {
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let g = garble(&mut rng, 300);
            let text = normalize(&g.text);

            let muls = tokens(&text)
                .filter(|t| matches!(t, Token::Multiply { .. }))
                .count();
            assert_eq!(muls, g.muls, "seed {seed}");
            assert_eq!(
                Interpreter::new(Toggles::Honored).run(tokens(&text)),
                g.expected_enabled,
                "seed {seed}"
            );
            assert_eq!(
                Interpreter::new(Toggles::Ignored).run(tokens(&text)),
                g.expected_all,
                "seed {seed}"
            );
        }
    }

    #[test]
    fn near_misses_alone_never_match() {
        let all: String = NEAR_MISSES.concat();
        assert_eq!(tokens(&all).count(), 0);
    }

    #[test]
    fn no_fragments_is_empty() {
        let mut rng = StdRng::seed_from_u64(7);
        let g = garble(&mut rng, 0);
        assert!(g.text.is_empty());
        assert_eq!(g.expected_all, 0);
        assert_eq!(g.expected_enabled, 0);
    }
}
