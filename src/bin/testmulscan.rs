use anyhow::ensure;
use rand::Rng;
use thousands::Separable;
use tracing::info;

use mulscan::garbler::garble;
use mulscan::parser::{Parser, slurp};
use mulscan::statser::Statser;

const ROUNDS: usize = 64;
const MAX_FRAGMENTS: usize = 2usize.pow(14);

fn main() -> anyhow::Result<()> {
    mulscan::init_tracing();

    let mut r = rand::rng();
    let mut bytes = 0;
    let mut muls = 0;

    for round in 0..ROUNDS {
        let fragments = r.random_range(0..MAX_FRAGMENTS);
        let g = garble(&mut r, fragments);

        let p = slurp(g.text.as_bytes(), Parser::new(Statser::new(std::io::sink())))?;
        let statser = p.into_inner();

        ensure!(
            statser.sum_enabled() == g.expected_enabled,
            "round {round}: enabled sum {} != expected {}\n{}",
            statser.sum_enabled(),
            g.expected_enabled,
            g.text
        );
        ensure!(
            statser.sum_all() == g.expected_all,
            "round {round}: sum {} != expected {}\n{}",
            statser.sum_all(),
            g.expected_all,
            g.text
        );
        info!(round, fragments, muls = g.muls, "ok");

        bytes += g.text.len();
        muls += g.muls;
    }

    println!(
        "{} rounds ok, {} bytes, {} muls",
        ROUNDS,
        bytes.separate_with_commas(),
        muls.separate_with_commas()
    );
    Ok(())
}
