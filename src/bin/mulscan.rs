use std::io::{self, BufWriter};

use mulscan::interpreter::Summer;
use mulscan::parser::{Parser, slurp};

fn main() -> anyhow::Result<()> {
    mulscan::init_tracing();

    let stdin = io::stdin().lock();
    let stdo = BufWriter::new(io::stdout());
    let parser = Parser::new(Summer::new(stdo));

    // This returns only once stdin is exhausted.
    slurp(stdin, parser)?;
    Ok(())
}
