use std::io::{self, BufWriter};

use mulscan::parser::{Parser, slurp};
use mulscan::statser::Statser;

fn main() -> anyhow::Result<()> {
    mulscan::init_tracing();

    let stdin = io::stdin().lock();
    let stdo = BufWriter::new(io::stdout());
    let statser = Statser::new(stdo);
    let parser = Parser::new(statser);

    slurp(stdin, parser)?;
    Ok(())
}
