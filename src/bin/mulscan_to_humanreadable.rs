use std::io::{self, BufWriter};

use mulscan::logger::Logger;
use mulscan::parser::{Parser, slurp};

fn main() -> anyhow::Result<()> {
    mulscan::init_tracing();

    let stdin = io::stdin().lock();
    let stdo = BufWriter::new(io::stdout());
    let logger = Logger::new(stdo);
    let parser = Parser::new(logger);

    slurp(stdin, parser)?;
    Ok(())
}
