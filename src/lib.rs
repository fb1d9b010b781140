pub mod error;
pub mod garbler;
pub mod interpreter;
pub mod logger;
pub mod parser;
pub mod statser;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub use error::{Error, Result};

/// Logs go to stderr so stdout carries nothing but the answer. Quiet unless
/// `RUST_LOG` says otherwise.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

/// The sum of the enabled products in `raw`, normalizing it first.
pub fn sum_enabled(raw: &str) -> u64 {
    interpreter::Interpreter::default().run(parser::tokens(&parser::normalize(raw)))
}
