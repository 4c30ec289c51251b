use anyhow::Result;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, registry};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

/// Install the global subscriber. `roots` get the verbosity selected by
/// `level`, everything else stays one step quieter. Records emitted through
/// `log` are bridged into `tracing`.
pub fn setup(roots: &[&str], level: u64) -> Result<()> {
    let (app, lib) = match level {
        0 => (LevelFilter::INFO,  LevelFilter::WARN),
        1 => (LevelFilter::DEBUG, LevelFilter::INFO),
        2 => (LevelFilter::TRACE, LevelFilter::INFO),
        3 => (LevelFilter::TRACE, LevelFilter::DEBUG),
        _ => (LevelFilter::TRACE, LevelFilter::TRACE),
    };

    let mut filter = EnvFilter::from_default_env();
    for root in roots {
        let directive = format!("{}={}", root, app);
        filter = filter.add_directive(directive.parse()?);
    }
    filter = filter.add_directive(lib.into());

    let print = fmt::layer().compact().with_writer(std::io::stderr);

    registry().with(filter).with(print).try_init()?;

    Ok(())
}
