use std::io::Write;

use anyhow::Context;
use syntaxlab_core::InstanceCounter;
use syntaxlab_demo::{DemoConfig, entity_demo};

fn main() -> anyhow::Result<()> {
    let config = DemoConfig::from_env();
    syntaxlab_observability::init(&config.log);

    let counter = InstanceCounter::new();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    entity_demo::run(&counter, chrono::Local::now(), &mut out).context("entity demo failed")?;
    out.flush()?;
    Ok(())
}
