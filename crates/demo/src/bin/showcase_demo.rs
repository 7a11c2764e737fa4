use std::io::Write;

use anyhow::Context;
use syntaxlab_core::InstanceCounter;
use syntaxlab_demo::{DemoConfig, showcase_demo};

fn main() -> anyhow::Result<()> {
    let config = DemoConfig::from_env();
    syntaxlab_observability::init(&config.log);

    tracing::info!(output = %config.output_path.display(), "starting showcase");

    let counter = InstanceCounter::new();
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();

    showcase_demo::run(
        &counter,
        &config.output_path,
        chrono::Local::now(),
        &mut out,
        &mut err,
    )
    .context("showcase demo failed")?;
    out.flush()?;
    Ok(())
}
