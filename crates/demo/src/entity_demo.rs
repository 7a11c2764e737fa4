//! Entity container walkthrough.

use std::io::Write;

use chrono::{DateTime, Local};
use syntaxlab_core::InstanceCounter;
use syntaxlab_entity::Entity;

/// Entities built by the walkthrough: (name, version, salary).
pub const SAMPLE_ENTITIES: [(&str, &str, i64); 3] = [
    ("ledger", "1.0.0", 5200),
    ("payroll", "2.1.0", 6100),
    ("reports", "0.9.3", 4800),
];

/// Print the timestamp, each sample entity and the final construction count.
pub fn run(
    counter: &InstanceCounter,
    now: DateTime<Local>,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    writeln!(out, "{}", now.format("%a %b %e %H:%M:%S %Z %Y"))?;

    for (name, version, salary) in SAMPLE_ENTITIES {
        let entity = Entity::new(counter, name, version, salary);
        writeln!(
            out,
            "Entity #{}: {} {} salary={}",
            entity.sequence(),
            entity.name(),
            entity.version(),
            entity.salary()
        )?;
        writeln!(out, "  record: {}", entity.pair_summary())?;
    }

    writeln!(out, "Constructed: {}", counter.count())?;
    tracing::info!(count = counter.count(), "entity demo finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn prints_every_entity_and_the_count() {
        let counter = InstanceCounter::new();
        let now = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 0).unwrap();
        let mut out = Vec::new();

        run(&counter, now, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Sat Mar  9 14:05:00"));
        assert!(text.contains("Entity #1: ledger 1.0.0 salary=5200"));
        assert!(text.contains("Entity #3: reports 0.9.3 salary=4800"));
        assert_eq!(text.matches("  record: a: 1 b: 2").count(), 3);
        assert!(text.trim_end().ends_with("Constructed: 3"));
        assert_eq!(counter.count(), 3);
    }
}
