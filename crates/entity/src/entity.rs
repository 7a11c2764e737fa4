use syntaxlab_core::InstanceCounter;

/// Two-integer value used by [`Entity::pair_summary`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Pair {
    pub a: i32,
    pub b: i32,
}

impl core::fmt::Display for Pair {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "a: {} b: {}", self.a, self.b)
    }
}

/// Immutable named/versioned/salaried record.
///
/// Every construction goes through an [`InstanceCounter`], so the counter
/// reflects all entities ever built in its scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    name: String,
    version: String,
    salary: i64,
    sequence: u64,
}

impl Entity {
    pub fn new(
        counter: &InstanceCounter,
        name: impl Into<String>,
        version: impl Into<String>,
        salary: i64,
    ) -> Self {
        let sequence = counter.increment();
        let entity = Self {
            name: name.into(),
            version: version.into(),
            salary,
            sequence,
        };
        tracing::debug!(
            name = %entity.name,
            version = %entity.version,
            sequence,
            "entity constructed"
        );
        entity
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn salary(&self) -> i64 {
        self.salary
    }

    /// Ordinal this entity received from the counter (1-based).
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Always `"a: 1 b: 2"`.
    pub fn pair_summary(&self) -> String {
        Pair { a: 1, b: 2 }.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_return_constructor_values() {
        let counter = InstanceCounter::new();
        let entity = Entity::new(&counter, "billing", "v2", 4200);

        assert_eq!(entity.name(), "billing");
        assert_eq!(entity.version(), "v2");
        assert_eq!(entity.salary(), 4200);
    }

    #[test]
    fn pair_summary_is_fixed() {
        let counter = InstanceCounter::new();
        let entity = Entity::new(&counter, "x", "y", 0);
        assert_eq!(entity.pair_summary(), "a: 1 b: 2");
    }

    #[test]
    fn construction_increments_counter_once() {
        let counter = InstanceCounter::starting_at(3);
        let first = Entity::new(&counter, "a", "1", 1);
        let second = Entity::new(&counter, "b", "1", 2);

        assert_eq!(counter.count(), 5);
        assert_eq!(first.sequence(), 4);
        assert_eq!(second.sequence(), 5);
    }

    #[test]
    fn cloning_does_not_count_as_construction() {
        let counter = InstanceCounter::new();
        let entity = Entity::new(&counter, "a", "1", 1);
        let copy = entity.clone();

        assert_eq!(copy, entity);
        assert_eq!(counter.count(), 1);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: after N constructions the counter is initial + N.
            #[test]
            fn counter_tracks_every_construction(initial in 0u64..1_000_000, n in 0usize..64) {
                let counter = InstanceCounter::starting_at(initial);
                for i in 0..n {
                    let _ = Entity::new(&counter, format!("e{i}"), "v1", i as i64);
                }
                prop_assert_eq!(counter.count(), initial + n as u64);
            }
        }
    }
}
