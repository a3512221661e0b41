//! Named sort strategies for the grid.

use std::cmp::Ordering;
use std::fmt;

use super::entity::Entity;

/// Errors from sort-field selection and strategy registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// No strategy is registered under this name.
    Unknown(String),
    /// A strategy with this name is already registered.
    Duplicate(&'static str),
}

impl fmt::Display for SortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortError::Unknown(name) => write!(f, "unknown sort field: {}", name),
            SortError::Duplicate(name) => write!(f, "sort field already registered: {}", name),
        }
    }
}

impl std::error::Error for SortError {}

/// Comparison over one field of an entity.
///
/// `compare` orders by the primary key only; ties are broken by
/// [`order`] using the entity id, so strategies do not need to.
pub trait SortStrategy: Send + Sync {
    /// Name the strategy is selected by.
    fn name(&self) -> &'static str;

    /// Compares two entities by the primary key.
    fn compare(&self, a: &Entity, b: &Entity) -> Ordering;
}

/// Sorts `entities` by `strategy`, breaking ties by id ascending.
///
/// `reverse` flips the primary key only; the tie-break stays ascending so the
/// result is the same total order for the same input.
pub fn order(strategy: &dyn SortStrategy, entities: &mut [&Entity], reverse: bool) {
    entities.sort_by(|a, b| {
        let primary = strategy.compare(a, b);
        let primary = if reverse { primary.reverse() } else { primary };
        primary.then_with(|| a.id().cmp(b.id()))
    });
}

/// Built-in sort fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    /// Container id, ascending.
    Id,
    /// Display name, ascending.
    Name,
    /// CPU usage, highest first.
    Cpu,
    /// Memory usage, highest first.
    Mem,
    /// Network rx + tx, highest first.
    Net,
}

impl SortField {
    pub fn all() -> &'static [SortField] {
        &[
            SortField::Cpu,
            SortField::Mem,
            SortField::Net,
            SortField::Name,
            SortField::Id,
        ]
    }
}

impl SortStrategy for SortField {
    fn name(&self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Name => "name",
            SortField::Cpu => "cpu",
            SortField::Mem => "mem",
            SortField::Net => "net",
        }
    }

    fn compare(&self, a: &Entity, b: &Entity) -> Ordering {
        let (ma, mb) = (a.metrics(), b.metrics());
        match self {
            SortField::Id => a.id().cmp(b.id()),
            SortField::Name => a.display_name().cmp(b.display_name()),
            SortField::Cpu => mb.cpu_percent.total_cmp(&ma.cpu_percent),
            SortField::Mem => mb.mem_usage.cmp(&ma.mem_usage),
            SortField::Net => mb.net_total().cmp(&ma.net_total()),
        }
    }
}

/// Registry of sort strategies, keyed by name.
///
/// Registration order is kept; it is the order `next_after` cycles through.
pub struct SortRegistry {
    strategies: Vec<Box<dyn SortStrategy>>,
}

impl fmt::Debug for SortRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

impl Default for SortRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SortRegistry {
    /// Creates a registry without any strategies.
    pub fn empty() -> Self {
        Self {
            strategies: Vec::new(),
        }
    }

    /// Creates a registry holding every [`SortField`].
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        for field in SortField::all() {
            registry.strategies.push(Box::new(*field));
        }
        registry
    }

    /// Adds a strategy; names must be unique.
    pub fn register(&mut self, strategy: Box<dyn SortStrategy>) -> Result<(), SortError> {
        let name = strategy.name();
        if self.resolve(name).is_some() {
            return Err(SortError::Duplicate(name));
        }
        self.strategies.push(strategy);
        Ok(())
    }

    /// Looks up a strategy by name.
    pub fn resolve(&self, name: &str) -> Option<&dyn SortStrategy> {
        self.strategies
            .iter()
            .find(|s| s.name() == name)
            .map(|s| &**s)
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.strategies.iter().map(|s| s.name())
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Name registered after `name`, wrapping to the first.
    pub fn next_after(&self, name: &str) -> Option<&'static str> {
        let pos = self.strategies.iter().position(|s| s.name() == name)?;
        let next = (pos + 1) % self.strategies.len();
        Some(self.strategies[next].name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::entity::Metrics;
    use proptest::prelude::*;

    fn entity(id: &str, name: &str, cpu: f64, mem: u64) -> Entity {
        let mut e = Entity::new(id, name);
        e.replace_metrics(Metrics {
            cpu_percent: cpu,
            mem_usage: mem,
            ..Metrics::default()
        });
        e
    }

    fn ids(entities: &[&Entity]) -> Vec<String> {
        entities.iter().map(|e| e.id().to_string()).collect()
    }

    #[test]
    fn cpu_sorts_highest_first() {
        let a = entity("a", "alpha", 5.0, 0);
        let b = entity("b", "beta", 50.0, 0);
        let c = entity("c", "gamma", 20.0, 0);
        let mut v = vec![&a, &b, &c];
        order(&SortField::Cpu, &mut v, false);
        assert_eq!(ids(&v), vec!["b", "c", "a"]);
    }

    #[test]
    fn ties_break_by_id_ascending() {
        let z = entity("z", "same", 1.0, 10);
        let m = entity("m", "same", 1.0, 10);
        let a = entity("a", "same", 1.0, 10);
        for field in SortField::all() {
            let mut v = vec![&z, &m, &a];
            order(field, &mut v, false);
            assert_eq!(ids(&v), vec!["a", "m", "z"], "field {}", field.name());
        }
    }

    #[test]
    fn reverse_keeps_tie_break_ascending() {
        let a = entity("a", "web", 0.0, 0);
        let b = entity("b", "web", 0.0, 0);
        let c = entity("c", "db", 0.0, 0);
        let mut v = vec![&a, &b, &c];
        order(&SortField::Name, &mut v, true);
        assert_eq!(ids(&v), vec!["a", "b", "c"]);
    }

    #[test]
    fn mem_and_net_sort_descending() {
        let mut a = Entity::new("a", "a");
        a.replace_metrics(Metrics {
            mem_usage: 100,
            net_rx: 1,
            net_tx: 1,
            ..Metrics::default()
        });
        let mut b = Entity::new("b", "b");
        b.replace_metrics(Metrics {
            mem_usage: 10,
            net_rx: 500,
            net_tx: 0,
            ..Metrics::default()
        });

        let mut v = vec![&b, &a];
        order(&SortField::Mem, &mut v, false);
        assert_eq!(ids(&v), vec!["a", "b"]);

        order(&SortField::Net, &mut v, false);
        assert_eq!(ids(&v), vec!["b", "a"]);
    }

    #[test]
    fn registry_resolves_builtin_names() {
        let registry = SortRegistry::builtin();
        for name in ["id", "name", "cpu", "mem", "net"] {
            assert!(registry.resolve(name).is_some(), "missing {}", name);
        }
        assert!(registry.resolve("bogus").is_none());
        assert_eq!(registry.len(), SortField::all().len());
    }

    #[test]
    fn registry_rejects_duplicate_names() {
        let mut registry = SortRegistry::builtin();
        let err = registry.register(Box::new(SortField::Cpu)).unwrap_err();
        assert_eq!(err, SortError::Duplicate("cpu"));
        assert_eq!(registry.len(), SortField::all().len());
    }

    struct ByNameLength;

    impl SortStrategy for ByNameLength {
        fn name(&self) -> &'static str {
            "name-len"
        }

        fn compare(&self, a: &Entity, b: &Entity) -> Ordering {
            a.display_name().len().cmp(&b.display_name().len())
        }
    }

    #[test]
    fn registry_accepts_custom_strategy() {
        let mut registry = SortRegistry::empty();
        assert!(registry.is_empty());
        registry.register(Box::new(ByNameLength)).unwrap();

        let a = entity("a", "postgres", 0.0, 0);
        let b = entity("b", "db", 0.0, 0);
        let mut v = vec![&a, &b];
        order(registry.resolve("name-len").unwrap(), &mut v, false);
        assert_eq!(ids(&v), vec!["b", "a"]);
    }

    #[test]
    fn next_after_wraps() {
        let registry = SortRegistry::builtin();
        let names: Vec<_> = registry.names().collect();
        assert_eq!(registry.next_after(names[0]), Some(names[1]));
        assert_eq!(registry.next_after(names[names.len() - 1]), Some(names[0]));
        assert_eq!(registry.next_after("bogus"), None);
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            SortError::Unknown("x".into()).to_string(),
            "unknown sort field: x"
        );
        assert_eq!(
            SortError::Duplicate("cpu").to_string(),
            "sort field already registered: cpu"
        );
    }

    /// A set of distinct ids together with a shuffled copy of it.
    fn ids_and_permutation() -> impl Strategy<Value = (Vec<String>, Vec<String>)> {
        proptest::collection::hash_set("[a-z0-9]{1,8}", 1..16)
            .prop_map(|ids| ids.into_iter().collect::<Vec<_>>())
            .prop_flat_map(|ids| (Just(ids.clone()), Just(ids).prop_shuffle()))
    }

    proptest! {
        #[test]
        fn equal_keys_order_by_id_for_any_input_order(
            (id_set, shuffled) in ids_and_permutation(),
            reverse in any::<bool>(),
        ) {
            let entities: Vec<Entity> = id_set.iter().map(|id| entity(id, "same", 7.5, 64)).collect();
            let permuted: Vec<Entity> = shuffled.iter().map(|id| entity(id, "same", 7.5, 64)).collect();
            let mut expected = id_set.clone();
            expected.sort();

            for field in SortField::all() {
                let mut a: Vec<&Entity> = entities.iter().collect();
                let mut b: Vec<&Entity> = permuted.iter().collect();
                order(field, &mut a, reverse);
                order(field, &mut b, reverse);
                prop_assert_eq!(ids(&a), expected.clone(), "field {}", field.name());
                prop_assert_eq!(ids(&b), expected.clone(), "field {}", field.name());
            }
        }

        #[test]
        fn order_ignores_input_order(
            (id_set, shuffled) in ids_and_permutation(),
            seed in any::<u64>(),
            reverse in any::<bool>(),
        ) {
            // a few distinct key values so both primary keys and ties occur
            let make = |id: &String| {
                let k = (id.len() as u64).wrapping_add(seed) % 3;
                entity(id, &format!("n{}", k), k as f64, k * 100)
            };
            let entities: Vec<Entity> = id_set.iter().map(make).collect();
            let permuted: Vec<Entity> = shuffled.iter().map(make).collect();

            for field in SortField::all() {
                let mut a: Vec<&Entity> = entities.iter().collect();
                let mut b: Vec<&Entity> = permuted.iter().collect();
                order(field, &mut a, reverse);
                order(field, &mut b, reverse);
                prop_assert_eq!(ids(&a), ids(&b), "field {}", field.name());
            }
        }
    }
}
