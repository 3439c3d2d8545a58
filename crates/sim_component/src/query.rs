//! Query descriptors for system data access declarations.
//!
//! A [`QueryDescriptor`] declares which component kinds a system reads and
//! writes, plus tag-style filters. The entity manager uses it to select the
//! entities a system works on.

use serde::{Deserialize, Serialize};

use crate::component::ComponentKind;

/// Describes the data access requirements of a system.
///
/// An entity matches when it carries every kind in `reads` and `writes` and
/// passes every filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryDescriptor {
    /// Component kinds the system reads immutably.
    pub reads: Vec<ComponentKind>,
    /// Component kinds the system writes (mutable access).
    pub writes: Vec<ComponentKind>,
    /// Filters applied to the query (e.g. `With<T>`, `Without<T>`).
    pub filters: Vec<QueryFilter>,
}

impl QueryDescriptor {
    /// Create a new empty query descriptor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a read-only component requirement.
    #[must_use]
    pub fn read(mut self, kind: ComponentKind) -> Self {
        self.reads.push(kind);
        self
    }

    /// Add a mutable component requirement.
    #[must_use]
    pub fn write(mut self, kind: ComponentKind) -> Self {
        self.writes.push(kind);
        self
    }

    /// Add a query filter.
    #[must_use]
    pub fn filter(mut self, f: QueryFilter) -> Self {
        self.filters.push(f);
        self
    }

    /// Returns the set of required component kinds (reads + writes + `With`
    /// filters), without duplicates, in declaration order.
    #[must_use]
    pub fn required_kinds(&self) -> Vec<ComponentKind> {
        let with = self.filters.iter().filter_map(|f| match f {
            QueryFilter::With(kind) => Some(*kind),
            QueryFilter::Without(_) => None,
        });
        let mut kinds = Vec::new();
        for kind in self.reads.iter().chain(&self.writes).copied().chain(with) {
            if !kinds.contains(&kind) {
                kinds.push(kind);
            }
        }
        kinds
    }

    /// Checks an entity against this query, given a presence test for its
    /// components.
    pub fn matches(&self, has: impl Fn(ComponentKind) -> bool) -> bool {
        let required = self.reads.iter().chain(&self.writes).all(|k| has(*k));
        required
            && self.filters.iter().all(|f| match f {
                QueryFilter::With(kind) => has(*kind),
                QueryFilter::Without(kind) => !has(*kind),
            })
    }
}

/// A filter that narrows the set of entities matched by a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueryFilter {
    /// Only match entities that have this component.
    With(ComponentKind),
    /// Only match entities that do NOT have this component.
    Without(ComponentKind),
}
