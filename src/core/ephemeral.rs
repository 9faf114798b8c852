use smallvec::SmallVec;

/// Identifier of a pooled entity; unique for the lifetime of its pool.
pub type EntityId = u64;

/// A pooled entity together with its spawn and expiry timestamps (ms).
#[derive(Clone, Debug)]
pub struct Ephemeral<T> {
    pub id: EntityId,
    pub born_ms: f64,
    pub expires_ms: f64,
    pub item: T,
}

impl<T> Ephemeral<T> {
    #[inline]
    pub fn is_expired(&self, now_ms: f64) -> bool {
        now_ms >= self.expires_ms
    }
}

/// Short-lived visual entities with per-entity expiry.
///
/// Every entry carries its own deadline, so a burst of spawns never delays
/// the removal of earlier entries. Entries are kept in spawn order; with a
/// fixed lifetime that is also expiry order, but `prune` does not rely on it.
pub struct EphemeralPool<T> {
    entries: Vec<Ephemeral<T>>,
    lifetime_ms: f64,
    next_id: EntityId,
}

impl<T> EphemeralPool<T> {
    pub fn new(lifetime_ms: f64) -> Self {
        Self {
            entries: Vec::new(),
            lifetime_ms,
            next_id: 0,
        }
    }

    pub fn spawn(&mut self, now_ms: f64, item: T) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Ephemeral {
            id,
            born_ms: now_ms,
            expires_ms: now_ms + self.lifetime_ms,
            item,
        });
        id
    }

    pub fn spawn_all<I: IntoIterator<Item = T>>(
        &mut self,
        now_ms: f64,
        items: I,
    ) -> SmallVec<[EntityId; 8]> {
        items
            .into_iter()
            .map(|item| self.spawn(now_ms, item))
            .collect()
    }

    /// Drop every entry whose deadline has passed, returning the removed ids.
    pub fn prune(&mut self, now_ms: f64) -> SmallVec<[EntityId; 8]> {
        let mut removed = SmallVec::new();
        self.entries.retain(|e| {
            if e.is_expired(now_ms) {
                removed.push(e.id);
                false
            } else {
                true
            }
        });
        removed
    }

    pub fn clear(&mut self) -> Vec<EntityId> {
        self.entries.drain(..).map(|e| e.id).collect()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Ephemeral<T>> {
        self.entries.iter()
    }

    #[inline]
    pub fn get(&self, id: EntityId) -> Option<&Ephemeral<T>> {
        self.entries.iter().find(|e| e.id == id)
    }

    #[inline]
    pub fn contains(&self, id: EntityId) -> bool {
        self.get(id).is_some()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn lifetime_ms(&self) -> f64 {
        self.lifetime_ms
    }
}
