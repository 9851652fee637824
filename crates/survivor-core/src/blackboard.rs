//! Typed scratch storage shared by the nodes of one decision tree.
//!
//! Values written by one node are visible to every node evaluated after it, in the same tick
//! and in later ticks, until they are overwritten or removed.

use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

/// Key for a blackboard entry holding a `T`.
///
/// Keys are compared by `id` only; the name is carried for diagnostics.
pub struct BbKey<T: 'static> {
    id: u64,
    name: &'static str,
    _phantom: PhantomData<fn() -> T>,
}

impl<T: 'static> Copy for BbKey<T> {}

impl<T: 'static> Clone for BbKey<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> fmt::Debug for BbKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BbKey({}:{})", self.id, self.name)
    }
}

impl<T: 'static> PartialEq for BbKey<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T: 'static> Eq for BbKey<T> {}

impl<T: 'static> BbKey<T> {
    pub const fn new(id: u64, name: &'static str) -> Self {
        Self {
            id,
            name,
            _phantom: PhantomData,
        }
    }

    pub fn id(self) -> u64 {
        self.id
    }

    pub fn name(self) -> &'static str {
        self.name
    }
}

#[derive(Default)]
pub struct Blackboard {
    values: BTreeMap<u64, Box<dyn Any>>,
}

impl fmt::Debug for Blackboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Blackboard")
            .field("keys", &self.values.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Blackboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn contains<T: 'static>(&self, key: BbKey<T>) -> bool {
        self.values.contains_key(&key.id)
    }

    pub fn set<T: 'static>(&mut self, key: BbKey<T>, value: T) {
        self.values.insert(key.id, Box::new(value));
    }

    pub fn get<T: 'static>(&self, key: BbKey<T>) -> Option<&T> {
        let value = self.values.get(&key.id)?;
        value
            .downcast_ref::<T>()
            .or_else(|| type_mismatch(key))
    }

    /// Copy of the stored value, for the small `Copy` payloads most nodes share.
    pub fn get_copied<T: Copy + 'static>(&self, key: BbKey<T>) -> Option<T> {
        self.get(key).copied()
    }

    pub fn get_mut<T: 'static>(&mut self, key: BbKey<T>) -> Option<&mut T> {
        let value = self.values.get_mut(&key.id)?;
        value
            .downcast_mut::<T>()
            .or_else(|| type_mismatch(key))
    }

    pub fn remove<T: 'static>(&mut self, key: BbKey<T>) -> Option<T> {
        let value = self.values.remove(&key.id)?;
        value
            .downcast::<T>()
            .map(|b| *b)
            .ok()
            .or_else(|| type_mismatch(key))
    }
}

fn type_mismatch<T: 'static, R>(key: BbKey<T>) -> Option<R> {
    panic!(
        "blackboard type mismatch for key {}:{} (stored type differs from requested)",
        key.id, key.name
    )
}
