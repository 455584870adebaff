use crate::profiling::profile_function;
use std::num::NonZeroU64;

/// Generational handle into a [`SparseSet`].
///
/// The upper 32 bits hold the generation, the lower 32 bits the slot index
/// plus one so the value is never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IndexSlot(NonZeroU64);

impl IndexSlot {
    pub fn new(generation: u32, idx: u32) -> Self {
        let raw = ((generation as u64) << 32) | (idx as u64 + 1);
        // The low half is at least one, so the packed value is never zero.
        Self(NonZeroU64::new(raw).unwrap_or(NonZeroU64::MIN))
    }

    pub fn generation(&self) -> u32 {
        (self.0.get() >> 32) as u32
    }

    pub fn index(&self) -> u32 {
        (self.0.get() & u32::MAX as u64) as u32 - 1
    }
}

struct Entry<T> {
    generation: u32,
    data: Option<T>,
}

/// A generational arena.
///
/// Removing an entry bumps the slot's generation, so stale handles are
/// rejected instead of aliasing whatever reuses the slot.
pub struct SparseSet<T> {
    vec: Vec<Entry<T>>,
    free: Vec<u32>,
    len: usize,
}

impl<T> Default for SparseSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SparseSet<T> {
    pub const fn new() -> Self {
        Self {
            vec: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn push(&mut self, data: T) -> IndexSlot {
        profile_function!();
        self.len += 1;
        if let Some(idx) = self.free.pop() {
            let entry = &mut self.vec[idx as usize];
            entry.data = Some(data);
            IndexSlot::new(entry.generation, idx)
        } else {
            let idx = self.vec.len() as u32;
            self.vec.push(Entry {
                generation: 0,
                data: Some(data),
            });
            IndexSlot::new(0, idx)
        }
    }

    fn entry(&self, idx: IndexSlot) -> Option<&Entry<T>> {
        self.vec
            .get(idx.index() as usize)
            .filter(|entry| entry.generation == idx.generation())
    }

    pub fn contains(&self, idx: IndexSlot) -> bool {
        self.entry(idx).is_some_and(|entry| entry.data.is_some())
    }

    pub fn get(&self, idx: IndexSlot) -> Option<&T> {
        self.entry(idx).and_then(|entry| entry.data.as_ref())
    }

    pub fn get_mut(&mut self, idx: IndexSlot) -> Option<&mut T> {
        self.vec
            .get_mut(idx.index() as usize)
            .filter(|entry| entry.generation == idx.generation())
            .and_then(|entry| entry.data.as_mut())
    }

    pub fn remove(&mut self, idx: IndexSlot) -> Option<T> {
        profile_function!();
        let index = idx.index();
        let entry = self
            .vec
            .get_mut(index as usize)
            .filter(|entry| entry.generation == idx.generation())?;
        let data = entry.data.take()?;
        entry.generation = entry.generation.wrapping_add(1);
        self.free.push(index);
        self.len -= 1;
        Some(data)
    }

    /// Live entries with their handles, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (IndexSlot, &T)> + '_ {
        self.vec.iter().enumerate().filter_map(|(idx, entry)| {
            entry
                .data
                .as_ref()
                .map(|data| (IndexSlot::new(entry.generation, idx as u32), data))
        })
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (IndexSlot, &mut T)> + '_ {
        self.vec.iter_mut().enumerate().filter_map(|(idx, entry)| {
            let generation = entry.generation;
            entry
                .data
                .as_mut()
                .map(|data| (IndexSlot::new(generation, idx as u32), data))
        })
    }

    pub fn clear(&mut self) {
        for (idx, entry) in self.vec.iter_mut().enumerate() {
            if entry.data.take().is_some() {
                entry.generation = entry.generation.wrapping_add(1);
                self.free.push(idx as u32);
            }
        }
        self.len = 0;
    }
}

static_assertions::assert_eq_size!(IndexSlot, Option<IndexSlot>);
