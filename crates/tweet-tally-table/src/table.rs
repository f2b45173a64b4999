use crate::{
    error::{TableError, TableResult},
    hasher::{djb2, probe_index},
    ranking::Ranking,
};

/// Number of buckets in a default table. Prime, and well above the number of
/// distinct authors a file within the row limit can hold.
pub const HASHTABLE_SIZE: usize = 40009;

/// Tweet count stored in an empty slot
pub const EMPTY_TWEET_COUNT: i32 = -1;

/// One bucket of the table.
///
/// A slot is empty iff it has no name, and then its count is
/// [`EMPTY_TWEET_COUNT`]; an occupied slot has a count of at least 1. Fields
/// are private so the two can never disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    name: Option<Vec<u8>>,
    tweet_count: i32,
}

impl Default for Slot {
    fn default() -> Self {
        Self {
            name: None,
            tweet_count: EMPTY_TWEET_COUNT,
        }
    }
}

impl Slot {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
    }

    /// Raw name bytes, exactly as counted
    pub fn name(&self) -> Option<&[u8]> {
        self.name.as_deref()
    }

    /// [`EMPTY_TWEET_COUNT`] for an empty slot
    pub fn tweet_count(&self) -> i32 {
        self.tweet_count
    }

    fn occupy(&mut self, name: Vec<u8>) {
        self.name = Some(name);
        self.tweet_count = 1;
    }
}

/// Fixed-capacity open-addressing table from author name to tweet count.
///
/// Names are byte strings compared byte for byte; no encoding is assumed.
/// Collisions are resolved with quadratic probing over djb2 hashes. Slots are
/// never removed; the table owns every name it accepts until it is dropped or
/// turned into a [`Ranking`].
#[derive(Debug, Clone)]
pub struct TweetTable {
    slots: Vec<Slot>,
    occupied: usize,
}

impl Default for TweetTable {
    fn default() -> Self {
        Self::new()
    }
}

impl TweetTable {
    /// Create an empty table with [`HASHTABLE_SIZE`] slots
    pub fn new() -> Self {
        Self::empty(HASHTABLE_SIZE)
    }

    /// Create an empty table with `capacity` slots.
    ///
    /// Probing only covers every slot when `capacity` is prime; smaller tables
    /// are mostly useful for forcing collisions in tests.
    pub fn with_capacity(capacity: usize) -> TableResult<Self> {
        if capacity == 0 {
            return Err(TableError::ZeroCapacity);
        }
        Ok(Self::empty(capacity))
    }

    fn empty(capacity: usize) -> Self {
        Self {
            slots: vec![Slot::default(); capacity],
            occupied: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots, i.e. distinct names
    pub fn occupied(&self) -> usize {
        self.occupied
    }

    pub fn slot(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Find the slot that holds `name`, or the empty slot where it belongs.
    ///
    /// Probes `(hash + k²) mod capacity` for k = 0, 1, 2, ... and stops at the
    /// first slot that is empty or holds exactly `name`. Does not mutate, so
    /// two calls in a row return the same index.
    pub fn lookup_or_reserve(&self, name: impl AsRef<[u8]>) -> TableResult<usize> {
        let name = name.as_ref();
        let hash = djb2(name);
        let capacity = self.capacity();

        for attempt in 0..capacity as u64 {
            let index = probe_index(hash, attempt, capacity);
            let slot = &self.slots[index];
            match slot.name() {
                None => return Ok(index),
                Some(existing) if existing == name => return Ok(index),
                Some(_) => {}
            }
        }

        Err(TableError::TableFull {
            attempts: capacity,
            capacity,
        })
    }

    /// Count one more tweet for `name` and return its new count.
    ///
    /// The table takes ownership of `name`. When an equal name is already
    /// stored, the argument is dropped and the stored count goes up by one.
    pub fn increment(&mut self, name: impl Into<Vec<u8>>) -> TableResult<i32> {
        let name = name.into();
        let index = self.lookup_or_reserve(&name)?;

        if self.slots[index].is_empty() {
            self.assign_slot(index, name)?;
        } else {
            self.slots[index].tweet_count += 1;
        }

        Ok(self.slots[index].tweet_count)
    }

    /// Tweet count stored for `name`, if any
    pub fn count_of(&self, name: impl AsRef<[u8]>) -> Option<i32> {
        let index = self.lookup_or_reserve(name).ok()?;
        let slot = &self.slots[index];
        (!slot.is_empty()).then_some(slot.tweet_count)
    }

    /// Iterate over occupied slots in bucket order
    pub fn iter(&self) -> impl Iterator<Item = (&[u8], i32)> {
        self.slots
            .iter()
            .filter_map(|slot| slot.name().map(|name| (name, slot.tweet_count)))
    }

    /// Sort all slots by tweet count and give up the ability to look names up.
    pub fn into_ranking(self) -> Ranking {
        Ranking::from_slots(self.slots)
    }

    /// Put `name` into an empty slot with a count of 1.
    ///
    /// Overwriting an occupied slot is a bug in the caller.
    pub(crate) fn assign_slot(&mut self, index: usize, name: Vec<u8>) -> TableResult<()> {
        let capacity = self.capacity();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(TableError::InvalidIndex { index, capacity })?;

        if !slot.is_empty() {
            return Err(TableError::OccupiedSlot { index });
        }

        slot.occupy(name);
        self.occupied += 1;
        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn occupied_slot(name: &str, tweet_count: i32) -> Slot {
    Slot {
        name: Some(name.as_bytes().to_vec()),
        tweet_count,
    }
}
