use std::hash::Hasher;

/// Seed of Dan Bernstein's string hash
pub const DJB2_SEED: u64 = 5381;

/// djb2 string hash: `hash = hash * 33 + byte` for every byte, starting at 5381.
///
/// Arithmetic wraps at 64 bits, like `unsigned long` on LP64 targets.
///
/// Feed it bytes with [`Hasher::write`] directly. `str`'s `Hash` impl appends a
/// terminator byte and would produce a different value.
#[derive(Debug, Clone, Copy)]
pub struct Djb2Hasher {
    state: u64,
}

impl Default for Djb2Hasher {
    fn default() -> Self {
        Self { state: DJB2_SEED }
    }
}

impl Hasher for Djb2Hasher {
    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.state = (self.state << 5)
                .wrapping_add(self.state)
                .wrapping_add(u64::from(byte));
        }
    }

    fn finish(&self) -> u64 {
        self.state
    }
}

/// Hash a name the way the table does.
pub fn djb2(bytes: &[u8]) -> u64 {
    let mut hasher = Djb2Hasher::default();
    hasher.write(bytes);
    hasher.finish()
}

/// Slot examined on probe `attempt` (0-based) for a key hashing to `hash`.
///
/// Quadratic probing: `(hash + attempt²) mod capacity`.
pub fn probe_index(hash: u64, attempt: u64, capacity: usize) -> usize {
    let capacity = capacity as u64;
    let index = if attempt == 0 {
        hash % capacity
    } else {
        hash.wrapping_add(attempt.wrapping_mul(attempt)) % capacity
    };
    index as usize
}
