use std::cmp::Ordering;

use crate::table::Slot;

/// Number of authors reported by default
pub const DEFAULT_TOP_COUNT: usize = 10;

/// In-place heap sort into ascending order under `compare`.
///
/// Builds a binary max-heap over the whole slice, then repeatedly swaps the
/// root to the end of the shrinking heap. Not stable.
pub fn heap_sort_by<T, F>(items: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = items.len();

    for root in (0..len / 2).rev() {
        sift_down(items, len, root, &mut compare);
    }

    for end in (1..len).rev() {
        items.swap(0, end);
        sift_down(items, end, 0, &mut compare);
    }
}

fn sift_down<T, F>(items: &mut [T], heap_len: usize, mut root: usize, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    loop {
        let left = 2 * root + 1;
        let right = left + 1;
        let mut largest = root;

        if left < heap_len && compare(&items[left], &items[largest]) == Ordering::Greater {
            largest = left;
        }
        if right < heap_len && compare(&items[right], &items[largest]) == Ordering::Greater {
            largest = right;
        }

        if largest == root {
            return;
        }

        items.swap(root, largest);
        root = largest;
    }
}

/// Slots ordered by count only; an empty slot's `-1` sorts before any real count.
pub fn compare_slots(a: &Slot, b: &Slot) -> Ordering {
    a.tweet_count().cmp(&b.tweet_count())
}

/// Every slot of a finished table, sorted ascending by tweet count.
///
/// Empty slots come first, the most prolific author is last.
#[derive(Debug, Clone)]
pub struct Ranking {
    slots: Vec<Slot>,
}

impl Ranking {
    pub(crate) fn from_slots(mut slots: Vec<Slot>) -> Self {
        heap_sort_by(&mut slots, compare_slots);
        Self { slots }
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Up to `count` authors with their tweet counts, most tweets first.
    ///
    /// Reads the sorted array from the back and stops early at the first
    /// empty slot, so fewer entries come back when fewer names were counted.
    pub fn top(&self, count: usize) -> impl Iterator<Item = (&[u8], i32)> {
        self.slots
            .iter()
            .rev()
            .take(count)
            .map_while(|slot| slot.name().map(|name| (name, slot.tweet_count())))
    }
}
