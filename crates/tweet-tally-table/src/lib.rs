/*!
# Tweet Tally Table

A fixed-size, open-addressing hash table from raw author name bytes to tweet
count, and the heap sort that ranks its slots once counting is done.

```rust
use tweet_tally_table::{TweetTable, DEFAULT_TOP_COUNT};

let mut table = TweetTable::new();
for name in ["alice", "bob", "alice"] {
    table.increment(name.to_string()).unwrap();
}

let ranking = table.into_ranking();
let top: Vec<(&[u8], i32)> = ranking.top(DEFAULT_TOP_COUNT).collect();
assert_eq!(top, vec![(&b"alice"[..], 2), (&b"bob"[..], 1)]);
```
*/

pub mod error;
pub mod hasher;
pub mod ranking;
pub mod table;

pub use error::{TableError, TableResult};
pub use hasher::{djb2, probe_index, Djb2Hasher, DJB2_SEED};
pub use ranking::{compare_slots, heap_sort_by, Ranking, DEFAULT_TOP_COUNT};
pub use table::{Slot, TweetTable, EMPTY_TWEET_COUNT, HASHTABLE_SIZE};
