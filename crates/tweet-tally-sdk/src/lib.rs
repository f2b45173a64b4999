/*!
# Tweet Tally SDK

Reads a tweets CSV, counts tweets per distinct author, and ranks the most
prolific ones.

```rust
use tweet_tally_sdk::{tally_tweets, TallyConfig};

let csv = "\"id\",\"name\"\n1,\"Alice\"\n2,\"Bob\"\n3,\"Alice\"\n";
let report = tally_tweets(csv.as_bytes(), &TallyConfig::default()).unwrap();
assert_eq!(report.to_string(), "Alice: 2\nBob: 1\n");
```
*/

mod config;
mod error;
mod report;
mod tally;

pub use config::*;
pub use error::*;
pub use report::*;
pub use tally::*;

// Re-export the building blocks
pub use tweet_tally_csvs::{CsvError, HeaderLayout};
pub use tweet_tally_table::{TableError, HASHTABLE_SIZE};
