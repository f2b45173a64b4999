use crate::error::{CliError, CliResult};
use chrono::{DateTime, NaiveDateTime};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;
use tracing::info;
use tweet_tally_csvs::{write_tweets_csv, TweetRow};

/// 2015-02-16 00:00:00 UTC
const FIRST_TWEET_TIMESTAMP: i64 = 1_424_044_800;

/// Tweets are spread over this many seconds after the first one
const TWEET_WINDOW_SECONDS: i64 = 8 * 24 * 60 * 60;

const WORDS: &[&str] = &[
    "flight", "delayed", "again", "thanks", "crew", "gate", "bag", "lost", "great", "service",
    "seat", "upgrade", "late", "on", "time", "love", "never", "weather", "cancelled", "help",
    "please", "today", "tomorrow", "airport", "landing", "boarding", "snacks", "wifi", "rebooked",
    "hold",
];

/// Generate a deterministic tweets CSV for exercising `tally`
pub fn execute(count: usize, seed: u64, authors: usize, output: PathBuf) -> CliResult<()> {
    if count == 0 {
        return Err(CliError::InvalidConfig(
            "count must be greater than 0".to_string(),
        ));
    }
    if authors == 0 {
        return Err(CliError::InvalidConfig(
            "authors must be greater than 0".to_string(),
        ));
    }

    info!(count, seed, authors, output = %output.display(), "Generating fixtures");

    let rows = generate_rows(count, seed, authors)?;
    write_tweets_csv(&output, &rows)?;

    println!(
        "Generated {} tweets from {} authors: {}",
        count,
        authors,
        output.display()
    );

    Ok(())
}

/// Build `count` rows whose authors are drawn with a bias towards the first
/// handles, so the ranking is not a flat tie.
pub fn generate_rows(count: usize, seed: u64, authors: usize) -> CliResult<Vec<TweetRow>> {
    let handles = generate_author_handles(authors);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut rows = Vec::with_capacity(count);
    for tweet_id in 1..=count as u64 {
        // Squaring a uniform draw skews towards 0.
        let draw: f64 = rng.gen();
        let author = ((draw * draw) * authors as f64) as usize;
        let name = handles[author.min(authors - 1)].clone();

        let word_count = rng.gen_range(3..=12);
        let text = (0..word_count)
            .map(|_| WORDS[rng.gen_range(0..WORDS.len())])
            .collect::<Vec<_>>()
            .join(" ");

        let offset = rng.gen_range(0..TWEET_WINDOW_SECONDS);
        let tweet_created = tweet_timestamp(FIRST_TWEET_TIMESTAMP + offset)?;

        rows.push(TweetRow {
            tweet_id,
            name,
            text,
            tweet_created,
        });
    }

    Ok(rows)
}

fn tweet_timestamp(seconds: i64) -> CliResult<NaiveDateTime> {
    DateTime::from_timestamp(seconds, 0)
        .map(|dt| dt.naive_utc())
        .ok_or_else(|| CliError::InvalidConfig(format!("Invalid tweet timestamp: {}", seconds)))
}

fn generate_author_handles(count: usize) -> Vec<String> {
    let base_names = [
        "jetblue_fan",
        "frequent_flyer",
        "gate_agent_watch",
        "travel_weekly",
        "layover_life",
        "window_seat",
        "carry_on_only",
        "red_eye_regular",
        "miles_and_points",
        "tarmac_tales",
        "aisle_please",
        "upgrade_hunter",
    ];

    (0..count)
        .map(|i| match base_names.get(i) {
            Some(name) => name.to_string(),
            None => format!("traveler_{}", i + 1),
        })
        .collect()
}
