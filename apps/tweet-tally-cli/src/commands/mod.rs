pub mod generate_fixtures;
pub mod tally;
