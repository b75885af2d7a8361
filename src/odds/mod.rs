pub mod distribution;
pub use distribution::*;

pub mod equity;
pub use equity::*;

pub mod tally;
pub use tally::*;

#[cfg(test)]
mod tests;
