//! Texas Hold'em hand evaluation and odds.
//!
//! [`evaluate`] ranks any set of five or more cards, [`improvement`] counts
//! every way the board can finish, and [`Equity`] estimates win and tie
//! rates against a field of random hands.
pub mod cards;
pub mod error;
pub mod evaluation;
pub mod odds;

pub use error::Error;
pub use error::Result;
pub use evaluation::evaluate;
pub use odds::Distribution;
pub use odds::Equity;
pub use odds::Outcome;
pub use odds::improvement;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Percentage points in [0, 100].
pub type Percent = f64;

// ============================================================================
// PARAMETERS
// ============================================================================
/// Monte Carlo trials per equity estimate unless told otherwise.
pub const EQUITY_TRIALS: usize = 3000;
/// Width of each category's band in a packed [`evaluation::Score`].
pub const CATEGORY_BAND: u32 = 1_000_000;
/// Largest field the command line will simulate against.
pub const MAX_OPPONENTS: usize = 9;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging at the given level.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) -> anyhow::Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;
    Ok(())
}
