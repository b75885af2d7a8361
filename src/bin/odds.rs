//! Odds Calculator Binary
//!
//! Evaluates a hole + board spot, then prints Monte Carlo equity against
//! a random field and the exact distribution of final hand categories.

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use holdem_calc::cards::board::Board;
use holdem_calc::cards::deck::Deck;
use holdem_calc::cards::hole::Hole;
use holdem_calc::evaluation::strength::Strength;
use holdem_calc::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// two hole cards, e.g. AhKh
    #[arg(long, required = true)]
    hole: String,
    /// 0, 3, 4 or 5 community cards, e.g. "Qh Jh 2c"
    #[arg(long, default_value = "")]
    board: String,
    /// number of random opponents
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=MAX_OPPONENTS as i64))]
    opponents: u8,
    /// Monte Carlo trials
    #[arg(long, default_value_t = EQUITY_TRIALS)]
    trials: usize,
    /// RNG seed; drawn at random and logged if absent
    #[arg(long)]
    seed: Option<u64>,
    /// spread trials over all cores
    #[arg(long)]
    parallel: bool,
    /// emit a single JSON object instead of text
    #[arg(long)]
    json: bool,
    /// debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log(match args.verbose {
        true => log::LevelFilter::Debug,
        false => log::LevelFilter::Info,
    })?;

    let hole = Hole::try_from(args.hole.as_str()).context("parsing --hole")?;
    let board = Board::try_from(args.board.as_str()).context("parsing --board")?;
    let known = hole.join(board).context("combining --hole and --board")?;
    let street = board
        .street()
        .with_context(|| format!("board must hold 0, 3, 4 or 5 cards, got {}", board.size()))?;
    let live = Deck::new().without(known);
    let opponents = args.opponents as usize;
    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    log::info!("seed {}", seed);

    let strength = Strength::from(known);
    let equity = match args.parallel {
        true => Equity::simulate_parallel(hole, board, &live, opponents, args.trials, seed),
        false => Equity::simulate(
            hole,
            board,
            &live,
            opponents,
            args.trials,
            &mut SmallRng::seed_from_u64(seed),
        ),
    }
    .context("estimating equity")?;
    let outcomes = match board.missing() {
        0 => Vec::new(),
        _ => improvement(hole, board, &live).context("enumerating improvement")?,
    };

    if args.json {
        let report = serde_json::json!({
            "hole": hole.to_string(),
            "board": board.to_string(),
            "street": street.to_string(),
            "hand": strength.to_string(),
            "category": strength.category(),
            "score": evaluate(known).ok().map(|s| s.score()),
            "opponents": opponents,
            "seed": seed,
            "equity": equity,
            "improvement": outcomes,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{} {}  {} {} ({})", "hole".bold(), hole, "board".bold(), board, street);
    println!("{} {}", "hand".bold(), strength.to_string().cyan());
    println!(
        "{} vs {} opponent(s), {} trials",
        "equity".bold(),
        opponents,
        equity.tally().trials
    );
    println!("  win  {}", format!("{:>6.2}%", equity.win()).green());
    println!("  tie  {}", format!("{:>6.2}%", equity.tie()).yellow());
    println!("  lose {}", format!("{:>6.2}%", 100. - equity.equity()).red());
    if !outcomes.is_empty() {
        println!("{}", "improvement".bold());
        for outcome in outcomes {
            println!("  {}", outcome);
        }
    }
    Ok(())
}
