use std::process::ExitCode;

use hilo_equity::core::{Card, Hand, PokerError};
use hilo_equity::equity::{EquityCalculatorBuilder, HiLoEquity, ValueSummary};
use hilo_equity::games::GameVariant;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: equity <game> <board|-> <hand> [<hand> ...]";

fn parse_cards(s: &str) -> Result<Vec<Card>, PokerError> {
    if s == "-" {
        return Ok(vec![]);
    }
    Ok(Hand::new_from_str(s)?.into())
}

fn describe(summary: &ValueSummary) -> String {
    let value = summary
        .current
        .map_or_else(|| "?".to_string(), |v| v.to_string());
    let best = if summary.best { " (best)" } else { "" };
    let outs = if summary.outs.is_empty() {
        String::new()
    } else {
        let outs: Vec<String> = summary.outs.iter().map(|c| c.to_string()).collect();
        format!(" outs {}", outs.join(" "))
    };
    format!("{value}{best}{outs}")
}

fn print_result(idx: usize, result: &HiLoEquity) {
    let total = result.total();
    let hand = Hand::new_with_cards(result.hand.clone()).unwrap_or_default();
    println!(
        "{idx}: {} win {:.1}% tie {:.1}%",
        hand.glyph_string(),
        total.win_equity * 100.0,
        total.tie_equity * 100.0
    );
    println!("   high: {}", describe(&result.high_summary));
    if let Some(low) = result.low_summary() {
        println!("   low:  {}", describe(low));
    }
    for (rank, count) in result.high_summary.winning_ranks() {
        println!("   {:>16} {}", rank.name(), count);
    }
}

fn run(args: &[String]) -> Result<(), PokerError> {
    let game = *GameVariant::from_name(&args[0])?;
    let board = parse_cards(&args[1])?;
    let hands = args[2..]
        .iter()
        .map(|h| parse_cards(h))
        .collect::<Result<Vec<_>, _>>()?;

    let results = EquityCalculatorBuilder::default()
        .game(game)
        .board(board)
        .hands(hands)
        .build()?
        .calculate()?;

    if let Some(first) = results.first() {
        let kind = if first.exact { "exact" } else { "estimated" };
        println!("{} {kind}, {} cards remaining", game.name, first.remaining);
    }
    for (idx, result) in results.iter().enumerate() {
        print_result(idx, result);
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 3 {
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    }
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
