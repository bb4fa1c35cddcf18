mod card;
mod cli;
mod rng;
mod tracker;

use card::{CardId, Rank, Suit};
use clap::{Parser, Subcommand};
use cli::{parse_command, SessionCommand, HELP_TEXT};
use rng::DrawRng;
use serde::Serialize;
use std::io::{self, BufRead, Write};
use tracker::{Snapshot, Tracker};

#[derive(Parser)]
#[command(name = "decktrack")]
#[command(about = "Card deck and hand tracker with draw odds", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for random draws (for reproducibility)
    #[arg(short, long)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Track a deck interactively (default)
    Session {
        /// Seed for random draws
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// One-shot draw odds for a card after a list of draws
    Odds {
        /// Card to query, in compact notation (e.g. AH, 10d, Ks)
        card: String,

        /// Cards already drawn, comma separated (e.g. KS,QD,QD)
        #[arg(short, long, value_delimiter = ',')]
        drawn: Vec<String>,

        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Session { seed }) => run_session(seed),
        Some(Commands::Odds { card, drawn, json }) => run_odds(&card, &drawn, json),
        None => run_session(cli.seed),
    }
}

fn run_session(seed: Option<u64>) {
    let mut tracker = Tracker::new();
    let mut rng = DrawRng::new(seed);
    // Odds display tracks the ace of hearts until select changes it
    let mut selected = CardId::new(Rank::Ace, Suit::Hearts);

    println!("=== decktrack session ===\n");
    println!("Seed: {}", rng.seed());
    println!("{}\n", HELP_TEXT);
    print_odds(&tracker, selected);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                eprintln!("✗ Failed to read input: {}", e);
                break;
            }
            None => break,
        };

        let command = match parse_command(&line) {
            None => continue,
            Some(Ok(command)) => command,
            Some(Err(e)) => {
                eprintln!("✗ {}", e);
                continue;
            }
        };

        match command {
            SessionCommand::Draw(card) => {
                if tracker.draw(card) {
                    println!("Drew {} (hand: {} cards)", card, tracker.hand().size());
                } else {
                    println!("No {} left in the deck", card);
                }
                print_odds(&tracker, selected);
            }
            SessionCommand::Random => {
                match tracker.draw_random(&mut rng) {
                    Some(card) => {
                        println!("Drew {} (hand: {} cards)", card, tracker.hand().size())
                    }
                    None => println!("The deck is empty"),
                }
                print_odds(&tracker, selected);
            }
            SessionCommand::Return(position) => {
                match tracker.return_to_deck(position) {
                    Ok(card) => println!("Returned {} to the deck", card),
                    Err(e) => eprintln!("✗ {}", e),
                }
                print_odds(&tracker, selected);
            }
            SessionCommand::Clear => {
                tracker.clear_hand();
                println!("Hand returned to the deck");
                print_odds(&tracker, selected);
            }
            SessionCommand::Reset => {
                tracker.reset_all();
                println!("Deck reset");
                print_odds(&tracker, selected);
            }
            SessionCommand::Select(card) => {
                selected = card;
                print_odds(&tracker, selected);
            }
            SessionCommand::Odds(card) => {
                print_odds(&tracker, card.unwrap_or(selected));
            }
            SessionCommand::Show => print_table(&tracker),
            SessionCommand::Hand => print_hand(&tracker),
            SessionCommand::Help => println!("{}", HELP_TEXT),
            SessionCommand::Quit => break,
        }
    }
}

fn print_odds(tracker: &Tracker, card: CardId) {
    println!(
        "P(draw {}) = {:.2}%  ({} of {} remaining)",
        card,
        tracker.probability_of(card),
        tracker.counts().get(card),
        tracker.remaining()
    );
}

fn print_table(tracker: &Tracker) {
    println!("Remaining deck ({} cards):", tracker.remaining());
    for rank in Rank::ALL {
        let row: Vec<String> = Suit::ALL
            .iter()
            .map(|&suit| {
                let card = CardId::new(rank, suit);
                format!("{}:{}", suit.symbol(), tracker.counts().get(card))
            })
            .collect();
        println!("  {:>2}  {}", rank, row.join("  "));
    }
}

fn print_hand(tracker: &Tracker) {
    let hand = tracker.hand();
    if hand.is_empty() {
        println!("Hand is empty");
        return;
    }
    println!("Hand ({} cards):", hand.size());
    for (position, card) in hand.cards().iter().enumerate() {
        println!("  [{}] {}", position, card);
    }
}

/// JSON payload for the odds subcommand
#[derive(Serialize)]
struct OddsReport {
    card: String,
    probability: f64,
    copies_remaining: u8,
    state: Snapshot,
}

fn run_odds(card: &str, drawn: &[String], json: bool) {
    let target: CardId = match card.parse() {
        Ok(card) => card,
        Err(e) => {
            eprintln!("✗ {}", e);
            std::process::exit(1);
        }
    };

    let mut tracker = Tracker::new();
    for token in drawn {
        let card: CardId = match token.parse() {
            Ok(card) => card,
            Err(e) => {
                eprintln!("✗ {}", e);
                std::process::exit(1);
            }
        };
        if !tracker.draw(card) {
            eprintln!("✗ Cannot draw {}: none left in the deck", card);
            std::process::exit(1);
        }
    }

    let probability = tracker.probability_of(target);

    if json {
        let report = OddsReport {
            card: target.to_string(),
            probability,
            copies_remaining: tracker.counts().get(target),
            state: tracker.snapshot(),
        };
        match serde_json::to_string_pretty(&report) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                eprintln!("✗ Failed to serialize result: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        print_odds(&tracker, target);
    }
}
