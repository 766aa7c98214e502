//! CLI blackjack example.
//!
//! The console acts as both the presentation sink and the input source.
//! Run with `BJ_LOG=debug` to see engine logs on stderr.

use std::io::{self, Write};
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use blackjack_round::{
    Card, Game, GameOptions, GameState, HandOwner, Rank, RoundResult, RoundSnapshot, Sink, Suit,
};
use tracing::Level;

struct Console;

impl Sink for Console {
    fn card_dealt(&mut self, card: Card, owner: HandOwner) {
        match owner {
            HandOwner::Player(index) => println!("  -> hand {}: {}", index + 1, format_card(&card)),
            HandOwner::Dealer { face_down: true } => println!("  -> dealer: ??"),
            HandOwner::Dealer { face_down: false } => {
                println!("  -> dealer: {}", format_card(&card));
            }
        }
    }

    fn state_changed(&mut self, snapshot: &RoundSnapshot) {
        if matches!(snapshot.state, GameState::PlayerTurn | GameState::DealerTurn) {
            print_table(snapshot);
        }
    }

    fn message(&mut self, text: &str, _display: Duration) {
        println!("{}", colorize(text, "1"));
    }

    fn round_result(&mut self, result: &RoundResult) {
        println!("Dealer finishes with {}.", result.dealer_value);
        for line in result.messages() {
            println!("  {line}");
        }
    }
}

fn main() {
    let level = match std::env::var("BJ_LOG").as_deref() {
        Ok("trace") => Level::TRACE,
        Ok("debug") => Level::DEBUG,
        Ok("info") => Level::INFO,
        _ => Level::WARN,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    println!("Blackjack CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::with_sink(GameOptions::default(), seed, Console);

    loop {
        if game.is_out_of_money() {
            break;
        }

        let balance = game.balance();
        let max = balance.min(game.options().max_bet);
        let Some(bet) = prompt_usize(&format!("Balance {balance}. Bet amount (1-{max}, 0 to quit): "))
        else {
            break;
        };

        if bet == 0 {
            println!("Goodbye.");
            break;
        }

        if let Err(err) = game.place_bet(bet) {
            println!("Bet error: {err}");
            continue;
        }

        if let Err(err) = game.start_round() {
            println!("Deal error: {err}");
            continue;
        }

        run_steps(&mut game);

        while game.state() == GameState::PlayerTurn {
            println!("{}", format_actions(&game.snapshot()));

            let result = match prompt_line("Action: ").as_str() {
                "h" | "hit" => game.hit().map(|_| ()),
                "s" | "stand" => game.stand(),
                "d" | "double" => game.double_down().map(|_| ()),
                "p" | "split" => game.split(),
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            if let Err(err) = result {
                println!("Action error: {err}");
            }

            run_steps(&mut game);
        }

        let stats = game.stats();
        println!(
            "Rounds played: {} | hands won: {} | win rate: {:.2}%\n",
            stats.rounds_played,
            stats.hands_won,
            stats.win_rate()
        );
    }
}

/// Runs pending steps, pausing a fraction of each suggested delay.
fn run_steps<S: Sink>(game: &mut Game<S>) {
    while let Some(delay) = game.pending_delay() {
        thread::sleep(delay / 4);
        game.step();
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_table(snapshot: &RoundSnapshot) {
    let mut dealer: Vec<String> = Vec::new();
    if !snapshot.dealer_revealed && snapshot.dealer_card_count > 0 {
        dealer.push("??".to_string());
    }
    dealer.extend(snapshot.dealer_cards.iter().map(format_card));
    println!(
        "\nDealer: {} (showing {})",
        dealer.join(" "),
        snapshot.dealer_visible_total
    );

    for (index, hand) in snapshot.hands.iter().enumerate() {
        let marker = if index == snapshot.current_hand_index {
            "*"
        } else {
            " "
        };
        let cards: Vec<String> = hand.cards.iter().map(format_card).collect();
        println!(
            "{} Hand {}: {} | value {}{} | bet {}",
            marker,
            index + 1,
            cards.join(" "),
            hand.total,
            if hand.soft { " (soft)" } else { "" },
            hand.bet
        );
    }
    println!("Balance: {}\n", snapshot.balance);
}

fn format_actions(snapshot: &RoundSnapshot) -> String {
    let controls = snapshot.controls;
    let parts = [
        format_action("hit", "h", controls.can_hit),
        format_action("stand", "s", controls.can_stand),
        format_action("double", "d", controls.can_double),
        format_action("split", "p", controls.can_split),
    ];
    format!("Actions: {}", parts.join(" "))
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = format!("[{key}]{label}");
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let rank = match card.rank {
        Rank::Jack => "J".to_string(),
        Rank::Queen => "Q".to_string(),
        Rank::King => "K".to_string(),
        Rank::Ace => "A".to_string(),
        other => other.to_string(),
    };
    format!("{rank}{}", colorize(suit, color_code))
}
