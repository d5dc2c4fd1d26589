//! Interactive card shuffler.

use std::io::{self, Write};
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use deckrs::{RoundReport, Selection, Session, SessionOptions};
use log::{error, info};

fn main() -> ExitCode {
    let _ = env_logger::try_init();

    println!("Welcome to the card shuffler!");
    println!("Please select the type of shuffle you would like to perform:");
    for selection in Selection::ALL {
        println!("{selection}");
    }

    let Some(selection) = Selection::parse(&prompt_line("Press any other key to exit\n> ")) else {
        println!("Invalid selection. Exiting program.");
        return ExitCode::SUCCESS;
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    info!("starting session with seed {seed}");
    let mut session = Session::new(SessionOptions::default(), seed);

    match session.play_round(selection) {
        Ok(report) => {
            print_report(&report);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("round failed: {err}");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input
}

fn print_report(report: &RoundReport) {
    match report.selection {
        Selection::Shuffle => println!("Random shuffle complete."),
        Selection::Reset => println!("Deck reset to unshuffled state."),
    }

    println!("Deck has {} cards.", report.cards_before_draw);

    println!("Drawing a card...");
    println!("You drew {}.", report.first_card);

    println!("Drawing {} cards...", report.hand.len());
    println!("You drew:");
    for card in &report.hand {
        println!("{card}");
    }
}
