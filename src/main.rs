use std::process;

use hangman::cli;
use hangman::io::TerminalIO;
use hangman::services::game::Game;
use hangman::services::wordlist;

fn main() {
    let args = cli::args::parse();

    println!("*** HANGMAN ***");
    println!();

    let words = match args.words {
        Some(path) => match wordlist::load_words(&path) {
            Ok(words) => words,
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        None => wordlist::default_words(),
    };

    let seed = args.seed.unwrap_or_else(rand::random);

    let mut game = match Game::new(&words, seed) {
        Ok(game) => game,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let mut input = TerminalIO;
    let mut output = TerminalIO;
    if let Err(e) = game.run(&mut input, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
