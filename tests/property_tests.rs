use proptest::prelude::*;

use hangman::models::constants::{BLANK, MAX_STAGES};
use hangman::models::gallows::GallowsState;
use hangman::{GameEngine, GameState, GuessResult};

fn engine_for(word: &str) -> GameEngine {
    GameEngine::new(&[word.to_string()], 0).unwrap()
}

proptest! {
    /// Property: a guess is a Hit iff the letter occurs in the word,
    /// case-insensitively
    #[test]
    fn hit_iff_letter_occurs(word in "[A-Z]{1,12}", letter in proptest::char::range('A', 'Z')) {
        let mut engine = engine_for(&word);
        let report = engine.guess(letter).unwrap();

        let occurs = word.contains(letter);
        prop_assert_eq!(
            report.result == GuessResult::Hit,
            occurs,
            "Guess {} against {} reported {:?}",
            letter, word, report.result
        );
    }

    /// Property: a hit reveals exactly the matching positions and no others
    #[test]
    fn hit_reveals_exactly_matching_positions(word in "[A-Z]{1,12}", letter in proptest::char::range('A', 'Z')) {
        let mut engine = engine_for(&word);
        engine.guess(letter).unwrap();

        let secret: Vec<char> = word.chars().collect();
        for (i, &revealed) in engine.word().revealed().iter().enumerate() {
            if secret[i] == letter {
                prop_assert_eq!(revealed, letter, "Position {} should be revealed", i);
            } else {
                prop_assert_eq!(revealed, BLANK, "Position {} should stay blank", i);
            }
        }
    }

    /// Property: lowercase and uppercase guesses are equivalent
    #[test]
    fn guesses_are_case_insensitive(word in "[A-Z]{1,12}", letter in proptest::char::range('a', 'z')) {
        let mut lower = engine_for(&word);
        let mut upper = engine_for(&word);

        let r1 = lower.guess(letter).unwrap();
        let r2 = upper.guess(letter.to_ascii_uppercase()).unwrap();

        prop_assert_eq!(r1.result, r2.result);
        prop_assert_eq!(lower.word().revealed(), upper.word().revealed());
    }

    /// Property: repeating a hit leaves the reveal state unchanged and
    /// still reports Hit
    #[test]
    fn repeated_hit_is_idempotent(word in "[A-Z]{1,12}") {
        let mut engine = engine_for(&word);
        let letter = word.chars().next().unwrap();

        engine.guess(letter).unwrap();
        let after_first: Vec<char> = engine.word().revealed().to_vec();

        let report = engine.guess(letter).unwrap();
        prop_assert_eq!(report.result, GuessResult::Hit);
        prop_assert_eq!(engine.word().revealed(), &after_first[..]);
    }

    /// Property: the word is fully revealed iff every distinct letter
    /// has been guessed
    #[test]
    fn fully_revealed_iff_all_letters_guessed(word in "[A-Z]{2,12}") {
        let mut engine = engine_for(&word);
        let mut distinct: Vec<char> = word.chars().collect();
        distinct.sort_unstable();
        distinct.dedup();

        // All but the last distinct letter
        for &letter in &distinct[..distinct.len() - 1] {
            engine.guess(letter).unwrap();
        }
        if distinct.len() > 1 {
            prop_assert!(!engine.word().is_fully_revealed());
        }

        engine.guess(distinct[distinct.len() - 1]).unwrap();
        prop_assert!(engine.word().is_fully_revealed());
        prop_assert_eq!(engine.state(), GameState::Won);
    }

    /// Property: phrases keep their spaces pre-revealed from the start
    #[test]
    fn spaces_start_revealed(word in "[A-Z]{1,6} [A-Z]{1,6}") {
        let engine = engine_for(&word);
        let secret: Vec<char> = word.chars().collect();

        for (i, &revealed) in engine.word().revealed().iter().enumerate() {
            if secret[i] == ' ' {
                prop_assert_eq!(revealed, ' ');
            } else {
                prop_assert_eq!(revealed, BLANK);
            }
        }
    }

    /// Property: the reveal vector always matches the secret in length
    #[test]
    fn reveal_length_invariant(word in "[A-Z]{1,12}", guesses in proptest::collection::vec(proptest::char::range('A', 'Z'), 0..20)) {
        let mut engine = engine_for(&word);
        for letter in guesses {
            if engine.state() != GameState::Playing {
                break;
            }
            engine.guess(letter).unwrap();
            prop_assert_eq!(engine.word().revealed().len(), word.chars().count());
        }
    }

    /// Property: wrong_count after n misses equals n, for n in 0..=MAX_STAGES
    #[test]
    fn miss_count_is_strictly_monotonic(n in 0u32..=MAX_STAGES) {
        let mut gallows = GallowsState::new();
        for expected in 1..=n {
            prop_assert_eq!(gallows.record_miss().unwrap(), expected);
        }
        prop_assert_eq!(gallows.wrong_count(), n);
        prop_assert_eq!(gallows.is_lost(), n == MAX_STAGES);
    }

    /// Property: the loss lands exactly on the last stage, never earlier
    #[test]
    fn loss_exactly_at_max_stages(word in "[AEIOU]{1,8}") {
        let mut engine = engine_for(&word);

        // None of these consonants can hit an all-vowel word
        let misses = ['Q', 'W', 'X', 'Z', 'B', 'J', 'K', 'V', 'H', 'G', 'T'];
        for (i, &letter) in misses.iter().enumerate() {
            let report = engine.guess(letter).unwrap();
            prop_assert_eq!(report.result, GuessResult::Miss);

            let ended = i as u32 + 1 == MAX_STAGES;
            prop_assert_eq!(report.state == GameState::Lost, ended);
        }

        prop_assert_eq!(engine.state(), GameState::Lost);
    }

    /// Property: once the game has ended, nothing moves
    #[test]
    fn terminal_states_are_terminal(word in "[A-Z]{1,8}", extra in proptest::char::range('A', 'Z')) {
        let mut engine = engine_for(&word);
        let mut distinct: Vec<char> = word.chars().collect();
        distinct.sort_unstable();
        distinct.dedup();
        for letter in distinct {
            engine.guess(letter).unwrap();
        }
        prop_assert_eq!(engine.state(), GameState::Won);

        let revealed: Vec<char> = engine.word().revealed().to_vec();
        prop_assert!(engine.guess(extra).is_err());
        prop_assert_eq!(engine.word().revealed(), &revealed[..]);
        prop_assert_eq!(engine.gallows().wrong_count(), 0);

        // Re-polling keeps returning the same latched state
        prop_assert_eq!(engine.check_game_over(), Some(GameState::Won));
    }

    /// Property: same seed and word list always select the same word
    #[test]
    fn selection_is_deterministic(seed in any::<u64>()) {
        let words: Vec<String> = ["FRANCE", "ITALY", "SPAIN", "NORWAY", "PERU", "NEW ZEALAND"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let engine1 = GameEngine::new(&words, seed).unwrap();
        let engine2 = GameEngine::new(&words, seed).unwrap();
        prop_assert_eq!(engine1.word().secret(), engine2.word().secret());
    }
}
