//! End-to-end behaviour of the public API

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use wordle_csp::constraints::ConstraintState;
use wordle_csp::core::{Feedback, Pattern, SolverError, Word, evaluate};
use wordle_csp::game::{Game, best_opening};
use wordle_csp::solver::entropy::calculate_entropy;
use wordle_csp::solver::{EntropyStrategy, GuessSelector, SampledEntropyStrategy, SelectorConfig};
use wordle_csp::trie::Trie;
use wordle_csp::wordlists::loader::words_from_slice;

fn word(s: &str) -> Word {
    Word::new(s).unwrap()
}

fn random_words(rng: &mut StdRng, count: usize, len: usize) -> Vec<Word> {
    let mut texts: Vec<String> = (0..count)
        .map(|_| {
            (0..len)
                .map(|_| char::from(b'a' + rng.random_range(0..8u8)))
                .collect()
        })
        .collect();
    texts.sort();
    texts.dedup();
    texts.iter().map(|t| word(t)).collect()
}

#[test]
fn word_against_itself_is_all_correct() {
    for text in ["a", "abba", "speed", "mississippi"] {
        let w = word(text);
        let pattern = evaluate(&w, &w).unwrap();
        assert!(pattern.is_perfect());
        assert!(pattern.iter().all(|f| f == Feedback::Correct));
    }
}

#[test]
fn duplicate_letters_are_credited_once() {
    use Feedback::{Absent, Correct, Present};

    let pattern = evaluate(&word("abba"), &word("baaa")).unwrap();
    assert_eq!(
        pattern.iter().collect::<Vec<_>>(),
        [Present, Present, Absent, Correct]
    );

    let pattern = evaluate(&word("speed"), &word("erase")).unwrap();
    assert_eq!(
        pattern.iter().collect::<Vec<_>>(),
        [Present, Absent, Present, Present, Absent]
    );
}

#[test]
fn evaluate_rejects_different_lengths() {
    assert_eq!(
        evaluate(&word("crane"), &word("cranes")),
        Err(SolverError::LengthMismatch {
            expected: 5,
            actual: 6
        })
    );
}

#[test]
fn entropy_of_trivial_candidate_sets_is_zero() {
    let guess = word("crane");
    assert!(calculate_entropy(&guess, &[]).abs() < f64::EPSILON);
    assert!(calculate_entropy(&guess, std::slice::from_ref(&guess)).abs() < f64::EPSILON);
}

#[test]
fn opening_equal_to_answer_wins_in_one() {
    let trie = Trie::build(&words_from_slice(&["abcde", "abcdf", "xyzzy"], None));
    let game = Game::new(GuessSelector::new(
        &trie,
        EntropyStrategy,
        SelectorConfig::default(),
        word("abcde"),
    ));

    let outcome = game.solve(&word("abcde"));
    assert!(outcome.won);
    assert_eq!(outcome.attempts_used, 1);
}

#[test]
fn contradictory_history_has_no_candidates() {
    let trie = Trie::build(&words_from_slice(&["abcde", "abcdf", "afghi", "xyzzy"], None));
    let selector = GuessSelector::new(
        &trie,
        EntropyStrategy,
        SelectorConfig::default(),
        word("abcde"),
    );
    let mut state = ConstraintState::new(5);

    let correct_a = (word("abcde"), Pattern::from_str("G----").unwrap());
    selector
        .select_next_guess(std::slice::from_ref(&correct_a), &mut state)
        .unwrap();

    let absent_a = (word("aaaaa"), Pattern::from_str("-----").unwrap());
    assert_eq!(
        selector.select_next_guess(&[correct_a, absent_a], &mut state),
        Err(SolverError::NoCandidates)
    );
}

#[test]
fn answer_stays_a_candidate_throughout_the_game() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..10 {
        let words = random_words(&mut rng, 80, 4);
        let trie = Trie::build(&words);
        let opening = best_opening(&trie, 4, &EntropyStrategy).unwrap();
        let answer = &words[rng.random_range(0..words.len())];

        let game = Game::new(GuessSelector::new(
            &trie,
            EntropyStrategy,
            SelectorConfig::default(),
            opening,
        ));
        let outcome = game.solve(answer);
        if outcome.won {
            assert_eq!(&outcome.history.last().unwrap().0, answer);
        }

        // Replaying the feedback never rules out the answer
        let mut state = ConstraintState::new(4);
        for (guess, pattern) in &outcome.history {
            state.apply_feedback(guess, *pattern).unwrap();
            assert!(state.candidates(&trie, &[]).contains(answer));
        }
    }
}

#[test]
fn truthful_feedback_never_rules_out_the_answer() {
    // Three letters over five positions: almost every guess repeats letters, so
    // present, correct and absent copies of one letter meet in the same guess
    let mut rng = StdRng::seed_from_u64(0xfeed);
    let random_word = |rng: &mut StdRng| -> Word {
        let bytes: String = (0..5)
            .map(|_| char::from(b'a' + rng.random_range(0..3u8)))
            .collect();
        word(&bytes)
    };

    for _ in 0..500 {
        let answer = random_word(&mut rng);
        let trie = Trie::build(std::slice::from_ref(&answer));
        let mut state = ConstraintState::new(5);

        for _ in 0..4 {
            let guess = random_word(&mut rng);
            let pattern = evaluate(&guess, &answer).unwrap();
            state.apply_feedback(&guess, pattern).unwrap();
            assert_eq!(
                state.candidates(&trie, &[]),
                vec![answer.clone()],
                "{guess} {pattern} against {answer} left {state}"
            );
        }
    }
}

#[test]
fn sampled_strategy_plays_complete_games() {
    let words = words_from_slice(
        &[
            "crane", "crate", "grate", "irate", "slate", "trace", "react", "caret", "cater",
            "later", "alter", "alert", "stare", "share", "shore", "store",
        ],
        Some(5),
    );
    let trie = Trie::build(&words);
    let strategy = SampledEntropyStrategy::new(4, 1);
    let opening = best_opening(&trie, 5, &strategy).unwrap();
    let game = Game::new(GuessSelector::new(
        &trie,
        strategy,
        SelectorConfig {
            max_attempts: 10,
            ..SelectorConfig::default()
        },
        opening,
    ));

    for answer in &words {
        assert!(game.solve(answer).won, "lost on {answer}");
    }
}

#[test]
fn games_share_one_trie_across_threads() {
    use rayon::prelude::*;

    let words = words_from_slice(
        &["fight", "light", "might", "night", "right", "sight", "tight", "eight"],
        None,
    );
    let trie = Trie::build(&words);
    let game = Game::new(GuessSelector::new(
        &trie,
        EntropyStrategy,
        SelectorConfig::default(),
        word("eight"),
    ));

    let parallel: Vec<usize> = words
        .par_iter()
        .map(|w| game.solve(w).attempts_used)
        .collect();
    let sequential: Vec<usize> = words.iter().map(|w| game.solve(w).attempts_used).collect();
    assert_eq!(parallel, sequential);
}
