//! Session integration tests driven by scripted console input.

use std::io::Cursor;

use twentyone::{GameOptions, Session, SessionStats};

fn run(seed: u64, input: &str) -> (SessionStats, String) {
    let input = Cursor::new(input.to_owned());
    let mut session = Session::new(GameOptions::default(), seed, input, Vec::new());
    let stats = session.run().unwrap();
    let output = String::from_utf8(session.into_output()).unwrap();
    (stats, output)
}

#[test]
fn stand_then_decline_plays_one_round() {
    for seed in 0..20 {
        let (stats, output) = run(seed, "s\nn\n");
        assert_eq!(stats.rounds, 1, "seed {seed}");
        assert_eq!(stats.wins + stats.losses + stats.ties, 1);
        assert!(output.starts_with("Dealer got "), "seed {seed}");
        assert!(output.contains("\nYou have "), "seed {seed}");
        assert!(output.ends_with("Play again? [y]/[n]: "), "seed {seed}");
    }
}

#[test]
fn same_seed_replays_identically() {
    let (first_stats, first) = run(99, "h\ns\ny\ns\nn\n");
    let (second_stats, second) = run(99, "h\ns\ny\ns\nn\n");
    assert_eq!(first, second);
    assert_eq!(first_stats, second_stats);
}

#[test]
fn unrecognized_action_reprompts() {
    let mut reprompted = false;
    for seed in 0..20 {
        let (stats, output) = run(seed, "x\ns\nn\n");
        assert_eq!(stats.rounds, 1, "seed {seed}");
        if output.contains("Please answer h or s.") {
            reprompted = true;
            assert_eq!(output.matches("Hit or Stand? [h]/[s]: ").count(), 2);
        }
    }
    assert!(reprompted);
}

#[test]
fn yes_plays_another_round() {
    let mut replayed = false;
    for seed in 0..20 {
        let (stats, output) = run(seed, "s\ny\ns\nn\n");
        assert!((1..=2).contains(&stats.rounds), "seed {seed}");
        if stats.rounds == 2 {
            replayed = true;
            assert_eq!(output.matches("Play again? [y]/[n]: ").count(), 2);
        }
    }
    assert!(replayed);
}

#[test]
fn closed_input_ends_the_session() {
    for seed in 0..20 {
        let (stats, output) = run(seed, "");
        assert!(stats.rounds <= 1, "seed {seed}");
        assert!(output.starts_with("Dealer got "));
    }
}

#[test]
fn every_round_reshuffles_the_same_deck() {
    let input = Cursor::new("s\ns\ns\n");
    let mut session = Session::new(GameOptions::default(), 5, input, Vec::new());

    let mut orders = Vec::new();
    for _ in 0..3 {
        assert!(session.play_round().unwrap().is_some());
        orders.push(session.deck().clone());
    }

    assert_ne!(orders[0], orders[1]);
    assert_ne!(orders[1], orders[2]);

    let stats = session.stats();
    assert_eq!(stats.rounds, 3);
    assert_eq!(stats.wins + stats.losses + stats.ties, 3);
}

#[test]
fn hitting_out_ends_the_round_before_the_dealer_draws() {
    let mut busted = false;
    for seed in 0..40 {
        let (stats, output) = run(seed, &"h\n".repeat(12));
        assert_eq!(stats.rounds, 1, "seed {seed}");
        assert_eq!(output.matches("Dealer got ").count(), 1, "seed {seed}");
        if output.contains("* Table wins! You lose... *") {
            busted = true;
            assert_eq!(stats.losses, 1);
        }
    }
    assert!(busted);
}
