//! Change notification through `Game` and the `ScoreKeeper` contract.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use bowling_score::{Game, ScoreKeeper};

fn counter(game: &mut Game) -> Arc<AtomicUsize> {
    let count = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&count);
    game.subscribe(move || {
        seen.fetch_add(1, Ordering::SeqCst);
    });
    count
}

#[test]
fn test_one_notification_per_accepted_roll() {
    let mut game = Game::new();
    let count = counter(&mut game);

    for _ in 0..12 {
        game.add_roll(10);
    }
    // Game over: ignored.
    game.add_roll(10);

    assert_eq!(count.load(Ordering::SeqCst), 12);
}

#[test]
fn test_no_notification_for_rejected_rolls() {
    let mut game = Game::new();
    let count = counter(&mut game);

    game.add_roll(-5);
    game.add_roll(12);
    game.add_roll(6);
    game.add_roll(6);

    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn test_multiple_listeners_in_order() {
    let mut game = Game::new();
    let log = Arc::new(Mutex::new(Vec::new()));

    for name in ["scoreboard", "lane display", "history"] {
        let log = Arc::clone(&log);
        game.subscribe(move || log.lock().unwrap().push(name));
    }

    game.add_roll(3);

    assert_eq!(
        *log.lock().unwrap(),
        vec!["scoreboard", "lane display", "history"]
    );
}

#[test]
fn test_unsubscribe_stops_notifications() {
    let mut game = Game::new();
    let count = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&count);
    let id = game.subscribe(move || {
        seen.fetch_add(1, Ordering::SeqCst);
    });

    game.add_roll(1);
    assert!(game.unsubscribe(id));
    game.add_roll(1);

    assert_eq!(count.load(Ordering::SeqCst), 1);
    assert_eq!(game.listener_count(), 0);
    assert!(!game.unsubscribe(id));
}

#[test]
fn test_panicking_listener_does_not_corrupt_game() {
    let mut game = Game::new();
    game.subscribe(|| panic!("display crashed"));
    let count = counter(&mut game);

    game.add_roll(10);
    game.add_roll(4);

    assert_eq!(game.rolls(), &[10, 4]);
    assert_eq!(game.current_frame_index(), 1);
    assert_eq!(count.load(Ordering::SeqCst), 2);
    assert_eq!(game.listener_count(), 1);
}

#[test]
fn test_game_behind_mutex() {
    let game = Arc::new(Mutex::new(Game::new()));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let game = Arc::clone(&game);
            std::thread::spawn(move || {
                for _ in 0..3 {
                    game.lock().unwrap().add_roll(10);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let game = game.lock().unwrap();
    assert!(game.is_complete());
    assert_eq!(game.total_score(), Some(300));
}

#[test]
fn test_keeper_contract_through_trait_object() {
    let mut keeper: Box<dyn ScoreKeeper + Send> = Box::new(Game::new());
    let count = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&count);
    keeper.subscribe(Box::new(move || {
        seen.fetch_add(1, Ordering::SeqCst);
    }));

    for pins in [5, 5, 3] {
        keeper.add_roll(pins);
    }

    assert_eq!(keeper.frames()[0].score(), Some(13));
    assert_eq!(keeper.current_frame_index(), 1);
    assert_eq!(keeper.current_frame().first_roll(), Some(3));
    assert_eq!(keeper.total_score(), Some(13));
    assert_eq!(count.load(Ordering::SeqCst), 3);
}
