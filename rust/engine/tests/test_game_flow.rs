mod common;

use common::{drop_card, play, start, tell_rank, tell_suit};
use hanabi_engine::cards::{Card, Rank, Suit};
use hanabi_engine::engine::{Engine, Verdict};
use hanabi_engine::rules::{FinishReason, Rules};

fn engine_with(deal: &str) -> Engine {
    let mut eng = Engine::new(Rules::default());
    assert_eq!(eng.execute(start(deal)).unwrap(), Verdict::Continue);
    eng
}

#[test]
fn first_play_lands_on_board_and_draws() {
    let mut eng = engine_with("R1 R2 R3 R4 R5 G1 G2 G3 G4 G5 R1 R2");

    assert_eq!(eng.execute(play(0)).unwrap(), Verdict::Continue);

    let game = eng.game().unwrap();
    assert_eq!(game.board().top(Suit::Red), 1);
    assert_eq!(game.board().score(), 1);
    assert_eq!(game.deck().remaining(), 1);
    let hand = &game.hands()[0];
    assert_eq!(hand.len(), 5);
    assert_eq!(hand.get(4).unwrap().card(), Card::new(Suit::Red, Rank::One));
    assert_eq!(game.active_player(), 1);
}

#[test]
fn truthful_colour_clue_narrows_target_knowledge() {
    let mut eng = engine_with("G1 G2 G3 G4 G5 R1 R2 R3 B1 B2 W1 W2 W3");

    assert_eq!(
        eng.execute(tell_suit(Suit::Red, &[0, 1, 2])).unwrap(),
        Verdict::Continue
    );

    let target = &eng.game().unwrap().hands()[1];
    for i in 0..3 {
        let held = target.get(i).unwrap();
        assert!(held.is_known_suit());
        assert!(held.possible_suits().contains(Suit::Red));
    }
    for i in 3..5 {
        let held = target.get(i).unwrap();
        assert!(!held.possible_suits().contains(Suit::Red));
        assert_eq!(held.possible_suits().len(), 4);
    }
    let giver = &eng.game().unwrap().hands()[0];
    assert!(giver.cards().iter().all(|h| h.possible_suits().len() == 5));
}

#[test]
fn colour_clue_with_wrong_positions_finishes() {
    let mut eng = engine_with("G1 G2 G3 G4 G5 R1 R2 R3 B1 B2 W1 W2 W3");

    assert_eq!(
        eng.execute(tell_suit(Suit::Red, &[0, 1])).unwrap(),
        Verdict::Finish(FinishReason::FalseClue)
    );
    let target = &eng.game().unwrap().hands()[1];
    assert!(target.cards().iter().all(|h| h.possible_suits().len() == 5));
    assert_eq!(eng.stats().unwrap().turn, 1);
}

#[test]
fn colour_clue_with_extra_position_finishes() {
    let mut eng = engine_with("G1 G2 G3 G4 G5 R1 R2 R3 B1 B2 W1 W2 W3");
    assert_eq!(
        eng.execute(tell_suit(Suit::Red, &[0, 1, 2, 3])).unwrap(),
        Verdict::Finish(FinishReason::FalseClue)
    );
}

#[test]
fn unplayable_card_finishes_without_touching_board() {
    let mut eng = engine_with("R2 R3 R4 R5 G1 G1 G2 G3 G4 G5 B1 B2");

    assert_eq!(
        eng.execute(play(0)).unwrap(),
        Verdict::Finish(FinishReason::IllegalPlay)
    );
    let stats = eng.stats().unwrap();
    assert_eq!(stats.board_depth, 0);
    assert_eq!(stats.risk_count, 0);
    assert_eq!(stats.turn, 1);
    assert_eq!(eng.game().unwrap().deck().remaining(), 2);
}

#[test]
fn drawing_the_last_card_finishes_a_legal_play() {
    let mut eng = engine_with("R1 R2 R3 R4 R5 G1 G2 G3 G4 G5 B1");

    assert_eq!(
        eng.execute(play(0)).unwrap(),
        Verdict::Finish(FinishReason::DeckExhausted)
    );
    let game = eng.game().unwrap();
    assert_eq!(game.board().depth(), 1);
    assert!(game.deck().is_empty());
    assert_eq!(game.hands()[0].len(), 5);
    assert_eq!(eng.stats().unwrap().to_string(), "Turn: 1, cards: 1, with risk: 1");
}

#[test]
fn play_with_empty_deck_counts_then_finishes() {
    let mut eng = engine_with("R1 R2 R3 R4 R5 G1 G2 G3 G4 G5");

    assert_eq!(
        eng.execute(play(0)).unwrap(),
        Verdict::Finish(FinishReason::DeckExhausted)
    );
    let game = eng.game().unwrap();
    assert_eq!(game.board().depth(), 1);
    assert_eq!(game.hands()[0].len(), 4);
}

#[test]
fn drop_draws_while_reserve_holds() {
    let mut eng = engine_with("R1 R2 R3 R4 R5 G1 G2 G3 G4 G5 B1 B2");

    assert_eq!(eng.execute(drop_card(4)).unwrap(), Verdict::Continue);
    let game = eng.game().unwrap();
    assert_eq!(game.deck().remaining(), 1);
    assert_eq!(
        game.hands()[0].get(4).unwrap().card(),
        Card::new(Suit::Blue, Rank::One)
    );

    // one card left is below the reserve of two
    assert_eq!(
        eng.execute(drop_card(0)).unwrap(),
        Verdict::Finish(FinishReason::DeckExhausted)
    );
    let game = eng.game().unwrap();
    assert_eq!(game.hands()[1].len(), 4);
    assert_eq!(game.deck().remaining(), 1);
}

#[test]
fn drop_reserve_is_configurable() {
    let rules = Rules {
        hand_size: 5,
        drop_reserve: 1,
    };
    let mut eng = Engine::new(rules);
    eng.execute(start("R1 R2 R3 R4 R5 G1 G2 G3 G4 G5 B1")).unwrap();
    assert_eq!(eng.execute(drop_card(0)).unwrap(), Verdict::Continue);
    assert!(eng.game().unwrap().deck().is_empty());
}

#[test]
fn clue_passes_the_turn_to_its_target() {
    let mut eng = engine_with("R1 R2 R3 R4 R5 G1 G2 G3 G4 G5 B1 B2 B3");

    assert_eq!(eng.game().unwrap().active_player(), 0);
    eng.execute(tell_rank(Rank::One, &[0])).unwrap();
    assert_eq!(eng.game().unwrap().active_player(), 1);

    // player 1 now plays the G1 they were told about
    assert_eq!(eng.execute(play(0)).unwrap(), Verdict::Continue);
    let game = eng.game().unwrap();
    assert_eq!(game.board().top(Suit::Green), 1);
    assert_eq!(game.risks(), 0);
    assert_eq!(game.active_player(), 0);
}

#[test]
fn full_replay_reports_turns_cards_and_risks() {
    let mut eng = engine_with("R1 R2 R3 R4 R5 G1 G2 G3 G4 G5 B1 B2 B3 W1 W2");

    // 1. P0: all of P1's cards are green
    assert_eq!(eng.execute(tell_suit(Suit::Green, &[0, 1, 2, 3, 4])).unwrap(), Verdict::Continue);
    // 2. P1: P0's first card is a one
    assert_eq!(eng.execute(tell_rank(Rank::One, &[0])).unwrap(), Verdict::Continue);
    // 3. P0 plays R1 knowing only its rank: every one is playable on an empty board
    assert_eq!(eng.execute(play(0)).unwrap(), Verdict::Continue);
    assert_eq!(eng.game().unwrap().risks(), 0);
    // 4. P1 drops G5 and draws B2
    assert_eq!(eng.execute(drop_card(4)).unwrap(), Verdict::Continue);
    // 5. P0: P1's first card is a one
    assert_eq!(eng.execute(tell_rank(Rank::One, &[0])).unwrap(), Verdict::Continue);
    // 6. P1 plays G1, fully known
    assert_eq!(eng.execute(play(0)).unwrap(), Verdict::Continue);
    assert_eq!(eng.game().unwrap().risks(), 0);
    // 7. P0 plays R2 knowing only it is not a one
    assert_eq!(eng.execute(play(0)).unwrap(), Verdict::Continue);
    assert_eq!(eng.game().unwrap().risks(), 1);
    assert_eq!(eng.game().unwrap().deck().remaining(), 1);
    // 8. P1 drops with one card left in the deck
    assert_eq!(
        eng.execute(drop_card(0)).unwrap(),
        Verdict::Finish(FinishReason::DeckExhausted)
    );

    assert_eq!(eng.stats().unwrap().to_string(), "Turn: 8, cards: 3, with risk: 1");
}

#[test]
fn board_is_full_exactly_at_twenty_five() {
    let rules = Rules {
        hand_size: 1,
        drop_reserve: 2,
    };
    let mut order = String::new();
    for s in ["R", "G", "B", "W", "Y"] {
        for r in 1..=5 {
            order.push_str(&format!("{}{} ", s, r));
        }
    }
    order.push_str("R1 R1 R1");

    let mut eng = Engine::new(rules);
    eng.execute(start(&order)).unwrap();
    for turn in 1..=24 {
        assert_eq!(eng.execute(play(0)).unwrap(), Verdict::Continue, "turn {}", turn);
        let board = eng.game().unwrap().board();
        assert_eq!(board.score(), turn);
        assert!(!board.is_full());
    }
    assert_eq!(
        eng.execute(play(0)).unwrap(),
        Verdict::Finish(FinishReason::BoardComplete)
    );
    let board = eng.game().unwrap().board();
    assert_eq!(board.score(), 25);
    assert!(board.is_full());
    assert_eq!(eng.stats().unwrap().to_string(), "Turn: 25, cards: 25, with risk: 25");
}
