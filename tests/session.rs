//! Session integration tests.

use deckrs::{
    Card, DECK_SIZE, DeckError, DrawPolicy, Rank, Selection, Session, SessionOptions, Suit,
};

#[test]
fn selection_parses_menu_numbers() {
    assert_eq!(Selection::parse("1"), Some(Selection::Shuffle));
    assert_eq!(Selection::parse("2"), Some(Selection::Reset));
    assert_eq!(Selection::parse("  2\r\n"), Some(Selection::Reset));
    assert_eq!(Selection::parse("+1"), Some(Selection::Shuffle));

    assert_eq!(Selection::parse("0"), None);
    assert_eq!(Selection::parse("3"), None);
    assert_eq!(Selection::parse("-1"), None);
    assert_eq!(Selection::parse("one"), None);
    assert_eq!(Selection::parse(""), None);
    assert_eq!(Selection::parse("1.0"), None);
}

#[test]
fn selection_menu_lines() {
    assert_eq!(Selection::Shuffle.to_string(), "1 - Fisher-Yates Shuffle");
    assert_eq!(Selection::Reset.to_string(), "2 - Reset to Unshuffled Deck");
    for selection in Selection::ALL {
        assert_eq!(
            Selection::parse(&selection.key().to_string()),
            Some(selection)
        );
    }
}

#[test]
fn options_builder_sets_fields() {
    let options = SessionOptions::default();
    assert_eq!(options.hand_size, 5);
    assert_eq!(options.draw_policy, DrawPolicy::Destructive);

    let options = options
        .with_hand_size(2)
        .with_draw_policy(DrawPolicy::AllOrNothing);
    assert_eq!(options.hand_size, 2);
    assert_eq!(options.draw_policy, DrawPolicy::AllOrNothing);
}

#[test]
fn session_exposes_its_options() {
    let options = SessionOptions::default()
        .with_hand_size(3)
        .with_draw_policy(DrawPolicy::AllOrNothing);
    let mut session = Session::new(options, 4);

    assert_eq!(session.options(), &options);
    let report = session.play_round(Selection::Reset).unwrap();
    assert_eq!(report.hand.len(), session.options().hand_size);
}

#[test]
fn reset_round_draws_from_ordered_deck() {
    let mut session = Session::new(SessionOptions::default(), 1);
    let report = session.play_round(Selection::Reset).unwrap();

    assert_eq!(report.selection, Selection::Reset);
    assert_eq!(report.cards_before_draw, DECK_SIZE);
    assert_eq!(report.first_card, Card::new(Suit::Hearts, Rank::Ace));
    assert_eq!(
        report.hand,
        vec![
            Card::new(Suit::Hearts, Rank::Two),
            Card::new(Suit::Hearts, Rank::Three),
            Card::new(Suit::Hearts, Rank::Four),
            Card::new(Suit::Hearts, Rank::Five),
            Card::new(Suit::Hearts, Rank::Six),
        ]
    );
    assert_eq!(report.cards_remaining, 46);
    assert_eq!(session.deck().len(), 46);
}

#[test]
fn shuffle_round_is_reproducible_per_seed() {
    let play = |seed: u64| {
        Session::new(SessionOptions::default(), seed)
            .play_round(Selection::Shuffle)
            .unwrap()
    };

    let first = play(7);
    assert_eq!(first, play(7));
    assert_eq!(first.cards_before_draw, DECK_SIZE);
    assert_eq!(first.hand.len(), 5);
    assert_eq!(first.cards_remaining, 46);
    assert!(!first.hand.contains(&first.first_card));
}

#[test]
fn reset_refills_a_drawn_down_deck() {
    let mut session = Session::new(SessionOptions::default(), 3);
    session.play_round(Selection::Shuffle).unwrap();
    assert_eq!(session.deck().len(), 46);

    session.apply(Selection::Reset);
    assert_eq!(session.deck().len(), DECK_SIZE);
}

#[test]
fn round_on_empty_deck_fails() {
    let mut session = Session::new(SessionOptions::default(), 0);
    session.deck_mut().draw_cards(DECK_SIZE).unwrap();

    assert_eq!(
        session.play_round(Selection::Shuffle),
        Err(DeckError::EmptyDeck)
    );
}

#[test]
fn short_hand_depends_on_draw_policy() {
    let mut destructive = Session::new(SessionOptions::default(), 0);
    destructive.deck_mut().draw_cards(48).unwrap();
    assert_eq!(
        destructive.play_round(Selection::Shuffle),
        Err(DeckError::EmptyDeck)
    );
    assert!(destructive.deck().is_empty());

    let options = SessionOptions::default().with_draw_policy(DrawPolicy::AllOrNothing);
    let mut checked = Session::new(options, 0);
    checked.deck_mut().draw_cards(48).unwrap();
    assert_eq!(
        checked.play_round(Selection::Shuffle),
        Err(DeckError::NotEnoughCards {
            requested: 5,
            remaining: 3,
        })
    );
    assert_eq!(checked.deck().len(), 3);
}

#[test]
fn custom_hand_size() {
    let options = SessionOptions::default().with_hand_size(0);
    let mut session = Session::new(options, 9);
    let report = session.play_round(Selection::Reset).unwrap();

    assert!(report.hand.is_empty());
    assert_eq!(report.cards_remaining, 51);
}
