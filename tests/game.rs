//! Game integration tests.

use tfrs::{
    Card, DECK_SIZE, DealError, Deck, FlipError, Game, GameOptions, GameState, HAND_SIZE, Rank,
    ResolveError, RevealError, RoundOutcome, Seat, Suit,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// Puts known hands in place and marks the round as dealt, bypassing the
/// shuffle so tests can assert on specific cards.
fn set_hands(game: &Game, one: &[Card], two: &[Card]) {
    let mut players = game.players.lock();
    players[0].set_hand(one.to_vec());
    players[1].set_hand(two.to_vec());
    drop(players);
    *game.state.lock() = GameState::Dealt;
}

#[test]
fn standard_deck_is_sorted_and_face_down() {
    let deck = Deck::standard();
    assert_eq!(deck.len(), DECK_SIZE);

    for (i, card) in deck.cards().iter().enumerate() {
        assert_eq!(card.index() as usize, i);
        assert!(!card.is_face_up());
    }

    assert_eq!(deck.cards()[0], card(Rank::Ace, Suit::Clubs));
    assert_eq!(deck.cards()[51], card(Rank::King, Suit::Diamonds));
}

#[test]
fn card_values_and_royal_values() {
    assert_eq!(Rank::Ace.value(), 1);
    assert_eq!(Rank::Ten.value(), 10);
    assert_eq!(Rank::Jack.value(), 10);
    assert_eq!(Rank::Queen.value(), 10);
    assert_eq!(Rank::King.value(), 10);

    assert_eq!(Rank::Nine.royal_value(), None);
    assert_eq!(Rank::Jack.royal_value(), Some(11));
    assert_eq!(Rank::Queen.royal_value(), Some(12));
    assert_eq!(Rank::King.royal_value(), Some(13));
}

#[test]
fn rank_names_round_trip_and_invalid_name_fails() {
    for rank in Rank::ALL {
        assert_eq!(rank.name().parse::<Rank>().unwrap(), rank);
    }

    assert!("Joker".parse::<Rank>().is_err());
    assert!(Card::from_name("ace", Suit::Spades).is_err());
    assert_eq!(
        Card::from_name("Queen", Suit::Hearts).unwrap(),
        card(Rank::Queen, Suit::Hearts)
    );
}

#[test]
fn deal_splits_deck_alternately() {
    let mut deck = Deck::standard();
    let (one, two) = deck.deal();

    assert!(deck.is_empty());
    assert_eq!(one.len(), HAND_SIZE);
    assert_eq!(two.len(), HAND_SIZE);

    // Even indices to player one, odd to player two, relative order kept.
    for (i, card) in one.iter().enumerate() {
        assert_eq!(card.index() as usize, 2 * i);
    }
    for (i, card) in two.iter().enumerate() {
        assert_eq!(card.index() as usize, 2 * i + 1);
    }
}

#[test]
fn dealt_hands_have_no_duplicates() {
    let options = GameOptions::default();
    let game = Game::new(options, 42);
    game.deal().unwrap();

    let mut seen = [false; DECK_SIZE];
    for seat in Seat::BOTH {
        let hand = game.hand(seat);
        assert_eq!(hand.len(), HAND_SIZE);
        for card in hand {
            let index = card.index() as usize;
            assert!(!seen[index], "card index {index} dealt twice");
            seen[index] = true;
        }
    }

    assert!(seen.iter().all(|&dealt| dealt));
    assert_eq!(game.cards_remaining(), 0);
    assert_eq!(game.state(), GameState::Dealt);
}

#[test]
fn seeded_shuffle_is_reproducible() {
    let one = Game::new(GameOptions::default(), 7);
    let two = Game::new(GameOptions::default(), 7);
    one.deal().unwrap();
    two.deal().unwrap();

    assert_eq!(one.hand(Seat::PlayerOne), two.hand(Seat::PlayerOne));
    assert_eq!(one.hand(Seat::PlayerTwo), two.hand(Seat::PlayerTwo));
}

#[test]
fn deal_rejected_unless_idle() {
    let game = Game::new(GameOptions::default(), 1);
    game.deal().unwrap();
    assert_eq!(game.deal().unwrap_err(), DealError::InvalidState);

    game.reveal().unwrap();
    assert_eq!(game.deal().unwrap_err(), DealError::InvalidState);

    game.reset();
    assert_eq!(game.state(), GameState::Idle);
    game.deal().unwrap();
}

#[test]
fn reveal_moves_top_two_of_each_hand_face_down() {
    let game = Game::new(GameOptions::default(), 1);
    set_hands(
        &game,
        &[
            card(Rank::Two, Suit::Clubs),
            card(Rank::Three, Suit::Clubs), // top - 1
            card(Rank::Four, Suit::Clubs),  // top
        ],
        &[
            card(Rank::Five, Suit::Hearts),
            card(Rank::Six, Suit::Hearts), // top - 1
            card(Rank::Seven, Suit::Hearts), // top
        ],
    );

    let revealed = game.reveal().unwrap();
    assert_eq!(game.state(), GameState::Revealed);

    // Player one's pair first, each pair in hand order.
    assert_eq!(revealed[0], card(Rank::Three, Suit::Clubs));
    assert_eq!(revealed[1], card(Rank::Four, Suit::Clubs));
    assert_eq!(revealed[2], card(Rank::Six, Suit::Hearts));
    assert_eq!(revealed[3], card(Rank::Seven, Suit::Hearts));
    assert!(revealed.iter().all(|card| !card.is_face_up()));

    assert_eq!(game.hand_len(Seat::PlayerOne), 1);
    assert_eq!(game.hand_len(Seat::PlayerTwo), 1);
    assert_eq!(game.middle_cards(), revealed.to_vec());
}

#[test]
fn reveal_errors() {
    let game = Game::new(GameOptions::default(), 1);
    assert_eq!(game.reveal().unwrap_err(), RevealError::InvalidState);

    set_hands(
        &game,
        &[card(Rank::Ace, Suit::Clubs)],
        &[
            card(Rank::Two, Suit::Clubs),
            card(Rank::Three, Suit::Clubs),
        ],
    );
    assert_eq!(game.reveal().unwrap_err(), RevealError::NotEnoughCards);

    // A failed reveal must leave both hands untouched.
    assert_eq!(game.hand_len(Seat::PlayerOne), 1);
    assert_eq!(game.hand_len(Seat::PlayerTwo), 2);
}

#[test]
fn flip_turns_middle_face_up() {
    let game = Game::new(GameOptions::default(), 1);
    assert_eq!(game.flip().unwrap_err(), FlipError::InvalidState);

    game.deal().unwrap();
    assert_eq!(game.flip().unwrap_err(), FlipError::InvalidState);

    game.reveal().unwrap();
    let flipped = game.flip().unwrap();
    assert_eq!(game.state(), GameState::Flipped);
    assert!(flipped.iter().all(|card| card.is_face_up()));
    assert!(game.middle_cards().iter().all(|card| card.is_face_up()));

    assert_eq!(game.flip().unwrap_err(), FlipError::InvalidState);
}

#[test]
fn round_draw_returns_one_own_and_one_opponent_card_each() {
    let game = Game::new(GameOptions::default(), 1);
    let one_bottom = card(Rank::Two, Suit::Clubs);
    let two_bottom = card(Rank::Two, Suit::Hearts);
    set_hands(
        &game,
        &[
            one_bottom,
            card(Rank::Three, Suit::Clubs),
            card(Rank::Four, Suit::Clubs),
        ],
        &[
            two_bottom,
            card(Rank::Three, Suit::Hearts),
            card(Rank::Four, Suit::Hearts),
        ],
    );

    game.reveal().unwrap();
    game.flip().unwrap();
    let result = game.round_draw().unwrap();

    assert_eq!(result.outcome, RoundOutcome::Draw);
    assert_eq!(result.winner, None);
    assert_eq!(result.player_one_remaining, 3);
    assert_eq!(result.player_two_remaining, 3);
    assert_eq!(game.state(), GameState::Dealt);
    assert!(game.middle_cards().is_empty());

    // Player one reclaims their own second card and player two's second card,
    // prepended to the bottom of the hand, face down.
    let one = game.hand(Seat::PlayerOne);
    assert_eq!(one[0], card(Rank::Four, Suit::Clubs));
    assert_eq!(one[1], card(Rank::Four, Suit::Hearts));
    assert_eq!(one[2], one_bottom);
    assert!(one.iter().all(|card| !card.is_face_up()));

    let two = game.hand(Seat::PlayerTwo);
    assert_eq!(two[0], card(Rank::Three, Suit::Clubs));
    assert_eq!(two[1], card(Rank::Three, Suit::Hearts));
    assert_eq!(two[2], two_bottom);
}

#[test]
fn round_win_gives_middle_to_loser() {
    let game = Game::new(GameOptions::default(), 1);
    set_hands(
        &game,
        &[
            card(Rank::Two, Suit::Clubs),
            card(Rank::Three, Suit::Clubs),
            card(Rank::Four, Suit::Clubs),
            card(Rank::Five, Suit::Clubs),
        ],
        &[
            card(Rank::Two, Suit::Hearts),
            card(Rank::Three, Suit::Hearts),
            card(Rank::Four, Suit::Hearts),
            card(Rank::Five, Suit::Hearts),
        ],
    );

    game.reveal().unwrap();
    let revealed = game.flip().unwrap();
    let result = game.round_win(Seat::PlayerOne).unwrap();

    assert_eq!(result.outcome, RoundOutcome::PlayerOneWin);
    assert_eq!(result.winner, None);
    assert_eq!(result.player_one_remaining, 2);
    assert_eq!(result.player_two_remaining, 6);
    assert_eq!(game.state(), GameState::Dealt);

    // Loser absorbs all four middle cards at the bottom, in middle order.
    let two = game.hand(Seat::PlayerTwo);
    for (i, middle_card) in revealed.iter().enumerate() {
        assert_eq!(two[i].rank, middle_card.rank);
        assert_eq!(two[i].suit, middle_card.suit);
        assert!(!two[i].is_face_up());
    }
}

#[test]
fn winner_empties_hand_and_ends_game() {
    let game = Game::new(GameOptions::default(), 1);
    set_hands(
        &game,
        &[
            card(Rank::Queen, Suit::Clubs),
            card(Rank::King, Suit::Clubs),
        ],
        &[
            card(Rank::Two, Suit::Hearts),
            card(Rank::Three, Suit::Hearts),
            card(Rank::Four, Suit::Hearts),
            card(Rank::Five, Suit::Hearts),
        ],
    );

    game.reveal().unwrap();
    game.flip().unwrap();
    let result = game.round_win(Seat::PlayerOne).unwrap();

    assert_eq!(result.winner, Some(Seat::PlayerOne));
    assert!(result.is_game_over());
    assert_eq!(result.player_one_remaining, 0);
    assert_eq!(result.player_two_remaining, 6);
    assert_eq!(game.state(), GameState::GameOver);
    assert_eq!(game.winner(), Some(Seat::PlayerOne));

    // No further rounds after game over.
    assert_eq!(game.reveal().unwrap_err(), RevealError::InvalidState);
}

#[test]
fn losing_round_with_two_cards_does_not_end_game() {
    let game = Game::new(GameOptions::default(), 1);
    set_hands(
        &game,
        &[
            card(Rank::Queen, Suit::Clubs),
            card(Rank::King, Suit::Clubs),
        ],
        &[
            card(Rank::Two, Suit::Hearts),
            card(Rank::Three, Suit::Hearts),
            card(Rank::Four, Suit::Hearts),
            card(Rank::Five, Suit::Hearts),
        ],
    );

    game.reveal().unwrap();
    game.flip().unwrap();

    // Player two wins the round, so player one absorbs the middle instead of
    // shedding out.
    let result = game.round_win(Seat::PlayerTwo).unwrap();
    assert_eq!(result.winner, None);
    assert_eq!(result.player_one_remaining, 4);
    assert_eq!(result.player_two_remaining, 2);
    assert_eq!(game.state(), GameState::Dealt);
}

#[test]
fn resolve_rejects_wrong_state() {
    let game = Game::new(GameOptions::default(), 1);
    assert_eq!(
        game.round_win(Seat::PlayerOne).unwrap_err(),
        ResolveError::InvalidState
    );
    assert_eq!(game.round_draw().unwrap_err(), ResolveError::InvalidState);

    game.deal().unwrap();
    game.reveal().unwrap();
    // Cards are still face down; the round cannot be judged yet.
    assert_eq!(game.round_draw().unwrap_err(), ResolveError::InvalidState);
}

#[test]
fn reset_restores_sorted_deck_from_mid_round() {
    let game = Game::new(GameOptions::default(), 9);
    game.deal().unwrap();
    game.reveal().unwrap();
    game.flip().unwrap();

    game.reset();

    assert_eq!(game.state(), GameState::Idle);
    assert_eq!(game.winner(), None);
    assert_eq!(game.hand_len(Seat::PlayerOne), 0);
    assert_eq!(game.hand_len(Seat::PlayerTwo), 0);
    assert!(game.middle_cards().is_empty());

    let deck = game.deck.lock();
    assert_eq!(deck.len(), DECK_SIZE);
    for (i, card) in deck.cards().iter().enumerate() {
        assert_eq!(card.index() as usize, i);
        assert!(!card.is_face_up());
    }
}

#[test]
fn full_game_ends_with_a_winner() {
    let game = Game::new(GameOptions::default(), 1234);
    game.deal().unwrap();

    // Player one wins every round; they shed two cards per round and must
    // empty their 26-card hand after 13 rounds.
    for round in 1..=13usize {
        game.reveal().unwrap();
        game.flip().unwrap();
        let result = game.round_win(Seat::PlayerOne).unwrap();
        assert_eq!(result.player_one_remaining, 26 - 2 * round);
    }

    assert_eq!(game.state(), GameState::GameOver);
    assert_eq!(game.winner(), Some(Seat::PlayerOne));
    assert_eq!(game.hand_len(Seat::PlayerTwo), DECK_SIZE);
}

#[test]
fn options_builder_sets_names() {
    let options = GameOptions::default()
        .with_player_one("Dillan")
        .with_player_two("Shan");

    assert_eq!(options.player_one, "Dillan");
    assert_eq!(options.player_two, "Shan");

    let game = Game::new(options, 1);
    assert_eq!(game.player_name(Seat::PlayerOne), "Dillan");
    assert_eq!(game.player_name(Seat::PlayerTwo), "Shan");
}

#[test]
fn card_display_uses_full_names() {
    assert_eq!(card(Rank::Ace, Suit::Spades).to_string(), "Ace of Spades");
    assert_eq!(card(Rank::Ten, Suit::Diamonds).to_string(), "Ten of Diamonds");
}
