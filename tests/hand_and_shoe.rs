//! Hand evaluation and shoe tests.

use std::collections::HashSet;

use blackjack_round::{Card, DECK_SIZE, Hand, Rank, Shoe, Suit, evaluate, is_blackjack};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn cards(ranks: &[Rank]) -> Vec<Card> {
    ranks.iter().map(|&rank| card(Suit::Spades, rank)).collect()
}

#[test]
fn evaluate_reference_hands() {
    let value = evaluate(&cards(&[Rank::Ace, Rank::Ace, Rank::Nine]));
    assert_eq!(value.total, 21);
    assert!(value.soft);

    let value = evaluate(&cards(&[Rank::Ace, Rank::Six, Rank::Nine]));
    assert_eq!(value.total, 16);
    assert!(!value.soft);

    let value = evaluate(&cards(&[Rank::Ten, Rank::Jack]));
    assert_eq!(value.total, 20);
    assert!(!value.soft);

    let value = evaluate(&cards(&[Rank::Ace, Rank::Six]));
    assert_eq!(value.total, 17);
    assert!(value.soft);

    let value = evaluate(&cards(&[Rank::Ace, Rank::Ace, Rank::Ace, Rank::Ace]));
    assert_eq!(value.total, 14);
    assert!(value.soft);

    let value = evaluate(&cards(&[Rank::King, Rank::Queen, Rank::Two]));
    assert_eq!(value.total, 22);
    assert!(value.is_bust());
    assert!(!value.soft);

    assert_eq!(evaluate(&[]).total, 0);
}

#[test]
fn evaluate_stays_within_card_bounds() {
    for &a in &Rank::ALL {
        for &b in &Rank::ALL {
            for &c in &Rank::ALL {
                let hand = cards(&[a, b, c]);
                let value = evaluate(&hand);
                assert!((3..=33).contains(&value.total), "{hand:?} -> {value:?}");

                let has_ace = hand.iter().any(|card| card.rank.is_ace());
                let hard_total: u8 = hand
                    .iter()
                    .map(|card| if card.rank.is_ace() { 1 } else { card.value() })
                    .sum();
                // Soft exactly when one ace still counts 11 on top of the hard total.
                assert_eq!(
                    value.soft,
                    has_ace && value.total <= 21 && value.total == hard_total + 10,
                    "{hand:?} -> {value:?}"
                );
            }
        }
    }
}

#[test]
fn blackjack_needs_exactly_two_cards() {
    assert!(is_blackjack(&cards(&[Rank::Ace, Rank::King])));
    assert!(is_blackjack(&cards(&[Rank::Queen, Rank::Ace])));
    assert!(!is_blackjack(&cards(&[Rank::Ace, Rank::Five, Rank::Five])));
    assert!(!is_blackjack(&cards(&[Rank::Ace, Rank::Nine])));
}

#[test]
fn split_hand_reaching_21_is_not_a_natural() {
    let mut hand = Hand::new(10);
    hand.add_card(card(Suit::Hearts, Rank::Ace));
    hand.add_card(card(Suit::Spades, Rank::King));
    assert!(hand.is_natural());

    let mut split_hand = Hand::from_split(card(Suit::Hearts, Rank::Ace), 10);
    split_hand.add_card(card(Suit::Clubs, Rank::King));
    assert_eq!(split_hand.value(), 21);
    assert!(is_blackjack(split_hand.cards()));
    assert!(!split_hand.is_natural());
}

#[test]
fn pairs_compare_rank_not_value() {
    let mut pair = Hand::new(10);
    pair.add_card(card(Suit::Hearts, Rank::Eight));
    pair.add_card(card(Suit::Clubs, Rank::Eight));
    assert!(pair.is_pair());

    let mut faces = Hand::new(10);
    faces.add_card(card(Suit::Hearts, Rank::King));
    faces.add_card(card(Suit::Clubs, Rank::Queen));
    assert!(!faces.is_pair());
}

#[test]
fn fresh_shoe_holds_one_full_deck() {
    let mut shoe = Shoe::new(0, 3);
    assert_eq!(shoe.remaining(), DECK_SIZE);

    let mut seen = HashSet::new();
    for _ in 0..DECK_SIZE {
        let card = shoe.draw().expect("shoe has cards");
        assert!(seen.insert(card), "{card} drawn twice");
    }
    assert_eq!(seen.len(), DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            assert!(seen.contains(&Card::new(suit, rank)));
        }
    }

    assert_eq!(shoe.remaining(), 0);
    assert_eq!(shoe.draw(), None);
    assert_eq!(shoe.remaining(), 0);
}

#[test]
fn shoe_refills_before_drawing_below_threshold() {
    let mut shoe = Shoe::new(20, 9);
    for _ in 0..DECK_SIZE - 20 {
        shoe.draw();
    }
    assert_eq!(shoe.remaining(), 20);
    assert!(!shoe.needs_refill());

    shoe.draw();
    assert_eq!(shoe.remaining(), 19);
    assert!(shoe.needs_refill());

    // The draw is served from the fresh deck.
    shoe.draw();
    assert_eq!(shoe.remaining(), DECK_SIZE - 1);
}

#[test]
fn same_seed_same_order() {
    let mut a = Shoe::new(20, 42);
    let mut b = Shoe::new(20, 42);
    for _ in 0..DECK_SIZE {
        assert_eq!(a.draw(), b.draw());
    }
}

#[test]
fn stacked_cards_come_out_first() {
    let mut shoe = Shoe::new(20, 1);
    let stacked = [
        card(Suit::Hearts, Rank::Two),
        card(Suit::Clubs, Rank::Three),
    ];
    shoe.stack(&stacked);
    assert_eq!(shoe.remaining(), DECK_SIZE + 2);
    assert_eq!(shoe.draw(), Some(stacked[0]));
    assert_eq!(shoe.draw(), Some(stacked[1]));
}
