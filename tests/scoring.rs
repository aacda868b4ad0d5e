//! Scoring engine tests.

use cribrs::{Card, Rank, ScoreError, Suit, scoring};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

#[test]
fn hand_size_contract() {
    let three = [
        card(Rank::Ace, Suit::Hearts),
        card(Rank::Two, Suit::Hearts),
        card(Rank::Three, Suit::Hearts),
    ];
    let cut = card(Rank::King, Suit::Spades);

    assert_eq!(
        scoring::score_hand(&three, cut, false).unwrap_err(),
        ScoreError::HandSize
    );
}

#[test]
fn double_double_run_fixture() {
    // 7C 7H 8C 8H with a 6D cut: four seven-eight fifteens (8), two pairs
    // (4), and a double-double run of three (12).
    let hand = [
        card(Rank::Seven, Suit::Clubs),
        card(Rank::Seven, Suit::Hearts),
        card(Rank::Eight, Suit::Clubs),
        card(Rank::Eight, Suit::Hearts),
    ];
    let cut = card(Rank::Six, Suit::Diamonds);

    let score = scoring::score_hand(&hand, cut, false).unwrap();
    assert_eq!(score.fifteens, 8);
    assert_eq!(score.pairs, 4);
    assert_eq!(score.runs, 12);
    assert_eq!(score.flush, 0);
    assert_eq!(score.nobs, 0);
    assert_eq!(score.total(), 24);
}

#[test]
fn maximum_hand_scores_twenty_nine() {
    // Three fives and the jack of the cut suit, with the fourth five cut.
    let hand = [
        card(Rank::Five, Suit::Spades),
        card(Rank::Five, Suit::Clubs),
        card(Rank::Five, Suit::Hearts),
        card(Rank::Jack, Suit::Diamonds),
    ];
    let cut = card(Rank::Five, Suit::Diamonds);

    let score = scoring::score_hand(&hand, cut, false).unwrap();
    assert_eq!(score.fifteens, 16);
    assert_eq!(score.pairs, 12);
    assert_eq!(score.nobs, 1);
    assert_eq!(score.runs, 0);
    assert_eq!(score.total(), 29);
}

#[test]
fn nobs_requires_matching_suit() {
    let hand = [
        card(Rank::Jack, Suit::Hearts),
        card(Rank::Two, Suit::Clubs),
        card(Rank::Four, Suit::Spades),
        card(Rank::Nine, Suit::Diamonds),
    ];

    let matching = scoring::score_hand(&hand, card(Rank::Three, Suit::Hearts), false).unwrap();
    assert_eq!(matching.nobs, 1);

    let other = scoring::score_hand(&hand, card(Rank::Three, Suit::Clubs), false).unwrap();
    assert_eq!(other.nobs, 0);
}

#[test]
fn flush_rules_for_hand_and_crib() {
    let hearts = [
        card(Rank::Two, Suit::Hearts),
        card(Rank::Six, Suit::Hearts),
        card(Rank::Nine, Suit::Hearts),
        card(Rank::Queen, Suit::Hearts),
    ];
    let heart_cut = card(Rank::King, Suit::Hearts);
    let club_cut = card(Rank::King, Suit::Clubs);

    // Four matching plus the cut scores 5 for hand and crib alike.
    assert_eq!(scoring::score_hand(&hearts, heart_cut, false).unwrap().flush, 5);
    assert_eq!(scoring::score_hand(&hearts, heart_cut, true).unwrap().flush, 5);

    // Four matching without the cut scores 4 for a hand, nothing for a crib.
    assert_eq!(scoring::score_hand(&hearts, club_cut, false).unwrap().flush, 4);
    assert_eq!(scoring::score_hand(&hearts, club_cut, true).unwrap().flush, 0);
}

#[test]
fn five_card_fifteen_scores_once() {
    // A A 4 4 + 5 sums to exactly fifteen across all five cards.
    let hand = [
        card(Rank::Ace, Suit::Hearts),
        card(Rank::Ace, Suit::Spades),
        card(Rank::Four, Suit::Clubs),
        card(Rank::Four, Suit::Diamonds),
    ];
    let cut = card(Rank::Five, Suit::Hearts);

    let score = scoring::score_hand(&hand, cut, false).unwrap();
    assert_eq!(score.fifteens, 2);
    assert_eq!(score.pairs, 4);
    assert_eq!(score.runs, 0);
}

#[test]
fn pair_outside_run_does_not_extend_it() {
    // A 2 3 with a pair of kings: the run stays a plain run of three.
    let hand = [
        card(Rank::Ace, Suit::Hearts),
        card(Rank::Two, Suit::Clubs),
        card(Rank::Three, Suit::Spades),
        card(Rank::King, Suit::Diamonds),
    ];
    let cut = card(Rank::King, Suit::Hearts);

    let score = scoring::score_hand(&hand, cut, false).unwrap();
    assert_eq!(score.runs, 3);
    assert_eq!(score.pairs, 2);
}

#[test]
fn double_run_of_three() {
    // 2 3 4 4 + K: the duplicated four doubles the run.
    let hand = [
        card(Rank::Two, Suit::Hearts),
        card(Rank::Three, Suit::Clubs),
        card(Rank::Four, Suit::Spades),
        card(Rank::Four, Suit::Diamonds),
    ];
    let cut = card(Rank::King, Suit::Hearts);

    let score = scoring::score_hand(&hand, cut, false).unwrap();
    assert_eq!(score.runs, 6);
    assert_eq!(score.pairs, 2);
    assert_eq!(score.fifteens, 2); // 2 + 3 + K
    assert_eq!(score.total(), 10);
}

#[test]
fn triple_run_of_three() {
    // 3 3 3 4 + 5: three interchangeable threes triple the run.
    let hand = [
        card(Rank::Three, Suit::Hearts),
        card(Rank::Three, Suit::Clubs),
        card(Rank::Three, Suit::Spades),
        card(Rank::Four, Suit::Diamonds),
    ];
    let cut = card(Rank::Five, Suit::Hearts);

    let score = scoring::score_hand(&hand, cut, false).unwrap();
    assert_eq!(score.runs, 9);
    assert_eq!(score.pairs, 6);
    assert_eq!(score.fifteens, 6); // 3+3+4+5 three ways
    assert_eq!(score.total(), 21);
}

#[test]
fn run_of_four_and_five() {
    let four = [
        card(Rank::Two, Suit::Hearts),
        card(Rank::Three, Suit::Clubs),
        card(Rank::Four, Suit::Spades),
        card(Rank::Five, Suit::Diamonds),
    ];
    let score = scoring::score_hand(&four, card(Rank::Jack, Suit::Hearts), false).unwrap();
    assert_eq!(score.runs, 4);
    assert_eq!(score.fifteens, 4); // 2+3+J and 5+J

    let five = [
        card(Rank::Ace, Suit::Hearts),
        card(Rank::Two, Suit::Clubs),
        card(Rank::Three, Suit::Spades),
        card(Rank::Four, Suit::Diamonds),
    ];
    let score = scoring::score_hand(&five, card(Rank::Five, Suit::Hearts), false).unwrap();
    assert_eq!(score.runs, 5);
    assert_eq!(score.fifteens, 2); // all five cards together
    assert_eq!(score.total(), 7);
}

#[test]
fn scores_are_symmetric_under_suit_relabeling() {
    // Structurally different hands: a five-card flush, a nobs hand with a
    // pair, and a mixed-suit double run with a fifteen off the cut.
    let cases = [
        (
            [
                card(Rank::Two, Suit::Hearts),
                card(Rank::Six, Suit::Hearts),
                card(Rank::Nine, Suit::Hearts),
                card(Rank::Queen, Suit::Hearts),
            ],
            card(Rank::King, Suit::Hearts),
        ),
        (
            [
                card(Rank::Jack, Suit::Hearts),
                card(Rank::Five, Suit::Hearts),
                card(Rank::Five, Suit::Clubs),
                card(Rank::Ten, Suit::Hearts),
            ],
            card(Rank::Five, Suit::Spades),
        ),
        (
            [
                card(Rank::Four, Suit::Clubs),
                card(Rank::Five, Suit::Diamonds),
                card(Rank::Six, Suit::Spades),
                card(Rank::Six, Suit::Clubs),
            ],
            card(Rank::King, Suit::Diamonds),
        ),
    ];

    // Bijective relabelings, indexed by the suit's position in `Suit::ALL`.
    let relabelings: [[Suit; 4]; 4] = [
        [Suit::Spades, Suit::Clubs, Suit::Hearts, Suit::Diamonds],
        [Suit::Diamonds, Suit::Hearts, Suit::Clubs, Suit::Spades],
        [Suit::Clubs, Suit::Spades, Suit::Diamonds, Suit::Hearts],
        [Suit::Hearts, Suit::Spades, Suit::Diamonds, Suit::Clubs],
    ];

    let relabel = |c: Card, mapping: &[Suit; 4]| {
        let index = Suit::ALL
            .iter()
            .position(|&suit| suit == c.suit)
            .expect("every suit appears in Suit::ALL");
        Card::new(c.rank, mapping[index])
    };

    for (hand, cut) in &cases {
        for mapping in &relabelings {
            let swapped: Vec<Card> = hand.iter().map(|&c| relabel(c, mapping)).collect();
            for is_crib in [false, true] {
                assert_eq!(
                    scoring::score_hand(hand, *cut, is_crib).unwrap(),
                    scoring::score_hand(&swapped, relabel(*cut, mapping), is_crib).unwrap()
                );
            }
        }
    }
}

#[test]
fn pegging_fifteen_and_thirty_one() {
    let fifteen = [
        card(Rank::Seven, Suit::Hearts),
        card(Rank::Eight, Suit::Clubs),
    ];
    assert_eq!(scoring::score_pegging(&fifteen), 2);

    let thirty_one = [
        card(Rank::King, Suit::Hearts),
        card(Rank::King, Suit::Clubs),
        card(Rank::Jack, Suit::Spades),
        card(Rank::Ace, Suit::Hearts),
    ];
    assert_eq!(scoring::score_pegging(&thirty_one), 2);
}

#[test]
fn pegging_pairs_walk_back_from_last_card() {
    let pair = [
        card(Rank::Five, Suit::Hearts),
        card(Rank::Five, Suit::Clubs),
    ];
    // 5 + 5 is also a ten, not a fifteen; the pair alone scores.
    assert_eq!(scoring::score_pegging(&pair), 2);

    let triple = [
        card(Rank::Five, Suit::Hearts),
        card(Rank::Five, Suit::Clubs),
        card(Rank::Five, Suit::Spades),
    ];
    assert_eq!(scoring::score_pegging(&triple), 8); // 6 for the prial + 2 for 15

    let quad = [
        card(Rank::Five, Suit::Hearts),
        card(Rank::Five, Suit::Clubs),
        card(Rank::Five, Suit::Spades),
        card(Rank::Five, Suit::Diamonds),
    ];
    assert_eq!(scoring::score_pegging(&quad), 12);

    // An intervening rank breaks the pair chain.
    let broken = [
        card(Rank::Five, Suit::Hearts),
        card(Rank::Three, Suit::Clubs),
        card(Rank::Five, Suit::Spades),
    ];
    assert_eq!(scoring::score_pegging(&broken), 0);
}

#[test]
fn pegging_runs_ignore_play_order() {
    let run = [
        card(Rank::Four, Suit::Hearts),
        card(Rank::Two, Suit::Clubs),
        card(Rank::Three, Suit::Spades),
    ];
    assert_eq!(scoring::score_pegging(&run), 3);

    // Only the suffix forms the run; the leading king is outside it.
    let suffix = [
        card(Rank::King, Suit::Hearts),
        card(Rank::Two, Suit::Clubs),
        card(Rank::Three, Suit::Spades),
        card(Rank::Four, Suit::Hearts),
    ];
    assert_eq!(scoring::score_pegging(&suffix), 3);

    // The longest matching suffix wins outright.
    let four_long = [
        card(Rank::Ace, Suit::Hearts),
        card(Rank::Two, Suit::Clubs),
        card(Rank::Three, Suit::Spades),
        card(Rank::Four, Suit::Hearts),
    ];
    assert_eq!(scoring::score_pegging(&four_long), 4);
}

#[test]
fn sum_of_cards_uses_point_values() {
    let cards = [
        card(Rank::Ace, Suit::Hearts),
        card(Rank::Jack, Suit::Clubs),
        card(Rank::King, Suit::Spades),
    ];
    assert_eq!(scoring::sum_of_cards(&cards), 21);
}
