//! Pure scoring functions for hands, cribs, and pegging plays.
//!
//! Everything here is stateless: card lists in, points out. The state
//! machine decides *when* to score and who the points go to; cross-turn
//! bonuses (the last-card point) live there, not here.

use crate::card::{Card, Rank};
use crate::error::ScoreError;

/// Category breakdown of a counted hand or crib.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HandScore {
    /// 1 for holding the Jack of the cut card's suit.
    pub nobs: u32,
    /// 4 or 5 for a flush (0 for a four-card crib flush).
    pub flush: u32,
    /// 2 per distinct subset summing to fifteen.
    pub fifteens: u32,
    /// 2 per unordered pair of matching ranks.
    pub pairs: u32,
    /// Run length times the multiplicity of duplicated ranks inside it.
    pub runs: u32,
}

impl HandScore {
    /// Returns the total points across all categories.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.nobs + self.flush + self.fifteens + self.pairs + self.runs
    }
}

/// Scores a four-card hand or crib against the cut card.
///
/// The flush and nobs categories look only at the four held cards; the cut
/// card joins the working set for fifteens, pairs, and runs. A four-card
/// flush scores nothing for a crib (`is_crib`): the crib needs all five
/// cards to share a suit.
///
/// # Errors
///
/// Returns an error unless `cards` holds exactly four cards.
pub fn score_hand(cards: &[Card], cut: Card, is_crib: bool) -> Result<HandScore, ScoreError> {
    if cards.len() != 4 {
        return Err(ScoreError::HandSize);
    }

    let five = [cards[0], cards[1], cards[2], cards[3], cut];

    Ok(HandScore {
        nobs: score_nobs(cards, cut),
        flush: score_flush(cards, cut, is_crib),
        fifteens: score_fifteens(&five),
        pairs: score_pairs(&five),
        runs: score_runs(&five),
    })
}

/// 1 point for holding the Jack matching the cut card's suit. The cut card
/// itself never scores nobs.
fn score_nobs(cards: &[Card], cut: Card) -> u32 {
    let has_nobs = cards
        .iter()
        .any(|card| card.rank == Rank::Jack && card.suit == cut.suit);
    u32::from(has_nobs)
}

fn score_flush(cards: &[Card], cut: Card, is_crib: bool) -> u32 {
    let suit = cards[0].suit;
    if cards.iter().any(|card| card.suit != suit) {
        return 0;
    }

    if cut.suit == suit {
        5
    } else if is_crib {
        0
    } else {
        4
    }
}

fn score_fifteens(five: &[Card; 5]) -> u32 {
    let values: [u32; 5] = five.map(|card| u32::from(card.point_value()));
    let whole: u32 = values.iter().sum();

    // All five summing to exactly 15 excludes any proper subset doing the
    // same (every card is worth at least 1).
    if whole == 15 {
        return 2;
    }

    let mut score = 0;
    for mask in 1u32..31 {
        if mask.count_ones() < 2 {
            continue;
        }
        let sum: u32 = values
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, &value)| value)
            .sum();
        if sum == 15 {
            score += 2;
        }
    }
    score
}

fn score_pairs(five: &[Card; 5]) -> u32 {
    let mut score = 0;
    for i in 0..4 {
        for j in (i + 1)..5 {
            if five[i].rank == five[j].rank {
                score += 2;
            }
        }
    }
    score
}

/// Runs over the five-card set, by rank multiset.
///
/// Five cards admit at most one maximal span of three or more consecutive
/// ranks (two disjoint runs would need six cards). The span's length is the
/// run length; each duplicated rank inside the span multiplies the run, so
/// a double run of three scores 6, a triple run 9, and a double-double 12.
/// Ranks outside the span never count, which is what keeps a pair sitting
/// next to (but outside) a run of three from inflating it.
fn score_runs(five: &[Card; 5]) -> u32 {
    let mut counts = [0u32; 13];
    for card in five {
        counts[card.rank.sequence() as usize - 1] += 1;
    }

    let mut start = 0;
    while start < 13 {
        if counts[start] == 0 {
            start += 1;
            continue;
        }

        let mut end = start;
        while end + 1 < 13 && counts[end + 1] > 0 {
            end += 1;
        }

        let length = (end - start + 1) as u32;
        if length >= 3 {
            let multiplicity: u32 = counts[start..=end].iter().product();
            return length * multiplicity;
        }

        start = end + 1;
    }

    0
}

/// Scores the play of the last card on the pegging stack.
///
/// `stack` is the whole shared pile, oldest first, with the just-played
/// card last. Awards 2 for a running total of exactly 15 or 31, pegging
/// pairs formed by the last card (2/6/12), and the longest run formed by a
/// contiguous suffix ending at the last card. The last-card bonus is
/// cross-turn context and is handled by the state machine instead.
#[must_use]
pub fn score_pegging(stack: &[Card]) -> u32 {
    debug_assert!(!stack.is_empty(), "pegging score needs at least one card");
    let Some(&played) = stack.last() else {
        return 0;
    };

    let mut points = 0;

    let total: u32 = stack.iter().map(|card| u32::from(card.point_value())).sum();
    if total == 15 || total == 31 {
        points += 2;
    }

    // Pairs: contiguous equal ranks walking back from the played card. Only
    // the three preceding cards can matter (four of a rank is the limit).
    let matches = stack[..stack.len() - 1]
        .iter()
        .rev()
        .take(3)
        .take_while(|card| card.rank == played.rank)
        .count();
    points += match matches {
        1 => 2,
        2 => 6,
        3 => 12,
        _ => 0,
    };

    // Runs: longest contiguous suffix that is a permutation of consecutive
    // ranks. The first (longest) hit wins and is never re-extended.
    for length in (3..=stack.len()).rev() {
        if is_run(&stack[stack.len() - length..]) {
            points += length as u32;
            break;
        }
    }

    points
}

/// Whether `cards` is a permutation of consecutive ranks (no duplicates).
fn is_run(cards: &[Card]) -> bool {
    let mut sequences: [u8; 8] = [0; 8];

    // Low-value plays can stack more than eight cards under the 31 cap,
    // but eight consecutive ranks already sum to at least 36, so a suffix
    // longer than the buffer can never be a run.
    if cards.len() > sequences.len() {
        return false;
    }

    for (slot, card) in sequences.iter_mut().zip(cards) {
        *slot = card.rank.sequence();
    }
    let sequences = &mut sequences[..cards.len()];
    sequences.sort_unstable();

    sequences.windows(2).all(|pair| pair[1] == pair[0] + 1)
}

/// Sum of pegging point values, used by displays for the running total.
#[must_use]
pub fn sum_of_cards(cards: &[Card]) -> u32 {
    cards.iter().map(|card| u32::from(card.point_value())).sum()
}
