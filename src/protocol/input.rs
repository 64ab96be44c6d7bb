//! Snapshot parsing.
//!
//! The referee sends one snapshot per turn as plain lines:
//!
//! ```text
//! <hp> <mana> <deck> <rune> <draw>          (acting player)
//! <hp> <mana> <deck> <rune> <draw>          (opposing player)
//! <opponentHandSize> <opponentActionCount>
//! <opponentActionCount lines of forecast>
//! <cardCount>
//! <cardCount card lines>
//! ```
//!
//! Each card line is `cardNumber instanceId location category cost attack
//! defense abilities myHealthChange opponentHealthChange cardDraw`, where
//! `abilities` is a six-letter mask over `BCDGLW` with `-` placeholders.
//!
//! Parsing never panics: malformed input is a protocol error, reported
//! with enough context to find the offending line.

use std::io::BufRead;

use anyhow::{anyhow, bail, Context, Result};
use rustc_hash::FxHashSet;

use crate::engine::{Abilities, Card, CardCategory, GameState, Location, Player, Side};

/// One parsed turn snapshot.
///
/// Besides the game state this keeps the opposing-hand information the
/// referee sends; the planner does not consume it, but diagnostics do.
#[derive(Clone, Debug)]
pub struct Snapshot {
    /// The authoritative state for this turn.
    pub state: GameState,
    /// Cards in the opposing hand.
    pub opponent_hand_size: i32,
    /// The opponent's announced plays from last turn, verbatim.
    pub opponent_plans: Vec<String>,
}

impl Snapshot {
    /// Draft turns are recognizable by the zeroed mana pool.
    #[must_use]
    pub fn is_draft(&self) -> bool {
        self.state.player(Side::Me).mana == 0
    }

    /// The visible hand, cloned in slot order (the draft candidates,
    /// during the draft).
    #[must_use]
    pub fn hand(&self) -> Vec<Card> {
        self.state.hand().cloned().collect()
    }
}

/// Read one snapshot.
///
/// Returns `Ok(None)` on clean end of input before the first line (the
/// referee hung up between turns); anything else incomplete is an error.
pub fn read_snapshot<R: BufRead>(reader: &mut R) -> Result<Option<Snapshot>> {
    let first = match read_line(reader)? {
        Some(line) => line,
        None => return Ok(None),
    };

    let me = parse_player(&first).context("acting player line")?;
    let foe = parse_player(&required_line(reader)?).context("opposing player line")?;

    let hand_line = ints(&required_line(reader)?, 2).context("opponent hand line")?;
    let (opponent_hand_size, opponent_action_count) = (hand_line[0], hand_line[1]);
    if opponent_action_count < 0 {
        bail!("negative opponent action count {opponent_action_count}");
    }

    let mut opponent_plans = Vec::with_capacity(opponent_action_count as usize);
    for _ in 0..opponent_action_count {
        opponent_plans.push(required_line(reader)?);
    }

    let card_count = ints(&required_line(reader)?, 1).context("card count line")?[0];
    if card_count < 0 {
        bail!("negative card count {card_count}");
    }

    let mut cards = Vec::with_capacity(card_count as usize);
    let mut seen_ids = FxHashSet::default();
    for index in 0..card_count {
        let line = required_line(reader)?;
        let card = parse_card(&line).with_context(|| format!("card line {index}"))?;

        // Draft candidates all carry the -1 placeholder id; only real
        // instance ids must be unique.
        if card.instance_id >= 0 && !seen_ids.insert(card.instance_id) {
            bail!("duplicate instance id {}", card.instance_id);
        }
        cards.push(card);
    }

    Ok(Some(Snapshot {
        state: GameState::new([me, foe], cards),
        opponent_hand_size,
        opponent_plans,
    }))
}

fn read_line<R: BufRead>(reader: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line).context("reading snapshot line")? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn required_line<R: BufRead>(reader: &mut R) -> Result<String> {
    read_line(reader)?.ok_or_else(|| anyhow!("unexpected end of input mid-snapshot"))
}

/// Parse a line of exactly `expected` integers.
fn ints(line: &str, expected: usize) -> Result<Vec<i32>> {
    let values = line
        .split_whitespace()
        .map(|field| field.parse::<i32>().with_context(|| format!("bad integer {field:?}")))
        .collect::<Result<Vec<i32>>>()?;

    if values.len() != expected {
        bail!("expected {expected} fields, got {} in {line:?}", values.len());
    }
    Ok(values)
}

fn parse_player(line: &str) -> Result<Player> {
    let fields = ints(line, 5)?;
    Ok(Player {
        hp: fields[0],
        mana: fields[1],
        deck: fields[2],
        rune: fields[3],
        draw: fields[4],
        cards_drawn: 0,
    })
}

fn parse_card(line: &str) -> Result<Card> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 11 {
        bail!("expected 11 card fields, got {} in {line:?}", fields.len());
    }

    let int = |index: usize| -> Result<i32> {
        fields[index]
            .parse()
            .with_context(|| format!("bad integer {:?} in card field {index}", fields[index]))
    };

    let location = Location::from_code(int(2)?)
        .ok_or_else(|| anyhow!("bad location code {}", fields[2]))?;
    let category = CardCategory::from_code(int(3)?)
        .ok_or_else(|| anyhow!("bad category code {}", fields[3]))?;

    Ok(Card {
        card_number: int(0)?,
        instance_id: int(1)?,
        slot: 0, // assigned by GameState::new
        location,
        category,
        cost: int(4)?,
        attack: int(5)?,
        defense: int(6)?,
        abilities: Abilities::from_letters(fields[7]),
        my_health_change: int(8)?,
        opponent_health_change: int(9)?,
        card_draw: int(10)?,
        // Board creatures start a turn ready; hand cards are not in play.
        can_attack: location.is_board() && category == CardCategory::Creature,
        used: false,
    })
}
