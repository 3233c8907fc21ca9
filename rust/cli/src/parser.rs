//! Text grammar of command logs.
//!
//! ```text
//! Start new game with deck R1 G2 ...
//! Play card <index>
//! Drop card <index>
//! Tell color <Suit> for cards <index> ...
//! Tell rank <Rank> for cards <index> ...
//! ```

use hanabi_engine::cards::{Card, Rank, Suit};
use hanabi_engine::command::Command;

/// Parses one line. Blank lines yield `Ok(None)`.
///
/// # Examples
///
/// ```
/// use hanabi_cli::parser::parse_command;
/// use hanabi_engine::cards::Suit;
/// use hanabi_engine::command::Command;
///
/// assert_eq!(
///     parse_command("Tell color Blue for cards 0 3").unwrap(),
///     Some(Command::ClueSuit { suit: Suit::Blue, positions: vec![0, 3] })
/// );
/// assert_eq!(parse_command("   ").unwrap(), None);
/// assert!(parse_command("Discard card 1").is_err());
/// ```
pub fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let command = match tokens.as_slice() {
        [] => return Ok(None),
        ["Start", "new", "game", "with", "deck", cards @ ..] => Command::StartGame {
            cards: cards.iter().map(|t| parse_card(t)).collect::<Result<_, _>>()?,
        },
        ["Play", "card", index] => Command::Play {
            position: parse_index(index)?,
        },
        ["Drop", "card", index] => Command::Drop {
            position: parse_index(index)?,
        },
        ["Tell", "color", name, "for", "cards", indices @ ..] => Command::ClueSuit {
            suit: Suit::from_name(name).ok_or_else(|| format!("unknown color '{}'", name))?,
            positions: parse_indices(indices)?,
        },
        ["Tell", "rank", value, "for", "cards", indices @ ..] => Command::ClueRank {
            rank: parse_rank(value)?,
            positions: parse_indices(indices)?,
        },
        _ => return Err(format!("unrecognized command '{}'", line.trim())),
    };
    Ok(Some(command))
}

/// Parses a card token: suit letter followed by a rank digit, e.g. `W3`.
pub fn parse_card(token: &str) -> Result<Card, String> {
    let mut chars = token.chars();
    let (Some(letter), Some(digit), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(format!("invalid card '{}'", token));
    };
    let suit = Suit::from_letter(letter).ok_or_else(|| format!("invalid card '{}'", token))?;
    let rank = digit
        .to_digit(10)
        .and_then(|d| u8::try_from(d).ok())
        .and_then(Rank::from_u8)
        .ok_or_else(|| format!("invalid card '{}'", token))?;
    Ok(Card::new(suit, rank))
}

fn parse_rank(token: &str) -> Result<Rank, String> {
    token
        .parse::<u8>()
        .ok()
        .and_then(Rank::from_u8)
        .ok_or_else(|| format!("invalid rank '{}'", token))
}

fn parse_index(token: &str) -> Result<usize, String> {
    token
        .parse()
        .map_err(|_| format!("invalid card index '{}'", token))
}

fn parse_indices(tokens: &[&str]) -> Result<Vec<usize>, String> {
    tokens.iter().map(|t| parse_index(t)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_line_keeps_card_order() {
        let cmd = parse_command("Start new game with deck R1 Y5 G3").unwrap().unwrap();
        assert_eq!(
            cmd,
            Command::StartGame {
                cards: vec![
                    Card::new(Suit::Red, Rank::One),
                    Card::new(Suit::Yellow, Rank::Five),
                    Card::new(Suit::Green, Rank::Three),
                ]
            }
        );
    }

    #[test]
    fn play_and_drop() {
        assert_eq!(
            parse_command("Play card 4").unwrap(),
            Some(Command::Play { position: 4 })
        );
        assert_eq!(
            parse_command("  Drop   card 0 ").unwrap(),
            Some(Command::Drop { position: 0 })
        );
    }

    #[test]
    fn rank_clue_keeps_claimed_order() {
        assert_eq!(
            parse_command("Tell rank 2 for cards 3 1").unwrap(),
            Some(Command::ClueRank {
                rank: Rank::Two,
                positions: vec![3, 1]
            })
        );
    }

    #[test]
    fn clue_may_name_no_positions() {
        assert_eq!(
            parse_command("Tell color Yellow for cards").unwrap(),
            Some(Command::ClueSuit {
                suit: Suit::Yellow,
                positions: vec![]
            })
        );
    }

    #[test]
    fn rejects_bad_tokens() {
        assert!(parse_command("Play card -1").is_err());
        assert!(parse_command("Play card").is_err());
        assert!(parse_command("Play card 1 2").is_err());
        assert!(parse_command("Tell color Purple for cards 0").is_err());
        assert!(parse_command("Tell rank 6 for cards 0").is_err());
        assert!(parse_command("Tell rank 1 for cards x").is_err());
        assert!(parse_command("Start new game with deck R1 X2").is_err());
    }

    #[test]
    fn card_tokens() {
        assert_eq!(parse_card("B4").unwrap(), Card::new(Suit::Blue, Rank::Four));
        assert!(parse_card("B").is_err());
        assert!(parse_card("B45").is_err());
        assert!(parse_card("B0").is_err());
        assert!(parse_card("b1").is_err());
    }
}
