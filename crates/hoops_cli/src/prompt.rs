//! Interactive draft room over any line-based input/output pair

use anyhow::{bail, Context, Result};
use hoops_core::draft::DraftState;
use hoops_core::models::{Position, Side};
use rand::Rng;
use std::io::{BufRead, Write};

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let n = input.read_line(&mut line).context("failed to read input")?;
    if n == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Result<String> {
    write!(out, "{prompt}")?;
    out.flush()?;
    match read_line(input)? {
        Some(line) => Ok(line),
        None => bail!("input closed before the draft finished"),
    }
}

pub fn print_board<W: Write>(draft: &DraftState, out: &mut W) -> Result<()> {
    for side in [Side::A, Side::B] {
        writeln!(out, "{}:", draft.team_name(side))?;
        let lineup = draft.lineup(side);
        for pos in Position::ALL {
            let name = lineup.get(pos).map(|p| p.name()).unwrap_or("-");
            writeln!(out, "  {pos:<2} {name}")?;
        }
    }
    Ok(())
}

fn join_positions(positions: &[Position]) -> String {
    positions.iter().map(Position::code).collect::<Vec<_>>().join(", ")
}

enum Turn {
    Picked,
    Back,
}

/// Options loop for one position. Returns once a pick lands or the user
/// backs out to choose another position.
fn pick_at<R, W, G>(
    draft: &mut DraftState,
    pos: Position,
    input: &mut R,
    out: &mut W,
    rng: &mut G,
) -> Result<Turn>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    let mut reshuffle = false;
    loop {
        let shown = if reshuffle {
            draft.reshuffle(pos, rng)?
        } else {
            draft.options(pos, rng)?
        };
        reshuffle = false;
        let names: Vec<String> = shown.iter().map(|p| p.name().to_string()).collect();
        writeln!(out, "Options at {pos}:")?;
        for (i, p) in shown.iter().enumerate() {
            writeln!(out, "  {}. {}", i + 1, p.label())?;
        }

        let answer = ask(
            input,
            out,
            "Player name or number ('reshuffle', 'auto', 'undo', 'board', 'back'): ",
        )?;
        match answer.to_ascii_lowercase().as_str() {
            "reshuffle" => {
                reshuffle = true;
                continue;
            }
            "back" | "" => return Ok(Turn::Back),
            "board" => {
                print_board(draft, out)?;
                continue;
            }
            "undo" => {
                match draft.undo() {
                    Some(rec) => writeln!(out, "Undid {} ({})", rec.player.name(), rec.position)?,
                    None => writeln!(out, "Nothing to undo")?,
                }
                return Ok(Turn::Back);
            }
            "auto" => {
                let rec = draft.auto_pick(pos)?;
                writeln!(out, "Auto-picked {} at {}", rec.player.name(), rec.position)?;
                return Ok(Turn::Picked);
            }
            _ => {}
        }

        let name = match answer.parse::<usize>() {
            Ok(n) if (1..=names.len()).contains(&n) => names[n - 1].clone(),
            Ok(n) => {
                writeln!(out, "No option {n}")?;
                continue;
            }
            Err(_) => answer,
        };
        match draft.pick_shown(pos, &name) {
            Ok(rec) => {
                writeln!(out, "Drafted {} at {}", rec.player.name(), rec.position)?;
                return Ok(Turn::Picked);
            }
            Err(e) if e.is_recoverable() => writeln!(out, "{e}")?,
            Err(e) => return Err(e.into()),
        }
    }
}

/// Drive `draft` to completion from `input`, echoing prompts to `out`.
pub fn run_draft<R, W, G>(draft: &mut DraftState, input: &mut R, out: &mut W, rng: &mut G) -> Result<()>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    while let Some(side) = draft.on_the_clock() {
        let open = draft.unfilled_positions(side);
        writeln!(out)?;
        writeln!(
            out,
            "Round {}: {} on the clock. Open: {}",
            draft.round(),
            draft.team_name(side),
            join_positions(&open)
        )?;
        let answer = ask(input, out, "Position ('undo', 'board'): ")?;
        match answer.to_ascii_lowercase().as_str() {
            "undo" => {
                match draft.undo() {
                    Some(rec) => writeln!(out, "Undid {} ({})", rec.player.name(), rec.position)?,
                    None => writeln!(out, "Nothing to undo")?,
                }
                continue;
            }
            "board" => {
                print_board(draft, out)?;
                continue;
            }
            _ => {}
        }
        let pos = match answer.parse::<Position>() {
            Ok(pos) if open.contains(&pos) => pos,
            Ok(pos) => {
                writeln!(out, "{} already has a {pos}", draft.team_name(side))?;
                continue;
            }
            Err(e) => {
                writeln!(out, "{e}")?;
                continue;
            }
        };
        pick_at(draft, pos, input, out, rng)?;
    }
    writeln!(out)?;
    writeln!(out, "Draft complete.")?;
    print_board(draft, out)?;
    Ok(())
}

/// Blank input means "draw a random seed".
pub fn ask_seed<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Option<u64>> {
    loop {
        let answer = ask(input, out, "Seed (blank for random): ")?;
        if answer.is_empty() {
            return Ok(None);
        }
        match answer.parse::<u64>() {
            Ok(seed) => return Ok(Some(seed)),
            Err(_) => writeln!(out, "Seed must be a non-negative integer")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hoops_core::data::player_pool;
    use hoops_core::draft::ranked_by_position;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::io::Cursor;

    fn run_on(mut draft: DraftState, rng: &mut ChaCha8Rng, script: &str) -> (DraftState, String, Result<()>) {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        let res = run_draft(&mut draft, &mut input, &mut out, rng);
        (draft, String::from_utf8_lossy(&out).into_owned(), res)
    }

    fn run(script: &str) -> (DraftState, String, Result<()>) {
        run_on(DraftState::new(player_pool()), &mut ChaCha8Rng::seed_from_u64(3), script)
    }

    // Snake order A B B A A B B A A B, each team filling PG to C.
    const FULL: &str = "PG\n1\nPG\n1\nSG\n1\nSG\n1\nSF\n1\nSF\n1\nPF\n1\nPF\n1\nC\n1\nC\n1\n";

    #[test]
    fn test_scripted_draft_completes() {
        let (draft, out, res) = run(FULL);
        assert!(res.is_ok());
        assert!(draft.is_complete());
        assert!(out.contains("Draft complete."));
        for pick in draft.history() {
            assert!(pick.player.plays(pick.position));
        }
        let (a, b) = draft.into_teams().unwrap();
        assert_ne!(a.player(Position::PG).name(), b.player(Position::PG).name());
    }

    #[test]
    fn test_bad_input_reprompts() {
        let script = format!("QB\nC\nStephen Curry\n9\nback\nPG\nNobody\n{FULL}");
        let (draft, out, res) = run(&script);
        assert!(res.is_ok());
        assert!(out.contains("Invalid position: QB"));
        assert!(out.contains("not eligible"));
        assert!(out.contains("No option 9"));
        assert!(out.contains("Player not found: Nobody"));
        assert!(draft.is_complete());
    }

    #[test]
    fn test_name_not_offered_reprompts() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut draft = DraftState::new(player_pool());
        let shown: Vec<String> =
            draft.options(Position::PG, &mut rng).unwrap().iter().map(|p| p.name().to_string()).collect();
        let hidden = ranked_by_position(Position::PG, draft.pool())
            .into_iter()
            .map(|p| p.name().to_string())
            .find(|n| !shown.contains(n))
            .unwrap();

        let script = format!("PG\n{hidden}\n2\n");
        let (draft, out, res) = run_on(draft, &mut rng, &script);
        assert!(res.is_err());
        assert!(out.contains(&format!("{hidden} is not among the current options at PG")));
        assert_eq!(draft.history().len(), 1);
        assert_eq!(draft.history()[0].player.name(), shown[1]);
        assert!(draft.pool().iter().any(|p| p.name() == hidden));
    }

    #[test]
    fn test_undo_and_auto() {
        let (draft, out, res) = run("PG\n1\nundo\nPG\nauto\n");
        assert!(res.is_err());
        assert!(out.contains("Undid "));
        assert!(out.contains(" (PG)"));
        assert!(out.contains("Auto-picked"));
        assert_eq!(draft.history().len(), 1);
        assert_eq!(draft.history()[0].side, Side::A);
    }

    #[test]
    fn test_pick_by_number() {
        let (draft, _, _) = run("SF\n1\n");
        assert_eq!(draft.history().len(), 1);
        assert_eq!(draft.history()[0].position, Position::SF);
    }

    #[test]
    fn test_ask_seed() {
        let mut out = Vec::new();
        let mut input = Cursor::new(b"abc\n42\n".to_vec());
        assert_eq!(ask_seed(&mut input, &mut out).unwrap(), Some(42));
        let mut input = Cursor::new(b"\n".to_vec());
        assert_eq!(ask_seed(&mut input, &mut out).unwrap(), None);
    }
}
