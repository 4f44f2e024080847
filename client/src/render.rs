use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{Clear, ClearType},
};
use shared::{
    game_state::Game,
    geometry::{Bounds, Rect},
};

use crate::input::KeyBindings;

/// the row the scores are printed on.
const SCORE_ROW: i32 = 5;

/// draws `game` over the frame left by `previous`. only the cells the paddles and ball moved off
/// are blanked. without a previous frame, or after a resize or a change of score, every line is
/// cleared and the court is drawn from scratch. the frame is flushed in one go.
pub fn draw_frame<W: Write>(
    w: &mut W,
    game: &Game,
    previous: Option<&Game>,
    bindings: KeyBindings,
) -> io::Result<()> {
    let Bounds { cols, .. } = game.bounds;
    match previous {
        Some(previous)
            if previous.bounds == game.bounds
                && previous.player.score == game.player.score
                && previous.opponent.score == game.opponent.score =>
        {
            erase(w, previous.player.rect)?;
            erase(w, previous.opponent.rect)?;
            erase(w, previous.ball.rect)?;
        }
        _ => clear(w, game.bounds)?,
    }
    for (row, line) in bindings.help().into_iter().enumerate() {
        queue!(w, MoveTo(0, row as u16), Print(line))?;
    }
    // TODO: draw the scores in large block digits instead of a single bold number.
    draw_score(w, cols / 3, SCORE_ROW, game.player.score)?;
    draw_score(w, cols - cols / 3, SCORE_ROW, game.opponent.score)?;
    draw_net(w, game.bounds)?;
    draw_box(w, game.player.rect)?;
    draw_box(w, game.opponent.rect)?;
    draw_box(w, game.ball.rect)?;
    w.flush()
}

fn clear<W: Write>(w: &mut W, bounds: Bounds) -> io::Result<()> {
    for y in 0..bounds.lines {
        queue!(w, MoveTo(0, cell(y)), Clear(ClearType::CurrentLine))?;
    }
    Ok(())
}

fn erase<W: Write>(w: &mut W, rect: Rect) -> io::Result<()> {
    let blank = " ".repeat(rect.width.max(0) as usize);
    for row in 0..rect.height {
        queue!(w, MoveTo(cell(rect.x), cell(rect.y + row)), Print(&blank))?;
    }
    Ok(())
}

fn draw_score<W: Write>(w: &mut W, x: i32, y: i32, score: u32) -> io::Result<()> {
    queue!(
        w,
        MoveTo(cell(x), cell(y)),
        SetAttribute(Attribute::Bold),
        Print(score),
        SetAttribute(Attribute::Reset),
    )
}

/// the dividing line down the middle of the court.
fn draw_net<W: Write>(w: &mut W, bounds: Bounds) -> io::Result<()> {
    for y in 0..bounds.lines {
        queue!(w, MoveTo(cell(bounds.cols / 2), cell(y)), Print('|'))?;
    }
    Ok(())
}

fn draw_box<W: Write>(w: &mut W, rect: Rect) -> io::Result<()> {
    let inner = (rect.width - 2).max(0) as usize;
    for row in 0..rect.height {
        let (left, fill, right) = if row == 0 {
            ('\u{250c}', '\u{2500}', '\u{2510}')
        } else if row == rect.height - 1 {
            ('\u{2514}', '\u{2500}', '\u{2518}')
        } else {
            ('\u{2502}', ' ', '\u{2502}')
        };
        let line: String = std::iter::once(left)
            .chain(std::iter::repeat(fill).take(inner))
            .chain(std::iter::once(right))
            .collect();
        queue!(w, MoveTo(cell(rect.x), cell(rect.y + row)), Print(line))?;
    }
    Ok(())
}

fn cell(n: i32) -> u16 {
    n.clamp(0, u16::MAX as i32) as u16
}
