use std::{
    io::{self, stdout},
    ops::ControlFlow,
    time::Instant,
};

use crossterm::{
    event::{self, Event},
    terminal,
};
use shared::{
    clock::Ticker,
    dice::Dice,
    game_state::{Game, TickOutcome},
    geometry::Bounds,
};
use tracing::{debug, info};

use crate::{
    input::{Action, KeyBindings},
    render::draw_frame,
};

/// plays until the quit key is pressed and returns the final state of the game.
pub fn play(bindings: KeyBindings) -> io::Result<Game> {
    let mut rng = rand::thread_rng();
    let (cols, lines) = terminal::size()?;
    let mut game = Game::new(Bounds::new(cols, lines), &mut rng);
    let mut ticker = Ticker::new(Instant::now());
    let mut stdout = stdout();
    let mut redraw = true;
    let mut drawn: Option<Game> = None;
    info!("game started on a {cols}x{lines} terminal");
    loop {
        if redraw {
            draw_frame(&mut stdout, &game, drawn.as_ref(), bindings)?;
            drawn = Some(game.clone());
            redraw = false;
        }
        if event::poll(ticker.until_next(Instant::now()))? {
            match event::read()? {
                Event::Key(key) => {
                    if let Some(action) = bindings.action(key) {
                        if apply(&mut game, action, &mut rng).is_break() {
                            info!(
                                player = game.player.score,
                                opponent = game.opponent.score,
                                "game quit"
                            );
                            return Ok(game);
                        }
                        redraw = true;
                    }
                }
                Event::Resize(cols, lines) => {
                    debug!("terminal resized to {cols}x{lines}");
                    game.resize(Bounds::new(cols, lines));
                    redraw = true;
                }
                _ => {}
            }
        }
        if ticker.due(Instant::now()) {
            if let TickOutcome::Scored(side) = game.tick(&mut rng) {
                info!(
                    ?side,
                    player = game.player.score,
                    opponent = game.opponent.score,
                    "point scored"
                );
            }
            redraw = true;
        }
    }
}

fn apply<D: Dice>(game: &mut Game, action: Action, dice: &mut D) -> ControlFlow<()> {
    match action {
        Action::Move(direction) => game.move_player(direction),
        Action::Reset => {
            info!("game reset");
            game.reset(dice);
        }
        Action::Quit => return ControlFlow::Break(()),
    }
    ControlFlow::Continue(())
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};
    use shared::{
        game_state::{Direction, Game},
        geometry::{Bounds, Rect},
    };

    use crate::{app::apply, input::Action};

    #[test]
    fn quit_breaks_the_loop() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut game = Game::new(Bounds::new(80, 24), &mut rng);
        assert!(apply(&mut game, Action::Quit, &mut rng).is_break());
        assert!(apply(&mut game, Action::Move(Direction::Up), &mut rng).is_continue());
    }

    #[test]
    fn reset_clears_scores() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut game = Game::new(Bounds::new(80, 24), &mut rng);
        let start = game.player.rect;
        game.player.score = 4;
        game.opponent.score = 2;
        apply(&mut game, Action::Move(Direction::Down), &mut rng);
        assert_ne!(game.player.rect, start);
        assert!(apply(&mut game, Action::Reset, &mut rng).is_continue());
        assert_eq!((game.player.score, game.opponent.score), (0, 0));
        assert_eq!(game.player.rect, start);
        assert_eq!(game.ball.rect, Rect::new(39, 12, 3, 2));
    }
}
