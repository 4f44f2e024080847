use crate::{
    dice::Dice,
    geometry::{Bounds, Rect},
    BALL_HEIGHT, BALL_WIDTH, MAX_BALL_DX, MAX_BALL_DY, OPPONENT_LAG, PADDLE_HEIGHT, PADDLE_MARGIN,
    PADDLE_WIDTH,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// the side that won a point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Player,
    Opponent,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Moved,
    Scored(Side),
}

#[derive(Clone)]
#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Paddle {
    pub score: u32,
    pub rect: Rect,
}

impl Paddle {
    /// true if row `y` lies within the paddle's span, bottom edge included.
    fn covers_row(&self, y: i32) -> bool {
        y >= self.rect.y && y <= self.rect.bottom()
    }
}

#[derive(Clone)]
#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Ball {
    pub rect: Rect,
    pub dx: i32,
    pub dy: i32,
    /// set when the ball bounced off a paddle this tick. cleared once the hit's jitter is applied.
    pub collided: bool,
}

impl Ball {
    fn serve<D: Dice>(bounds: Bounds, dice: &mut D) -> Self {
        let mut rect = Rect::new(bounds.cols / 2 - 1, bounds.lines / 2, BALL_WIDTH, BALL_HEIGHT);
        rect.clamp_to(bounds);
        Self {
            rect,
            dx: dice.sign(),
            dy: dice.sign(),
            collided: false,
        }
    }
}

#[derive(Clone)]
#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Game {
    pub bounds: Bounds,
    /// the human player, defending the left side.
    pub player: Paddle,
    /// the AI, defending the right side.
    pub opponent: Paddle,
    pub ball: Ball,
}

impl Game {
    pub fn new<D: Dice>(bounds: Bounds, dice: &mut D) -> Self {
        Self {
            bounds,
            player: Paddle {
                score: 0,
                rect: player_start(bounds),
            },
            opponent: Paddle {
                score: 0,
                rect: opponent_start(bounds),
            },
            ball: Ball::serve(bounds, dice),
        }
    }

    pub fn move_player(&mut self, direction: Direction) {
        let rect = &mut self.player.rect;
        match direction {
            Direction::Up => rect.y -= 1,
            Direction::Down => rect.y += 1,
        }
        rect.clamp_to(self.bounds);
    }

    /// puts both paddles back where they started, zeroes the scores and serves a fresh ball.
    pub fn reset<D: Dice>(&mut self, dice: &mut D) {
        *self = Self::new(self.bounds, dice);
    }

    /// re-serves the ball from the middle of the court without touching the scores.
    pub fn reset_ball<D: Dice>(&mut self, dice: &mut D) {
        self.ball = Ball::serve(self.bounds, dice);
    }

    /// adopts the terminal's new size. the opponent keeps its distance from the right edge, the
    /// ball keeps its place relative to the court's width and everything is pulled back on screen.
    pub fn resize(&mut self, bounds: Bounds) {
        let old = std::mem::replace(&mut self.bounds, bounds);
        self.opponent.rect.x = opponent_start(bounds).x;
        self.player.rect.clamp_to(bounds);
        self.opponent.rect.clamp_to(bounds);

        let ball = &mut self.ball.rect;
        if old.cols > 0 {
            ball.x = ball.x * bounds.cols / old.cols;
        }
        ball.clamp_to(bounds);
        // a ball left touching a side wall would score on the next tick without anyone missing.
        if bounds.cols > ball.width + 2 {
            ball.x = ball.x.clamp(1, bounds.cols - ball.width - 1);
        }
    }

    pub fn tick<D: Dice>(&mut self, dice: &mut D) -> TickOutcome {
        let outcome = self.tick_ball(dice);
        self.tick_opponent();
        outcome
    }

    pub fn tick_ball<D: Dice>(&mut self, dice: &mut D) -> TickOutcome {
        let bounds = self.bounds;
        let ball = &mut self.ball;

        // top and bottom walls. the new sign always points back into the court, so a ball that
        // is still touching the wall on the next tick does not flip straight back into it.
        if ball.rect.bottom() >= bounds.lines {
            ball.dy = -ball.dy.abs();
        } else if ball.rect.y <= 0 {
            ball.dy = ball.dy.abs();
        }

        // left and right walls. the ball got past a paddle, so the other side scores.
        if ball.rect.right() >= bounds.cols {
            self.player.score += 1;
            self.reset_ball(dice);
            return TickOutcome::Scored(Side::Player);
        } else if ball.rect.x <= 0 {
            self.opponent.score += 1;
            self.reset_ball(dice);
            return TickOutcome::Scored(Side::Opponent);
        }

        // on a narrow court the two contact windows overlap, so only one paddle may hit per tick.
        let (player, opponent) = (&self.player, &self.opponent);
        if ball.dx < 0 && player.covers_row(ball.rect.y) && ball.rect.x <= player.rect.right() {
            ball.dx = -ball.dx;
            ball.collided = true;
        } else if ball.dx > 0
            && opponent.covers_row(ball.rect.y)
            && ball.rect.x >= opponent.rect.x - opponent.rect.width
        {
            ball.dx = -ball.dx;
            ball.collided = true;
        }

        // paddle hits speed the ball up by a random amount, away from the paddle.
        if ball.collided {
            ball.dx = (ball.dx + ball.dx.signum() * dice.roll(3)).clamp(-MAX_BALL_DX, MAX_BALL_DX);
            ball.dy = (ball.dy + ball.dy.signum() * dice.roll(2)).clamp(-MAX_BALL_DY, MAX_BALL_DY);
            ball.collided = false;
        }

        ball.rect.x += ball.dx;
        ball.rect.y += ball.dy;
        ball.rect.clamp_to(bounds);
        TickOutcome::Moved
    }

    /// moves the opponent a fraction of the way toward the ball's row. the division truncates
    /// toward zero, so the opponent stops short once it is within `OPPONENT_LAG` rows.
    pub fn tick_opponent(&mut self) {
        let rect = &mut self.opponent.rect;
        rect.y += (self.ball.rect.y - rect.y) / OPPONENT_LAG;
        rect.clamp_to(self.bounds);
    }
}

fn player_start(bounds: Bounds) -> Rect {
    let mut rect = Rect::new(
        PADDLE_MARGIN,
        (bounds.lines - PADDLE_HEIGHT) / 2,
        PADDLE_WIDTH,
        PADDLE_HEIGHT,
    );
    rect.clamp_to(bounds);
    rect
}

fn opponent_start(bounds: Bounds) -> Rect {
    let mut rect = Rect::new(
        bounds.cols - PADDLE_WIDTH - PADDLE_MARGIN,
        (bounds.lines - PADDLE_HEIGHT) / 2,
        PADDLE_WIDTH,
        PADDLE_HEIGHT,
    );
    rect.clamp_to(bounds);
    rect
}
