pub mod clock;
pub mod dice;
pub mod game_state;
pub mod geometry;
pub mod net;

/// milliseconds between ticks of the ball and the opponent.
pub const TICK_DELAY_MS: u64 = 40;

pub const PADDLE_HEIGHT: i32 = 10;
pub const PADDLE_WIDTH: i32 = 2;
/// gap between a paddle and the side of the terminal it defends.
pub const PADDLE_MARGIN: i32 = 2;

pub const BALL_HEIGHT: i32 = 2;
pub const BALL_WIDTH: i32 = 3;
/// ceilings on the ball's speed, in cells per tick. any faster and the ball can step straight over
/// the three columns in which it counts as touching a paddle.
pub const MAX_BALL_DX: i32 = 3;
pub const MAX_BALL_DY: i32 = 2;

/// the opponent closes `1 / OPPONENT_LAG` of the vertical distance to the ball every tick.
pub const OPPONENT_LAG: i32 = 10;
