use rand::Rng;

/// the source of randomness for the ball. serves and paddle hits both roll dice.
pub trait Dice {
    /// -1 or 1 with even odds.
    fn sign(&mut self) -> i32;

    /// a value in `0..n`. `n` must be greater than zero.
    fn roll(&mut self, n: i32) -> i32;
}

impl<R: Rng> Dice for R {
    fn sign(&mut self) -> i32 {
        if self.gen_bool(0.5) {
            1
        } else {
            -1
        }
    }

    fn roll(&mut self, n: i32) -> i32 {
        self.gen_range(0..n)
    }
}

/// dice that always land the same way.
#[cfg(test)]
pub(crate) struct LoadedDice {
    pub sign: i32,
    pub roll: i32,
}

#[cfg(test)]
impl Dice for LoadedDice {
    fn sign(&mut self) -> i32 {
        self.sign
    }

    fn roll(&mut self, n: i32) -> i32 {
        self.roll.min(n - 1)
    }
}
