// Rules of the standard 24-point game
pub const TARGET: i64 = 24;
pub const PUZZLE_SIZE: usize = 4;
pub const MIN_CARD: i64 = 1;
pub const MAX_CARD: i64 = 13;
pub const MAX_GENERATION_ATTEMPTS: usize = 1000;
