pub const DEFAULT_SIZE: usize = 20;
pub const DEFAULT_PROBABILITY: f64 = 0.6;
pub const DEFAULT_LOG_FILTER: &str = "info";

pub const CLOSED_CELL: char = '#';
pub const OPEN_CELL: char = '.';
pub const FULL_CELL: char = '~';
