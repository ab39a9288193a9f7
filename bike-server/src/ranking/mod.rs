//! Station ranking.
//!
//! Orders stations by great-circle distance from the user and keeps the
//! nearest ones that are open and have enough of what the user asked for.

mod rank;

pub use rank::{
    DEFAULT_LIMIT, MIN_AVAILABLE, is_suggested, rank_by_distance, select_top, take_suggested,
};
