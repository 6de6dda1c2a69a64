//! Option Position Value Objects

mod expiry;
mod greeks;
mod option_position;
mod option_right;
mod roll_history;

pub use expiry::days_to_expiry;
pub use greeks::Greeks;
pub use option_position::{OptionPosition, OptionPositionRecord};
pub use option_right::OptionRight;
pub use roll_history::{RollHistory, RollHistoryEntry, RolledLeg};
