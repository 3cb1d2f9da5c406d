pub mod accolade;
pub mod player;
pub mod round;
pub mod summary;
pub mod weapon;

pub use accolade::Accolade;
pub use player::Player;
pub use round::{Round, Winner};
pub use summary::MatchSummary;
pub use weapon::Weapon;
