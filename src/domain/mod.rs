pub mod account;
pub mod clock;
pub mod common;
pub mod movement;
pub mod policy;

pub use account::{Account, AccountError};
pub use clock::{Clock, FixedClock, SystemClock};
pub use movement::{Movement, MovementKind};
pub use policy::AccountPolicy;
