mod game;
mod league;
mod odds;
mod record;

pub use game::*;
pub use league::*;
pub use odds::*;
pub use record::*;
