mod booking;
mod customer;
mod room;

pub use self::booking::*;
pub use self::customer::*;
pub use self::room::*;
