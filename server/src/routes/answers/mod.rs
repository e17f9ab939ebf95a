mod accept;
mod create;
mod get_all;

pub use self::accept::*;
pub use self::create::*;
pub use self::get_all::*;
