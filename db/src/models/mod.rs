mod answer;
mod question;
mod user;

pub use self::answer::*;
pub use self::question::*;
pub use self::user::*;
