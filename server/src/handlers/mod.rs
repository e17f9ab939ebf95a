mod question_view;

pub use self::question_view::*;
