use actix_web::HttpRequest;
use chrono::Utc;

use db::models::{Question, User};
use errors::Error;

use crate::handlers::QuestionView;
use crate::urls::RequestUrls;

mod create;
mod delete;
mod get_all;
mod show;
mod update;

pub use self::create::*;
pub use self::delete::*;
pub use self::get_all::*;
pub use self::show::*;
pub use self::update::*;

pub(crate) fn present(
    req: &HttpRequest,
    question: &Question,
    user: &User,
) -> Result<QuestionView, Error> {
    QuestionView::new(question, user, &RequestUrls(req), Utc::now())
}
