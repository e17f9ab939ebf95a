use actix_web::{
    web::{block, Data, Json, Path},
    HttpRequest, Result,
};

use db::models::{Question, User};
use db::Repository;
use errors::Error;

use crate::handlers::QuestionView;
use crate::routes::questions::present;

pub async fn show<R: Repository>(
    req: HttpRequest,
    slug: Path<String>,
    repo: Data<R>,
) -> Result<Json<QuestionView>, Error> {
    let slug = slug.into_inner();

    let data: Result<(Question, User), Error> = block(move || {
        let question = repo.find_question_by_slug(&slug)?;
        let user = question.user(repo.get_ref())?;
        Ok((question, user))
    })
    .await?;

    let (question, user) = data?;

    Ok(Json(present(&req, &question, &user)?))
}
