use actix_web::{
    web::{block, Data, Json, Path},
    HttpRequest, Result,
};

use db::models::{Question, User};
use db::Repository;
use errors::Error;

use crate::handlers::QuestionView;
use crate::routes::questions::present;

pub async fn delete<R: Repository>(
    req: HttpRequest,
    question_id: Path<i32>,
    repo: Data<R>,
) -> Result<Json<QuestionView>, Error> {
    let question_id = question_id.into_inner();

    let data: Result<(Question, User), Error> = block(move || {
        let question = repo.delete_question(question_id)?;
        let user = question.user(repo.get_ref())?;
        Ok((question, user))
    })
    .await?;

    let (question, user) = data?;
    info!("Question {} deleted", question.id);

    Ok(Json(present(&req, &question, &user)?))
}
