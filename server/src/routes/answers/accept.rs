use actix_web::{
    web::{block, Data, Json, Path},
    HttpRequest, Result,
};
use serde::{Deserialize, Serialize};

use db::models::{Question, User};
use db::Repository;
use errors::Error;

use crate::handlers::QuestionView;
use crate::routes::questions::present;

#[derive(Clone, Deserialize, Serialize)]
pub struct AcceptAnswerRequest {
    answer_id: i32,
}

pub async fn accept<R: Repository>(
    req: HttpRequest,
    question_id: Path<i32>,
    repo: Data<R>,
    params: Json<AcceptAnswerRequest>,
) -> Result<Json<QuestionView>, Error> {
    let question_id = question_id.into_inner();
    let answer_id = params.answer_id;

    let data: Result<(Question, User), Error> = block(move || {
        let question = repo.accept_answer(question_id, answer_id)?;
        let user = question.user(repo.get_ref())?;
        Ok((question, user))
    })
    .await?;

    let (question, user) = data?;

    Ok(Json(present(&req, &question, &user)?))
}
