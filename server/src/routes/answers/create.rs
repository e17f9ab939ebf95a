use actix_web::{
    web::{block, Data, Json, Path},
    Result,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use db::models::{Answer, NewAnswer};
use db::Repository;
use errors::Error;

use crate::validate::validate;

#[derive(Clone, Deserialize, Serialize, Validate)]
pub struct CreateAnswerRequest {
    user_id: i32,
    #[validate(length(min = "1"))]
    body: String,
}

pub async fn create<R: Repository>(
    question_id: Path<i32>,
    repo: Data<R>,
    params: Json<CreateAnswerRequest>,
) -> Result<Json<Answer>, Error> {
    validate(&params)?;

    let question_id = question_id.into_inner();
    let params = params.into_inner();

    let answer: Result<Answer, Error> = block(move || {
        let question = repo.find_question(question_id)?;
        repo.create_answer(NewAnswer {
            question_id: question.id,
            user_id: params.user_id,
            body: params.body,
        })
    })
    .await?;

    Ok(Json(answer?))
}
