use actix_web::{
    web::{block, Data, Json},
    HttpRequest, Result,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use db::models::{NewQuestion, Question, User};
use db::Repository;
use errors::Error;

use crate::handlers::QuestionView;
use crate::routes::questions::present;
use crate::validate::{validate, validate_title};

#[derive(Clone, Deserialize, Serialize, Validate)]
pub struct CreateQuestionRequest {
    user_id: i32,
    #[validate(length(min = "1"))]
    title: String,
    #[validate(length(min = "1"))]
    body: String,
}

pub async fn create<R: Repository>(
    req: HttpRequest,
    repo: Data<R>,
    params: Json<CreateQuestionRequest>,
) -> Result<Json<QuestionView>, Error> {
    validate(&params)?;
    validate_title(&params.title)?;

    let data: Result<(Question, User), Error> = block(move || {
        let question = repo.create_question(NewQuestion::new(
            params.user_id,
            &params.title,
            &params.body,
        ))?;
        let user = question.user(repo.get_ref())?;
        Ok((question, user))
    })
    .await?;

    let (question, user) = data?;
    info!("Question {} created by user {}", question.id, user.id);

    Ok(Json(present(&req, &question, &user)?))
}
