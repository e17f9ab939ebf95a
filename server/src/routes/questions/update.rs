use actix_web::{
    web::{block, Data, Json, Path},
    HttpRequest, Result,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use db::models::{Question, QuestionChanges, User};
use db::Repository;
use errors::Error;

use crate::handlers::QuestionView;
use crate::routes::questions::present;
use crate::validate::{validate, validate_title};

#[derive(Clone, Deserialize, Serialize, Validate)]
pub struct UpdateQuestionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = "1"))]
    title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = "1"))]
    body: Option<String>,
}

pub async fn update<R: Repository>(
    req: HttpRequest,
    question_id: Path<i32>,
    repo: Data<R>,
    params: Json<UpdateQuestionRequest>,
) -> Result<Json<QuestionView>, Error> {
    validate(&params)?;
    if let Some(title) = &params.title {
        validate_title(title)?;
    }

    let question_id = question_id.into_inner();
    let params = params.into_inner();

    let data: Result<(Question, User), Error> = block(move || {
        let changes = QuestionChanges::new(params.title, params.body);
        let question = repo.update_question(question_id, changes)?;
        let user = question.user(repo.get_ref())?;
        Ok((question, user))
    })
    .await?;

    let (question, user) = data?;

    Ok(Json(present(&req, &question, &user)?))
}

#[cfg(test)]
mod tests {
    use errors::ErrorResponse;

    use super::UpdateQuestionRequest;
    use crate::handlers::QuestionView;
    use crate::tests::helpers::tests::{create_question, create_user, get_repo, test_put};

    #[actix_rt::test]
    async fn test_update_title_moves_slug() {
        let repo = get_repo();
        let user = create_user(&repo, "Ada Lovelace");
        let question = create_question(&repo, &user, "How do I center a div?");

        let res: (u16, QuestionView) = test_put(
            &repo,
            &format!("/api/questions/{}", question.id),
            UpdateQuestionRequest {
                title: Some("How do I center a div vertically?".to_string()),
                body: None,
            },
        )
        .await;

        assert_eq!(res.0, 200);
        assert_eq!(res.1.slug, "how-do-i-center-a-div-vertically");
        assert!(res.1.url.ends_with("/questions/how-do-i-center-a-div-vertically"));
        assert_eq!(res.1.body, "Some details.");
    }

    #[actix_rt::test]
    async fn test_update_body_keeps_slug() {
        let repo = get_repo();
        let user = create_user(&repo, "Ada Lovelace");
        let question = create_question(&repo, &user, "How do I center a div?");

        let res: (u16, QuestionView) = test_put(
            &repo,
            &format!("/api/questions/{}", question.id),
            UpdateQuestionRequest {
                title: None,
                body: Some("Flexbox did not help.".to_string()),
            },
        )
        .await;

        assert_eq!(res.0, 200);
        assert_eq!(res.1.slug, "how-do-i-center-a-div");
        assert_eq!(res.1.body, "Flexbox did not help.");
    }

    #[actix_rt::test]
    async fn test_update_with_empty_title() {
        let repo = get_repo();
        let user = create_user(&repo, "Ada Lovelace");
        let question = create_question(&repo, &user, "How do I center a div?");

        let res: (u16, ErrorResponse) = test_put(
            &repo,
            &format!("/api/questions/{}", question.id),
            UpdateQuestionRequest {
                title: Some("".to_string()),
                body: None,
            },
        )
        .await;

        assert_eq!(res.0, 422);
        assert_eq!(res.1.errors[0], "title is required");
    }

    #[actix_rt::test]
    async fn test_update_missing_question() {
        let repo = get_repo();

        let res: (u16, ErrorResponse) = test_put(
            &repo,
            "/api/questions/404",
            UpdateQuestionRequest {
                title: Some("Anyone there?".to_string()),
                body: None,
            },
        )
        .await;

        assert_eq!(res.0, 404);
    }
}
