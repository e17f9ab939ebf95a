use actix_web::{
    web::{block, Data, Json},
    HttpRequest, Result,
};

use db::models::{Question, User};
use db::Repository;
use errors::Error;

use crate::handlers::{with_owners, QuestionView};
use crate::routes::questions::present;

pub async fn get_all<R: Repository>(
    req: HttpRequest,
    repo: Data<R>,
) -> Result<Json<Vec<QuestionView>>, Error> {
    let listing: Result<Vec<(Question, User)>, Error> = block(move || {
        let questions = repo.all_questions()?;
        with_owners(repo.get_ref(), questions)
    })
    .await?;

    let questions = listing?
        .iter()
        .map(|(question, user)| present(&req, question, user))
        .collect::<Result<Vec<QuestionView>, Error>>()?;

    Ok(Json(questions))
}

#[cfg(test)]
mod tests {
    use db::models::QuestionStatus;

    use crate::handlers::QuestionView;
    use crate::tests::helpers::tests::{create_question, create_user, get_repo, test_get};

    #[actix_rt::test]
    async fn test_questions_empty() {
        let repo = get_repo();
        let res: (u16, Vec<QuestionView>) = test_get(&repo, "/api/questions").await;
        assert_eq!(res.0, 200);

        assert_eq!(res.1.len(), 0);
    }

    #[actix_rt::test]
    async fn test_questions_populated() {
        let repo = get_repo();
        let user = create_user(&repo, "Grace Hopper");
        create_question(&repo, &user, "Is COBOL still worth learning?");
        create_question(&repo, &user, "How do I center a div?");

        let res: (u16, Vec<QuestionView>) = test_get(&repo, "/api/questions").await;
        assert_eq!(res.0, 200);

        let body = res.1;
        assert_eq!(body.len(), 2);
        assert_eq!(body[0].title, "How do I center a div?");
        assert_eq!(body[0].slug, "how-do-i-center-a-div");
        assert!(body[0].url.ends_with("/questions/how-do-i-center-a-div"));
        assert_eq!(body[0].status, QuestionStatus::Unanswered);
        assert!(body[0].created_date.ends_with("ago"));
        assert_eq!(body[0].user.name, "Grace Hopper");
        assert_eq!(body[1].slug, "is-cobol-still-worth-learning");
    }
}
