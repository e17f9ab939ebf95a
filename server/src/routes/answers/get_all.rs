use actix_web::{
    web::{block, Data, Json, Path},
    Result,
};

use db::models::Answer;
use db::Repository;
use errors::Error;

pub async fn get_all<R: Repository>(
    question_id: Path<i32>,
    repo: Data<R>,
) -> Result<Json<Vec<Answer>>, Error> {
    let question_id = question_id.into_inner();

    let answers: Result<Vec<Answer>, Error> = block(move || {
        let question = repo.find_question(question_id)?;
        question.answers(repo.get_ref())
    })
    .await?;

    Ok(Json(answers?))
}

#[cfg(test)]
mod tests {
    use db::models::{Answer, NewAnswer};
    use db::AnswerRepository;
    use errors::ErrorResponse;

    use crate::tests::helpers::tests::{create_question, create_user, get_repo, test_get};

    #[actix_rt::test]
    async fn test_answers_oldest_first() {
        let repo = get_repo();
        let asker = create_user(&repo, "Ada Lovelace");
        let helper = create_user(&repo, "Grace Hopper");
        let question = create_question(&repo, &asker, "How do I center a div?");
        let other = create_question(&repo, &asker, "Tabs or spaces?");

        for (user_id, body) in [(helper.id, "Use flexbox."), (asker.id, "Thanks!")].iter() {
            repo.create_answer(NewAnswer {
                question_id: question.id,
                user_id: *user_id,
                body: body.to_string(),
            })
            .unwrap();
        }
        repo.create_answer(NewAnswer {
            question_id: other.id,
            user_id: helper.id,
            body: "Tabs.".to_string(),
        })
        .unwrap();

        let res: (u16, Vec<Answer>) =
            test_get(&repo, &format!("/api/questions/{}/answers", question.id)).await;
        assert_eq!(res.0, 200);

        let bodies: Vec<&str> = res.1.iter().map(|answer| answer.body.as_str()).collect();
        assert_eq!(bodies, vec!["Use flexbox.", "Thanks!"]);
    }

    #[actix_rt::test]
    async fn test_answers_for_missing_question() {
        let repo = get_repo();

        let res: (u16, ErrorResponse) = test_get(&repo, "/api/questions/3/answers").await;
        assert_eq!(res.0, 404);
    }
}
