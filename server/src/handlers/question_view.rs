use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use db::models::{Question, QuestionStatus, User, UserDetails};
use db::{UrlBuilder, UserRepository};
use errors::Error;

#[derive(Debug, Deserialize, Serialize)]
pub struct QuestionView {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub body: String,
    pub url: String,
    pub status: QuestionStatus,
    pub created_date: String,
    pub answers_count: i32,
    pub best_answer_id: Option<i32>,
    pub user: UserDetails,
}

impl QuestionView {
    pub fn new<U>(
        question: &Question,
        user: &User,
        urls: &U,
        now: DateTime<Utc>,
    ) -> Result<QuestionView, Error>
    where
        U: UrlBuilder + ?Sized,
    {
        Ok(QuestionView {
            id: question.id,
            title: question.title.clone(),
            slug: question.slug.clone(),
            body: question.body.clone(),
            url: question.url(urls)?,
            status: question.status(),
            created_date: question.created_date(now),
            answers_count: question.answers_count,
            best_answer_id: question.best_answer_id,
            user: user.into(),
        })
    }
}

/// Pairs each question with its owner, loading every owner once.
pub fn with_owners<R>(repo: &R, questions: Vec<Question>) -> Result<Vec<(Question, User)>, Error>
where
    R: UserRepository + ?Sized,
{
    let mut owners: HashMap<i32, User> = HashMap::new();
    let mut results = Vec::with_capacity(questions.len());

    for question in questions {
        let user = match owners.get(&question.user_id) {
            Some(user) => user.clone(),
            None => {
                let user = question.user(repo)?;
                owners.insert(user.id, user.clone());
                user
            }
        };
        results.push((question, user));
    }

    Ok(results)
}
