use chrono::{DateTime, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};

use errors::Error;

use crate::models::{Answer, User};
use crate::repository::{AnswerRepository, UserRepository};
use crate::schema::questions;
use crate::url::{UrlBuilder, QUESTIONS_SHOW};
use crate::utils::{diff_for_humans, slugify};

#[derive(Associations, Clone, Debug, Deserialize, Identifiable, PartialEq, Queryable, Serialize)]
#[belongs_to(User)]
pub struct Question {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub body: String,
    pub user_id: i32,
    pub best_answer_id: Option<i32>,
    pub answers_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Insertable)]
#[table_name = "questions"]
pub struct NewQuestion {
    pub(crate) title: String,
    pub(crate) slug: String,
    pub(crate) body: String,
    pub(crate) user_id: i32,
}

/// Partial update of a question. The slug is only touched when the title is.
#[derive(AsChangeset, Clone, Debug, Default)]
#[table_name = "questions"]
pub struct QuestionChanges {
    pub(crate) title: Option<String>,
    pub(crate) slug: Option<String>,
    pub(crate) body: Option<String>,
}

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionStatus {
    #[display(fmt = "unanswered")]
    Unanswered,
    #[display(fmt = "answered")]
    Answered,
    #[display(fmt = "answered-accepted")]
    AnsweredAccepted,
}

impl QuestionStatus {
    pub fn from_counts(answers_count: i32, best_answer_id: Option<i32>) -> Self {
        if answers_count > 0 {
            if best_answer_id.is_some() {
                return QuestionStatus::AnsweredAccepted;
            }
            return QuestionStatus::Answered;
        }
        QuestionStatus::Unanswered
    }
}

impl Question {
    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
        self.slug = slugify(title);
    }

    pub fn status(&self) -> QuestionStatus {
        QuestionStatus::from_counts(self.answers_count, self.best_answer_id)
    }

    pub fn url<U>(&self, urls: &U) -> Result<String, Error>
    where
        U: UrlBuilder + ?Sized,
    {
        if self.slug.is_empty() {
            return Err(Error::UrlGenerationError(format!(
                "Question {} has no slug",
                self.id
            )));
        }
        urls.url_for(QUESTIONS_SHOW, &self.slug)
    }

    pub fn created_date(&self, now: DateTime<Utc>) -> String {
        diff_for_humans(self.created_at, now)
    }

    pub fn user<R>(&self, repo: &R) -> Result<User, Error>
    where
        R: UserRepository + ?Sized,
    {
        repo.find_user(self.user_id)
    }

    pub fn answers<R>(&self, repo: &R) -> Result<Vec<Answer>, Error>
    where
        R: AnswerRepository + ?Sized,
    {
        repo.answers_for_question(self)
    }
}

impl NewQuestion {
    pub fn new(user_id: i32, title: &str, body: &str) -> Self {
        NewQuestion {
            title: title.to_string(),
            slug: slugify(title),
            body: body.to_string(),
            user_id,
        }
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }
}

impl QuestionChanges {
    pub fn new(title: Option<String>, body: Option<String>) -> Self {
        let slug = title.as_ref().map(|title| slugify(title));
        QuestionChanges { title, slug, body }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.body.is_none()
    }

    pub(crate) fn apply(self, question: &mut Question) {
        if let Some(title) = self.title {
            question.set_title(&title);
        }
        if let Some(body) = self.body {
            question.body = body;
        }
    }
}
