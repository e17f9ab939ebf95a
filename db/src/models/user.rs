use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use errors::Error;

use crate::models::Question;
use crate::repository::QuestionRepository;
use crate::schema::users;

#[derive(Clone, Debug, Deserialize, Identifiable, PartialEq, Queryable, Serialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Insertable)]
#[table_name = "users"]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

/// Public face of a user, embedded in question listings.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct UserDetails {
    pub id: i32,
    pub name: String,
}

impl User {
    pub fn questions<R>(&self, repo: &R) -> Result<Vec<Question>, Error>
    where
        R: QuestionRepository + ?Sized,
    {
        repo.questions_by_user(self)
    }
}

impl From<&User> for UserDetails {
    fn from(user: &User) -> Self {
        UserDetails {
            id: user.id,
            name: user.name.clone(),
        }
    }
}
