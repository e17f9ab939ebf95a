use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Question, User};
use crate::schema::answers;

#[derive(Associations, Clone, Debug, Deserialize, Identifiable, PartialEq, Queryable, Serialize)]
#[belongs_to(Question)]
#[belongs_to(User)]
pub struct Answer {
    pub id: i32,
    pub question_id: i32,
    pub user_id: i32,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Insertable)]
#[table_name = "answers"]
pub struct NewAnswer {
    pub question_id: i32,
    pub user_id: i32,
    pub body: String,
}
