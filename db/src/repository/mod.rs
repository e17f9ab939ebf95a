//! Data access, kept apart from the models so they stay plain data.
//!
//! `PgRepository` talks to postgres through diesel. `MemoryRepository` keeps
//! everything in process and mirrors the error behaviour of the database, so
//! the seeder and the http layer can be exercised without one.

use errors::Error;

use crate::models::{Answer, NewAnswer, NewQuestion, NewUser, Question, QuestionChanges, User};

mod memory;
mod pg;

pub use self::memory::MemoryRepository;
pub use self::pg::PgRepository;

pub trait UserRepository {
    fn create_user(&self, user: NewUser) -> Result<User, Error>;

    fn find_user(&self, id: i32) -> Result<User, Error>;

    fn all_users(&self) -> Result<Vec<User>, Error>;
}

pub trait QuestionRepository {
    fn create_question(&self, question: NewQuestion) -> Result<Question, Error>;

    /// Saves a batch of questions. Either all of them are stored or none are.
    fn create_questions(&self, questions: Vec<NewQuestion>) -> Result<Vec<Question>, Error>;

    fn find_question(&self, id: i32) -> Result<Question, Error>;

    /// First question carrying `slug`.
    fn find_question_by_slug(&self, slug: &str) -> Result<Question, Error>;

    /// Latest first.
    fn all_questions(&self) -> Result<Vec<Question>, Error>;

    /// Latest first.
    fn questions_by_user(&self, user: &User) -> Result<Vec<Question>, Error>;

    fn update_question(&self, id: i32, changes: QuestionChanges) -> Result<Question, Error>;

    /// Removes the question along with its answers, returning what was removed.
    fn delete_question(&self, id: i32) -> Result<Question, Error>;
}

pub trait AnswerRepository {
    /// Stores the answer and bumps the owning question's `answers_count`.
    fn create_answer(&self, answer: NewAnswer) -> Result<Answer, Error>;

    /// Oldest first.
    fn answers_for_question(&self, question: &Question) -> Result<Vec<Answer>, Error>;

    fn accept_answer(&self, question_id: i32, answer_id: i32) -> Result<Question, Error>;
}

/// Everything the http layer needs, shareable across worker threads.
pub trait Repository:
    UserRepository + QuestionRepository + AnswerRepository + Send + Sync + 'static
{
}

impl<T> Repository for T where
    T: UserRepository + QuestionRepository + AnswerRepository + Send + Sync + 'static
{
}

pub(crate) fn answer_not_on_question() -> Error {
    Error::UnprocessableEntity("Answer does not belong to this question".to_string())
}
