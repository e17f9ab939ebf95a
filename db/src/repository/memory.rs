use std::sync::{Mutex, MutexGuard};

use chrono::Utc;

use errors::Error;

use crate::models::{Answer, NewAnswer, NewQuestion, NewUser, Question, QuestionChanges, User};
use crate::repository::{
    answer_not_on_question, AnswerRepository, QuestionRepository, UserRepository,
};

#[derive(Default)]
struct Store {
    users: Vec<User>,
    questions: Vec<Question>,
    answers: Vec<Answer>,
    last_user_id: i32,
    last_question_id: i32,
    last_answer_id: i32,
}

/// In-process repository with the same lookup and integrity errors as postgres.
#[derive(Default)]
pub struct MemoryRepository {
    store: Mutex<Store>,
}

fn not_found() -> Error {
    Error::NotFound("Record not found".to_string())
}

fn missing_key(column: &str, id: i32, table: &str) -> Error {
    Error::UnprocessableEntity(format!(
        "Key ({})=({}) is not present in table \"{}\".",
        column, id, table
    ))
}

fn next_id(last: &mut i32) -> i32 {
    *last += 1;
    *last
}

fn latest_first(mut questions: Vec<Question>) -> Vec<Question> {
    questions.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
    questions
}

impl Store {
    fn user_exists(&self, id: i32) -> bool {
        self.users.iter().any(|user| user.id == id)
    }

    fn question_mut(&mut self, id: i32) -> Result<&mut Question, Error> {
        self.questions
            .iter_mut()
            .find(|question| question.id == id)
            .ok_or_else(not_found)
    }

    fn insert_question(&mut self, question: NewQuestion) -> Question {
        let now = Utc::now();
        let question = Question {
            id: next_id(&mut self.last_question_id),
            title: question.title,
            slug: question.slug,
            body: question.body,
            user_id: question.user_id,
            best_answer_id: None,
            answers_count: 0,
            created_at: now,
            updated_at: now,
        };
        self.questions.push(question.clone());
        question
    }
}

impl MemoryRepository {
    pub fn new() -> Self {
        MemoryRepository::default()
    }

    fn store(&self) -> Result<MutexGuard<Store>, Error> {
        self.store.lock().map_err(|err| {
            error!("Memory store lock poisoned - {}", err);
            Error::InternalServerError("Memory store unavailable".to_string())
        })
    }
}

impl UserRepository for MemoryRepository {
    fn create_user(&self, user: NewUser) -> Result<User, Error> {
        let mut store = self.store()?;
        if store.users.iter().any(|existing| existing.email == user.email) {
            return Err(Error::BadRequest(format!(
                "Key (email)=({}) already exists.",
                user.email
            )));
        }

        let now = Utc::now();
        let user = User {
            id: next_id(&mut store.last_user_id),
            name: user.name,
            email: user.email,
            created_at: now,
            updated_at: now,
        };
        store.users.push(user.clone());

        Ok(user)
    }

    fn find_user(&self, id: i32) -> Result<User, Error> {
        let store = self.store()?;
        store
            .users
            .iter()
            .find(|user| user.id == id)
            .cloned()
            .ok_or_else(not_found)
    }

    fn all_users(&self) -> Result<Vec<User>, Error> {
        Ok(self.store()?.users.clone())
    }
}

impl QuestionRepository for MemoryRepository {
    fn create_question(&self, question: NewQuestion) -> Result<Question, Error> {
        let mut store = self.store()?;
        if !store.user_exists(question.user_id) {
            return Err(missing_key("user_id", question.user_id, "users"));
        }

        Ok(store.insert_question(question))
    }

    fn create_questions(&self, new_questions: Vec<NewQuestion>) -> Result<Vec<Question>, Error> {
        let mut store = self.store()?;
        if let Some(orphan) = new_questions
            .iter()
            .find(|question| !store.user_exists(question.user_id))
        {
            return Err(missing_key("user_id", orphan.user_id, "users"));
        }

        Ok(new_questions
            .into_iter()
            .map(|question| store.insert_question(question))
            .collect())
    }

    fn find_question(&self, id: i32) -> Result<Question, Error> {
        let store = self.store()?;
        store
            .questions
            .iter()
            .find(|question| question.id == id)
            .cloned()
            .ok_or_else(not_found)
    }

    fn find_question_by_slug(&self, slug: &str) -> Result<Question, Error> {
        let store = self.store()?;
        store
            .questions
            .iter()
            .find(|question| question.slug == slug)
            .cloned()
            .ok_or_else(not_found)
    }

    fn all_questions(&self) -> Result<Vec<Question>, Error> {
        Ok(latest_first(self.store()?.questions.clone()))
    }

    fn questions_by_user(&self, user: &User) -> Result<Vec<Question>, Error> {
        let store = self.store()?;
        let owned = store
            .questions
            .iter()
            .filter(|question| question.user_id == user.id)
            .cloned()
            .collect();

        Ok(latest_first(owned))
    }

    fn update_question(&self, id: i32, changes: QuestionChanges) -> Result<Question, Error> {
        let mut store = self.store()?;
        let question = store.question_mut(id)?;
        if !changes.is_empty() {
            changes.apply(question);
            question.updated_at = Utc::now();
        }

        Ok(question.clone())
    }

    fn delete_question(&self, id: i32) -> Result<Question, Error> {
        let mut store = self.store()?;
        let position = store
            .questions
            .iter()
            .position(|question| question.id == id)
            .ok_or_else(not_found)?;

        store.answers.retain(|answer| answer.question_id != id);
        Ok(store.questions.remove(position))
    }
}

impl AnswerRepository for MemoryRepository {
    fn create_answer(&self, answer: NewAnswer) -> Result<Answer, Error> {
        let mut store = self.store()?;
        if !store.user_exists(answer.user_id) {
            return Err(missing_key("user_id", answer.user_id, "users"));
        }
        store
            .question_mut(answer.question_id)
            .map_err(|_| missing_key("question_id", answer.question_id, "questions"))?
            .answers_count += 1;

        let now = Utc::now();
        let answer = Answer {
            id: next_id(&mut store.last_answer_id),
            question_id: answer.question_id,
            user_id: answer.user_id,
            body: answer.body,
            created_at: now,
            updated_at: now,
        };
        store.answers.push(answer.clone());

        Ok(answer)
    }

    fn answers_for_question(&self, question: &Question) -> Result<Vec<Answer>, Error> {
        let store = self.store()?;
        let mut answers: Vec<Answer> = store
            .answers
            .iter()
            .filter(|answer| answer.question_id == question.id)
            .cloned()
            .collect();
        answers.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));

        Ok(answers)
    }

    fn accept_answer(&self, question_id: i32, answer_id: i32) -> Result<Question, Error> {
        let mut store = self.store()?;
        let answer_question_id = store
            .answers
            .iter()
            .find(|answer| answer.id == answer_id)
            .map(|answer| answer.question_id)
            .ok_or_else(not_found)?;
        if answer_question_id != question_id {
            return Err(answer_not_on_question());
        }

        let question = store.question_mut(question_id)?;
        question.best_answer_id = Some(answer_id);

        Ok(question.clone())
    }
}
