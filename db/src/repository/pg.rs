use chrono::Utc;
use diesel::{self, BelongingToDsl, Connection as _, ExpressionMethods, QueryDsl, RunQueryDsl};

use errors::Error;

use crate::models::{Answer, NewAnswer, NewQuestion, NewUser, Question, QuestionChanges, User};
use crate::repository::{
    answer_not_on_question, AnswerRepository, QuestionRepository, UserRepository,
};
use crate::schema::{answers, questions, users};
use crate::{get_conn, Connection, PgPool};

#[derive(Clone)]
pub struct PgRepository {
    pool: PgPool,
}

impl PgRepository {
    pub fn new(pool: PgPool) -> Self {
        PgRepository { pool }
    }

    fn conn(&self) -> Result<Connection, Error> {
        let conn = get_conn(&self.pool)?;
        Ok(conn)
    }
}

impl UserRepository for PgRepository {
    fn create_user(&self, user: NewUser) -> Result<User, Error> {
        let conn = self.conn()?;

        let user = diesel::insert_into(users::table)
            .values(&user)
            .get_result(&conn)?;

        Ok(user)
    }

    fn find_user(&self, id: i32) -> Result<User, Error> {
        let conn = self.conn()?;

        let user = users::table.find(id).get_result::<User>(&conn)?;

        Ok(user)
    }

    fn all_users(&self) -> Result<Vec<User>, Error> {
        let conn = self.conn()?;

        let all_users = users::table.order(users::id).load::<User>(&conn)?;

        Ok(all_users)
    }
}

impl QuestionRepository for PgRepository {
    fn create_question(&self, question: NewQuestion) -> Result<Question, Error> {
        let conn = self.conn()?;

        let question = diesel::insert_into(questions::table)
            .values(&question)
            .get_result(&conn)?;

        Ok(question)
    }

    fn create_questions(&self, new_questions: Vec<NewQuestion>) -> Result<Vec<Question>, Error> {
        if new_questions.is_empty() {
            return Ok(Vec::new());
        }
        let conn = self.conn()?;

        // one multi row insert, so a bad owner rejects the whole batch
        let created = diesel::insert_into(questions::table)
            .values(&new_questions)
            .get_results(&conn)?;

        Ok(created)
    }

    fn find_question(&self, id: i32) -> Result<Question, Error> {
        let conn = self.conn()?;

        let question = questions::table.find(id).get_result::<Question>(&conn)?;

        Ok(question)
    }

    fn find_question_by_slug(&self, slug_value: &str) -> Result<Question, Error> {
        use crate::schema::questions::dsl::{id, questions as questions_table, slug};

        let conn = self.conn()?;

        let question = questions_table
            .filter(slug.eq(slug_value))
            .order(id)
            .first::<Question>(&conn)?;

        Ok(question)
    }

    fn all_questions(&self) -> Result<Vec<Question>, Error> {
        use crate::schema::questions::dsl::{created_at, id, questions as questions_table};

        let conn = self.conn()?;

        let all_questions = questions_table
            .order((created_at.desc(), id.desc()))
            .load::<Question>(&conn)?;

        Ok(all_questions)
    }

    fn questions_by_user(&self, user: &User) -> Result<Vec<Question>, Error> {
        let conn = self.conn()?;

        let results = Question::belonging_to(user)
            .order((questions::created_at.desc(), questions::id.desc()))
            .load::<Question>(&conn)?;

        Ok(results)
    }

    fn update_question(&self, id: i32, changes: QuestionChanges) -> Result<Question, Error> {
        // diesel refuses an update without columns
        if changes.is_empty() {
            return self.find_question(id);
        }
        let conn = self.conn()?;

        let question = diesel::update(questions::table.find(id))
            .set((&changes, questions::updated_at.eq(Utc::now())))
            .get_result(&conn)?;

        Ok(question)
    }

    fn delete_question(&self, id: i32) -> Result<Question, Error> {
        let conn = self.conn()?;

        conn.transaction::<_, Error, _>(|| {
            let question = questions::table.find(id).get_result::<Question>(&conn)?;

            diesel::update(questions::table.find(id))
                .set(questions::best_answer_id.eq(None::<i32>))
                .execute(&conn)?;
            diesel::delete(answers::table.filter(answers::question_id.eq(id))).execute(&conn)?;
            diesel::delete(questions::table.find(id)).execute(&conn)?;

            Ok(question)
        })
    }
}

impl AnswerRepository for PgRepository {
    fn create_answer(&self, answer: NewAnswer) -> Result<Answer, Error> {
        use crate::schema::questions::dsl::answers_count;

        let conn = self.conn()?;

        conn.transaction::<_, Error, _>(|| {
            let answer: Answer = diesel::insert_into(answers::table)
                .values(&answer)
                .get_result(&conn)?;

            diesel::update(questions::table.find(answer.question_id))
                .set(answers_count.eq(answers_count + 1))
                .execute(&conn)?;

            Ok(answer)
        })
    }

    fn answers_for_question(&self, question: &Question) -> Result<Vec<Answer>, Error> {
        let conn = self.conn()?;

        let results = Answer::belonging_to(question)
            .order((answers::created_at.asc(), answers::id.asc()))
            .load::<Answer>(&conn)?;

        Ok(results)
    }

    fn accept_answer(&self, question_id: i32, answer_id: i32) -> Result<Question, Error> {
        let conn = self.conn()?;

        conn.transaction::<_, Error, _>(|| {
            let answer = answers::table.find(answer_id).get_result::<Answer>(&conn)?;
            if answer.question_id != question_id {
                return Err(answer_not_on_question());
            }

            let question = diesel::update(questions::table.find(question_id))
                .set(questions::best_answer_id.eq(answer.id))
                .get_result(&conn)?;

            Ok(question)
        })
    }
}
