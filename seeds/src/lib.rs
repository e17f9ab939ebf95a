#[macro_use]
extern crate log;

use std::ops::RangeInclusive;

use rand::Rng;

use db::{QuestionRepository, UrlBuilder, UserRepository};
use errors::Error;

pub mod factories;

pub const USERS: usize = 3;
pub const QUESTIONS_PER_USER: RangeInclusive<usize> = 1..=5;

/// Creates `USERS` users, each owning a random number of questions.
/// Running it again adds another batch.
pub fn run<R, U, G>(repo: &R, urls: &U, rng: &mut G) -> Result<(), Error>
where
    R: UserRepository + QuestionRepository + ?Sized,
    U: UrlBuilder + ?Sized,
    G: Rng,
{
    for _ in 0..USERS {
        let user = repo.create_user(factories::user(rng))?;

        let count = rng.gen_range(QUESTIONS_PER_USER);
        let mut new_questions = Vec::with_capacity(count);
        for _ in 0..count {
            new_questions.push(factories::question(rng, user.id));
        }
        let questions = repo.create_questions(new_questions)?;

        info!("Seeded {} with {} questions", user.name, questions.len());
        for question in &questions {
            match question.url(urls) {
                Ok(url) => debug!("  {} -> {}", question.title, url),
                Err(err) => debug!("  {} has no url - {}", question.title, err),
            }
        }
    }

    Ok(())
}
