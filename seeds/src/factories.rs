//! Sample records for development databases.

use rand::Rng;

use db::models::{NewQuestion, NewUser};

const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Barbara", "Brian", "Claude", "Donald", "Edsger", "Frances", "Grace", "Guido",
    "Ken", "Linus", "Margaret", "Niklaus", "Radia", "Sophie", "Tim", "Yukihiro",
];

const LAST_NAMES: &[&str] = &[
    "Allen", "Hamilton", "Hopper", "Kernighan", "Knuth", "Lamport", "Liskov", "Lovelace",
    "McCarthy", "Perlman", "Ritchie", "Shannon", "Thompson", "Torvalds", "Turing", "Wirth",
];

const WORDS: &[&str] = &[
    "alias", "consequatur", "aut", "perferendis", "sit", "voluptatem", "accusantium",
    "doloremque", "aperiam", "eaque", "ipsa", "quae", "ab", "illo", "inventore", "veritatis",
    "et", "quasi", "architecto", "beatae", "vitae", "dicta", "sunt", "explicabo", "nemo",
    "enim", "ipsam", "quia", "voluptas", "aspernatur", "odit", "fugit", "sed", "consequuntur",
    "magni", "dolores", "eos", "qui", "ratione", "sequi", "nesciunt", "neque", "dolorem",
    "ipsum", "dolor", "amet", "consectetur", "adipisci", "velit", "numquam", "eius", "modi",
    "tempora", "incidunt", "ut", "labore", "dolore", "magnam", "aliquam", "quaerat",
    "minima", "nostrum", "exercitationem", "ullam", "corporis", "suscipit", "laboriosam",
    "nisi", "aliquid", "ex", "ea", "commodi", "autem", "vel", "eum", "iure", "reprehenderit",
    "in", "voluptate", "esse", "quam", "nihil", "molestiae", "illum", "fugiat", "quo",
    "nulla", "pariatur", "at", "vero", "accusamus", "officiis", "debitis", "rerum",
];

fn pick<'a, R: Rng>(rng: &mut R, values: &[&'a str]) -> &'a str {
    values[rng.gen_range(0..values.len())]
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `word_count` random words, first one capitalized, no trailing period.
pub fn sentence<R: Rng>(rng: &mut R, word_count: usize) -> String {
    let words: Vec<&str> = (0..word_count).map(|_| pick(&mut *rng, WORDS)).collect();
    capitalize(&words.join(" "))
}

pub fn user<R: Rng>(rng: &mut R) -> NewUser {
    let first = pick(rng, FIRST_NAMES);
    let last = pick(rng, LAST_NAMES);
    let tag: u32 = rng.gen();

    NewUser {
        name: format!("{} {}", first, last),
        email: format!("{}.{}.{}@example.com", first, last, tag).to_lowercase(),
    }
}

pub fn question<R: Rng>(rng: &mut R, user_id: i32) -> NewQuestion {
    let title_words = rng.gen_range(5..=10);
    let title = sentence(rng, title_words);

    let sentence_count = rng.gen_range(3..=7);
    let body = (0..sentence_count)
        .map(|_| {
            let words = rng.gen_range(4..=12);
            format!("{}.", sentence(&mut *rng, words))
        })
        .collect::<Vec<String>>()
        .join(" ");

    NewQuestion::new(user_id, &title, &body)
}
