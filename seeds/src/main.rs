#[macro_use]
extern crate log;

use std::{env, process};

use dotenv::dotenv;
use rand::{rngs::StdRng, SeedableRng};

use db::{new_pool, PathUrlBuilder, PgRepository};

fn rng_from_env() -> StdRng {
    match env::var("SEED") {
        Ok(value) => match value.parse::<u64>() {
            Ok(seed) => {
                info!("Seeding with SEED={}", seed);
                StdRng::seed_from_u64(seed)
            }
            Err(err) => {
                error!("SEED must be an unsigned integer - {}", err);
                process::exit(1);
            }
        },
        Err(_) => StdRng::from_entropy(),
    }
}

fn main() {
    dotenv().ok();
    env_logger::init();

    let mut rng = rng_from_env();
    let app_url = env::var("APP_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());
    let urls = PathUrlBuilder::new(&app_url);

    let repo = PgRepository::new(new_pool());

    if let Err(err) = seeds::run(&repo, &urls, &mut rng) {
        error!("Seeding failed - {}", err);
        process::exit(1);
    }
}
