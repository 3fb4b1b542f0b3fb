#[macro_use]
extern crate log;

use std::env;

use chrono::Duration;
use dotenv::dotenv;

use db::{models::NewQuestion, new_pool, PgQuestionStore, QuestionStore};

fn main() {
    dotenv().ok();
    env_logger::init();

    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = new_pool(&database_url).unwrap();
    let store = PgQuestionStore::new(pool);

    for (question_text, offset) in &[
        ("What's new?", -Duration::days(30)),
        ("What's up?", -Duration::hours(23)),
        ("Which is the best sandwich?", -Duration::minutes(5)),
        ("Who will win tomorrow?", Duration::days(1)),
    ] {
        let question = store
            .insert(NewQuestion::published_in(*question_text, *offset))
            .unwrap();
        info!("Created question {} - {}", question.id, question.question_text);
    }
}
