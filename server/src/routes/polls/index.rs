use actix_web::{
    web::{block, Data, Json},
    Result,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use db::{models::Question, QuestionStore};
use errors::Error;

pub const LATEST_QUESTION_LIMIT: i64 = 5;
pub const NO_POLLS_MESSAGE: &str = "No polls are available.";

#[derive(Debug, Deserialize, Serialize)]
pub struct IndexContext {
    pub latest_question_list: Vec<Question>,
    pub message: Option<String>,
}

impl From<Vec<Question>> for IndexContext {
    fn from(latest_question_list: Vec<Question>) -> Self {
        let message = if latest_question_list.is_empty() {
            Some(NO_POLLS_MESSAGE.to_string())
        } else {
            None
        };

        IndexContext {
            latest_question_list,
            message,
        }
    }
}

pub async fn index(store: Data<dyn QuestionStore>) -> Result<Json<IndexContext>, Error> {
    let latest_question_list =
        block(move || store.list_ordered_desc(Utc::now(), LATEST_QUESTION_LIMIT)).await??;

    Ok(Json(latest_question_list.into()))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::Duration;

    use super::{IndexContext, NO_POLLS_MESSAGE};
    use crate::tests::helpers::tests::{create_question, test_get, test_get_body};
    use db::MemoryQuestionStore;

    #[actix_rt::test]
    async fn test_no_questions() {
        let store = Arc::new(MemoryQuestionStore::new());

        let res = test_get_body(store, "/polls/").await;
        assert_eq!(res.0, 200);
        assert!(res.1.contains(NO_POLLS_MESSAGE));

        let context: IndexContext = serde_json::from_str(&res.1).unwrap();
        assert_eq!(context.latest_question_list.len(), 0);
    }

    #[actix_rt::test]
    async fn test_past_question() {
        let store = Arc::new(MemoryQuestionStore::new());
        let past_question = create_question(&store, "past question", -Duration::days(30));

        let res: (u16, IndexContext) = test_get(store, "/polls/").await;
        assert_eq!(res.0, 200);
        assert_eq!(res.1.latest_question_list, vec![past_question]);
        assert_eq!(res.1.message, None);
    }

    #[actix_rt::test]
    async fn test_future_question() {
        let store = Arc::new(MemoryQuestionStore::new());
        create_question(&store, "future question", Duration::days(30));

        let res = test_get_body(store, "/polls/").await;
        assert_eq!(res.0, 200);
        assert!(res.1.contains(NO_POLLS_MESSAGE));

        let context: IndexContext = serde_json::from_str(&res.1).unwrap();
        assert_eq!(context.latest_question_list.len(), 0);
    }

    #[actix_rt::test]
    async fn test_future_question_and_past_question() {
        let store = Arc::new(MemoryQuestionStore::new());
        let past_question = create_question(&store, "past question", -Duration::days(30));
        create_question(&store, "future question", Duration::days(30));

        let res: (u16, IndexContext) = test_get(store, "/polls/").await;
        assert_eq!(res.0, 200);
        assert_eq!(res.1.latest_question_list, vec![past_question]);
    }

    #[actix_rt::test]
    async fn test_two_past_questions() {
        let store = Arc::new(MemoryQuestionStore::new());
        let question_1 = create_question(&store, "question 1", Duration::zero());
        let question_2 = create_question(&store, "question 2", Duration::zero());
        create_question(&store, "future question", Duration::days(30));

        let res: (u16, IndexContext) = test_get(store, "/polls/").await;
        assert_eq!(res.0, 200);
        assert_eq!(res.1.latest_question_list, vec![question_2, question_1]);
    }

    #[actix_rt::test]
    async fn test_lists_at_most_five_questions() {
        let store = Arc::new(MemoryQuestionStore::new());
        let mut created = Vec::new();
        for days in 1..=7 {
            created.push(create_question(
                &store,
                &format!("question {}", days),
                -Duration::days(days),
            ));
        }

        let res: (u16, IndexContext) = test_get(store, "/polls/").await;
        assert_eq!(res.0, 200);
        assert_eq!(res.1.latest_question_list, created[..5].to_vec());
    }
}
