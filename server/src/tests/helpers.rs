#[cfg(test)]
pub mod tests {
    use std::sync::Arc;

    use actix_http::Request;
    use actix_service::Service;
    use actix_web::{dev::ServiceResponse, error::Error, test, web::Data, App};
    use chrono::Duration;
    use serde::de::DeserializeOwned;
    use serde_json;

    use db::{
        models::{NewQuestion, Question},
        MemoryQuestionStore, QuestionStore,
    };

    use crate::routes::routes;

    /// Create a question published `offset` away from now (negative for
    /// questions published in the past, positive for ones not yet published).
    pub fn create_question(
        store: &MemoryQuestionStore,
        question_text: &str,
        offset: Duration,
    ) -> Question {
        store
            .insert(NewQuestion::published_in(question_text, offset))
            .unwrap()
    }

    pub async fn get_service(
        store: Arc<MemoryQuestionStore>,
    ) -> impl Service<Request, Response = ServiceResponse, Error = Error> {
        let store: Arc<dyn QuestionStore> = store;

        test::init_service(App::new().app_data(Data::from(store)).configure(routes)).await
    }

    async fn read_response(
        store: Arc<MemoryQuestionStore>,
        req: test::TestRequest,
    ) -> (u16, String) {
        let app = get_service(store).await;
        let res = test::call_service(&app, req.to_request()).await;

        let status = res.status().as_u16();
        let body = test::read_body(res).await;
        let body = String::from_utf8(body.to_vec())
            .unwrap_or_else(|_| "Could not convert Bytes -> String".to_string());

        (status, body)
    }

    /// Helper for HTTP GET integration tests
    pub async fn test_get<R>(store: Arc<MemoryQuestionStore>, route: &str) -> (u16, R)
    where
        R: DeserializeOwned,
    {
        let (status, body) = test_get_body(store, route).await;
        let json_body = serde_json::from_str(&body).unwrap_or_else(|_| {
            panic!(
                "read_response_json failed during deserialization. response: {} status: {}",
                body, status
            )
        });

        (status, json_body)
    }

    /// GET returning the raw body, for plain text responses
    pub async fn test_get_body(store: Arc<MemoryQuestionStore>, route: &str) -> (u16, String) {
        read_response(store, test::TestRequest::get().uri(route)).await
    }

    pub async fn test_post_body(store: Arc<MemoryQuestionStore>, route: &str) -> (u16, String) {
        read_response(store, test::TestRequest::post().uri(route)).await
    }
}
