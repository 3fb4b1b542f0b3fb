use actix_web::{
    web::{block, Data, Json, Path},
    Result,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use db::{models::Question, QuestionStore};
use errors::Error;

#[derive(Debug, Deserialize, Serialize)]
pub struct DetailContext {
    pub question: Question,
}

pub async fn detail(
    question_id: Path<i32>,
    store: Data<dyn QuestionStore>,
) -> Result<Json<DetailContext>, Error> {
    let question_id = question_id.into_inner();

    // unpublished questions are not found either
    let question = block(move || store.get(question_id, Utc::now())).await??;

    Ok(Json(DetailContext { question }))
}
