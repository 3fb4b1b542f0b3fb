use actix_web::{web::Path, HttpResponse};

pub async fn results(question_id: Path<i32>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(format!(
            "Vous regardez les résultats de la question n°{}",
            question_id.into_inner()
        ))
}
