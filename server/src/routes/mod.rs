use actix_web::web;

pub mod polls;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/polls")
            .route("/", web::get().to(polls::index))
            .service(
                web::scope("/{question_id}")
                    .route("/", web::get().to(polls::detail))
                    .route("/results/", web::get().to(polls::results))
                    .route("/vote/", web::get().to(polls::vote))
                    .route("/vote/", web::post().to(polls::vote)),
            ),
    );
}
