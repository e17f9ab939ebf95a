use actix_web::{web, HttpResponse};

use db::{Repository, QUESTIONS_SHOW};
use errors::ErrorResponse;

pub mod answers;
pub mod questions;

pub fn routes<R: Repository>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api").service(
            web::scope("/questions")
                .service(
                    web::resource("")
                        .route(web::get().to(questions::get_all::<R>))
                        .route(web::post().to(questions::create::<R>)),
                )
                .service(
                    web::resource("/{id}")
                        .route(web::put().to(questions::update::<R>))
                        .route(web::delete().to(questions::delete::<R>)),
                )
                .service(
                    web::resource("/{id}/answers")
                        .route(web::get().to(answers::get_all::<R>))
                        .route(web::post().to(answers::create::<R>)),
                )
                .service(
                    web::resource("/{id}/accept").route(web::post().to(answers::accept::<R>)),
                ),
        ),
    )
    .service(
        web::resource("/questions/{slug}")
            .name(QUESTIONS_SHOW)
            .route(web::get().to(questions::show::<R>)),
    );
}

pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::from("Not Found"))
}
