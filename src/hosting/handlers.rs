use crate::feed::Kind;
use crate::feed::Snapshots;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::http::header::ContentType;
use actix_web::web;

/// Mounts every route of the feed.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health)).service(
        web::scope("/api")
            .route("", web::get().to(bus))
            .route("/bus", web::get().to(bus))
            .route("/area", web::get().to(area)),
    );
}

pub async fn bus(snapshots: web::Data<Snapshots>) -> impl Responder {
    serve(&snapshots, Kind::Bus)
}

pub async fn area(snapshots: web::Data<Snapshots>) -> impl Responder {
    serve(&snapshots, Kind::Area)
}

pub async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}

fn serve(snapshots: &Snapshots, kind: Kind) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::json())
        .body(snapshots.get(kind).body())
}
