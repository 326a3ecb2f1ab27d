use actix_web::{HttpRequest, HttpResponse, Responder, get, web};
use log::error;

use crate::models::config::ServerConfig;
use crate::render::Renderer;
use crate::services::directory::{Person, load_directory_page};

#[get("/")]
pub async fn show_index(
    req: HttpRequest,
    renderer: web::Data<Renderer>,
    people: web::Data<Vec<Person>>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let page = match load_directory_page(&people, req.query_string(), &server_config) {
        Ok(page) => page,
        Err(e) => {
            error!("Failed to load directory page: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    match renderer.render_page(&page.title, &page.table) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            error!("Failed to render directory page: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
