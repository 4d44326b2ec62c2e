use actix_web::web;

pub mod chat;
pub mod system;

/// Register every route
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(chat::chat).service(system::health);
}
