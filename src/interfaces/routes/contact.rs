use actix_web::web;

use crate::handlers::contact;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/contact").service(
            web::resource("")
                .route(web::post().to(contact::create_contact_message))
                .route(web::get().to(contact::list_contact_messages)),
        ),
    );
}
