use actix_web::web;

use crate::handlers;

/// Binds both resource collections. Ids travel only as path segments.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/departments")
            .service(
                web::resource("")
                    .route(web::get().to(handlers::department::get_departments))
                    .route(web::post().to(handlers::department::create_department)),
            )
            .service(
                web::resource("/{d_no}")
                    .route(web::get().to(handlers::department::get_department))
                    .route(web::patch().to(handlers::department::update_department))
                    .route(web::put().to(handlers::department::replace_department))
                    .route(web::delete().to(handlers::department::delete_department)),
            ),
    )
    .service(
        web::scope("/employees")
            .service(
                web::resource("")
                    .route(web::get().to(handlers::employee::get_employees))
                    .route(web::post().to(handlers::employee::create_employee)),
            )
            .service(
                web::resource("/{e_no}")
                    .route(web::get().to(handlers::employee::get_employee))
                    .route(web::patch().to(handlers::employee::update_employee))
                    .route(web::put().to(handlers::employee::replace_employee))
                    .route(web::delete().to(handlers::employee::delete_employee)),
            ),
    );
}
