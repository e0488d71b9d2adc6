pub mod auth;
pub mod experiences;
pub mod portfolios;
pub mod site;

use actix_web::web;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // ── Auth routes (the SPA's session gate polls /me) ──
    cfg.service(web::scope("/auth").route("/me", web::get().to(auth::me)));

    // ── Portfolio routes (reads are public, mutations require a session) ──
    // `/teaser` must register before `/{id}` so it is not matched as an id.
    cfg.service(
        web::resource("/portfolios/teaser").route(web::get().to(portfolios::get_teaser)),
    );
    cfg.service(
        web::resource("/portfolios")
            .route(web::get().to(portfolios::get_portfolios))
            .route(web::post().to(portfolios::create_portfolio)),
    );
    cfg.service(
        web::resource("/portfolios/{id}")
            .route(web::get().to(portfolios::get_portfolio))
            .route(web::put().to(portfolios::update_portfolio))
            .route(web::delete().to(portfolios::delete_portfolio)),
    );

    // ── Experience routes ──
    cfg.service(
        web::scope("/experiences")
            .route("", web::get().to(experiences::get_experiences))
            .route("", web::post().to(experiences::create_experience))
            .route("/{id}", web::put().to(experiences::update_experience))
            .route("/{id}", web::delete().to(experiences::delete_experience)),
    );

    // ── Site configuration ──
    cfg.service(web::resource("/site/contact").route(web::get().to(site::contact)));
}
