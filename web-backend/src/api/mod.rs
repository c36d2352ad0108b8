use actix_web::{web, Scope};

pub mod profiles;

pub fn create_api_router() -> Scope {
    web::scope("/api")
        .service(profile_routes())
}

fn profile_routes() -> Scope {
    web::scope("/profiles")
        .configure(profiles::configure_profile_routes)
}
