use crate::{
    api::{self, attendance, employee},
    error::ApiError,
};
use actix_cors::Cors;
use actix_web::{error::JsonPayloadError, web};

/// Largest JSON body accepted; avatars travel inline as data URIs.
pub const MAX_JSON_BYTES: usize = 4 * 1024 * 1024;

/// Any origin, method and header may call the API.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600)
}

pub fn configure(cfg: &mut web::ServiceConfig, api_prefix: &str) {
    // Malformed bodies and path segments are reported in the same {"detail"} shape as domain errors
    cfg.app_data(
        web::JsonConfig::default()
            .limit(MAX_JSON_BYTES)
            .error_handler(|err, _req| match err {
                JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
                    ApiError::PayloadTooLarge(err.to_string()).into()
                }
                _ => ApiError::Validation(err.to_string()).into(),
            }),
    )
    .app_data(
        web::PathConfig::default()
            .error_handler(|err, _req| ApiError::Validation(err.to_string()).into()),
    );

    cfg.service(api::index);

    cfg.service(
        web::scope(api_prefix)
            .service(
                web::resource("/attendance").route(web::post().to(attendance::record_attendance)),
            )
            .service(
                web::scope("/employees")
                    // /employees
                    .service(
                        web::resource("")
                            .route(web::get().to(employee::list_employees))
                            .route(web::post().to(employee::create_employee)),
                    )
                    // /employees/{id}
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(employee::get_employee))
                            .route(web::put().to(employee::update_employee)),
                    )
                    // /employees/{id}/last-record
                    .service(
                        web::resource("/{id}/last-record")
                            .route(web::get().to(attendance::last_record)),
                    ),
            ),
    );
}
