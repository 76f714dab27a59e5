use actix_cors::Cors;

use crate::config::SecurityConfig;

/// Exact-match origin allowlist. The API is read/append only, so only the
/// verbs it serves are allowed.
pub fn cors_middleware(config: &SecurityConfig) -> Cors {
    let allowlist = config.cors_allowed_origins.clone();

    Cors::default()
        .allow_any_header()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .max_age(3600)
        .allowed_origin_fn(move |origin, _| {
            origin
                .to_str()
                .is_ok_and(|value| allowlist.iter().any(|allowed| allowed == value))
        })
}
