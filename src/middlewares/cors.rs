use actix_cors::Cors;

pub fn create_cors() -> Cors {
    Cors::default()
        // 生产环境应限制允许的域名
        .allowed_origin_fn(|_, _req_head| true)
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allow_any_header()
        .supports_credentials()
        .max_age(3600)
}
