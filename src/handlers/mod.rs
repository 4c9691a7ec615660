pub mod auth;
pub mod rewards;

pub use auth::auth_config;
pub use rewards::rewards_config;

use crate::error::AppError;
use actix_web::web;

// 请求体/路径/查询参数解析失败统一返回 VALIDATION_ERROR
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into())
}

fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into())
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into())
}
