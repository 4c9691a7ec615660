use super::{json_config, path_config, query_config};
use crate::models::*;
use crate::services::CustomerService;
use actix_web::{HttpResponse, ResponseError, Result, web};

#[utoipa::path(
    post,
    path = "/rewards/customers",
    tag = "rewards",
    request_body = CreateCustomerRequest,
    responses(
        (status = 200, description = "Customer created", body = CustomerResponse),
        (status = 400, description = "Malformed request", body = ErrorResponse)
    )
)]
pub async fn create_customer(
    customer_service: web::Data<CustomerService>,
    request: web::Json<CreateCustomerRequest>,
) -> Result<HttpResponse> {
    match customer_service.create_customer(request.into_inner()).await {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/rewards/customers/{id}/transactions",
    tag = "rewards",
    params(
        ("id" = i64, Path, description = "Customer id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Transactions with reward points", body = [TransactionRewardResponse]),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    )
)]
pub async fn get_customer_transactions(
    customer_service: web::Data<CustomerService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match customer_service
        .get_customer_transactions(path.into_inner())
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/rewards/summary",
    tag = "rewards",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Reward summary of every customer", body = [SummaryResponse]),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    )
)]
pub async fn get_reward_summary(
    customer_service: web::Data<CustomerService>,
) -> Result<HttpResponse> {
    match customer_service.get_reward_summary().await {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/rewards/customers/{id}/rewards",
    tag = "rewards",
    params(
        ("id" = i64, Path, description = "Customer id"),
        ("startDate" = String, Query, description = "First day, YYYY-MM-DD"),
        ("endDate" = String, Query, description = "Last day, YYYY-MM-DD")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Rewards inside the window", body = RewardResponse),
        (status = 400, description = "Malformed dates", body = ErrorResponse),
        (status = 404, description = "Unknown customer or no transactions in range", body = ErrorResponse)
    )
)]
pub async fn get_rewards_for_customer(
    customer_service: web::Data<CustomerService>,
    path: web::Path<i64>,
    query: web::Query<RewardsQuery>,
) -> Result<HttpResponse> {
    let time_frame = TimeFrame::from(query.into_inner());

    match customer_service
        .get_rewards_for_customer(path.into_inner(), time_frame)
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn rewards_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/rewards")
            .app_data(json_config())
            .app_data(path_config())
            .app_data(query_config())
            .route("/customers", web::post().to(create_customer))
            .route(
                "/customers/{id}/transactions",
                web::get().to(get_customer_transactions),
            )
            .route(
                "/customers/{id}/rewards",
                web::get().to(get_rewards_for_customer),
            )
            .route("/summary", web::get().to(get_reward_summary)),
    );
}
