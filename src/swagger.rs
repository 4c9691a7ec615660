use actix_web::web;
use utoipa::OpenApi;
use utoipa::{
    Modify,
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers;
use crate::models::*;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
            )
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::auth::issue_token,
        handlers::rewards::create_customer,
        handlers::rewards::get_customer_transactions,
        handlers::rewards::get_reward_summary,
        handlers::rewards::get_rewards_for_customer,
    ),
    components(
        schemas(
            TokenRequest,
            TokenResponse,
            CreateCustomerRequest,
            NewTransactionRequest,
            CustomerResponse,
            TransactionResponse,
            TransactionRewardResponse,
            SummaryResponse,
            RewardResponse,
            RewardsQuery,
            TimeFrame,
            ErrorResponse,
            ApiError,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Token issuance API"),
        (name = "rewards", description = "Customer transactions and reward points API"),
    ),
    info(
        title = "Rewards Backend API",
        version = "1.0.0",
        description = "Customer purchase transactions and tiered loyalty rewards"
    ),
    servers(
        (url = "/api", description = "Local server")
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
    .route(
        "/swagger-ui",
        web::get().to(|| async {
            actix_web::HttpResponse::Found()
                .append_header(("Location", "/swagger-ui/"))
                .finish()
        }),
    );
}
