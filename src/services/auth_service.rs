use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::repositories::CustomerStore;
use crate::utils::*;
use std::sync::Arc;

const INVALID_CREDENTIALS: &str = "Invalid username or password";

#[derive(Clone)]
pub struct AuthService {
    customers: Arc<dyn CustomerStore>,
    jwt_service: JwtService,
}

impl AuthService {
    pub fn new(customers: Arc<dyn CustomerStore>, jwt_service: JwtService) -> Self {
        Self {
            customers,
            jwt_service,
        }
    }

    /// 用客户名和手机号换取访问令牌
    ///
    /// 客户名可能重复，取第一个手机号哈希匹配的客户
    pub async fn issue_token(&self, request: TokenRequest) -> AppResult<TokenResponse> {
        let candidates = self.customers.find_by_name(&request.name).await?;

        let mut matched = None;
        for customer in candidates {
            if verify_phone(&request.phone, &customer.phone)? {
                matched = Some(customer);
                break;
            }
        }

        let customer =
            matched.ok_or_else(|| AppError::AuthError(INVALID_CREDENTIALS.to_string()))?;

        let access_token = self
            .jwt_service
            .generate_access_token(customer.id, &customer.name)?;
        log::info!("Issued access token for customer {}", customer.id);

        Ok(TokenResponse {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: self.jwt_service.get_access_token_expires_in(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::memory::InMemoryStore;
    use crate::repositories::NewCustomer;
    use crate::utils::MIN_HASH_COST;

    async fn service_with(customers: &[(&str, &str)]) -> (AuthService, JwtService) {
        let store = Arc::new(InMemoryStore::new());
        for (name, phone) in customers {
            store
                .save(NewCustomer {
                    name: name.to_string(),
                    phone: hash_phone(phone, MIN_HASH_COST).unwrap(),
                    transactions: Vec::new(),
                })
                .await
                .unwrap();
        }
        let jwt = JwtService::new("test-secret", 300);
        (AuthService::new(store, jwt.clone()), jwt)
    }

    fn request(name: &str, phone: &str) -> TokenRequest {
        TokenRequest {
            name: name.to_string(),
            phone: phone.to_string(),
        }
    }

    #[tokio::test]
    async fn test_issue_token_for_valid_credentials() {
        let (service, jwt) = service_with(&[("Jack", "9978543210")]).await;

        let response = service.issue_token(request("Jack", "9978543210")).await.unwrap();
        assert_eq!(response.token_type, "Bearer");
        assert_eq!(response.expires_in, 300);

        let claims = jwt.verify_access_token(&response.access_token).unwrap();
        assert_eq!(claims.name, "Jack");
        assert_eq!(claims.sub, "1");
    }

    #[tokio::test]
    async fn test_wrong_phone_rejected() {
        let (service, _) = service_with(&[("Jack", "9978543210")]).await;

        let err = service
            .issue_token(request("Jack", "wrongpassword"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::AuthError(msg) if msg == INVALID_CREDENTIALS));
    }

    #[tokio::test]
    async fn test_unknown_name_rejected() {
        let (service, _) = service_with(&[]).await;
        assert!(matches!(
            service.issue_token(request("Nobody", "1")).await,
            Err(AppError::AuthError(_))
        ));
    }

    #[tokio::test]
    async fn test_duplicate_names_match_by_phone() {
        let (service, jwt) =
            service_with(&[("Jack", "1111111111"), ("Jack", "2222222222")]).await;

        let response = service.issue_token(request("Jack", "2222222222")).await.unwrap();
        let claims = jwt.verify_access_token(&response.access_token).unwrap();
        assert_eq!(claims.sub, "2");
    }
}
