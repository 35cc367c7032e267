use crate::config::jwt::JwtConfig;
use crate::config::seller::SellerConfig;
use crate::utils::errors::AppError;
use crate::utils::jwt::{TokenRole, create_access_token};

use super::model::SellerLoginRequestDto;

pub struct SellerService;

impl SellerService {
    /// Checks the configured seller credentials and mints a seller token.
    /// There is exactly one seller account; its subject is the seller
    /// email rather than a user id.
    pub fn login_seller(
        dto: &SellerLoginRequestDto,
        seller_config: &SellerConfig,
        jwt_config: &JwtConfig,
    ) -> Result<String, AppError> {
        if dto.email != seller_config.email || dto.password != seller_config.password {
            return Err(AppError::unauthorized("Invalid email or password"));
        }

        create_access_token(
            &seller_config.email,
            &seller_config.email,
            TokenRole::Seller,
            jwt_config,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::jwt::verify_token;

    fn configs() -> (SellerConfig, JwtConfig) {
        (
            SellerConfig {
                email: "seller@example.com".to_string(),
                password: "sellerpassword".to_string(),
            },
            JwtConfig {
                secret: "test_secret_key_for_testing_purposes".to_string(),
                token_expiry: 3600,
            },
        )
    }

    #[test]
    fn valid_credentials_mint_a_seller_token() {
        let (seller_config, jwt_config) = configs();
        let dto = SellerLoginRequestDto {
            email: "seller@example.com".to_string(),
            password: "sellerpassword".to_string(),
        };

        let token = SellerService::login_seller(&dto, &seller_config, &jwt_config).unwrap();
        let claims = verify_token(&token, &jwt_config).unwrap();

        assert_eq!(claims.role, TokenRole::Seller);
        assert_eq!(claims.sub, "seller@example.com");
    }

    #[test]
    fn wrong_password_is_rejected() {
        let (seller_config, jwt_config) = configs();
        let dto = SellerLoginRequestDto {
            email: "seller@example.com".to_string(),
            password: "wrong".to_string(),
        };

        assert!(SellerService::login_seller(&dto, &seller_config, &jwt_config).is_err());
    }

    #[test]
    fn wrong_email_is_rejected() {
        let (seller_config, jwt_config) = configs();
        let dto = SellerLoginRequestDto {
            email: "other@example.com".to_string(),
            password: "sellerpassword".to_string(),
        };

        assert!(SellerService::login_seller(&dto, &seller_config, &jwt_config).is_err());
    }
}
