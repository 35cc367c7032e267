use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::jwt::TokenRole;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SellerLoginRequestDto {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct SellerProfileResponse {
    pub email: String,
    pub role: TokenRole,
}
