//! Member model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Library member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Member {
    pub id: u64,
    pub name: String,
    pub email: String,
}

/// Create member request
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct CreateMember {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
}

/// Update member request
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateMember {
    pub name: Option<String>,
    pub email: Option<String>,
}
