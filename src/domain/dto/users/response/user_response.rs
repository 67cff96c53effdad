use serde::{Deserialize, Serialize};
use crate::config::OAuthProvider;
use crate::domain::entities::users::User;

/// 로그인 응답 DTO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserLoginResponse {
    /// 액세스 토큰
    pub token: String,
    pub user_id: i64,
    pub nickname: String,
}

impl UserLoginResponse {
    pub fn new(token: String, user: User) -> Self {
        Self {
            token,
            user_id: user.id,
            nickname: user.nickname,
        }
    }
}

/// 내 정보 응답 DTO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfoResponse {
    pub user_id: i64,
    pub nickname: String,
    pub oauth_provider: OAuthProvider,
}

impl From<User> for UserInfoResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            nickname,
            oauth_provider,
            ..
        } = user;

        Self {
            user_id: id,
            nickname,
            oauth_provider,
        }
    }
}
