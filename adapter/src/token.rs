use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use kernel::{
    model::{auth::AuthClaims, id::UserId, role::Role},
    repository::token::TokenIssuer,
};
use serde::{Deserialize, Serialize};
use shared::{
    config::AuthConfig,
    error::{AppError, AppResult},
};

/// Wire form of the session credential. Everything outside this module only
/// ever sees the encoded string and [`AuthClaims`].
#[derive(Debug, Serialize, Deserialize)]
struct TokenClaims {
    sub: UserId,
    role: Role,
    email: String,
    name: String,
    iat: i64,
    exp: i64,
}

pub struct JwtTokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: i64,
}

impl JwtTokenIssuer {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.token_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.token_secret.as_bytes()),
            ttl: config.token_ttl,
        }
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue(&self, claims: AuthClaims) -> AppResult<String> {
        let now = Utc::now().timestamp();
        let body = TokenClaims {
            sub: claims.user_id,
            role: claims.role,
            email: claims.email,
            name: claims.name,
            iat: now,
            exp: now + self.ttl,
        };
        encode(&Header::default(), &body, &self.encoding_key)
            .map_err(|e| AppError::InternalError(e.into()))
    }

    fn verify(&self, token: &str) -> AppResult<AuthClaims> {
        let data = decode::<TokenClaims>(token, &self.decoding_key, &Validation::default())
            .map_err(|_| AppError::UnauthenticatedError("Invalid token".into()))?;
        let TokenClaims {
            sub, role, email, name, ..
        } = data.claims;
        Ok(AuthClaims::new(sub, role, email, name))
    }
}
