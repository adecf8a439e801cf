/// Bearer-token extractors for route protection
///
/// Token issuance lives in an external auth collaborator; this service only
/// validates HS256 tokens it is handed. `AuthUser` requires a valid token,
/// `AdminUser` additionally requires the ADMIN role.
use actix_web::{
    dev::Payload,
    error::{ErrorForbidden, ErrorInternalServerError, ErrorUnauthorized},
    web, Error, FromRequest, HttpRequest,
};
use futures::future::{ready, Ready};
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

pub const ROLE_ADMIN: &str = "ADMIN";

/// Claims this service understands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: String,
    pub exp: usize,
}

/// Holds the decoding material; registered as app data at startup
#[derive(Clone)]
pub struct JwtValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtValidator {
    pub fn new(secret: &str) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::default(),
        }
    }

    pub fn decode(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        decode::<Claims>(token, &self.decoding_key, &self.validation).map(|data| data.claims)
    }
}

fn claims_from_request(req: &HttpRequest) -> Result<Claims, Error> {
    let validator = req
        .app_data::<web::Data<JwtValidator>>()
        .ok_or_else(|| ErrorInternalServerError("JWT validator not configured"))?;

    let header = req
        .headers()
        .get("Authorization")
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| ErrorUnauthorized("Missing Authorization header"))?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or_else(|| ErrorUnauthorized("Invalid Authorization header"))?;

    validator
        .decode(token)
        .map_err(|_| ErrorUnauthorized("Invalid or expired token"))
}

/// Any authenticated caller
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub subject: String,
    pub role: String,
}

impl FromRequest for AuthUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(claims_from_request(req).map(|claims| AuthUser {
            subject: claims.sub,
            role: claims.role,
        }))
    }
}

/// An authenticated caller holding the ADMIN role
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub subject: String,
}

impl FromRequest for AdminUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(claims_from_request(req).and_then(|claims| {
            if claims.role == ROLE_ADMIN {
                Ok(AdminUser {
                    subject: claims.sub,
                })
            } else {
                Err(ErrorForbidden("Admin role required"))
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};

    fn token(secret: &str, role: &str, exp_offset_secs: i64) -> String {
        let exp = (chrono::Utc::now().timestamp() + exp_offset_secs) as usize;
        encode(
            &Header::default(),
            &Claims {
                sub: "tester".into(),
                role: role.into(),
                exp,
            },
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn valid_token_decodes() {
        let validator = JwtValidator::new("secret");
        let claims = validator.decode(&token("secret", ROLE_ADMIN, 3600)).unwrap();
        assert_eq!(claims.role, ROLE_ADMIN);
        assert_eq!(claims.sub, "tester");
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let validator = JwtValidator::new("secret");
        assert!(validator.decode(&token("other", ROLE_ADMIN, 3600)).is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let validator = JwtValidator::new("secret");
        assert!(validator
            .decode(&token("secret", ROLE_ADMIN, -3600))
            .is_err());
    }
}
