use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
  pub sub: String,
  pub exp: usize,
  pub user_id: i32,
}

/// Issues a signed session token for the given user, valid for 24 hours.
pub fn issue_token(user_id: i32, email: &str) -> Result<String, jsonwebtoken::errors::Error> {
  let expiration = (Utc::now() + Duration::hours(24)).timestamp() as usize;

  let claims = Claims {
    sub: email.to_string(),
    exp: expiration,
    user_id,
  };

  encode_jwt(claims)
}

pub fn encode_jwt(claims: Claims) -> Result<String, jsonwebtoken::errors::Error> {
  let secret = std::env::var("JWT_SECRET").expect("JWT_SECRET environment variable must be set.");

  encode(&Header::default(), &claims, &EncodingKey::from_secret(secret.as_ref()))
}

pub fn decode_jwt(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
  let secret = std::env::var("JWT_SECRET").expect("JWT_SECRET environment variable must be set.");

  let token_data = decode::<Claims>(
    token,
    &DecodingKey::from_secret(secret.as_ref()),
    &Validation::default(),
  )?;

  Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
  use super::*;
  use serial_test::serial;

  #[test]
  #[serial]
  fn test_issued_token_round_trips() {
    std::env::set_var("JWT_SECRET", "test-secret");

    let token = issue_token(42, "a@x.com").expect("issue token");
    let claims = decode_jwt(&token).expect("decode token");

    assert_eq!(claims.user_id, 42);
    assert_eq!(claims.sub, "a@x.com");
    assert!(claims.exp > Utc::now().timestamp() as usize);
  }

  #[test]
  #[serial]
  fn test_tampered_token_rejected() {
    std::env::set_var("JWT_SECRET", "test-secret");

    let token = issue_token(42, "a@x.com").expect("issue token");
    let mut tampered = token.clone();
    tampered.pop();

    assert!(decode_jwt(&tampered).is_err());
  }
}
