use chrono::{Duration, Utc};
use jsonwebtoken::{
  decode, encode, errors::Error, DecodingKey, EncodingKey, Header, TokenData, Validation,
};

pub const TOKEN_LIFETIME_DAYS: i64 = 30;

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginAttempt {
  pub email: String,
  pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
  pub user_id: i32,
  pub exp: usize,
}

pub fn encode_jwt(user_id: i32, exp_days: i64, secret: &str) -> Result<String, Error> {
  let exp = (Utc::now() + Duration::days(exp_days)).timestamp() as usize;
  let claims = Claims { user_id, exp };
  encode(
    &Header::default(),
    &claims,
    &EncodingKey::from_secret(secret.as_bytes()),
  )
}

pub fn verify_jwt(token: &str, secret: &str) -> Result<TokenData<Claims>, Error> {
  decode::<Claims>(
    token,
    &DecodingKey::from_secret(secret.as_bytes()),
    &Validation::default(),
  )
}
