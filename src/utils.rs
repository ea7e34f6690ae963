use chrono::{DateTime, Utc};
use regex::Regex;
use sha2::{Digest, Sha256};
use validator::ValidationError;

pub mod error;
pub mod jwt;

pub fn hash_password(password: &str) -> String {
  let mut hasher = Sha256::new();
  hasher.update(password.as_bytes());
  let result = hasher.finalize();
  format!("{:x}", result)
}

pub fn validate_time_format(time: &str) -> Result<(), ValidationError> {
  let time_regex = Regex::new(r"^([0-1]?[0-9]|2[0-3]):[0-5][0-9]$").unwrap();

  if !time_regex.is_match(time) {
    return Err(ValidationError::new("Time must be in HH:MM format"));
  }

  Ok(())
}

pub fn validate_future_date(date: &DateTime<Utc>) -> Result<(), ValidationError> {
  if *date <= Utc::now() {
    return Err(ValidationError::new("Date must be in the future"));
  }

  Ok(())
}
