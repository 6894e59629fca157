use gloo_net::http::Request;
use log::info;
use thiserror::Error;

use crate::config;
use crate::messages;
use crate::registration::payload::RegistrationPayload;

#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("could not encode registration payload: {0}")]
    Encode(gloo_net::Error),
    #[error("registration request failed: {0}")]
    Network(gloo_net::Error),
    #[error("registration rejected with status {0}")]
    Status(u16),
    #[error("registration response was not JSON: {0}")]
    Body(gloo_net::Error),
}

impl RegistrationError {
    /// Every cause collapses into the same message for the user.
    pub fn user_message(&self) -> &'static str {
        messages::PRE_REGISTRATION_FAILURE
    }
}

pub async fn post_registration(payload: &RegistrationPayload) -> Result<(), RegistrationError> {
    let url = config::users_endpoint();
    info!("Posting pre-registration for {}", payload.username);

    let response = Request::post(&url)
        .header("Content-Type", "application/json")
        .json(payload)
        .map_err(RegistrationError::Encode)?
        .send()
        .await
        .map_err(RegistrationError::Network)?;

    check_status(response.status())?;

    // The body is only checked for being JSON.
    response
        .json::<serde_json::Value>()
        .await
        .map_err(RegistrationError::Body)?;

    Ok(())
}

/// Any 2xx status is accepted.
pub fn check_status(status: u16) -> Result<(), RegistrationError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(RegistrationError::Status(status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_error_shows_the_same_message() {
        let errors = [RegistrationError::Status(400), RegistrationError::Status(503)];
        for err in errors {
            assert_eq!(err.user_message(), messages::PRE_REGISTRATION_FAILURE);
        }
    }

    #[test]
    fn success_range_is_accepted() {
        for status in [200, 201, 204, 299] {
            assert!(check_status(status).is_ok(), "status {}", status);
        }
    }

    #[test]
    fn other_statuses_are_rejected_with_their_code() {
        for status in [199, 301, 400, 404, 409, 500, 503] {
            match check_status(status) {
                Err(RegistrationError::Status(code)) => assert_eq!(code, status),
                other => panic!("status {} gave {:?}", status, other),
            }
        }
    }

    #[test]
    fn status_error_names_the_code() {
        assert_eq!(
            RegistrationError::Status(409).to_string(),
            "registration rejected with status 409"
        );
    }
}
