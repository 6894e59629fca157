pub mod client;
pub mod payload;
pub mod state;

use log::{info, warn};

use crate::messages;
use client::{post_registration, RegistrationError};
use payload::{RegistrationForm, RegistrationPayload};
use state::RegistrationAction;

/// Derives the payload from what the user typed and posts it once.
pub async fn submit_registration(form: RegistrationForm) -> Result<(), RegistrationError> {
    let payload = RegistrationPayload::from_form(&form, &mut rand::thread_rng());

    match post_registration(&payload).await {
        Ok(()) => {
            info!("Pre-registration accepted for {}", payload.username);
            Ok(())
        }
        Err(e) => {
            warn!("Pre-registration failed: {}", e);
            Err(e)
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum Notice {
    Success(&'static str),
    Failure(&'static str),
}

/// What the dialog does once a submission settles: which toast to show and
/// which action to dispatch.
#[derive(Debug, PartialEq)]
pub struct Settlement {
    pub notice: Notice,
    pub action: RegistrationAction,
}

pub fn settle(result: &Result<(), RegistrationError>) -> Settlement {
    match result {
        Ok(()) => Settlement {
            notice: Notice::Success(messages::PRE_REGISTRATION_SUCCESS),
            action: RegistrationAction::SubmitSucceeded,
        },
        Err(e) => Settlement {
            notice: Notice::Failure(e.user_message()),
            action: RegistrationAction::SubmitFailed,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::client::check_status;
    use super::state::RegistrationDialogState;
    use std::rc::Rc;
    use yew::prelude::Reducible;

    fn in_flight() -> Rc<RegistrationDialogState> {
        [
            RegistrationAction::Open,
            RegistrationAction::SetEmail("joao@example.com".to_string()),
            RegistrationAction::SetFullName("João da Silva".to_string()),
            RegistrationAction::SubmitStarted,
        ]
        .into_iter()
        .fold(Rc::new(RegistrationDialogState::default()), |s, a| s.reduce(a))
    }

    #[test]
    fn accepted_submission_toasts_success_and_closes() {
        let settlement = settle(&check_status(201));
        assert_eq!(settlement.notice, Notice::Success(messages::PRE_REGISTRATION_SUCCESS));

        let state = in_flight().reduce(settlement.action);
        assert!(!state.open);
        assert!(!state.loading);
        assert_eq!(state.form, RegistrationForm::default());
    }

    #[test]
    fn rejected_submission_toasts_failure_and_keeps_values() {
        for status in [400, 500] {
            let settlement = settle(&check_status(status));
            assert_eq!(settlement.notice, Notice::Failure(messages::PRE_REGISTRATION_FAILURE));
            assert_eq!(settlement.action, RegistrationAction::SubmitFailed);

            let state = in_flight().reduce(settlement.action);
            assert!(state.open);
            assert!(!state.loading);
            assert_eq!(state.form.email, "joao@example.com");
            assert_eq!(state.form.full_name, "João da Silva");
        }
    }
}
