use std::rc::Rc;
use yew::prelude::*;

use crate::registration::payload::RegistrationForm;

/// State of one pre-registration dialog. Owned by the dialog component.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegistrationDialogState {
    pub open: bool,
    pub loading: bool,
    pub form: RegistrationForm,
}

#[derive(Debug, PartialEq)]
pub enum RegistrationAction {
    Open,
    Close,
    SetEmail(String),
    SetFullName(String),
    SubmitStarted,
    SubmitSucceeded,
    SubmitFailed,
}

impl RegistrationDialogState {
    /// Form to send, or `None` while a request is in flight or a required
    /// field is empty.
    pub fn begin_submission(&self) -> Option<RegistrationForm> {
        self.can_submit().then(|| self.form.clone())
    }

    /// Single in-flight guard, shared by the submit handler and the reducer.
    fn can_submit(&self) -> bool {
        !self.loading && self.form.is_complete()
    }

    fn apply(&mut self, action: RegistrationAction) {
        match action {
            RegistrationAction::Open => self.open = true,
            RegistrationAction::Close => {
                self.open = false;
                self.form = RegistrationForm::default();
            }
            RegistrationAction::SetEmail(email) => self.form.email = email,
            RegistrationAction::SetFullName(full_name) => self.form.full_name = full_name,
            RegistrationAction::SubmitStarted => self.loading = true,
            RegistrationAction::SubmitSucceeded => {
                self.loading = false;
                self.open = false;
                self.form = RegistrationForm::default();
            }
            RegistrationAction::SubmitFailed => self.loading = false,
        }
    }
}

impl Reducible for RegistrationDialogState {
    type Action = RegistrationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        if matches!(action, RegistrationAction::SubmitStarted) && !self.can_submit() {
            return self;
        }
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce_all(actions: Vec<RegistrationAction>) -> Rc<RegistrationDialogState> {
        actions
            .into_iter()
            .fold(Rc::new(RegistrationDialogState::default()), |state, action| {
                state.reduce(action)
            })
    }

    fn filled() -> Vec<RegistrationAction> {
        vec![
            RegistrationAction::Open,
            RegistrationAction::SetEmail("maria@example.com".to_string()),
            RegistrationAction::SetFullName("Maria Souza".to_string()),
        ]
    }

    #[test]
    fn success_closes_dialog_and_clears_fields() {
        let mut actions = filled();
        actions.push(RegistrationAction::SubmitStarted);
        actions.push(RegistrationAction::SubmitSucceeded);
        let state = reduce_all(actions);

        assert!(!state.open);
        assert!(!state.loading);
        assert_eq!(state.form.email, "");
        assert_eq!(state.form.full_name, "");
    }

    #[test]
    fn failure_keeps_dialog_open_with_values() {
        let mut actions = filled();
        actions.push(RegistrationAction::SubmitStarted);
        actions.push(RegistrationAction::SubmitFailed);
        let state = reduce_all(actions);

        assert!(state.open);
        assert!(!state.loading);
        assert_eq!(state.form.email, "maria@example.com");
        assert_eq!(state.form.full_name, "Maria Souza");
        assert!(state.begin_submission().is_some());
    }

    #[test]
    fn submit_while_loading_is_ignored() {
        let mut actions = filled();
        actions.push(RegistrationAction::SubmitStarted);
        let state = reduce_all(actions);

        assert!(state.loading);
        assert_eq!(state.begin_submission(), None);

        let again = state.clone().reduce(RegistrationAction::SubmitStarted);
        assert!(Rc::ptr_eq(&state, &again));
    }

    #[test]
    fn incomplete_form_is_not_submitted() {
        let state = reduce_all(vec![
            RegistrationAction::Open,
            RegistrationAction::SetEmail("maria@example.com".to_string()),
        ]);
        assert_eq!(state.begin_submission(), None);

        let started = state.clone().reduce(RegistrationAction::SubmitStarted);
        assert!(Rc::ptr_eq(&state, &started));
        assert!(!started.loading);
    }

    #[test]
    fn whitespace_full_name_is_submitted() {
        let state = reduce_all(vec![
            RegistrationAction::Open,
            RegistrationAction::SetEmail("maria@example.com".to_string()),
            RegistrationAction::SetFullName("   ".to_string()),
        ]);
        let form = state.begin_submission().expect("form is submitted");
        assert_eq!(form.full_name, "   ");

        let started = state.reduce(RegistrationAction::SubmitStarted);
        assert!(started.loading);
    }

    #[test]
    fn closing_discards_form() {
        let mut actions = filled();
        actions.push(RegistrationAction::Close);
        let state = reduce_all(actions);

        assert!(!state.open);
        assert_eq!(state.form, RegistrationForm::default());
    }
}
