//! Form session state machines for the modal add/update/delete flows.
//!
//! One parametrized session type replaces the hand-copied per-flow state
//! blocks: a session moves Closed -> Open -> ConfirmOpen -> Submitting ->
//! Closed, with a parallel result-message sub-state that opens when a
//! submission completes.

use contracts::shared::validation::{FieldErrors, ValidatedInput};

/// Dismissible result message shown after a submission settles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionMessage {
    pub open: bool,
    pub text: String,
    pub status: bool,
}

impl SessionMessage {
    pub fn show(&mut self, text: String, status: bool) {
        self.open = true;
        self.text = text;
        self.status = status;
    }

    pub fn dismiss(&mut self) {
        self.open = false;
    }
}

/// Session state for a form-backed flow (add or update).
#[derive(Debug, Clone, Default)]
pub struct FormSession<I: ValidatedInput> {
    pub open: bool,
    pub confirm_open: bool,
    pub saving: bool,
    pub input: I,
    pub errors: I::Errors,
    pub message: SessionMessage,
}

impl<I: ValidatedInput> FormSession<I> {
    /// Closed -> Open with an empty input buffer.
    pub fn open(&mut self) {
        self.input = I::default();
        self.errors = I::Errors::default();
        self.open = true;
    }

    /// Closed -> Open with a pre-seeded input buffer (the update flow seeds
    /// from the locally cached row, it never re-fetches).
    pub fn open_with(&mut self, input: I) {
        self.input = input;
        self.errors = I::Errors::default();
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Recompute the error buffer from the current input. No transition.
    pub fn validate(&mut self) {
        self.errors = self.input.validate();
    }

    /// Open -> ConfirmOpen, gated on a clean error buffer. When validation
    /// fails the session stays Open with the errors populated for display.
    pub fn request_confirm(&mut self) -> bool {
        self.validate();
        if self.errors.is_clean() {
            self.confirm_open = true;
            true
        } else {
            false
        }
    }

    pub fn cancel_confirm(&mut self) {
        self.confirm_open = false;
    }

    /// ConfirmOpen -> Submitting. Returns false when a submission is already
    /// in flight, so a double-click on the confirm button cannot double-post.
    pub fn begin_submit(&mut self) -> bool {
        if self.saving {
            return false;
        }
        self.saving = true;
        true
    }

    /// Submitting -> Closed. Runs unconditionally once the remote call
    /// settles: closes the confirmation and the dialog, resets the input
    /// buffer and shows the result message, success and failure alike.
    pub fn complete_submit(&mut self, text: String, status: bool) {
        self.saving = false;
        self.confirm_open = false;
        self.open = false;
        self.input = I::default();
        self.errors = I::Errors::default();
        self.message.show(text, status);
    }

    pub fn dismiss_message(&mut self) {
        self.message.dismiss();
    }
}

/// Session state for the delete flow: no form, only a confirmation and a
/// result message.
#[derive(Debug, Clone, Default)]
pub struct DeleteSession {
    pub confirm_open: bool,
    pub saving: bool,
    pub message: SessionMessage,
}

impl DeleteSession {
    pub fn open_confirm(&mut self) {
        self.confirm_open = true;
    }

    pub fn cancel_confirm(&mut self) {
        self.confirm_open = false;
    }

    pub fn begin_submit(&mut self) -> bool {
        if self.saving {
            return false;
        }
        self.saving = true;
        true
    }

    pub fn complete_submit(&mut self, text: String, status: bool) {
        self.saving = false;
        self.confirm_open = false;
        self.message.show(text, status);
    }

    pub fn dismiss_message(&mut self) {
        self.message.dismiss();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_collection::aggregate::{CollectionDto, CollectionField};

    fn valid_input() -> CollectionDto {
        CollectionDto {
            name: "Ammonites".to_string(),
            rack_id: "2".to_string(),
            description: "Jurassic ammonites".to_string(),
        }
    }

    #[test]
    fn test_confirm_gate_blocks_invalid_input() {
        let mut session: FormSession<CollectionDto> = FormSession::default();
        session.open();
        session.input.set_field(CollectionField::Name, "abc".to_string());

        assert!(!session.request_confirm());
        assert!(!session.confirm_open);
        assert!(session.open);
        assert_eq!(session.errors.name, "The name must be at least 4 characters");
        assert_eq!(session.errors.rack_id, "racks id is required");
        assert_eq!(session.errors.description, "description is required");
    }

    #[test]
    fn test_confirm_gate_opens_when_all_errors_empty() {
        let mut session: FormSession<CollectionDto> = FormSession::default();
        session.open_with(valid_input());

        assert!(session.request_confirm());
        assert!(session.confirm_open);
    }

    #[test]
    fn test_complete_submit_resets_regardless_of_outcome() {
        let mut session: FormSession<CollectionDto> = FormSession::default();
        session.open_with(valid_input());
        session.request_confirm();
        assert!(session.begin_submit());

        session.complete_submit("could not create collection".to_string(), false);

        // Failure still closes everything and clears the input buffer.
        assert!(!session.open);
        assert!(!session.confirm_open);
        assert!(!session.saving);
        assert_eq!(session.input, CollectionDto::default());
        assert!(session.message.open);
        assert!(!session.message.status);
        assert_eq!(session.message.text, "could not create collection");
    }

    #[test]
    fn test_begin_submit_guards_double_click() {
        let mut session: FormSession<CollectionDto> = FormSession::default();
        session.open_with(valid_input());
        session.request_confirm();

        assert!(session.begin_submit());
        assert!(!session.begin_submit());
    }

    #[test]
    fn test_open_resets_previous_errors() {
        let mut session: FormSession<CollectionDto> = FormSession::default();
        session.open();
        session.request_confirm();
        assert!(!session.errors.name.is_empty());

        session.close();
        session.open();
        assert!(session.errors.name.is_empty());
    }

    #[test]
    fn test_message_dismiss() {
        let mut session: FormSession<CollectionDto> = FormSession::default();
        session.complete_submit("collection created".to_string(), true);
        assert!(session.message.open);
        session.dismiss_message();
        assert!(!session.message.open);
        // text survives dismissal; only visibility changes
        assert_eq!(session.message.text, "collection created");
    }

    #[test]
    fn test_delete_session_flow() {
        let mut session = DeleteSession::default();
        session.open_confirm();
        assert!(session.confirm_open);
        assert!(session.begin_submit());
        assert!(!session.begin_submit());

        session.complete_submit("collection deleted".to_string(), true);
        assert!(!session.confirm_open);
        assert!(!session.saving);
        assert!(session.message.open);
        assert!(session.message.status);
    }
}
