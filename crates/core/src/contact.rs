use serde::Serialize;
use thiserror::Error;

/// What the sender typed into the contact form. Submission is simulated:
/// a valid draft is acknowledged and cleared, nothing is delivered.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct MessageDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub subject: String,
    pub body: String,
}

/// Why a draft cannot be sent. Checks run in field order; the first
/// failure is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("first name is required")]
    MissingFirstName,
    #[error("email is required")]
    MissingEmail,
    #[error("email address looks invalid")]
    InvalidEmail,
    #[error("subject is required")]
    MissingSubject,
    #[error("message is required")]
    MissingBody,
}

impl MessageDraft {
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.first_name.trim().is_empty() {
            return Err(DraftError::MissingFirstName);
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(DraftError::MissingEmail);
        }
        if !looks_like_email(email) {
            return Err(DraftError::InvalidEmail);
        }
        if self.subject.trim().is_empty() {
            return Err(DraftError::MissingSubject);
        }
        if self.body.trim().is_empty() {
            return Err(DraftError::MissingBody);
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Loose shape check: something before and after a single '@', with a dot
/// somewhere in the domain part. Deliverability is out of scope.
fn looks_like_email(s: &str) -> bool {
    let mut parts = s.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let Some(domain) = parts.next() else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> MessageDraft {
        MessageDraft {
            first_name: "John".into(),
            last_name: "Doe".into(),
            email: "john@example.com".into(),
            subject: "Project Collaboration".into(),
            body: "Tell me about your project".into(),
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert_eq!(valid_draft().validate(), Ok(()));
    }

    #[test]
    fn last_name_is_optional() {
        let mut draft = valid_draft();
        draft.last_name.clear();
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn first_failure_wins_in_field_order() {
        let draft = MessageDraft::default();
        assert_eq!(draft.validate(), Err(DraftError::MissingFirstName));

        let mut draft = valid_draft();
        draft.email = "   ".into();
        draft.body.clear();
        assert_eq!(draft.validate(), Err(DraftError::MissingEmail));
    }

    #[test]
    fn rejects_malformed_emails() {
        for bad in ["plainaddress", "@example.com", "a@b", "a@.com", "a@com."] {
            let mut draft = valid_draft();
            draft.email = bad.into();
            assert_eq!(draft.validate(), Err(DraftError::InvalidEmail), "{bad}");
        }
    }

    #[test]
    fn clear_resets_every_field() {
        let mut draft = valid_draft();
        draft.clear();
        assert_eq!(draft, MessageDraft::default());
    }

    #[test]
    fn errors_render_user_facing_messages() {
        assert_eq!(
            DraftError::InvalidEmail.to_string(),
            "email address looks invalid"
        );
    }
}
