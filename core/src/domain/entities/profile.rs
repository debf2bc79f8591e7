//! User profile entity and its verification sub-state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Institutional email verification state stored on a profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileVerificationState {
    /// False until a successful verification
    pub verified: bool,

    /// When the successful verification happened
    pub verified_at: Option<DateTime<Utc>>,

    /// Address that was verified
    pub verified_email: Option<String>,
}

impl ProfileVerificationState {
    /// State written by a successful verification
    pub fn verified(email: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            verified: true,
            verified_at: Some(at),
            verified_email: Some(email.into()),
        }
    }
}

/// Marketplace user profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Caller identity owning this profile
    pub user_id: String,

    /// Name shown to counterparties
    pub display_name: Option<String>,

    /// Address counterparties may contact
    pub contact_email: Option<String>,

    /// Phone number counterparties may contact
    pub phone: Option<String>,

    /// WhatsApp number counterparties may contact
    #[serde(default)]
    pub whatsapp: Option<String>,

    /// Verification state
    #[serde(default)]
    pub verification: ProfileVerificationState,
}

impl UserProfile {
    /// Creates an empty, unverified profile
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            display_name: None,
            contact_email: None,
            phone: None,
            whatsapp: None,
            verification: ProfileVerificationState::default(),
        }
    }

    /// Profile carrying only the given contact details
    pub fn with_contact(user_id: impl Into<String>, details: ContactDetails) -> Self {
        let details = details.normalized();
        Self {
            display_name: details.display_name,
            contact_email: details.contact_email,
            phone: details.phone,
            whatsapp: details.whatsapp,
            ..Self::new(user_id)
        }
    }

    pub fn is_verified(&self) -> bool {
        self.verification.verified
    }

    /// Contact details revealed to verified viewers
    pub fn contact_card(&self) -> ContactCard {
        ContactCard {
            user_id: self.user_id.clone(),
            display_name: self.display_name.clone(),
            contact_email: self.contact_email.clone(),
            phone: self.phone.clone(),
            whatsapp: self.whatsapp.clone(),
            verified: self.verification.verified,
        }
    }
}

/// Subset of a profile shown to another verified user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactCard {
    pub user_id: String,
    pub display_name: Option<String>,
    pub contact_email: Option<String>,
    pub phone: Option<String>,
    pub whatsapp: Option<String>,
    pub verified: bool,
}

/// Contact details an owner saves on their own profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub display_name: Option<String>,
    pub contact_email: Option<String>,
    pub phone: Option<String>,
    pub whatsapp: Option<String>,
}

impl ContactDetails {
    /// Trims every field; blank values become `None`
    pub fn normalized(self) -> Self {
        fn clean(value: Option<String>) -> Option<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        }

        Self {
            display_name: clean(self.display_name),
            contact_email: clean(self.contact_email),
            phone: clean(self.phone),
            whatsapp: clean(self.whatsapp),
        }
    }
}
