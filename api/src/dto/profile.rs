use serde::{Deserialize, Serialize};
use validator::Validate;

use ot_core::ContactDetails;

/// Body of PUT /api/v1/profiles/me
///
/// Every field is optional; a missing or blank field clears the stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[serde(default, alias = "name")]
    #[validate(length(max = 255))]
    pub display_name: Option<String>,

    #[serde(default, alias = "preferred_email")]
    #[validate(length(max = 320))]
    pub contact_email: Option<String>,

    #[serde(default, alias = "preferred_phone")]
    #[validate(length(max = 64))]
    pub phone: Option<String>,

    #[serde(default, alias = "preferred_whatsapp")]
    #[validate(length(max = 64))]
    pub whatsapp: Option<String>,
}

impl From<UpdateProfileRequest> for ContactDetails {
    fn from(request: UpdateProfileRequest) -> Self {
        Self {
            display_name: request.display_name,
            contact_email: request.contact_email,
            phone: request.phone,
            whatsapp: request.whatsapp,
        }
    }
}
