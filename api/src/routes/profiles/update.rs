use actix_web::{web, HttpResponse};
use validator::Validate;

use ot_core::{MailDispatchTrait, ProfileRepository, VerificationRecordRepository};

use crate::dto::UpdateProfileRequest;
use crate::handlers::ApiError;
use crate::middleware::AuthContext;
use crate::routes::AppState;

/// Handler for PUT /api/v1/profiles/me
///
/// Saves the caller's contact details and returns their own contact card.
/// Verification fields cannot be set here.
pub async fn update_profile<M, V, P>(
    auth: AuthContext,
    state: web::Data<AppState<M, V, P>>,
    request: web::Json<UpdateProfileRequest>,
) -> Result<HttpResponse, ApiError>
where
    M: MailDispatchTrait + 'static,
    V: VerificationRecordRepository + 'static,
    P: ProfileRepository + 'static,
{
    let request = request.into_inner();
    if request.validate().is_err() {
        return Err(ApiError::invalid_argument("Contact details are too long."));
    }

    let card = state
        .contact_service
        .update_contact(&auth.caller, request.into())
        .await?;

    Ok(HttpResponse::Ok().json(card))
}
