use actix_web::{web, HttpResponse};

use ot_core::{MailDispatchTrait, ProfileRepository, VerificationRecordRepository};

use crate::handlers::ApiError;
use crate::middleware::AuthContext;
use crate::routes::AppState;

/// Handler for GET /api/v1/profiles/{user_id}/contact
///
/// Only callers with a verified institutional email see contact details.
pub async fn contact<M, V, P>(
    auth: AuthContext,
    state: web::Data<AppState<M, V, P>>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError>
where
    M: MailDispatchTrait + 'static,
    V: VerificationRecordRepository + 'static,
    P: ProfileRepository + 'static,
{
    let owner_id = path.into_inner();
    let card = state
        .contact_service
        .view_contact(&auth.caller, &owner_id)
        .await?;

    Ok(HttpResponse::Ok().json(card))
}
