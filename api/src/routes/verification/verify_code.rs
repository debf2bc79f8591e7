use actix_web::{web, HttpResponse};

use ot_core::{MailDispatchTrait, ProfileRepository, VerificationRecordRepository};
use ot_shared::SuccessResponse;

use crate::dto::VerifyCodeRequest;
use crate::handlers::ApiError;
use crate::middleware::AuthContext;
use crate::routes::AppState;

/// Handler for POST /api/v1/verification/verify-code
///
/// Checks the code against the caller's outstanding record and marks the
/// caller's profile verified on a match.
///
/// # Errors
///
/// - `invalid_argument`: empty code
/// - `failed_precondition`: no code was requested
/// - `deadline_exceeded`: the code expired
/// - `permission_denied`: wrong code, or too many attempts
pub async fn verify_code<M, V, P>(
    auth: AuthContext,
    state: web::Data<AppState<M, V, P>>,
    request: web::Json<VerifyCodeRequest>,
) -> Result<HttpResponse, ApiError>
where
    M: MailDispatchTrait + 'static,
    V: VerificationRecordRepository + 'static,
    P: ProfileRepository + 'static,
{
    state
        .verification_service
        .verify_code(&auth.caller, &request.code)
        .await?;

    Ok(HttpResponse::Ok().json(SuccessResponse::ok()))
}
