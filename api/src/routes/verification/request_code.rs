use actix_web::{web, HttpResponse};
use validator::Validate;

use ot_core::{
    MailDispatchTrait, ProfileRepository, VerificationError, VerificationRecordRepository,
};
use ot_shared::SuccessResponse;

use crate::dto::RequestCodeRequest;
use crate::handlers::ApiError;
use crate::middleware::AuthContext;
use crate::routes::AppState;

/// Handler for POST /api/v1/verification/request-code
///
/// Emails a fresh code to the given institutional address and replaces any
/// outstanding code of the caller.
///
/// # Request Body
///
/// ```json
/// { "email": "jane.doe@some.ox.ac.uk" }
/// ```
///
/// # Response
///
/// `200 {"success": true}`, or an error body: `invalid_argument` for an
/// address outside the domain, `internal` when the email could not be sent.
pub async fn request_code<M, V, P>(
    auth: AuthContext,
    state: web::Data<AppState<M, V, P>>,
    request: web::Json<RequestCodeRequest>,
) -> Result<HttpResponse, ApiError>
where
    M: MailDispatchTrait + 'static,
    V: VerificationRecordRepository + 'static,
    P: ProfileRepository + 'static,
{
    let request = request.into_inner();
    if request.validate().is_err() {
        return Err(VerificationError::InvalidEmail.into());
    }

    state
        .verification_service
        .issue_code(&auth.caller, &request.email)
        .await?;

    Ok(HttpResponse::Ok().json(SuccessResponse::ok()))
}
