use actix_web::{web, HttpResponse};

use ot_core::{MailDispatchTrait, ProfileRepository, VerificationRecordRepository};

use crate::handlers::ApiError;
use crate::middleware::AuthContext;
use crate::routes::AppState;

/// Handler for GET /api/v1/verification/status
pub async fn status<M, V, P>(
    auth: AuthContext,
    state: web::Data<AppState<M, V, P>>,
) -> Result<HttpResponse, ApiError>
where
    M: MailDispatchTrait + 'static,
    V: VerificationRecordRepository + 'static,
    P: ProfileRepository + 'static,
{
    let status = state.verification_service.status(&auth.caller).await?;
    Ok(HttpResponse::Ok().json(status))
}
