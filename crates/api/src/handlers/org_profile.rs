//! Handlers for the organization display profile.
//!
//! Both endpoints run inside an authenticated session. Reading needs nothing
//! more; updating requires the caller to administer the session's org.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use uninbox_core::error::CoreError;
use uninbox_core::org_profile::{self, GetOrgProfileInput, SetOrgProfileInput};

use crate::error::AppResult;
use crate::middleware::auth::Session;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/org/profile
///
/// Read the profile of the org named by `?org_public_id=`, or of the
/// session's org when omitted. `org_profile` is `null` when nothing matches.
pub async fn get_org_profile(
    Session(ctx): Session,
    State(state): State<AppState>,
    query: Result<Query<GetOrgProfileInput>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(input) = query?;

    let output = org_profile::get_org_profile(state.org_profiles.as_ref(), &ctx, input).await?;

    Ok(Json(DataResponse { data: output }))
}

/// PUT /api/v1/org/profile
///
/// Set the session org's name and, if given, its avatar. Admin only.
pub async fn set_org_profile(
    Session(ctx): Session,
    State(state): State<AppState>,
    body: Result<Json<SetOrgProfileInput>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = body?;
    let avatar_changed = input.org_avatar_id.as_deref().is_some_and(|id| !id.is_empty());

    let result = org_profile::set_org_profile(
        state.org_profiles.as_ref(),
        state.org_admins.as_ref(),
        &ctx,
        input,
    )
    .await;

    if let Err(CoreError::Unauthorized(_)) = &result {
        tracing::warn!(
            user_id = ?ctx.user_id,
            org_id = ?ctx.org.map(|o| o.id),
            "Org profile update denied",
        );
    }
    let output = result?;

    tracing::info!(
        user_id = ?ctx.user_id,
        org_id = ?ctx.org.map(|o| o.id),
        avatar_changed,
        "Org profile updated",
    );

    Ok(Json(DataResponse { data: output }))
}
