//! Resolve Short Link Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, oapi::extract::PathParam, prelude::*};

use larder_app::domain::short_links::ShortLinksServiceError;

use crate::{
    extensions::*,
    links::errors::into_status_error,
    observability::{ShortLinkOutcome, observe_short_link_resolution},
    state::State,
};

/// Resolve Short Link Handler
///
/// Redirects to the public path of the recipe the token was issued for.
#[endpoint(
    tags("links"),
    summary = "Resolve Short Link",
    responses(
        (status_code = StatusCode::FOUND, description = "Redirect to the recipe"),
        (status_code = StatusCode::NOT_FOUND, description = "Unknown token"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    token: PathParam<String>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let path = match state.app.short_links.resolve(token.into_inner()).await {
        Ok(path) => path,
        Err(error) => {
            observe_short_link_resolution(match error {
                ShortLinksServiceError::NotFound => ShortLinkOutcome::NotFound,
                _ => ShortLinkOutcome::Failed,
            });

            return Err(into_status_error(error));
        }
    };

    res.add_header(LOCATION, path, true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::FOUND);

    observe_short_link_resolution(ShortLinkOutcome::Redirected);

    Ok(())
}
