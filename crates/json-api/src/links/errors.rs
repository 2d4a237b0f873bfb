//! Short Link Errors

use salvo::http::StatusError;
use tracing::{error, warn};

use larder_app::domain::short_links::ShortLinksServiceError;

pub(crate) fn into_status_error(error: ShortLinksServiceError) -> StatusError {
    match error {
        ShortLinksServiceError::NotFound => StatusError::not_found().brief("Short link not found"),
        ShortLinksServiceError::Validation(message) => StatusError::bad_request().brief(message),
        ShortLinksServiceError::ResourceExhausted { attempts } => {
            warn!(attempts, "short link token space exhausted");

            StatusError::service_unavailable().brief("Could not allocate a short link, try again")
        }
        ShortLinksServiceError::Sql(source) => {
            error!("short link storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
