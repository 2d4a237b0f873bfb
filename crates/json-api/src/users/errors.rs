//! User Errors

use salvo::http::StatusError;
use tracing::error;

use larder_app::domain::{subscriptions::SubscriptionsServiceError, users::UsersServiceError};

pub(crate) fn user_status_error(error: UsersServiceError) -> StatusError {
    match error {
        UsersServiceError::NotFound => StatusError::not_found().brief("User not found"),
        UsersServiceError::AlreadyExists => StatusError::conflict().brief("User already exists"),
        UsersServiceError::Validation(message) => StatusError::bad_request().brief(message),
        UsersServiceError::InvalidData => StatusError::bad_request().brief("Invalid user payload"),
        UsersServiceError::Sql(source) => {
            error!("user storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}

pub(crate) fn subscription_status_error(error: SubscriptionsServiceError) -> StatusError {
    match error {
        SubscriptionsServiceError::AlreadyExists => {
            StatusError::conflict().brief("Already subscribed to this author")
        }
        SubscriptionsServiceError::NotFound => {
            StatusError::not_found().brief("Author or subscription not found")
        }
        SubscriptionsServiceError::Validation(message) => StatusError::bad_request().brief(message),
        SubscriptionsServiceError::Sql(source) => {
            error!("subscription storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
