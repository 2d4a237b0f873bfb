//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::{Depot, StatusError};

use larder_app::domain::users::records::UserUuid;

const USER_UUID_DEPOT_KEY: &str = "user_uuid";

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    /// Record the authenticated user for downstream handlers.
    fn insert_user_uuid(&mut self, user: UserUuid);

    /// The authenticated user, or 401 when the request is anonymous.
    fn user_uuid_or_401(&self) -> Result<UserUuid, StatusError>;

    /// The authenticated user when there is one.
    fn viewer(&self) -> Option<UserUuid>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn insert_user_uuid(&mut self, user: UserUuid) {
        self.insert(USER_UUID_DEPOT_KEY, user);
    }

    fn user_uuid_or_401(&self) -> Result<UserUuid, StatusError> {
        self.viewer().ok_or_else(|| {
            StatusError::unauthorized().brief("Authentication credentials were not provided")
        })
    }

    fn viewer(&self) -> Option<UserUuid> {
        self.get::<UserUuid>(USER_UUID_DEPOT_KEY).ok().copied()
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;
    use uuid::Uuid;

    use super::*;

    #[test]
    fn anonymous_depot_has_no_viewer() {
        let depot = Depot::new();

        assert_eq!(depot.viewer(), None);
        assert_eq!(
            depot.user_uuid_or_401().map_err(|error| error.code).err(),
            Some(StatusCode::UNAUTHORIZED)
        );
    }

    #[test]
    fn inserted_user_is_the_viewer() {
        let user = UserUuid::from_uuid(Uuid::now_v7());
        let mut depot = Depot::new();

        depot.insert_user_uuid(user);

        assert_eq!(depot.viewer(), Some(user));
        assert_eq!(depot.user_uuid_or_401().ok(), Some(user));
    }

    #[test]
    fn missing_state_is_a_500() {
        let depot = Depot::new();

        assert_eq!(
            depot.obtain_or_500::<String>().map_err(|error| error.code).err(),
            Some(StatusCode::INTERNAL_SERVER_ERROR)
        );
    }
}
