//! Download Shopping List Handler

use std::sync::Arc;

use salvo::{http::header::CONTENT_DISPOSITION, prelude::*};
use tracing::error;

use larder_app::domain::shopping_list::ShoppingListServiceError;

use crate::{extensions::*, state::State};

const ATTACHMENT: &str = "attachment; filename=\"shopping-list.txt\"";

/// Download Shopping List Handler
///
/// Sums the ingredients of every recipe in the cart into a plain-text list.
#[endpoint(
    tags("shopping_cart"),
    summary = "Download Shopping List",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Plain-text shopping list"),
        (status_code = StatusCode::BAD_REQUEST, description = "Shopping cart is empty"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot, res: &mut Response) -> Result<(), StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let list = state
        .app
        .shopping_list
        .generate_report(user)
        .await
        .map_err(|error| match error {
            ShoppingListServiceError::EmptyCart => {
                StatusError::bad_request().brief("Shopping cart is empty")
            }
            ShoppingListServiceError::Sql(source) => {
                error!("failed to build shopping list: {source}");

                StatusError::internal_server_error()
            }
        })?;

    res.add_header(CONTENT_DISPOSITION, ATTACHMENT, true)
        .or_500("failed to set content disposition header")?
        .render(Text::Plain(list.render()));

    Ok(())
}
