//! Remove From Shopping Cart Handler

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use larder_app::domain::collections::RecipeCollection;

/// Remove a recipe from the shopping cart.
#[endpoint(
    tags("shopping_cart"),
    summary = "Remove Recipe From Shopping Cart",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Recipe removed"),
        (status_code = StatusCode::NOT_FOUND, description = "Recipe not present"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    recipe: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    super::super::remove(RecipeCollection::ShoppingCart, recipe.into_inner(), depot).await
}
