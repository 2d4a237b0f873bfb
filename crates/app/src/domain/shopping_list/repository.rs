//! Shopping List Repository

use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as, query_scalar};

use crate::domain::{
    columns::try_get_u32,
    ingredients::records::IngredientUuid,
    shopping_list::report::CartIngredientLine,
    users::records::UserUuid,
};

const COUNT_CART_ENTRIES_SQL: &str = include_str!("sql/count_cart_entries.sql");
const LIST_CART_INGREDIENT_LINES_SQL: &str = include_str!("sql/list_cart_ingredient_lines.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgShoppingListRepository;

impl PgShoppingListRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn count_cart_entries(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
    ) -> Result<i64, sqlx::Error> {
        query_scalar::<Postgres, i64>(COUNT_CART_ENTRIES_SQL)
            .bind(user.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_cart_ingredient_lines(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
    ) -> Result<Vec<CartIngredientLine>, sqlx::Error> {
        query_as::<Postgres, CartIngredientLine>(LIST_CART_INGREDIENT_LINES_SQL)
            .bind(user.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for CartIngredientLine {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            ingredient_uuid: IngredientUuid::from_uuid(row.try_get("ingredient_uuid")?),
            name: row.try_get("name")?,
            measurement_unit: row.try_get("measurement_unit")?,
            amount: try_get_u32(row, "amount")?,
        })
    }
}
