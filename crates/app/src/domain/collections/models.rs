//! Collection Models

use std::fmt::{Display, Formatter, Result as FmtResult};

const ADD_SHOPPING_CART_ENTRY_SQL: &str = include_str!("sql/add_shopping_cart_entry.sql");
const REMOVE_SHOPPING_CART_ENTRY_SQL: &str = include_str!("sql/remove_shopping_cart_entry.sql");
const ADD_FAVORITE_ENTRY_SQL: &str = include_str!("sql/add_favorite_entry.sql");
const REMOVE_FAVORITE_ENTRY_SQL: &str = include_str!("sql/remove_favorite_entry.sql");

#[cfg(test)]
const COUNT_SHOPPING_CART_ENTRIES_SQL: &str =
    include_str!("sql/count_shopping_cart_entries.sql");
#[cfg(test)]
const COUNT_FAVORITE_ENTRIES_SQL: &str = include_str!("sql/count_favorite_entries.sql");

/// A per-user set of recipes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecipeCollection {
    ShoppingCart,
    Favorites,
}

impl RecipeCollection {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ShoppingCart => "shopping_cart",
            Self::Favorites => "favorites",
        }
    }

    pub(crate) const fn add_sql(self) -> &'static str {
        match self {
            Self::ShoppingCart => ADD_SHOPPING_CART_ENTRY_SQL,
            Self::Favorites => ADD_FAVORITE_ENTRY_SQL,
        }
    }

    pub(crate) const fn remove_sql(self) -> &'static str {
        match self {
            Self::ShoppingCart => REMOVE_SHOPPING_CART_ENTRY_SQL,
            Self::Favorites => REMOVE_FAVORITE_ENTRY_SQL,
        }
    }

    #[cfg(test)]
    pub(crate) const fn count_sql(self) -> &'static str {
        match self {
            Self::ShoppingCart => COUNT_SHOPPING_CART_ENTRIES_SQL,
            Self::Favorites => COUNT_FAVORITE_ENTRIES_SQL,
        }
    }
}

impl Display for RecipeCollection {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}
