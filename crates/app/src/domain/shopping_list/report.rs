//! Shopping list aggregation and rendering.

use std::fmt::{Display, Formatter, Result as FmtResult};

use rustc_hash::FxHashMap;

use crate::domain::ingredients::records::IngredientUuid;

/// First line of every rendered shopping list.
pub const SHOPPING_LIST_HEADER: &str = "Shopping list:";

/// One ingredient line contributed by one recipe in the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartIngredientLine {
    pub ingredient_uuid: IngredientUuid,
    pub name: String,
    pub measurement_unit: String,
    pub amount: u32,
}

/// Summed quantity for one ingredient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoppingListItem {
    pub ingredient_uuid: IngredientUuid,
    pub name: String,
    pub measurement_unit: String,
    pub total: u64,
}

/// Aggregated shopping list, one item per ingredient, sorted by name then unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShoppingList {
    pub items: Vec<ShoppingListItem>,
}

impl ShoppingList {
    /// Group cart lines by ingredient and sum their amounts.
    pub fn aggregate<I>(lines: I) -> Self
    where
        I: IntoIterator<Item = CartIngredientLine>,
    {
        let mut groups: FxHashMap<IngredientUuid, ShoppingListItem> = FxHashMap::default();

        for line in lines {
            groups
                .entry(line.ingredient_uuid)
                .and_modify(|item| item.total += u64::from(line.amount))
                .or_insert_with(|| ShoppingListItem {
                    ingredient_uuid: line.ingredient_uuid,
                    total: u64::from(line.amount),
                    name: line.name,
                    measurement_unit: line.measurement_unit,
                });
        }

        let mut items: Vec<ShoppingListItem> = groups.into_values().collect();

        items.sort_by(|a, b| {
            a.name
                .cmp(&b.name)
                .then_with(|| a.measurement_unit.cmp(&b.measurement_unit))
                .then_with(|| a.ingredient_uuid.cmp(&b.ingredient_uuid))
        });

        Self { items }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Plain-text report: the header line, then `"<name> - <total><unit>.\n"` per item.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl Display for ShoppingList {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "{SHOPPING_LIST_HEADER}")?;

        for item in &self.items {
            writeln!(f, "{item}")?;
        }

        Ok(())
    }
}

impl Display for ShoppingListItem {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} - {}{}.", self.name, self.total, self.measurement_unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(ingredient: IngredientUuid, name: &str, unit: &str, amount: u32) -> CartIngredientLine {
        CartIngredientLine {
            ingredient_uuid: ingredient,
            name: name.to_string(),
            measurement_unit: unit.to_string(),
            amount,
        }
    }

    #[test]
    fn flour_sugar_egg_scenario() {
        let flour = IngredientUuid::new();
        let sugar = IngredientUuid::new();
        let egg = IngredientUuid::new();

        let list = ShoppingList::aggregate([
            // Recipe A
            line(flour, "Flour", "g", 200),
            line(sugar, "Sugar", "g", 50),
            // Recipe B
            line(flour, "Flour", "g", 100),
            line(egg, "Egg", "pcs", 2),
        ]);

        assert_eq!(
            list.render(),
            "Shopping list:\nEgg - 2pcs.\nFlour - 300g.\nSugar - 50g.\n"
        );
    }

    #[test]
    fn each_ingredient_appears_once() {
        let salt = IngredientUuid::new();

        let list = ShoppingList::aggregate((1..=4).map(|n| line(salt, "Salt", "g", n)));

        assert_eq!(list.items.len(), 1);
        assert_eq!(list.items[0].total, 10);
    }

    #[test]
    fn same_name_with_different_units_stays_separate() {
        let milk_ml = IngredientUuid::new();
        let milk_l = IngredientUuid::new();

        let list = ShoppingList::aggregate([
            line(milk_ml, "Milk", "ml", 250),
            line(milk_l, "Milk", "l", 1),
        ]);

        assert_eq!(list.render(), "Shopping list:\nMilk - 1l.\nMilk - 250ml.\n");
    }

    #[test]
    fn sums_do_not_overflow_u32() {
        let water = IngredientUuid::new();

        let list = ShoppingList::aggregate([
            line(water, "Water", "ml", u32::MAX),
            line(water, "Water", "ml", u32::MAX),
        ]);

        assert_eq!(list.items[0].total, 2 * u64::from(u32::MAX));
    }

    #[test]
    fn no_lines_renders_only_the_header() {
        let list = ShoppingList::aggregate(Vec::new());

        assert!(list.is_empty());
        assert_eq!(list.render(), "Shopping list:\n");
    }
}
