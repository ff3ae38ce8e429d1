//! CategoriesHighlights widget: grid of highlighted department categories.

use std::any::Any;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::WidgetError;
use crate::schema::{SchemaNode, UiWidget};
use crate::widget::traits::Widget;
use crate::widgets::options::CardShape;

/// Cards per grid row.
pub const ITEMS_PER_ROW: usize = 2;

/// Item counts offered by the page builder.
pub const ITEM_COUNT_CHOICES: [usize; 2] = [2, 4];

/// A category card: display name and image URL. Empty fields render a
/// placeholder card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryCard {
    pub name: String,
    pub image: String,
}

/// Props accepted by [`CategoriesHighlights`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CategoriesHighlightsProps {
    /// Cards keyed `category0`, `category1`, ...
    pub categories_highlighted: BTreeMap<String, CategoryCard>,
    pub show_categories_highlighted: bool,
    pub quantity_of_items: usize,
    pub card_shape: CardShape,
}

impl Default for CategoriesHighlightsProps {
    fn default() -> Self {
        Self {
            categories_highlighted: BTreeMap::new(),
            show_categories_highlighted: false,
            quantity_of_items: ITEMS_PER_ROW,
            card_shape: CardShape::default(),
        }
    }
}

/// The grid handed to the rendering host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightsGrid {
    /// CSS handle of the container, e.g. `squaredCategoriesHighlights`.
    pub container_class: String,
    pub shape: CardShape,
    pub rows: Vec<Vec<CategoryCard>>,
}

/// Highlighted categories of a department.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoriesHighlights {
    props: CategoriesHighlightsProps,
}

impl CategoriesHighlights {
    pub fn new(props: CategoriesHighlightsProps) -> Self {
        Self { props }
    }

    /// Build from page-builder JSON; missing props take their defaults.
    pub fn from_json(props: Value) -> Result<Self, WidgetError> {
        serde_json::from_value(props)
            .map(Self::new)
            .map_err(|e| WidgetError::InvalidProps(e.to_string()))
    }

    pub fn props(&self) -> &CategoriesHighlightsProps {
        &self.props
    }

    /// Configured cards in key order, `category2` before `category10`.
    pub fn categories(&self) -> Vec<&CategoryCard> {
        let mut entries: Vec<(&String, &CategoryCard)> =
            self.props.categories_highlighted.iter().collect();
        entries.sort_by_key(|&(key, _)| (trailing_number(key), key));
        entries.into_iter().map(|(_, card)| card).collect()
    }

    /// Lay out the grid, or `None` when the highlights are hidden.
    ///
    /// Missing cards are padded with placeholders; cards beyond the
    /// configured quantity are dropped.
    pub fn layout(&self) -> Result<Option<HighlightsGrid>, WidgetError> {
        if !self.props.show_categories_highlighted {
            return Ok(None);
        }
        let quantity = self.props.quantity_of_items;
        if quantity == 0 || quantity % ITEMS_PER_ROW != 0 {
            return Err(WidgetError::UnsupportedItemCount {
                got: quantity,
                per_row: ITEMS_PER_ROW,
            });
        }

        let mut cards: Vec<CategoryCard> = self
            .categories()
            .into_iter()
            .take(quantity)
            .cloned()
            .collect();
        cards.resize_with(quantity, CategoryCard::default);

        let shape = self.props.card_shape;
        Ok(Some(HighlightsGrid {
            container_class: format!("{shape}CategoriesHighlights"),
            shape,
            rows: cards.chunks(ITEMS_PER_ROW).map(<[_]>::to_vec).collect(),
        }))
    }

    /// Admin schema with one category group per item.
    ///
    /// A quantity of zero falls back to one row.
    pub fn admin_schema(quantity_of_items: usize) -> SchemaNode {
        let count = if quantity_of_items == 0 {
            ITEMS_PER_ROW
        } else {
            quantity_of_items
        };

        let categories = (0..count).fold(
            SchemaNode::object("admin/editor.categoriesHighlighted.categoriesHighlighted")
                .with_layout(false),
            |group, index| {
                group.with_property(
                    format!("category{index}"),
                    SchemaNode::object("admin/editor.categoriesHighlighted.category")
                        .with_property(
                            "name",
                            SchemaNode::string("admin/editor.categoriesHighlighted.item.categoryName")
                                .with_default(""),
                        )
                        .with_property(
                            "image",
                            SchemaNode::string("admin/editor.categoriesHighlighted.item.categoryImage")
                                .with_default("")
                                .with_widget(UiWidget::image_uploader()),
                        ),
                )
            },
        );

        SchemaNode::object("admin/editor.categoriesHighlighted.title")
            .with_description("admin/editor.categoriesHighlighted.description")
            .with_property(
                "showCategoriesHighlighted",
                SchemaNode::boolean("admin/editor.categoriesHighlighted.showCategoriesHighlighted")
                    .with_default(false)
                    .with_layout(true),
            )
            .with_property(
                "quantityOfItems",
                SchemaNode::number("admin/editor.categoriesHighlighted.quantityOfItems")
                    .with_enum(ITEM_COUNT_CHOICES, &[])
                    .with_default(ITEMS_PER_ROW)
                    .with_widget(UiWidget::radio(true))
                    .with_layout(true),
            )
            .with_property(
                "cardShape",
                SchemaNode::string("admin/editor.categoriesHighlighted.cardShape")
                    .with_enum(
                        CardShape::ALL.iter().map(|s| s.as_str()),
                        &[
                            "admin/editor.categoriesHighlighted.cardShape.squared",
                            "admin/editor.categoriesHighlighted.cardShape.rectangular",
                        ],
                    )
                    .with_default(CardShape::Squared.as_str())
                    .with_widget(UiWidget::radio(true))
                    .with_layout(true),
            )
            .with_property("categoriesHighlighted", categories)
    }
}

impl Widget for CategoriesHighlights {
    fn widget_type(&self) -> &str {
        "CategoriesHighlights"
    }

    fn css_handles(&self) -> &'static [&'static str] {
        &["squaredCategoriesHighlights", "rectangularCategoriesHighlights"]
    }

    fn schema(&self) -> Option<SchemaNode> {
        Some(Self::admin_schema(self.props.quantity_of_items))
    }

    fn ui_schema(&self) -> Option<Value> {
        Some(json!({
            "categoriesHighlighted": {
                "items": {
                    "image": { "ui:widget": "image-uploader" }
                }
            }
        }))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Numeric suffix of a key like `category12`; keys without one sort last.
fn trailing_number(key: &str) -> usize {
    let digits = key.len() - key.trim_end_matches(|c: char| c.is_ascii_digit()).len();
    key[key.len() - digits..].parse().unwrap_or(usize::MAX)
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn card(name: &str) -> CategoryCard {
        CategoryCard {
            name: name.into(),
            image: format!("{}.png", name.to_lowercase()),
        }
    }

    fn shown(quantity: usize, names: &[&str]) -> CategoriesHighlights {
        CategoriesHighlights::new(CategoriesHighlightsProps {
            categories_highlighted: names
                .iter()
                .enumerate()
                .map(|(i, n)| (format!("category{i}"), card(n)))
                .collect(),
            show_categories_highlighted: true,
            quantity_of_items: quantity,
            card_shape: CardShape::Squared,
        })
    }

    #[test]
    fn hidden_by_default() {
        let w = CategoriesHighlights::default();
        assert_eq!(w.props().quantity_of_items, 2);
        assert_eq!(w.layout().unwrap(), None);
    }

    #[test]
    fn full_grid_in_rows_of_two() {
        let grid = shown(4, &["Shoes", "Bags", "Hats", "Belts"]).layout().unwrap().unwrap();
        assert_eq!(grid.rows.len(), 2);
        assert_eq!(grid.rows[0], vec![card("Shoes"), card("Bags")]);
        assert_eq!(grid.rows[1], vec![card("Hats"), card("Belts")]);
        assert_eq!(grid.container_class, "squaredCategoriesHighlights");
    }

    #[test]
    fn missing_cards_are_padded() {
        let grid = shown(4, &["Shoes"]).layout().unwrap().unwrap();
        assert_eq!(grid.rows[0][0], card("Shoes"));
        assert_eq!(grid.rows[0][1], CategoryCard::default());
        assert_eq!(grid.rows[1], vec![CategoryCard::default(); 2]);
    }

    #[test]
    fn extra_cards_are_dropped() {
        let grid = shown(2, &["A", "B", "C"]).layout().unwrap().unwrap();
        assert_eq!(grid.rows.len(), 1);
        assert_eq!(grid.rows[0], vec![card("A"), card("B")]);
    }

    #[test]
    fn odd_quantity_is_rejected() {
        let err = shown(3, &[]).layout().unwrap_err();
        assert_eq!(err, WidgetError::UnsupportedItemCount { got: 3, per_row: 2 });
        assert!(shown(0, &[]).layout().is_err());
    }

    #[test]
    fn categories_sort_numerically() {
        let names: Vec<String> = (0..12).map(|i| format!("C{i}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let w = shown(12, &refs);
        let ordered: Vec<&str> = w.categories().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(ordered, refs);
    }

    #[test]
    fn rectangular_container_class() {
        let w = CategoriesHighlights::from_json(serde_json::json!({
            "showCategoriesHighlighted": true,
            "cardShape": "rectangular",
            "categoriesHighlighted": { "category0": { "name": "Men" } }
        }))
        .unwrap();
        let grid = w.layout().unwrap().unwrap();
        assert_eq!(grid.container_class, "rectangularCategoriesHighlights");
        assert_eq!(grid.rows[0][0].name, "Men");
        assert_eq!(grid.rows[0][0].image, "");
    }

    #[test]
    fn schema_has_one_group_per_item() {
        let schema = CategoriesHighlights::admin_schema(4);
        let group = schema.property("categoriesHighlighted").unwrap();
        assert_eq!(
            group.property_names(),
            vec!["category0", "category1", "category2", "category3"]
        );
        let image = schema.lookup("categoriesHighlighted.category3.image").unwrap();
        assert_eq!(image.widget, Some(UiWidget::image_uploader()));
    }

    #[test]
    fn schema_zero_quantity_falls_back_to_one_row() {
        let schema = CategoriesHighlights::admin_schema(0);
        let group = schema.property("categoriesHighlighted").unwrap();
        assert_eq!(group.properties.len(), ITEMS_PER_ROW);
    }

    #[test]
    fn schema_top_level_fields() {
        let json = serde_json::to_value(CategoriesHighlights::admin_schema(2)).unwrap();
        assert_eq!(
            json["properties"]["quantityOfItems"],
            serde_json::json!({
                "type": "number",
                "title": "admin/editor.categoriesHighlighted.quantityOfItems",
                "enum": [2, 4],
                "default": 2,
                "widget": { "ui:widget": "radio", "ui:options": { "inline": true } },
                "isLayout": true
            })
        );
        assert_eq!(json["properties"]["showCategoriesHighlighted"]["default"], false);
        assert_eq!(json["properties"]["cardShape"]["default"], "squared");
        assert_eq!(json["properties"]["categoriesHighlighted"]["isLayout"], false);
    }

    #[test]
    fn ui_schema_marks_image_uploader() {
        let ui = CategoriesHighlights::default().ui_schema().unwrap();
        assert_eq!(
            ui["categoriesHighlighted"]["items"]["image"]["ui:widget"],
            "image-uploader"
        );
    }

    #[test]
    fn trailing_number_parses_suffix() {
        assert_eq!(trailing_number("category10"), 10);
        assert_eq!(trailing_number("category"), usize::MAX);
    }
}
