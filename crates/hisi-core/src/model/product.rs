// ── Product and collection cards ──

use serde::Serialize;

use super::money::format_naira;

/// A product as shown in grids and carousels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCard {
    pub id: String,
    pub name: String,
    pub slug: Option<String>,
    pub price: f64,
    pub original_price: Option<f64>,
    pub image: String,
    pub hover_image: Option<String>,
    pub collection: String,
    pub badge: Option<String>,
    pub accessibility_features: Vec<String>,
}

impl ProductCard {
    /// Percentage off the original price, rounded. `None` when the product
    /// is not discounted.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::as_conversions
    )]
    pub fn discount_percent(&self) -> Option<u32> {
        let original = self.original_price?;
        if original <= 0.0 || original <= self.price {
            return None;
        }
        Some(((original - self.price) / original * 100.0).round() as u32)
    }

    pub fn price_label(&self) -> String {
        format_naira(self.price)
    }

    pub fn original_price_label(&self) -> Option<String> {
        self.original_price.map(format_naira)
    }
}

/// A collection (or product category standing in for one).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionCard {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub image: String,
    pub product_count: u32,
    pub features: Vec<String>,
    pub featured: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(price: f64, original: Option<f64>) -> ProductCard {
        ProductCard {
            id: "1".into(),
            name: "Adaptive Bomber Jacket".into(),
            slug: None,
            price,
            original_price: original,
            image: String::new(),
            hover_image: None,
            collection: "Adaptive Outerwear".into(),
            badge: None,
            accessibility_features: Vec::new(),
        }
    }

    #[test]
    fn discount_is_rounded_percentage() {
        assert_eq!(card(89_000.0, Some(120_000.0)).discount_percent(), Some(26));
        assert_eq!(card(55_000.0, Some(75_000.0)).discount_percent(), Some(27));
    }

    #[test]
    fn no_discount_without_higher_original() {
        assert_eq!(card(65_000.0, None).discount_percent(), None);
        assert_eq!(card(65_000.0, Some(65_000.0)).discount_percent(), None);
    }

    #[test]
    fn price_labels() {
        let c = card(89_000.0, Some(120_000.0));
        assert_eq!(c.price_label(), "₦89,000");
        assert_eq!(c.original_price_label().as_deref(), Some("₦120,000"));
    }
}
