// Wire types for the Hisi REST API.
//
// Every response is `{ success?, message?, data }`. List payloads arrive in
// several shapes depending on the endpoint; `ListEnvelope` accepts all of
// them and `into_page` normalizes to a single `Page<T>` so no call site
// has to know which shape an endpoint emits.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Error;

// ── Envelope ─────────────────────────────────────────────────────────

/// The canonical response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// The payload, or [`Error::EmptyEnvelope`] when `data` is absent or null.
    pub fn into_data(self) -> Result<T, Error> {
        self.data.ok_or(Error::EmptyEnvelope)
    }
}

/// Pagination metadata as emitted by the paginated endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageMeta {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default, alias = "limit")]
    pub per_page: Option<u32>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default, alias = "pages")]
    pub total_pages: Option<u32>,
}

/// Keyed list payload: the item array under one of several names plus
/// optional pagination fields.
#[derive(Debug, Clone, Deserialize)]
pub struct KeyedList<T> {
    #[serde(
        alias = "orders",
        alias = "customers",
        alias = "media",
        alias = "products",
        alias = "posts",
        alias = "categories",
        alias = "collections",
        alias = "messages",
        alias = "conversations",
        alias = "inquiries"
    )]
    pub items: Vec<T>,
    #[serde(default)]
    pub pagination: Option<PageMeta>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default, alias = "limit")]
    pub per_page: Option<u32>,
}

/// Any list payload the backend emits.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawList<T> {
    Bare(Vec<T>),
    Keyed(KeyedList<T>),
}

/// Envelope around a list payload; some endpoints put pagination next to
/// `data` instead of inside it.
#[derive(Debug, Clone, Deserialize)]
pub struct ListEnvelope<T> {
    #[serde(default)]
    pub message: Option<String>,
    pub data: RawList<T>,
    #[serde(default)]
    pub pagination: Option<PageMeta>,
    #[serde(default)]
    pub total: Option<u64>,
}

impl<T> ListEnvelope<T> {
    /// Normalize into a [`Page`]. `page` and `per_page` are the values that
    /// were requested; they are used when the response omits them.
    pub fn into_page(self, page: u32, per_page: u32) -> Page<T> {
        let outer_meta = self.pagination.unwrap_or_default();
        let outer_total = self.total.or(outer_meta.total);

        match self.data {
            RawList::Bare(items) => {
                let total = outer_total.unwrap_or_else(|| count(&items));
                Page {
                    items,
                    total,
                    page: outer_meta.page.unwrap_or(page),
                    per_page: outer_meta.per_page.unwrap_or(per_page),
                }
            }
            RawList::Keyed(list) => {
                let inner_meta = list.pagination.unwrap_or_default();
                let total = inner_meta
                    .total
                    .or(list.total)
                    .or(outer_total)
                    .unwrap_or_else(|| count(&list.items));
                Page {
                    total,
                    page: inner_meta.page.or(list.page).or(outer_meta.page).unwrap_or(page),
                    per_page: inner_meta
                        .per_page
                        .or(list.per_page)
                        .or(outer_meta.per_page)
                        .unwrap_or(per_page),
                    items: list.items,
                }
            }
        }
    }
}

fn count<T>(items: &[T]) -> u64 {
    u64::try_from(items.len()).unwrap_or(u64::MAX)
}

/// A normalized page of results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
}

impl<T> Page<T> {
    pub fn empty(page: u32, per_page: u32) -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            page,
            per_page,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
        }
    }
}

// ── Identifiers & timestamps ─────────────────────────────────────────

/// Resource identifier. The backend uses integers for most tables and
/// strings for a few (media, conversations); both decode to this.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ResourceId(pub String);

impl<'de> Deserialize<'de> for ResourceId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Int(i64),
            Str(String),
        }
        Ok(match Raw::deserialize(deserializer)? {
            Raw::Int(n) => Self(n.to_string()),
            Raw::Str(s) => Self(s),
        })
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ResourceId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// Parse a backend timestamp. Accepts RFC 3339 and the naive ISO form
/// (`2024-06-15T10:30:00.123456`), which is read as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

// ── Storefront ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ProductImages {
    Set {
        #[serde(default)]
        main: Option<String>,
        #[serde(default)]
        hover: Option<String>,
        #[serde(default)]
        gallery: Vec<String>,
    },
    List(Vec<String>),
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryRef {
    #[serde(default)]
    pub id: Option<ResourceId>,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductResponse {
    pub id: ResourceId,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    pub price: f64,
    #[serde(default, alias = "originalPrice")]
    pub original_price: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub main_image: Option<String>,
    #[serde(default)]
    pub images: Option<ProductImages>,
    #[serde(default)]
    pub category: Option<CategoryRef>,
    #[serde(default)]
    pub badge: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default, alias = "accessibilityFeatures")]
    pub accessibility_features: Option<Vec<String>>,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub stock_quantity: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryResponse {
    pub id: ResourceId,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, alias = "productCount")]
    pub product_count: Option<u32>,
    #[serde(default, alias = "accessibility_features")]
    pub features: Option<Vec<String>>,
    #[serde(default, alias = "is_featured")]
    pub featured: Option<bool>,
}

/// Section content for one page: section name → field map.
pub type PageSections = BTreeMap<String, serde_json::Value>;

#[derive(Debug, Clone, Deserialize)]
pub struct BlogPostResponse {
    #[serde(default)]
    pub id: Option<ResourceId>,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, alias = "author_name")]
    pub author: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, alias = "featured_image")]
    pub image: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PressItemResponse {
    #[serde(default)]
    pub id: Option<ResourceId>,
    pub title: String,
    #[serde(default, alias = "publication")]
    pub outlet: Option<String>,
    #[serde(default, alias = "link")]
    pub url: Option<String>,
    #[serde(default, alias = "date")]
    pub published_at: Option<String>,
    #[serde(default, alias = "description")]
    pub excerpt: Option<String>,
}

/// `GET /press` returns the whole press page; only coverage is consumed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PressPageResponse {
    #[serde(default, alias = "mediaCoverage")]
    pub media_coverage: Vec<PressItemResponse>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

// ── Reviews ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct ReviewAuthor {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReviewProductRef {
    #[serde(default)]
    pub id: Option<ResourceId>,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReviewResponse {
    pub id: ResourceId,
    pub rating: u8,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub is_approved: bool,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub product_id: Option<ResourceId>,
    #[serde(default)]
    pub user: Option<ReviewAuthor>,
    #[serde(default)]
    pub product: Option<ReviewProductRef>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// `GET /reviews/stats`. Distribution keys are the star counts "1".."5".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReviewStatsResponse {
    #[serde(default)]
    pub total_reviews: u64,
    #[serde(default)]
    pub average_rating: f64,
    #[serde(default)]
    pub rating_distribution: BTreeMap<String, u64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReviewSubmission {
    pub rating: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub content: String,
    pub product_id: Option<String>,
}

/// Moderation fields; only the ones set are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReviewUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_approved: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_notes: Option<String>,
}

// ── Admin ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct OrderResponse {
    pub id: ResourceId,
    #[serde(default)]
    pub order_number: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub payment_status: Option<String>,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub customer_email: Option<String>,
    #[serde(default)]
    pub shipping_address: Option<serde_json::Value>,
    #[serde(default)]
    pub tracking_number: Option<String>,
    #[serde(default)]
    pub items: Vec<OrderItemResponse>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrderItemResponse {
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub unit_price: f64,
    #[serde(default)]
    pub subtotal: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CustomerResponse {
    pub id: ResourceId,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub order_count: Option<u32>,
    #[serde(default)]
    pub total_spent: Option<f64>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MediaResponse {
    pub id: ResourceId,
    #[serde(alias = "original_filename")]
    pub filename: String,
    pub url: String,
    #[serde(default, alias = "file_type", alias = "type")]
    pub kind: Option<String>,
    #[serde(default, alias = "file_size")]
    pub size: Option<u64>,
    #[serde(default, alias = "created_at")]
    pub uploaded_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InquiryResponse {
    pub id: ResourceId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyticsResponse {
    #[serde(default)]
    pub revenue: f64,
    #[serde(default)]
    pub orders: u64,
    #[serde(default)]
    pub customers: u64,
    #[serde(default)]
    pub conversion_rate: f64,
    #[serde(default)]
    pub top_products: Vec<TopProductResponse>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TopProductResponse {
    pub name: String,
    #[serde(default)]
    pub sales: u64,
    #[serde(default)]
    pub revenue: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardMetricsResponse {
    #[serde(default)]
    pub total_revenue: f64,
    #[serde(default)]
    pub total_orders: u64,
    #[serde(default)]
    pub total_customers: u64,
    #[serde(default)]
    pub pending_orders: u64,
    #[serde(default)]
    pub low_stock_products: u64,
}

/// `GET /admin/dashboard/overview` wraps metrics one level deeper.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardOverviewResponse {
    #[serde(default)]
    pub metrics: DashboardMetricsResponse,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConversationResponse {
    pub id: ResourceId,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub last_message: Option<String>,
    #[serde(default)]
    pub unread_count: u32,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub id: Option<ResourceId>,
    #[serde(default)]
    pub sender: Option<String>,
    #[serde(alias = "content")]
    pub body: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CollectionPayload {
    pub name: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub is_featured: bool,
}

/// Product create/update body. Unset fields are left out so an update only
/// touches what was given.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProductPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// The product endpoints answer `{ message, product }` rather than the
/// canonical envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductSaved {
    #[serde(alias = "data")]
    pub product: ProductResponse,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BlogPostPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_published: Option<bool>,
}

// ── Section content ──────────────────────────────────────────────────

/// One editable field of a page section.
#[derive(Debug, Clone, Deserialize)]
pub struct SectionItemResponse {
    pub id: ResourceId,
    pub page_name: String,
    pub section_name: String,
    pub content_key: String,
    /// Text, an image URL, or parsed JSON for `json`/`array` items.
    #[serde(default)]
    pub content_value: serde_json::Value,
    #[serde(default = "default_content_type")]
    pub content_type: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub display_order: i32,
}

fn default_content_type() -> String {
    "text".to_owned()
}

/// `GET /admin/section-content`: the flat list, also grouped by page and
/// section. Only the flat list is consumed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdminSectionsResponse {
    #[serde(default)]
    pub items: Vec<SectionItemResponse>,
}

/// An editable page and its section names.
#[derive(Debug, Clone, Deserialize)]
pub struct EditablePageResponse {
    pub name: String,
    #[serde(default)]
    pub sections: Vec<String>,
}

/// `GET /admin/section-content/pages`: page key → page.
pub type EditablePages = BTreeMap<String, EditablePageResponse>;

#[derive(Debug, Clone, Serialize)]
pub struct SectionItemPayload {
    pub page_name: String,
    pub section_name: String,
    pub content_key: String,
    pub content_value: serde_json::Value,
    pub content_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionValueUpdate {
    pub id: String,
    pub content_value: serde_json::Value,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BulkUpdateResponse {
    #[serde(default)]
    pub updated_count: u32,
}

/// Admin preferences as stored by the backend: a flat JSON object.
pub type SettingsMap = serde_json::Map<String, serde_json::Value>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: u32,
    }

    fn page_of(value: serde_json::Value) -> Page<Item> {
        serde_json::from_value::<ListEnvelope<Item>>(value)
            .unwrap()
            .into_page(1, 20)
    }

    #[test]
    fn envelope_without_data_is_empty() {
        let envelope: Envelope<Item> = serde_json::from_value(json!({ "success": true })).unwrap();
        assert!(matches!(envelope.into_data(), Err(Error::EmptyEnvelope)));

        let envelope: Envelope<Item> =
            serde_json::from_value(json!({ "success": true, "data": null })).unwrap();
        assert!(matches!(envelope.into_data(), Err(Error::EmptyEnvelope)));

        let envelope: Envelope<Item> =
            serde_json::from_value(json!({ "data": { "id": 7 } })).unwrap();
        assert_eq!(envelope.into_data().unwrap(), Item { id: 7 });
    }

    #[test]
    fn canonical_items_and_pagination() {
        let page = page_of(json!({
            "success": true,
            "data": {
                "items": [{"id": 1}, {"id": 2}],
                "pagination": {"page": 2, "per_page": 2, "total": 9, "total_pages": 5}
            }
        }));
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total, 9);
        assert_eq!(page.page, 2);
        assert_eq!(page.per_page, 2);
    }

    #[test]
    fn orders_with_sibling_total() {
        let page = page_of(json!({
            "data": { "orders": [{"id": 1}], "total": 47 }
        }));
        assert_eq!(page.total, 47);
        assert_eq!(page.page, 1);
        assert_eq!(page.per_page, 20);
    }

    #[test]
    fn bare_array_counts_items() {
        let page = page_of(json!({ "data": [{"id": 1}, {"id": 2}, {"id": 3}] }));
        assert_eq!(page.total, 3);
        assert_eq!(page.items[2], Item { id: 3 });
    }

    #[test]
    fn outer_pagination_is_used_for_bare_arrays() {
        let page = page_of(json!({
            "data": [{"id": 1}],
            "pagination": {"page": 3, "per_page": 1, "total": 30}
        }));
        assert_eq!(page.total, 30);
        assert_eq!(page.page, 3);
    }

    #[test]
    fn resource_id_accepts_numbers_and_strings() {
        let ids: Vec<ResourceId> = serde_json::from_value(json!([7, "a1b2"])).unwrap();
        assert_eq!(ids[0].to_string(), "7");
        assert_eq!(ids[1].to_string(), "a1b2");
    }

    #[test]
    fn timestamps_with_and_without_offset() {
        assert!(parse_timestamp("2024-06-15T10:30:00Z").is_some());
        assert!(parse_timestamp("2024-06-15T10:30:00.123456").is_some());
        assert!(parse_timestamp("yesterday").is_none());
    }

    #[test]
    fn product_images_as_object_or_list() {
        let p: ProductResponse = serde_json::from_value(json!({
            "id": 1, "name": "Adaptive Trousers", "price": 55000.0,
            "images": {"main": "/a.jpg", "hover": null, "gallery": []}
        }))
        .unwrap();
        assert!(matches!(p.images, Some(ProductImages::Set { main: Some(_), .. })));

        let p: ProductResponse = serde_json::from_value(json!({
            "id": 2, "name": "Tote", "price": 28000.0, "images": ["/b.jpg"]
        }))
        .unwrap();
        assert!(matches!(p.images, Some(ProductImages::List(ref v)) if v.len() == 1));
    }
}
