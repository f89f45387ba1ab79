// ── Admin console service ──
//
// Back-office reads and mutations. Unlike the storefront these surface
// every failure: list views show an empty list with the error, mutations
// raise a notice. Every call needs a bearer token.

use serde::Serialize;
use tracing::{debug, info, warn};

use hisi_api::types::{
    BlogPostPayload, CollectionPayload, DashboardOverviewResponse, ProductPayload,
    SectionItemPayload, SectionValueUpdate,
};
use hisi_api::{Page, StoreClient};

use crate::config::ClientConfig;
use crate::convert;
use crate::error::CoreError;
use crate::fetch::{EmptyPolicy, Loaded, fetch_with_fallback};
use crate::listing::ListQuery;
use crate::model::{
    AnalyticsReport, BlogPost, CollectionCard, Conversation, CustomerDetail, CustomerRow,
    DashboardMetrics, EditablePage, ExportFormat, Inquiry, MediaItem, Message, OrderDetail,
    OrderRow, OrderStatus, Period, ProductCard, Review, ReviewAction, ReviewStatus, SectionEdit,
    SectionField, SectionSaveReport,
};
use crate::preferences::AdminSettings;

/// A collection as entered in the admin form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CollectionDraft {
    pub name: String,
    /// Derived from the name when absent.
    pub slug: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub featured: bool,
}

impl CollectionDraft {
    fn to_payload(&self) -> Result<CollectionPayload, CoreError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(CoreError::validation("collection name is required"));
        }
        let slug = self
            .slug
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map_or_else(|| slugify(name), str::to_owned);
        Ok(CollectionPayload {
            name: name.to_owned(),
            slug,
            description: self.description.clone(),
            image: self.image.clone(),
            is_featured: self.featured,
        })
    }
}

/// Product editor fields. `None` means "not given": a create needs name,
/// SKU and price; an update sends only what is set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub sku: Option<String>,
    pub price: Option<f64>,
    pub original_price: Option<f64>,
    pub stock_quantity: Option<i64>,
    pub description: Option<String>,
    pub short_description: Option<String>,
    pub category_id: Option<String>,
    pub brand: Option<String>,
    pub gender: Option<String>,
    pub main_image: Option<String>,
    pub hover_image: Option<String>,
    pub badge: Option<String>,
    pub featured: Option<bool>,
    pub active: Option<bool>,
}

impl ProductDraft {
    fn to_payload(&self) -> Result<ProductPayload, CoreError> {
        for (field, value) in [("price", self.price), ("original price", self.original_price)] {
            if value.is_some_and(|v| !v.is_finite() || v <= 0.0) {
                return Err(CoreError::validation(format!("{field} must be positive")));
            }
        }
        if self.stock_quantity.is_some_and(|q| q < 0) {
            return Err(CoreError::validation("stock quantity cannot be negative"));
        }
        Ok(ProductPayload {
            name: text(self.name.as_deref()),
            slug: text(self.slug.as_deref()),
            sku: text(self.sku.as_deref()),
            price: self.price,
            original_price: self.original_price,
            stock_quantity: self.stock_quantity,
            description: text(self.description.as_deref()),
            short_description: text(self.short_description.as_deref()),
            category_id: text(self.category_id.as_deref()),
            brand: text(self.brand.as_deref()),
            gender: text(self.gender.as_deref()),
            main_image: text(self.main_image.as_deref()),
            hover_image: text(self.hover_image.as_deref()),
            badge: text(self.badge.as_deref()),
            is_featured: self.featured,
            is_active: self.active,
        })
    }

    fn for_create(&self) -> Result<ProductPayload, CoreError> {
        let mut payload = self.to_payload()?;
        let Some(name) = payload.name.clone() else {
            return Err(CoreError::validation("product name is required"));
        };
        if payload.sku.is_none() {
            return Err(CoreError::validation("SKU is required"));
        }
        if payload.price.is_none() {
            return Err(CoreError::validation("price is required"));
        }
        if payload.slug.is_none() {
            payload.slug = Some(slugify(&name));
        }
        if payload.stock_quantity.is_none() {
            payload.stock_quantity = Some(0);
        }
        Ok(payload)
    }

    fn for_update(&self) -> Result<ProductPayload, CoreError> {
        let payload = self.to_payload()?;
        if payload == ProductPayload::default() {
            return Err(CoreError::validation("nothing to update"));
        }
        Ok(payload)
    }
}

/// Blog editor fields; same create/update split as [`ProductDraft`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogPostDraft {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub featured_image: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub published: Option<bool>,
}

impl BlogPostDraft {
    fn to_payload(&self) -> BlogPostPayload {
        BlogPostPayload {
            title: text(self.title.as_deref()),
            slug: text(self.slug.as_deref()),
            excerpt: text(self.excerpt.as_deref()),
            content: text(self.content.as_deref()),
            featured_image: text(self.featured_image.as_deref()),
            meta_title: text(self.meta_title.as_deref()),
            meta_description: text(self.meta_description.as_deref()),
            is_published: self.published,
        }
    }

    fn for_create(&self) -> Result<BlogPostPayload, CoreError> {
        let mut payload = self.to_payload();
        let Some(title) = payload.title.clone() else {
            return Err(CoreError::validation("post title is required"));
        };
        if payload.slug.is_none() {
            payload.slug = Some(slugify(&title));
        }
        if payload.is_published.is_none() {
            payload.is_published = Some(false);
        }
        Ok(payload)
    }

    fn for_update(&self) -> Result<BlogPostPayload, CoreError> {
        let payload = self.to_payload();
        if payload == BlogPostPayload::default() {
            return Err(CoreError::validation("nothing to update"));
        }
        Ok(payload)
    }
}

/// Trimmed, with blanks dropped.
fn text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
}

/// JSON-typed fields take a JSON literal; everything else is stored as text.
fn section_value(field: &SectionField, raw: &str) -> Result<serde_json::Value, CoreError> {
    if field.holds_json() {
        serde_json::from_str(raw).map_err(|e| {
            CoreError::validation(format!("{}.{} expects JSON: {e}", field.section, field.key))
        })
    } else {
        Ok(serde_json::Value::String(raw.to_owned()))
    }
}

/// Lowercase, ASCII alphanumerics separated by single hyphens.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

fn required<'a>(field: &str, value: &'a str) -> Result<&'a str, CoreError> {
    let value = value.trim();
    if value.is_empty() {
        Err(CoreError::validation(format!("{field} is required")))
    } else {
        Ok(value)
    }
}

/// Authenticated access to the store's back office.
#[derive(Debug, Clone)]
pub struct AdminConsole {
    client: StoreClient,
}

impl AdminConsole {
    pub fn new(client: StoreClient) -> Self {
        Self { client }
    }

    /// Fails early when the configuration carries no token.
    pub fn from_config(config: &ClientConfig) -> Result<Self, CoreError> {
        let client = config.build_client()?;
        if !client.has_token() {
            return Err(CoreError::Unauthorized {
                message: "admin commands need a bearer token (run `hisi config set-token`)"
                    .into(),
            });
        }
        Ok(Self::new(client))
    }

    pub fn client(&self) -> &StoreClient {
        &self.client
    }

    // ── Orders ───────────────────────────────────────────────────────

    pub async fn orders(&self, query: &ListQuery) -> Result<Page<OrderRow>, CoreError> {
        let page = self.client.list_orders(&query.to_params()).await?;
        debug!(count = page.items.len(), total = page.total, "loaded orders");
        Ok(page.map(OrderRow::from))
    }

    pub async fn order(&self, id: &str) -> Result<OrderDetail, CoreError> {
        let id = required("order id", id)?;
        match self.client.get_order(id).await {
            Ok(order) => Ok(order.into()),
            Err(e) if e.is_not_found() => Err(CoreError::not_found("Order", id)),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn update_order_status(&self, id: &str, status: OrderStatus) -> Result<(), CoreError> {
        let id = required("order id", id)?;
        self.client.update_order_status(id, status.as_str()).await?;
        info!(order = id, %status, "order status updated");
        Ok(())
    }

    // ── Customers ────────────────────────────────────────────────────

    pub async fn customers(&self, query: &ListQuery) -> Result<Page<CustomerRow>, CoreError> {
        let page = self.client.list_customers(&query.to_params()).await?;
        Ok(page.map(CustomerRow::from))
    }

    /// A customer together with their orders. An order history that fails
    /// to load leaves the customer visible with no orders.
    pub async fn customer(&self, id: &str) -> Result<CustomerDetail, CoreError> {
        let id = required("customer id", id)?;
        let (customer, orders) = tokio::join!(
            self.client.get_customer(id),
            self.client.list_customer_orders(id),
        );
        let customer = customer.map_err(|e| {
            if e.is_not_found() {
                CoreError::not_found("Customer", id)
            } else {
                e.into()
            }
        })?;
        let orders = match orders {
            Ok(orders) => orders.iter().map(OrderRow::from).collect(),
            Err(e) => {
                warn!(customer = id, error = %e, "customer orders unavailable");
                Vec::new()
            }
        };
        Ok(CustomerDetail {
            customer: customer.into(),
            orders,
        })
    }

    // ── Media ────────────────────────────────────────────────────────

    pub async fn media(&self, query: &ListQuery) -> Result<Page<MediaItem>, CoreError> {
        let page = self.client.list_media(&query.to_params()).await?;
        Ok(page.map(MediaItem::from))
    }

    pub async fn upload_media(&self, filename: &str, bytes: Vec<u8>) -> Result<MediaItem, CoreError> {
        let filename = required("file name", filename)?;
        if bytes.is_empty() {
            return Err(CoreError::validation(format!("{filename} is empty")));
        }
        let size = bytes.len();
        let media = self.client.upload_media(filename, bytes).await?;
        info!(filename, size, "media uploaded");
        Ok(media.into())
    }

    pub async fn delete_media(&self, id: &str) -> Result<(), CoreError> {
        let id = required("media id", id)?;
        self.client.delete_media(id).await?;
        info!(media = id, "media deleted");
        Ok(())
    }

    // ── Inquiries ────────────────────────────────────────────────────

    pub async fn inquiries(&self, query: &ListQuery) -> Result<Page<Inquiry>, CoreError> {
        let page = self.client.list_inquiries(&query.to_params()).await?;
        Ok(page.map(Inquiry::from))
    }

    pub async fn respond_inquiry(&self, id: &str, message: &str) -> Result<(), CoreError> {
        let id = required("inquiry id", id)?;
        let message = required("response", message)?;
        self.client.respond_inquiry(id, message).await?;
        info!(inquiry = id, "inquiry answered");
        Ok(())
    }

    // ── Analytics & dashboard ────────────────────────────────────────

    pub async fn analytics(&self, period: Period) -> Result<AnalyticsReport, CoreError> {
        let raw = self.client.get_analytics(period.as_str()).await?;
        Ok(convert::analytics_report(raw, period))
    }

    pub async fn export_analytics(
        &self,
        period: Period,
        format: ExportFormat,
    ) -> Result<Vec<u8>, CoreError> {
        let bytes = self
            .client
            .export_analytics(period.as_str(), format.as_str())
            .await?;
        debug!(%period, %format, size = bytes.len(), "analytics exported");
        Ok(bytes)
    }

    /// Headline metrics. A failed load renders zeroed metrics.
    pub async fn dashboard(&self, period: Period) -> Loaded<DashboardMetrics> {
        fetch_with_fallback(
            "dashboard",
            self.client.get_dashboard(period.as_str()),
            |overview: DashboardOverviewResponse| DashboardMetrics::from(overview.metrics),
            DashboardMetrics::default,
            EmptyPolicy::KeepEmpty,
        )
        .await
    }

    // ── Conversations ────────────────────────────────────────────────

    pub async fn conversations(&self) -> Result<Vec<Conversation>, CoreError> {
        let items = self.client.list_conversations().await?;
        Ok(items.into_iter().map(Conversation::from).collect())
    }

    pub async fn messages(&self, conversation: &str) -> Result<Vec<Message>, CoreError> {
        let conversation = required("conversation id", conversation)?;
        let items = self.client.list_messages(conversation).await?;
        Ok(items.into_iter().map(Message::from).collect())
    }

    pub async fn send_message(&self, conversation: &str, body: &str) -> Result<(), CoreError> {
        let conversation = required("conversation id", conversation)?;
        let body = required("message", body)?;
        self.client.send_message(conversation, body).await?;
        info!(conversation, "message sent");
        Ok(())
    }

    // ── Catalog ──────────────────────────────────────────────────────

    pub async fn create_collection(
        &self,
        draft: &CollectionDraft,
    ) -> Result<CollectionCard, CoreError> {
        let payload = draft.to_payload()?;
        let created = self.client.create_collection(&payload).await?;
        info!(slug = %payload.slug, "collection created");
        Ok(created.into())
    }

    pub async fn update_collection(
        &self,
        id: &str,
        draft: &CollectionDraft,
    ) -> Result<(), CoreError> {
        let id = required("collection id", id)?;
        let payload = draft.to_payload()?;
        self.client.update_collection(id, &payload).await?;
        info!(collection = id, "collection updated");
        Ok(())
    }

    pub async fn delete_collection(&self, id: &str) -> Result<(), CoreError> {
        let id = required("collection id", id)?;
        self.client.delete_collection(id).await?;
        info!(collection = id, "collection deleted");
        Ok(())
    }

    pub async fn create_product(&self, draft: &ProductDraft) -> Result<ProductCard, CoreError> {
        let payload = draft.for_create()?;
        let created = self.client.create_product(&payload).await?;
        info!(slug = ?payload.slug, "product created");
        Ok(created.into())
    }

    pub async fn update_product(
        &self,
        id: &str,
        draft: &ProductDraft,
    ) -> Result<ProductCard, CoreError> {
        let id = required("product id", id)?;
        let payload = draft.for_update()?;
        match self.client.update_product(id, &payload).await {
            Ok(product) => {
                info!(product = id, "product updated");
                Ok(product.into())
            }
            Err(e) if e.is_not_found() => Err(CoreError::not_found("Product", id)),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn delete_product(&self, id: &str) -> Result<(), CoreError> {
        let id = required("product id", id)?;
        self.client.delete_product(id).await?;
        info!(product = id, "product deleted");
        Ok(())
    }

    pub async fn create_blog_post(&self, draft: &BlogPostDraft) -> Result<BlogPost, CoreError> {
        let payload = draft.for_create()?;
        let created = self.client.create_blog_post(&payload).await?;
        info!(slug = %created.slug, "blog post created");
        Ok(created.into())
    }

    pub async fn update_blog_post(
        &self,
        id: &str,
        draft: &BlogPostDraft,
    ) -> Result<BlogPost, CoreError> {
        let id = required("blog post id", id)?;
        let payload = draft.for_update()?;
        match self.client.update_blog_post(id, &payload).await {
            Ok(post) => {
                info!(post = id, "blog post updated");
                Ok(post.into())
            }
            Err(e) if e.is_not_found() => Err(CoreError::not_found("Blog post", id)),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn delete_blog_post(&self, id: &str) -> Result<(), CoreError> {
        let id = required("blog post id", id)?;
        self.client.delete_blog_post(id).await?;
        info!(post = id, "blog post deleted");
        Ok(())
    }

    // ── Reviews ──────────────────────────────────────────────────────

    /// The moderation queue.
    pub async fn reviews(
        &self,
        status: ReviewStatus,
        query: &ListQuery,
    ) -> Result<Page<Review>, CoreError> {
        let query = query.clone().with_filter("status", status.as_str());
        let page = self.client.list_admin_reviews(&query.to_params()).await?;
        debug!(%status, count = page.items.len(), "loaded reviews");
        Ok(page.map(Review::from))
    }

    pub async fn moderate_review(&self, id: &str, action: ReviewAction) -> Result<Review, CoreError> {
        let id = required("review id", id)?;
        match self.client.update_review(id, &action.to_update()).await {
            Ok(review) => {
                info!(review = id, %action, "review moderated");
                Ok(review.into())
            }
            Err(e) if e.is_not_found() => Err(CoreError::not_found("Review", id)),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn delete_review(&self, id: &str) -> Result<(), CoreError> {
        let id = required("review id", id)?;
        self.client.delete_review(id).await?;
        info!(review = id, "review deleted");
        Ok(())
    }

    // ── Section content ──────────────────────────────────────────────

    pub async fn editable_pages(&self) -> Result<Vec<EditablePage>, CoreError> {
        let pages = self.client.list_editable_pages().await?;
        Ok(pages
            .into_iter()
            .map(|(key, page)| EditablePage {
                key,
                name: page.name,
                sections: page.sections,
            })
            .collect())
    }

    /// Stored fields of one page, in section and display order.
    pub async fn section_fields(&self, page: &str) -> Result<Vec<SectionField>, CoreError> {
        let page = required("page", page)?;
        let items = self.client.list_section_items(page).await?;
        Ok(items.into_iter().map(SectionField::from).collect())
    }

    /// Apply edits to a page. Fields that already exist are changed in one
    /// bulk update; the rest are created as text fields.
    pub async fn edit_sections(
        &self,
        page: &str,
        edits: &[SectionEdit],
    ) -> Result<SectionSaveReport, CoreError> {
        let page = required("page", page)?;
        if edits.is_empty() {
            return Err(CoreError::validation("no section edits given"));
        }
        let existing = self.section_fields(page).await?;

        let mut updates = Vec::new();
        let mut creates = Vec::new();
        for edit in edits {
            match existing
                .iter()
                .find(|f| f.section == edit.section && f.key == edit.key)
            {
                Some(field) => updates.push(SectionValueUpdate {
                    id: field.id.clone(),
                    content_value: section_value(field, &edit.value)?,
                }),
                None => creates.push(SectionItemPayload {
                    page_name: page.to_owned(),
                    section_name: edit.section.clone(),
                    content_key: edit.key.clone(),
                    content_value: serde_json::Value::String(edit.value.clone()),
                    content_type: "text".to_owned(),
                    label: None,
                }),
            }
        }

        let mut report = SectionSaveReport::default();
        if !updates.is_empty() {
            report.updated = self.client.bulk_update_sections(&updates).await?;
        }
        for payload in &creates {
            self.client.create_section_item(payload).await?;
            report.created += 1;
        }
        info!(page, updated = report.updated, created = report.created, "section content saved");
        Ok(report)
    }

    // ── Settings ─────────────────────────────────────────────────────

    /// Stored preferences merged over the defaults.
    pub async fn settings(&self) -> Result<AdminSettings, CoreError> {
        let data = self.client.get_admin_settings().await?;
        Ok(AdminSettings::merged(&data))
    }

    /// Persist the full preference object.
    pub async fn save_settings(&self, settings: &AdminSettings) -> Result<(), CoreError> {
        let map = settings.to_map()?;
        self.client.save_admin_settings(&map).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_collapse_punctuation() {
        assert_eq!(slugify("Seated Comfort Collection"), "seated-comfort-collection");
        assert_eq!(slugify("  Braille-Branded  (2024)! "), "braille-branded-2024");
        assert_eq!(slugify("Über Chic"), "ber-chic");
    }

    #[test]
    fn draft_requires_name_and_derives_slug() {
        assert!(CollectionDraft::default().to_payload().is_err());
        let payload = CollectionDraft {
            name: "African Heritage Line".into(),
            featured: true,
            ..CollectionDraft::default()
        }
        .to_payload()
        .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(payload.slug, "african-heritage-line");
        assert!(payload.is_featured);
    }

    #[test]
    fn product_create_needs_name_sku_and_price() {
        let draft = ProductDraft {
            name: Some("Adaptive Bomber Jacket".into()),
            sku: Some("HS-BJ-01".into()),
            price: Some(89_000.0),
            ..ProductDraft::default()
        };
        let payload = draft.for_create().unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(payload.slug.as_deref(), Some("adaptive-bomber-jacket"));
        assert_eq!(payload.stock_quantity, Some(0));

        assert!(ProductDraft { sku: None, ..draft.clone() }.for_create().is_err());
        assert!(ProductDraft { price: Some(0.0), ..draft.clone() }.for_create().is_err());
        assert!(ProductDraft { name: Some("  ".into()), ..draft }.for_create().is_err());
    }

    #[test]
    fn product_update_sends_only_given_fields() {
        assert!(ProductDraft::default().for_update().is_err());
        let payload = ProductDraft {
            stock_quantity: Some(12),
            ..ProductDraft::default()
        }
        .for_update()
        .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(
            serde_json::to_value(&payload).unwrap_or_default(),
            serde_json::json!({ "stock_quantity": 12 })
        );
    }

    #[test]
    fn blog_create_derives_slug_and_stays_draft() {
        let payload = BlogPostDraft {
            title: Some("Designing for Dignity".into()),
            ..BlogPostDraft::default()
        }
        .for_create()
        .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(payload.slug.as_deref(), Some("designing-for-dignity"));
        assert_eq!(payload.is_published, Some(false));
        assert!(BlogPostDraft::default().for_create().is_err());
        assert!(BlogPostDraft::default().for_update().is_err());
    }

    #[test]
    fn json_section_fields_take_json() {
        let field = SectionField {
            id: "7".into(),
            page: "about".into(),
            section: "values".into(),
            key: "items".into(),
            value: serde_json::json!([]),
            kind: "array".into(),
            label: "Values".into(),
        };
        assert_eq!(
            section_value(&field, r#"["Dignity"]"#).unwrap_or_default(),
            serde_json::json!(["Dignity"])
        );
        assert!(section_value(&field, "Dignity").is_err());

        let text = SectionField { kind: "text".into(), ..field };
        assert_eq!(
            section_value(&text, "Dignity").unwrap_or_default(),
            serde_json::json!("Dignity")
        );
    }
}
