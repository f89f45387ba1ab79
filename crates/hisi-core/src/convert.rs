// ── API-to-view-model conversions ──
//
// Bridges raw `hisi_api::types` responses into `hisi_core::model` types.
// Each conversion renames fields, parses timestamps and substitutes the
// storefront's defaults for missing optional data.

use chrono::{DateTime, Utc};
use serde_json::Value;

use hisi_api::types::{
    AnalyticsResponse, BlogPostResponse, CategoryResponse, ConversationResponse,
    CustomerResponse, DashboardMetricsResponse, InquiryResponse, MediaResponse,
    MessageResponse, OrderItemResponse, OrderResponse, PageSections, PressItemResponse,
    ProductImages, ProductResponse, ReviewResponse, ReviewStatsResponse, SectionItemResponse,
    parse_timestamp,
};

use crate::model::{
    AboutContent, AnalyticsReport, BlogPost, CollectionCard, Conversation, CustomerRow,
    DashboardMetrics, HeroSlide, Inquiry, MediaItem, Message, OrderDetail, OrderLine, OrderRow,
    OrderStatus, Period, PressItem, ProductCard, Review, ReviewStats, SectionField, TopProduct,
};

pub const PRODUCT_PLACEHOLDER_IMAGE: &str = "/images/products/placeholder.jpg";
pub const DEFAULT_COLLECTION_NAME: &str = "Adaptive Fashion";
pub const DEFAULT_COLLECTION_DESCRIPTION: &str = "Explore our collection";

// ── Helpers ────────────────────────────────────────────────────────

fn parse_datetime(raw: Option<&str>) -> Option<DateTime<Utc>> {
    raw.and_then(parse_timestamp)
}

fn non_empty(raw: Option<String>) -> Option<String> {
    raw.filter(|s| !s.trim().is_empty())
}

/// First string value found under any of `keys`.
fn str_field(value: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|k| value.get(*k).and_then(Value::as_str))
        .filter(|s| !s.trim().is_empty())
        .map(str::to_owned)
}

/// A list of strings, or of objects carrying a `title`/`name`/`text`.
fn string_list(value: &Value, keys: &[&str]) -> Vec<String> {
    let Some(items) = keys
        .iter()
        .find_map(|k| value.get(*k).and_then(Value::as_array))
    else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| match item {
            Value::String(s) => Some(s.clone()),
            other => str_field(other, &["title", "name", "text"]),
        })
        .collect()
}

fn format_address(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Object(_) => {
            let parts: Vec<String> = [
                &["street", "address", "line1", "address_line1"][..],
                &["city"][..],
                &["state", "region"][..],
                &["postal_code", "zip"][..],
                &["country"][..],
            ]
            .iter()
            .filter_map(|keys| str_field(value, keys))
            .collect();
            (!parts.is_empty()).then(|| parts.join(", "))
        }
        _ => None,
    }
}

// ── Storefront ─────────────────────────────────────────────────────

impl From<ProductResponse> for ProductCard {
    fn from(p: ProductResponse) -> Self {
        let (set_main, hover) = match p.images {
            Some(ProductImages::Set { main, hover, .. }) => (main, hover),
            Some(ProductImages::List(list)) => {
                let mut it = list.into_iter();
                (it.next(), it.next())
            }
            None => (None, None),
        };
        let image = non_empty(p.main_image)
            .or_else(|| non_empty(set_main))
            .unwrap_or_else(|| PRODUCT_PLACEHOLDER_IMAGE.into());
        let badge = non_empty(p.badge).or_else(|| p.is_featured.then(|| "Featured".into()));

        ProductCard {
            id: p.id.to_string(),
            name: p.name,
            slug: p.slug,
            price: p.price,
            original_price: p.original_price,
            image,
            hover_image: non_empty(hover),
            collection: p
                .category
                .map(|c| c.name)
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| DEFAULT_COLLECTION_NAME.into()),
            badge,
            accessibility_features: p.accessibility_features.unwrap_or_default(),
        }
    }
}

impl From<CategoryResponse> for CollectionCard {
    fn from(c: CategoryResponse) -> Self {
        let image = non_empty(c.image).unwrap_or_else(|| format!("/images/collections/{}.jpg", c.slug));
        CollectionCard {
            id: c.id.to_string(),
            name: c.name,
            description: non_empty(c.description)
                .unwrap_or_else(|| DEFAULT_COLLECTION_DESCRIPTION.into()),
            image,
            slug: c.slug,
            product_count: c.product_count.unwrap_or(0),
            features: c.features.unwrap_or_default(),
            featured: c.featured.unwrap_or(false),
        }
    }
}

impl From<BlogPostResponse> for BlogPost {
    fn from(b: BlogPostResponse) -> Self {
        BlogPost {
            published_at: parse_datetime(b.published_at.as_deref()),
            image: non_empty(b.image).unwrap_or_else(|| format!("/images/blog/{}.jpg", b.slug)),
            slug: b.slug,
            title: b.title,
            excerpt: b.excerpt.unwrap_or_default(),
            author: non_empty(b.author).unwrap_or_else(|| "Hisi Studio".into()),
            category: non_empty(b.category).unwrap_or_else(|| "News".into()),
            content: b.content,
        }
    }
}

impl From<PressItemResponse> for PressItem {
    fn from(p: PressItemResponse) -> Self {
        PressItem {
            published_at: parse_datetime(p.published_at.as_deref()),
            title: p.title,
            outlet: p.outlet.unwrap_or_default(),
            url: non_empty(p.url).unwrap_or_else(|| "#".into()),
            excerpt: p.excerpt.unwrap_or_default(),
        }
    }
}

/// Hero slides from the home page's `hero` section. Slides lacking a title
/// or image are skipped.
pub fn hero_slides(sections: &PageSections) -> Vec<HeroSlide> {
    let Some(slides) = sections
        .get("hero")
        .and_then(|hero| hero.get("slides").or(Some(hero)))
        .and_then(Value::as_array)
    else {
        return Vec::new();
    };

    slides
        .iter()
        .filter_map(|slide| {
            let title = str_field(slide, &["title"])?;
            let image = str_field(slide, &["image", "image_url"])?;
            Some((title, image, slide))
        })
        .zip(1u32..)
        .map(|((title, image, slide), id)| HeroSlide {
            id,
            image,
            title,
            subtitle: str_field(slide, &["subtitle"]).unwrap_or_default(),
            cta: str_field(slide, &["cta", "cta_text", "ctaText"]).unwrap_or_else(|| "Shop Now".into()),
            cta_link: str_field(slide, &["cta_link", "ctaLink", "link"]).unwrap_or_else(|| "/shop".into()),
        })
        .collect()
}

/// About content from a page's sections, preferring the mission block.
pub fn about_content(sections: &PageSections) -> Option<AboutContent> {
    ["mission", "about", "story", "hero"]
        .iter()
        .filter_map(|name| sections.get(*name))
        .find_map(|section| {
            let title = str_field(section, &["title", "heading"])?;
            Some(AboutContent {
                title,
                subtitle: str_field(section, &["subtitle", "eyebrow"]).unwrap_or_default(),
                body: str_field(section, &["description", "body", "content"]).unwrap_or_default(),
                values: string_list(section, &["highlights", "values"]),
            })
        })
}

// ── Admin ──────────────────────────────────────────────────────────

impl From<&OrderResponse> for OrderRow {
    fn from(o: &OrderResponse) -> Self {
        OrderRow {
            id: o.id.to_string(),
            order_number: o
                .order_number
                .clone()
                .unwrap_or_else(|| format!("#{}", o.id)),
            customer_name: o.customer_name.clone().unwrap_or_default(),
            customer_email: o.customer_email.clone().unwrap_or_default(),
            total: o.total,
            status: OrderStatus::from_api(o.status.as_deref()),
            created_at: parse_datetime(o.created_at.as_deref()),
        }
    }
}

impl From<OrderResponse> for OrderRow {
    fn from(o: OrderResponse) -> Self {
        OrderRow::from(&o)
    }
}

impl From<OrderItemResponse> for OrderLine {
    fn from(i: OrderItemResponse) -> Self {
        OrderLine {
            product_name: i.product_name,
            quantity: i.quantity,
            unit_price: i.unit_price,
            subtotal: i.subtotal,
        }
    }
}

impl From<OrderResponse> for OrderDetail {
    fn from(o: OrderResponse) -> Self {
        let row = OrderRow::from(&o);
        OrderDetail {
            row,
            shipping_address: o.shipping_address.as_ref().and_then(format_address),
            lines: o.items.into_iter().map(OrderLine::from).collect(),
            payment_method: o.payment_method,
            payment_status: o.payment_status,
            tracking_number: o.tracking_number,
        }
    }
}

impl From<CustomerResponse> for CustomerRow {
    fn from(c: CustomerResponse) -> Self {
        let joined = [c.first_name.as_deref(), c.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        let name = non_empty(c.name)
            .or_else(|| (!joined.is_empty()).then_some(joined))
            .unwrap_or_else(|| c.email.clone());

        CustomerRow {
            id: c.id.to_string(),
            name,
            email: c.email,
            phone: c.phone,
            order_count: c.order_count.unwrap_or(0),
            total_spent: c.total_spent.unwrap_or(0.0),
            joined_at: parse_datetime(c.created_at.as_deref()),
        }
    }
}

impl From<MediaResponse> for MediaItem {
    fn from(m: MediaResponse) -> Self {
        let kind = non_empty(m.kind).unwrap_or_else(|| {
            m.filename
                .rsplit_once('.')
                .map(|(_, ext)| ext.to_ascii_lowercase())
                .unwrap_or_default()
        });
        MediaItem {
            id: m.id.to_string(),
            filename: m.filename,
            url: m.url,
            kind,
            size_bytes: m.size.unwrap_or(0),
            uploaded_at: parse_datetime(m.uploaded_at.as_deref()),
        }
    }
}

impl From<InquiryResponse> for Inquiry {
    fn from(i: InquiryResponse) -> Self {
        Inquiry {
            id: i.id.to_string(),
            name: i.name,
            email: i.email,
            subject: i.subject.unwrap_or_default(),
            message: i.message,
            status: non_empty(i.status).unwrap_or_else(|| "new".into()),
            created_at: parse_datetime(i.created_at.as_deref()),
        }
    }
}

/// Analytics payloads do not echo their period; the caller supplies it.
pub fn analytics_report(raw: AnalyticsResponse, period: Period) -> AnalyticsReport {
    AnalyticsReport {
        period,
        revenue: raw.revenue,
        orders: raw.orders,
        customers: raw.customers,
        conversion_rate: raw.conversion_rate,
        top_products: raw
            .top_products
            .into_iter()
            .map(|p| TopProduct {
                name: p.name,
                sales: p.sales,
                revenue: p.revenue,
            })
            .collect(),
    }
}

impl From<DashboardMetricsResponse> for DashboardMetrics {
    fn from(m: DashboardMetricsResponse) -> Self {
        DashboardMetrics {
            total_revenue: m.total_revenue,
            total_orders: m.total_orders,
            total_customers: m.total_customers,
            pending_orders: m.pending_orders,
            low_stock_products: m.low_stock_products,
        }
    }
}

impl From<ConversationResponse> for Conversation {
    fn from(c: ConversationResponse) -> Self {
        Conversation {
            id: c.id.to_string(),
            customer_name: c.customer_name.unwrap_or_else(|| "Customer".into()),
            subject: c.subject.unwrap_or_default(),
            last_message: c.last_message.unwrap_or_default(),
            unread_count: c.unread_count,
            updated_at: parse_datetime(c.updated_at.as_deref()),
        }
    }
}

impl From<MessageResponse> for Message {
    fn from(m: MessageResponse) -> Self {
        Message {
            sender: m.sender.unwrap_or_else(|| "customer".into()),
            body: m.body,
            sent_at: parse_datetime(m.created_at.as_deref()),
        }
    }
}

impl From<ReviewResponse> for Review {
    fn from(r: ReviewResponse) -> Self {
        let author = r
            .user
            .and_then(|u| non_empty(u.name).or(u.email))
            .unwrap_or_else(|| "Anonymous".into());
        Review {
            id: r.id.to_string(),
            rating: r.rating.clamp(1, 5),
            title: r.title.unwrap_or_default(),
            content: r.content,
            author,
            product: r.product.map(|p| p.name),
            approved: r.is_approved,
            featured: r.is_featured,
            created_at: parse_datetime(r.created_at.as_deref()),
        }
    }
}

impl From<ReviewStatsResponse> for ReviewStats {
    fn from(s: ReviewStatsResponse) -> Self {
        let mut distribution = [0; 5];
        for (stars, slot) in (1..=5).zip(distribution.iter_mut()) {
            *slot = s
                .rating_distribution
                .get(&stars.to_string())
                .copied()
                .unwrap_or(0);
        }
        ReviewStats {
            total_reviews: s.total_reviews,
            average_rating: s.average_rating,
            distribution,
        }
    }
}

impl From<SectionItemResponse> for SectionField {
    fn from(item: SectionItemResponse) -> Self {
        let label = non_empty(item.label).unwrap_or_else(|| item.content_key.clone());
        SectionField {
            id: item.id.to_string(),
            page: item.page_name,
            section: item.section_name,
            key: item.content_key,
            value: item.content_value,
            kind: item.content_type,
            label,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    fn product(value: Value) -> ProductCard {
        serde_json::from_value::<ProductResponse>(value).unwrap().into()
    }

    #[test]
    fn product_defaults_fill_missing_fields() {
        let card = product(json!({"id": 9, "name": "Plain Tee", "price": 15000, "is_featured": true}));
        assert_eq!(card.image, PRODUCT_PLACEHOLDER_IMAGE);
        assert_eq!(card.collection, DEFAULT_COLLECTION_NAME);
        assert_eq!(card.badge.as_deref(), Some("Featured"));
        assert!(card.accessibility_features.is_empty());
    }

    #[test]
    fn product_prefers_main_image_then_image_set() {
        let card = product(json!({
            "id": 1, "name": "Jacket", "price": 1,
            "images": {"main": "/set-main.jpg", "hover": "/hover.jpg"},
            "category": {"name": "Adaptive Outerwear"}
        }));
        assert_eq!(card.image, "/set-main.jpg");
        assert_eq!(card.hover_image.as_deref(), Some("/hover.jpg"));
        assert_eq!(card.collection, "Adaptive Outerwear");

        let card = product(json!({
            "id": 1, "name": "Jacket", "price": 1,
            "main_image": "/main.jpg", "images": ["/a.jpg", "/b.jpg"]
        }));
        assert_eq!(card.image, "/main.jpg");
        assert_eq!(card.hover_image.as_deref(), Some("/b.jpg"));
    }

    #[test]
    fn collection_defaults() {
        let card: CollectionCard = serde_json::from_value::<CategoryResponse>(json!({
            "id": 4, "name": "Seated Comfort", "slug": "seated-comfort",
            "productCount": 15, "is_featured": true
        }))
        .unwrap()
        .into();
        assert_eq!(card.description, DEFAULT_COLLECTION_DESCRIPTION);
        assert_eq!(card.image, "/images/collections/seated-comfort.jpg");
        assert_eq!(card.product_count, 15);
        assert!(card.featured);
    }

    #[test]
    fn hero_slides_from_section_content() {
        let mut sections = PageSections::new();
        sections.insert(
            "hero".into(),
            json!({"slides": [
                {"title": "Adaptive Fashion", "image": "/h1.jpg", "subtitle": "Style", "cta_text": "Shop", "cta_link": "/shop"},
                {"title": "No image"},
                {"title": "Story", "image": "/h3.jpg"}
            ]}),
        );
        let slides = hero_slides(&sections);
        assert_eq!(slides.len(), 2);
        assert_eq!(slides[0].cta, "Shop");
        assert_eq!(slides[1].id, 2);
        assert_eq!(slides[1].cta_link, "/shop");
    }

    #[test]
    fn about_prefers_mission_and_reads_highlights() {
        let mut sections = PageSections::new();
        sections.insert("hero".into(), json!({"title": "About Hisi"}));
        sections.insert(
            "mission".into(),
            json!({"title": "Fashion That Feels Right", "description": "Body",
                   "highlights": ["Inclusive sizing", {"title": "Sustainable"}]}),
        );
        let about = about_content(&sections).unwrap();
        assert_eq!(about.title, "Fashion That Feels Right");
        assert_eq!(about.values, vec!["Inclusive sizing", "Sustainable"]);
    }

    #[test]
    fn order_detail_formats_address_and_status() {
        let order: OrderResponse = serde_json::from_value(json!({
            "id": 17, "total": 89000, "status": "processing",
            "shipping_address": {"street": "12 Allen Ave", "city": "Ikeja", "country": "Nigeria"},
            "items": [{"product_name": "Adaptive Bomber Jacket", "quantity": 1, "unit_price": 89000, "subtotal": 89000}]
        }))
        .unwrap();
        let detail = OrderDetail::from(order);
        assert_eq!(detail.row.order_number, "#17");
        assert_eq!(detail.row.status, OrderStatus::Processing);
        assert_eq!(detail.shipping_address.as_deref(), Some("12 Allen Ave, Ikeja, Nigeria"));
        assert_eq!(detail.lines.len(), 1);
    }

    #[test]
    fn customer_name_from_parts() {
        let row: CustomerRow = serde_json::from_value::<CustomerResponse>(json!({
            "id": 3, "first_name": "Ada", "last_name": "Obi", "email": "ada@example.com"
        }))
        .unwrap()
        .into();
        assert_eq!(row.name, "Ada Obi");
        assert_eq!(row.order_count, 0);
    }

    #[test]
    fn review_author_and_product() {
        let review: Review = serde_json::from_value::<ReviewResponse>(json!({
            "id": "9b1c", "rating": 5, "content": "Magnetic buttons are a gift",
            "is_approved": false,
            "user": {"id": "u1", "name": "Chidi Eze", "email": "chidi@example.com"},
            "product": {"id": "p1", "name": "Adaptive Bomber Jacket"},
            "created_at": "2024-06-15T10:30:00.123456"
        }))
        .unwrap()
        .into();
        assert_eq!(review.author, "Chidi Eze");
        assert_eq!(review.product.as_deref(), Some("Adaptive Bomber Jacket"));
        assert!(!review.approved);
        assert!(review.created_at.is_some());
    }

    #[test]
    fn review_stats_distribution_by_star() {
        let stats: ReviewStats = serde_json::from_value::<ReviewStatsResponse>(json!({
            "total_reviews": 4, "average_rating": 4.3,
            "rating_distribution": {"1": 0, "2": 0, "3": 1, "4": 1, "5": 2}
        }))
        .unwrap()
        .into();
        assert_eq!(stats.distribution, [0, 0, 1, 1, 2]);
        assert_eq!(stats.total_reviews, 4);
    }
}
