// ── Storefront service ──
//
// Customer-facing reads. Every view goes through `fetch_with_fallback`,
// so these never fail: a broken backend renders the built-in content and
// the `Loaded` provenance says so. Form submissions do return errors.

use tracing::{debug, info};

use hisi_api::types::{
    BlogPostResponse, CategoryResponse, ContactForm, PageSections, PressPageResponse,
    ProductResponse, ReviewResponse, ReviewSubmission,
};
use hisi_api::{Page, StoreClient};

use crate::config::ClientConfig;
use crate::convert;
use crate::error::CoreError;
use crate::fallback;
use crate::fetch::{EmptyPolicy, Loaded, fetch_with_fallback};
use crate::listing::ListQuery;
use crate::model::{
    AboutContent, BlogPost, CollectionCard, HeroSlide, PressItem, ProductCard, Review, ReviewStats,
};

/// A customer review as typed into the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewDraft {
    pub rating: u8,
    pub title: Option<String>,
    pub content: String,
    pub product_id: Option<String>,
}

impl ReviewDraft {
    fn to_submission(&self) -> Result<ReviewSubmission, CoreError> {
        if !(1..=5).contains(&self.rating) {
            return Err(CoreError::validation("rating must be between 1 and 5"));
        }
        let content = self.content.trim();
        if content.is_empty() {
            return Err(CoreError::validation("review content is required"));
        }
        let trimmed = |v: &Option<String>| {
            v.as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
        };
        Ok(ReviewSubmission {
            rating: self.rating,
            title: trimmed(&self.title),
            content: content.to_owned(),
            product_id: trimmed(&self.product_id),
        })
    }
}

/// Read access to the public store.
#[derive(Debug, Clone)]
pub struct Storefront {
    client: StoreClient,
}

impl Storefront {
    pub fn new(client: StoreClient) -> Self {
        Self { client }
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, CoreError> {
        Ok(Self::new(config.build_client()?))
    }

    pub fn client(&self) -> &StoreClient {
        &self.client
    }

    // ── Catalog ──────────────────────────────────────────────────────

    /// Home page product strip.
    pub async fn featured_products(&self, limit: u32) -> Loaded<Vec<ProductCard>> {
        let query = ListQuery::new(limit).with_filter("featured", "true");
        fetch_with_fallback(
            "featured products",
            self.client.list_products(&query.to_params()),
            |page: Page<ProductResponse>| page.items.into_iter().map(ProductCard::from).collect(),
            fallback::featured_products,
            EmptyPolicy::UseFallback,
        )
        .await
    }

    /// Shop listing. An empty result is shown as-is.
    pub async fn products(&self, query: &ListQuery) -> Loaded<Page<ProductCard>> {
        fetch_with_fallback(
            "products",
            self.client.list_products(&query.to_params()),
            |page: Page<ProductResponse>| page.map(ProductCard::from),
            || Page::empty(query.page, query.per_page),
            EmptyPolicy::KeepEmpty,
        )
        .await
    }

    /// A product by numeric id or by slug.
    pub async fn product(&self, id_or_slug: &str) -> Result<ProductCard, CoreError> {
        let key = id_or_slug.trim();
        if key.is_empty() {
            return Err(CoreError::validation("product id or slug is required"));
        }
        let result = if key.bytes().all(|b| b.is_ascii_digit()) {
            self.client.get_product(key).await
        } else {
            self.client.get_product_by_slug(key).await
        };
        match result {
            Ok(product) => Ok(product.into()),
            Err(e) if e.is_not_found() => Err(CoreError::not_found("Product", key)),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn categories(&self) -> Result<Vec<CollectionCard>, CoreError> {
        let categories = self.client.list_categories().await?;
        Ok(categories.into_iter().map(CollectionCard::from).collect())
    }

    /// Collections from the dedicated endpoint, falling back to product
    /// categories, then to the built-in list.
    pub async fn collections(&self) -> Loaded<Vec<CollectionCard>> {
        fetch_with_fallback(
            "collections",
            self.collection_sources(),
            |items: Vec<CategoryResponse>| items.into_iter().map(CollectionCard::from).collect(),
            fallback::collections,
            EmptyPolicy::UseFallback,
        )
        .await
    }

    async fn collection_sources(&self) -> Result<Vec<CategoryResponse>, hisi_api::Error> {
        match self.client.list_collections().await {
            Ok(items) if !items.is_empty() => Ok(items),
            Ok(_) => {
                debug!("no collections, trying product categories");
                self.client.list_categories().await
            }
            Err(e) => {
                debug!(error = %e, "collections endpoint failed, trying product categories");
                self.client.list_categories().await
            }
        }
    }

    // ── Content ──────────────────────────────────────────────────────

    pub async fn hero_slides(&self) -> Loaded<Vec<HeroSlide>> {
        fetch_with_fallback(
            "hero slides",
            self.client.get_section_content("home"),
            |sections: PageSections| convert::hero_slides(&sections),
            fallback::hero_slides,
            EmptyPolicy::UseFallback,
        )
        .await
    }

    pub async fn about(&self) -> Loaded<AboutContent> {
        fetch_with_fallback(
            "about",
            self.client.get_section_content("about"),
            |sections: PageSections| convert::about_content(&sections).unwrap_or_default(),
            fallback::about,
            EmptyPolicy::UseFallback,
        )
        .await
    }

    pub async fn press(&self) -> Loaded<Vec<PressItem>> {
        fetch_with_fallback(
            "press",
            self.client.get_press(),
            |page: PressPageResponse| page.media_coverage.into_iter().map(PressItem::from).collect(),
            fallback::press,
            EmptyPolicy::UseFallback,
        )
        .await
    }

    pub async fn blog_posts(&self, query: &ListQuery) -> Loaded<Page<BlogPost>> {
        fetch_with_fallback(
            "blog",
            self.client.list_blog_posts(&query.to_params()),
            |page: Page<BlogPostResponse>| page.map(BlogPost::from),
            || Page::empty(query.page, query.per_page),
            EmptyPolicy::KeepEmpty,
        )
        .await
    }

    pub async fn blog_post(&self, slug: &str) -> Result<BlogPost, CoreError> {
        match self.client.get_blog_post(slug).await {
            Ok(post) => Ok(post.into()),
            Err(e) if e.is_not_found() => Err(CoreError::not_found("Blog post", slug)),
            Err(e) => Err(e.into()),
        }
    }

    // ── Reviews ──────────────────────────────────────────────────────

    /// Approved reviews. Filters: `product_id`, `featured`.
    pub async fn reviews(&self, query: &ListQuery) -> Loaded<Page<Review>> {
        fetch_with_fallback(
            "reviews",
            self.client.list_reviews(&query.to_params()),
            |page: Page<ReviewResponse>| page.map(Review::from),
            || Page::empty(query.page, query.per_page),
            EmptyPolicy::KeepEmpty,
        )
        .await
    }

    /// Rating summary; zeroed when unavailable.
    pub async fn review_stats(&self, product_id: Option<&str>) -> Loaded<ReviewStats> {
        fetch_with_fallback(
            "review stats",
            self.client.get_review_stats(product_id),
            ReviewStats::from,
            ReviewStats::default,
            EmptyPolicy::KeepEmpty,
        )
        .await
    }

    /// Submit a review for moderation. Needs a signed-in token.
    pub async fn submit_review(&self, draft: &ReviewDraft) -> Result<Review, CoreError> {
        let submission = draft.to_submission()?;
        let review = self.client.submit_review(&submission).await?;
        info!(rating = submission.rating, "review submitted for moderation");
        Ok(review.into())
    }

    // ── Forms ────────────────────────────────────────────────────────

    pub async fn subscribe_newsletter(&self, email: &str) -> Result<(), CoreError> {
        let email = email.trim();
        if !is_plausible_email(email) {
            return Err(CoreError::validation(format!(
                "'{email}' is not a valid email address"
            )));
        }
        self.client.subscribe_newsletter(email).await?;
        info!("newsletter subscription sent");
        Ok(())
    }

    pub async fn submit_contact(&self, form: &ContactForm) -> Result<(), CoreError> {
        for (field, value) in [
            ("name", &form.name),
            ("subject", &form.subject),
            ("message", &form.message),
        ] {
            if value.trim().is_empty() {
                return Err(CoreError::validation(format!("{field} is required")));
            }
        }
        if !is_plausible_email(form.email.trim()) {
            return Err(CoreError::validation(format!(
                "'{}' is not a valid email address",
                form.email
            )));
        }
        self.client.submit_contact(form).await?;
        info!("contact message sent");
        Ok(())
    }
}

/// `local@domain.tld` with no whitespace.
pub fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shape() {
        assert!(is_plausible_email("ada@hisistudio.com"));
        assert!(is_plausible_email("a.b@mail.co.ng"));
        assert!(!is_plausible_email("ada"));
        assert!(!is_plausible_email("@hisi.com"));
        assert!(!is_plausible_email("ada@hisi"));
        assert!(!is_plausible_email("ada@.com"));
        assert!(!is_plausible_email("ada @hisi.com"));
        assert!(!is_plausible_email("ada@hisi.com."));
    }

    #[test]
    fn review_draft_checks_rating_and_content() {
        let draft = ReviewDraft {
            rating: 4,
            title: Some("  ".into()),
            content: " Fits well seated ".into(),
            product_id: Some("p1".into()),
        };
        let submission = draft.to_submission().unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(submission.content, "Fits well seated");
        assert_eq!(submission.title, None);

        assert!(ReviewDraft { rating: 6, ..draft.clone() }.to_submission().is_err());
        assert!(ReviewDraft { rating: 0, ..draft.clone() }.to_submission().is_err());
        assert!(ReviewDraft { content: "  ".into(), ..draft }.to_submission().is_err());
    }
}
