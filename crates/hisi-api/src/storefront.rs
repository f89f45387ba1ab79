// Storefront endpoints (anonymous).
//
// Products, categories, collections, CMS section content, blog, press,
// reviews, newsletter and contact form. A bearer token is sent when configured
// but never required.

use serde_json::json;
use tracing::debug;

use crate::client::{Access, StoreClient};
use crate::error::Error;
use crate::types::{
    BlogPostResponse, CategoryResponse, ContactForm, Page, PageSections, PressPageResponse,
    ProductResponse, ReviewResponse, ReviewStatsResponse, ReviewSubmission, SettingsMap,
};

impl StoreClient {
    /// `GET /products` with canonical list params and filters.
    pub async fn list_products(
        &self,
        params: &[(String, String)],
    ) -> Result<Page<ProductResponse>, Error> {
        self.get_page("products", params, Access::Public).await
    }

    /// `GET /products/{id}`.
    pub async fn get_product(&self, id: &str) -> Result<ProductResponse, Error> {
        self.get(&format!("products/{id}"), Access::Public).await
    }

    /// `GET /products/slug/{slug}`.
    pub async fn get_product_by_slug(&self, slug: &str) -> Result<ProductResponse, Error> {
        self.get(&format!("products/slug/{slug}"), Access::Public)
            .await
    }

    /// `GET /products/categories`.
    pub async fn list_categories(&self) -> Result<Vec<CategoryResponse>, Error> {
        let page: Page<CategoryResponse> = self
            .get_page("products/categories", &[], Access::Public)
            .await?;
        Ok(page.items)
    }

    /// `GET /collections`.
    pub async fn list_collections(&self) -> Result<Vec<CategoryResponse>, Error> {
        let page: Page<CategoryResponse> =
            self.get_page("collections", &[], Access::Public).await?;
        Ok(page.items)
    }

    /// `GET /section-content/{page}`: section name → field map.
    pub async fn get_section_content(&self, page: &str) -> Result<PageSections, Error> {
        debug!(page, "loading section content");
        self.get(&format!("section-content/{page}"), Access::Public)
            .await
    }

    /// `GET /settings`: public site settings.
    pub async fn get_site_settings(&self) -> Result<SettingsMap, Error> {
        self.get("settings", Access::Public).await
    }

    /// `GET /blog`.
    pub async fn list_blog_posts(
        &self,
        params: &[(String, String)],
    ) -> Result<Page<BlogPostResponse>, Error> {
        self.get_page("blog", params, Access::Public).await
    }

    /// `GET /blog/{slug}`.
    pub async fn get_blog_post(&self, slug: &str) -> Result<BlogPostResponse, Error> {
        self.get(&format!("blog/{slug}"), Access::Public).await
    }

    /// `GET /press`.
    pub async fn get_press(&self) -> Result<PressPageResponse, Error> {
        self.get("press", Access::Public).await
    }

    /// `GET /reviews`: approved reviews only.
    pub async fn list_reviews(
        &self,
        params: &[(String, String)],
    ) -> Result<Page<ReviewResponse>, Error> {
        self.get_page("reviews", params, Access::Public).await
    }

    /// `GET /reviews/stats`, optionally for one product.
    pub async fn get_review_stats(
        &self,
        product_id: Option<&str>,
    ) -> Result<ReviewStatsResponse, Error> {
        let params: Vec<(String, String)> = product_id
            .map(|id| ("product_id".to_owned(), id.to_owned()))
            .into_iter()
            .collect();
        self.get_with_params("reviews/stats", &params, Access::Public)
            .await
    }

    /// `POST /reviews`. Needs a signed-in token; the review stays hidden
    /// until approved.
    pub async fn submit_review(&self, review: &ReviewSubmission) -> Result<ReviewResponse, Error> {
        self.post("reviews", review, Access::Privileged).await
    }

    /// `POST /newsletter/subscribe`.
    pub async fn subscribe_newsletter(&self, email: &str) -> Result<(), Error> {
        self.post_no_response("newsletter/subscribe", &json!({ "email": email }), Access::Public)
            .await
    }

    /// `POST /contact`.
    pub async fn submit_contact(&self, form: &ContactForm) -> Result<(), Error> {
        self.post_no_response("contact", form, Access::Public).await
    }
}
