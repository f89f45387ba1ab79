// Admin endpoints (bearer token required).
//
// Orders, customers, media library, inquiries, analytics, dashboard,
// conversations, settings, review moderation, section content and the
// catalog editors.

use serde_json::json;

use crate::client::{Access, StoreClient};
use crate::error::Error;
use crate::types::{
    AdminSectionsResponse, AnalyticsResponse, BlogPostPayload, BlogPostResponse,
    BulkUpdateResponse, CategoryResponse, CollectionPayload, ConversationResponse,
    CustomerResponse, DashboardOverviewResponse, EditablePages, InquiryResponse, MediaResponse,
    MessageResponse, OrderResponse, Page, ProductPayload, ProductResponse, ProductSaved,
    ReviewResponse, ReviewUpdate, SectionItemPayload, SectionItemResponse, SectionValueUpdate,
    SettingsMap,
};

impl StoreClient {
    // ── Orders ───────────────────────────────────────────────────────

    /// `GET /orders`.
    pub async fn list_orders(
        &self,
        params: &[(String, String)],
    ) -> Result<Page<OrderResponse>, Error> {
        self.get_page("orders", params, Access::Privileged).await
    }

    /// `GET /orders/{id}`.
    pub async fn get_order(&self, id: &str) -> Result<OrderResponse, Error> {
        self.get(&format!("orders/{id}"), Access::Privileged).await
    }

    /// `PATCH /admin/orders/{id}/status`.
    pub async fn update_order_status(&self, id: &str, status: &str) -> Result<(), Error> {
        self.patch_no_response(
            &format!("admin/orders/{id}/status"),
            &json!({ "status": status }),
        )
        .await
    }

    // ── Customers ────────────────────────────────────────────────────

    /// `GET /admin/customers`.
    pub async fn list_customers(
        &self,
        params: &[(String, String)],
    ) -> Result<Page<CustomerResponse>, Error> {
        self.get_page("admin/customers", params, Access::Privileged)
            .await
    }

    /// `GET /admin/customers/{id}`.
    pub async fn get_customer(&self, id: &str) -> Result<CustomerResponse, Error> {
        self.get(&format!("admin/customers/{id}"), Access::Privileged)
            .await
    }

    /// `GET /admin/customers/{id}/orders`.
    pub async fn list_customer_orders(&self, id: &str) -> Result<Vec<OrderResponse>, Error> {
        let page: Page<OrderResponse> = self
            .get_page(&format!("admin/customers/{id}/orders"), &[], Access::Privileged)
            .await?;
        Ok(page.items)
    }

    // ── Media ────────────────────────────────────────────────────────

    /// `GET /admin/media`.
    pub async fn list_media(
        &self,
        params: &[(String, String)],
    ) -> Result<Page<MediaResponse>, Error> {
        self.get_page("admin/media", params, Access::Privileged).await
    }

    /// `POST /admin/media/upload` (multipart, field `file`).
    pub async fn upload_media(
        &self,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<MediaResponse, Error> {
        self.upload("admin/media/upload", filename, bytes).await
    }

    /// `DELETE /admin/media/{id}`.
    pub async fn delete_media(&self, id: &str) -> Result<(), Error> {
        self.delete(&format!("admin/media/{id}")).await
    }

    // ── Inquiries ────────────────────────────────────────────────────

    /// `GET /cms/contact-messages`.
    pub async fn list_inquiries(
        &self,
        params: &[(String, String)],
    ) -> Result<Page<InquiryResponse>, Error> {
        self.get_page("cms/contact-messages", params, Access::Privileged)
            .await
    }

    /// `POST /admin/inquiries/{id}/respond`.
    pub async fn respond_inquiry(&self, id: &str, response: &str) -> Result<(), Error> {
        self.post_no_response(
            &format!("admin/inquiries/{id}/respond"),
            &json!({ "response": response }),
            Access::Privileged,
        )
        .await
    }

    // ── Analytics & dashboard ────────────────────────────────────────

    /// `GET /admin/analytics?period=...`.
    pub async fn get_analytics(&self, period: &str) -> Result<AnalyticsResponse, Error> {
        let params = [("period".to_owned(), period.to_owned())];
        self.get_with_params("admin/analytics", &params, Access::Privileged)
            .await
    }

    /// `GET /admin/analytics/export?period=...&format=...`; raw file body.
    pub async fn export_analytics(&self, period: &str, format: &str) -> Result<Vec<u8>, Error> {
        let params = [
            ("period".to_owned(), period.to_owned()),
            ("format".to_owned(), format.to_owned()),
        ];
        self.get_bytes("admin/analytics/export", &params, Access::Privileged)
            .await
    }

    /// `GET /admin/dashboard/overview?period=...`.
    pub async fn get_dashboard(&self, period: &str) -> Result<DashboardOverviewResponse, Error> {
        let params = [("period".to_owned(), period.to_owned())];
        self.get_with_params("admin/dashboard/overview", &params, Access::Privileged)
            .await
    }

    // ── Conversations ────────────────────────────────────────────────

    /// `GET /admin/conversations`.
    pub async fn list_conversations(&self) -> Result<Vec<ConversationResponse>, Error> {
        let page: Page<ConversationResponse> = self
            .get_page("admin/conversations", &[], Access::Privileged)
            .await?;
        Ok(page.items)
    }

    /// `GET /admin/conversations/{id}/messages`.
    pub async fn list_messages(&self, conversation: &str) -> Result<Vec<MessageResponse>, Error> {
        let page: Page<MessageResponse> = self
            .get_page(
                &format!("admin/conversations/{conversation}/messages"),
                &[],
                Access::Privileged,
            )
            .await?;
        Ok(page.items)
    }

    /// `POST /admin/conversations/{id}/messages`.
    pub async fn send_message(&self, conversation: &str, body: &str) -> Result<(), Error> {
        self.post_no_response(
            &format!("admin/conversations/{conversation}/messages"),
            &json!({ "message": body }),
            Access::Privileged,
        )
        .await
    }

    // ── Settings ─────────────────────────────────────────────────────

    /// `GET /admin/settings`.
    pub async fn get_admin_settings(&self) -> Result<SettingsMap, Error> {
        self.get("admin/settings", Access::Privileged).await
    }

    /// `PUT /admin/settings` with the full preference map.
    pub async fn save_admin_settings(&self, settings: &SettingsMap) -> Result<(), Error> {
        self.put_no_response("admin/settings", settings).await
    }

    // ── Catalog ──────────────────────────────────────────────────────

    /// `POST /admin/collections`.
    pub async fn create_collection(
        &self,
        payload: &CollectionPayload,
    ) -> Result<CategoryResponse, Error> {
        self.post("admin/collections", payload, Access::Privileged)
            .await
    }

    /// `PUT /admin/collections/{id}`.
    pub async fn update_collection(
        &self,
        id: &str,
        payload: &CollectionPayload,
    ) -> Result<(), Error> {
        self.put_no_response(&format!("admin/collections/{id}"), payload)
            .await
    }

    /// `DELETE /admin/collections/{id}`.
    pub async fn delete_collection(&self, id: &str) -> Result<(), Error> {
        self.delete(&format!("admin/collections/{id}")).await
    }

    /// `POST /products`.
    pub async fn create_product(&self, payload: &ProductPayload) -> Result<ProductResponse, Error> {
        let saved: ProductSaved = self
            .send_unwrapped(reqwest::Method::POST, "products", payload)
            .await?;
        Ok(saved.product)
    }

    /// `PUT /products/{id}`; only the fields set in `payload` change.
    pub async fn update_product(
        &self,
        id: &str,
        payload: &ProductPayload,
    ) -> Result<ProductResponse, Error> {
        let saved: ProductSaved = self
            .send_unwrapped(reqwest::Method::PUT, &format!("products/{id}"), payload)
            .await?;
        Ok(saved.product)
    }

    /// `DELETE /products/{id}`.
    pub async fn delete_product(&self, id: &str) -> Result<(), Error> {
        self.delete(&format!("products/{id}")).await
    }

    /// `POST /admin/blog`.
    pub async fn create_blog_post(
        &self,
        payload: &BlogPostPayload,
    ) -> Result<BlogPostResponse, Error> {
        self.post("admin/blog", payload, Access::Privileged).await
    }

    /// `PUT /admin/blog/{id}`.
    pub async fn update_blog_post(
        &self,
        id: &str,
        payload: &BlogPostPayload,
    ) -> Result<BlogPostResponse, Error> {
        self.put(&format!("admin/blog/{id}"), payload).await
    }

    /// `DELETE /admin/blog/{id}`.
    pub async fn delete_blog_post(&self, id: &str) -> Result<(), Error> {
        self.delete(&format!("admin/blog/{id}")).await
    }

    // ── Reviews ──────────────────────────────────────────────────────

    /// `GET /admin/reviews?status=pending|approved|all`.
    pub async fn list_admin_reviews(
        &self,
        params: &[(String, String)],
    ) -> Result<Page<ReviewResponse>, Error> {
        self.get_page("admin/reviews", params, Access::Privileged)
            .await
    }

    /// `PUT /admin/reviews/{id}`.
    pub async fn update_review(
        &self,
        id: &str,
        update: &ReviewUpdate,
    ) -> Result<ReviewResponse, Error> {
        self.put(&format!("admin/reviews/{id}"), update).await
    }

    /// `DELETE /admin/reviews/{id}`.
    pub async fn delete_review(&self, id: &str) -> Result<(), Error> {
        self.delete(&format!("admin/reviews/{id}")).await
    }

    // ── Section content ──────────────────────────────────────────────

    /// `GET /admin/section-content/pages`.
    pub async fn list_editable_pages(&self) -> Result<EditablePages, Error> {
        self.get("admin/section-content/pages", Access::Privileged)
            .await
    }

    /// `GET /admin/section-content?page_name=...`.
    pub async fn list_section_items(&self, page: &str) -> Result<Vec<SectionItemResponse>, Error> {
        let params = [("page_name".to_owned(), page.to_owned())];
        let sections: AdminSectionsResponse = self
            .get_with_params("admin/section-content", &params, Access::Privileged)
            .await?;
        Ok(sections.items)
    }

    /// `POST /admin/section-content`. The backend answers 409 when the
    /// page/section/key triple already exists.
    pub async fn create_section_item(
        &self,
        payload: &SectionItemPayload,
    ) -> Result<SectionItemResponse, Error> {
        self.post("admin/section-content", payload, Access::Privileged)
            .await
    }

    /// `PUT /admin/section-content/bulk`; returns how many items changed.
    pub async fn bulk_update_sections(&self, items: &[SectionValueUpdate]) -> Result<u32, Error> {
        let resp: BulkUpdateResponse = self
            .put("admin/section-content/bulk", &json!({ "items": items }))
            .await?;
        Ok(resp.updated_count)
    }
}
