// ── Admin back-office view-models ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Order fulfilment status.
///
/// Unknown backend strings render as `Pending`, matching how the badge
/// lookup degrades.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn from_api(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.parse().ok()).unwrap_or_default()
    }

    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Human label for badges.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Processing => "Processing",
            Self::Shipped => "Shipped",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
        }
    }
}

/// Reporting window for analytics and the dashboard.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Period {
    Today,
    Week,
    #[default]
    Month,
    Quarter,
    Year,
}

impl Period {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// File type for analytics exports.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ExportFormat {
    #[default]
    Csv,
    Pdf,
}

impl ExportFormat {
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Download name, e.g. `analytics-month.csv`.
    pub fn file_name(self, period: Period) -> String {
        format!("analytics-{period}.{self}")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderRow {
    pub id: String,
    pub order_number: String,
    pub customer_name: String,
    pub customer_email: String,
    pub total: f64,
    pub status: OrderStatus,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderLine {
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub subtotal: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderDetail {
    #[serde(flatten)]
    pub row: OrderRow,
    pub lines: Vec<OrderLine>,
    pub shipping_address: Option<String>,
    pub payment_method: Option<String>,
    pub payment_status: Option<String>,
    pub tracking_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub order_count: u32,
    pub total_spent: f64,
    pub joined_at: Option<DateTime<Utc>>,
}

/// A customer with their order history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerDetail {
    #[serde(flatten)]
    pub customer: CustomerRow,
    pub orders: Vec<OrderRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaItem {
    pub id: String,
    pub filename: String,
    pub url: String,
    pub kind: String,
    pub size_bytes: u64,
    pub uploaded_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inquiry {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub status: String,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopProduct {
    pub name: String,
    pub sales: u64,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsReport {
    pub period: Period,
    pub revenue: f64,
    pub orders: u64,
    pub customers: u64,
    pub conversion_rate: f64,
    pub top_products: Vec<TopProduct>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardMetrics {
    pub total_revenue: f64,
    pub total_orders: u64,
    pub total_customers: u64,
    pub pending_orders: u64,
    pub low_stock_products: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversation {
    pub id: String,
    pub customer_name: String,
    pub subject: String,
    pub last_message: String,
    pub unread_count: u32,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub sender: String,
    pub body: String,
    pub sent_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_status_degrades_to_pending() {
        assert_eq!(OrderStatus::from_api(Some("SHIPPED")), OrderStatus::Shipped);
        assert_eq!(OrderStatus::from_api(Some("refunded")), OrderStatus::Pending);
        assert_eq!(OrderStatus::from_api(None), OrderStatus::Pending);
    }

    #[test]
    fn status_wire_names_are_lowercase() {
        assert_eq!(OrderStatus::Cancelled.as_str(), "cancelled");
        assert_eq!(OrderStatus::Delivered.to_string(), "delivered");
        assert_eq!(Period::Quarter.as_str(), "quarter");
    }

    #[test]
    fn export_file_name() {
        assert_eq!(ExportFormat::Pdf.file_name(Period::Week), "analytics-week.pdf");
    }
}
