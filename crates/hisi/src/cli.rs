//! Clap derive structures for the `hisi` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use hisi_core::{
    ExportFormat, OrderStatus, Period, ReviewAction, ReviewStatus, SectionEdit, SettingKey, SortOrder,
};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// hisi -- browse the storefront and run the admin back office
#[derive(Debug, Parser)]
#[command(
    name = "hisi",
    version,
    about = "Browse the hisi storefront and manage its back office",
    long_about = "Command-line client for the hisi adaptive-fashion store.\n\n\
        Storefront commands work anonymously and fall back to built-in content\n\
        when the backend is unavailable. Admin commands need a bearer token.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Store profile to use
    #[arg(long, short = 'p', env = "HISI_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Backend origin (overrides profile)
    #[arg(long, env = "HISI_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Bearer token for admin commands
    #[arg(long, env = "HISI_TOKEN", global = true, hide_env_values = true)]
    pub token: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "HISI_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Request timeout in seconds (overrides profile)
    #[arg(long, env = "HISI_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Browse the product catalog
    #[command(alias = "p")]
    Products(ProductsArgs),

    /// Browse and manage collections
    #[command(alias = "col")]
    Collections(CollectionsArgs),

    /// Show marketing content; edit page sections (admin)
    Content(ContentArgs),

    /// Read and manage the journal
    Blog(BlogArgs),

    /// Read, submit and moderate customer reviews
    #[command(alias = "rv")]
    Reviews(ReviewsArgs),

    /// Newsletter sign-up
    Newsletter(NewsletterArgs),

    /// Send a message through the contact form
    Contact(ContactArgs),

    /// Manage orders (admin)
    #[command(alias = "o")]
    Orders(OrdersArgs),

    /// Browse customers (admin)
    #[command(alias = "cu")]
    Customers(CustomersArgs),

    /// Manage the media library (admin)
    Media(MediaArgs),

    /// Read and answer contact inquiries (admin)
    Inquiries(InquiriesArgs),

    /// Sales analytics (admin)
    Analytics(AnalyticsArgs),

    /// Headline metrics (admin)
    #[command(alias = "dash")]
    Dashboard(DashboardArgs),

    /// Customer conversations (admin)
    #[command(alias = "msg")]
    Messages(MessagesArgs),

    /// Admin preferences
    Settings(SettingsArgs),

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Shared Arguments ─────────────────────────────────────────────────

/// Paging and sorting shared by every list command.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Page to fetch (1-based)
    #[arg(long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,

    /// Results per page (defaults to the configured per_page)
    #[arg(long, short = 'n', value_parser = clap::value_parser!(u32).range(1..=200))]
    pub per_page: Option<u32>,

    /// Field to sort by
    #[arg(long)]
    pub sort_by: Option<String>,

    /// Sort direction: asc or desc
    #[arg(long, requires = "sort_by")]
    pub sort_order: Option<SortOrder>,

    /// Free-text search
    #[arg(long, short = 's')]
    pub search: Option<String>,
}

#[derive(Debug, Args)]
pub struct PeriodArg {
    /// Reporting window: today, week, month, quarter or year
    #[arg(long, default_value = "month")]
    pub period: Period,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  PRODUCTS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ProductsArgs {
    #[command(subcommand)]
    pub command: ProductsCommand,
}

#[derive(Debug, Subcommand)]
pub enum ProductsCommand {
    /// Home page product strip (built-in products when the store is empty)
    Featured {
        /// Number of products to request
        #[arg(long, short = 'l', default_value = "8")]
        limit: u32,
    },

    /// List products
    #[command(alias = "ls")]
    List(ProductListArgs),

    /// Show a product by numeric id or slug
    #[command(alias = "get")]
    Show {
        /// Product id or slug
        product: String,
    },

    /// List product categories
    Categories,

    /// Create a product (admin); needs --name, --sku and --price
    Create(ProductFields),

    /// Change some fields of a product (admin)
    Update {
        /// Product id
        id: String,

        #[command(flatten)]
        fields: ProductFields,
    },

    /// Delete a product (admin)
    #[command(alias = "rm")]
    Delete {
        /// Product id
        id: String,
    },
}

#[derive(Debug, Args)]
pub struct ProductListArgs {
    #[command(flatten)]
    pub list: ListArgs,

    /// Category slug
    #[arg(long)]
    pub category: Option<String>,

    /// Only featured products
    #[arg(long)]
    pub featured: bool,

    /// Minimum price in naira
    #[arg(long)]
    pub min_price: Option<u64>,

    /// Maximum price in naira
    #[arg(long)]
    pub max_price: Option<u64>,
}

/// Product editor fields. Unset flags are left unchanged on update.
#[derive(Debug, Args)]
pub struct ProductFields {
    /// Display name
    #[arg(long)]
    pub name: Option<String>,

    /// URL slug (derived from the name on create when omitted)
    #[arg(long)]
    pub slug: Option<String>,

    /// Stock keeping unit
    #[arg(long)]
    pub sku: Option<String>,

    /// Price in naira
    #[arg(long)]
    pub price: Option<f64>,

    /// Pre-sale price in naira
    #[arg(long)]
    pub original_price: Option<f64>,

    /// Units in stock
    #[arg(long)]
    pub stock: Option<i64>,

    /// Full description
    #[arg(long)]
    pub description: Option<String>,

    /// One-line summary
    #[arg(long)]
    pub short_description: Option<String>,

    /// Category id
    #[arg(long)]
    pub category_id: Option<String>,

    /// Brand
    #[arg(long)]
    pub brand: Option<String>,

    /// men, women or unisex
    #[arg(long)]
    pub gender: Option<String>,

    /// Main image URL
    #[arg(long)]
    pub main_image: Option<String>,

    /// Image shown on hover
    #[arg(long)]
    pub hover_image: Option<String>,

    /// Badge text, e.g. "New" or "Sale"
    #[arg(long)]
    pub badge: Option<String>,

    /// Feature on the home page (true/false)
    #[arg(long)]
    pub featured: Option<bool>,

    /// Listed in the shop (true/false)
    #[arg(long)]
    pub active: Option<bool>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COLLECTIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CollectionsArgs {
    #[command(subcommand)]
    pub command: CollectionsCommand,
}

#[derive(Debug, Subcommand)]
pub enum CollectionsCommand {
    /// List collections (falls back to categories, then built-in)
    #[command(alias = "ls")]
    List,

    /// Create a collection (admin)
    Create(CollectionFields),

    /// Update a collection (admin)
    Update {
        /// Collection id
        id: String,

        #[command(flatten)]
        fields: CollectionFields,
    },

    /// Delete a collection (admin)
    #[command(alias = "rm")]
    Delete {
        /// Collection id
        id: String,
    },
}

#[derive(Debug, Args)]
pub struct CollectionFields {
    /// Display name
    #[arg(long)]
    pub name: String,

    /// URL slug (derived from the name when omitted)
    #[arg(long)]
    pub slug: Option<String>,

    /// Description
    #[arg(long)]
    pub description: Option<String>,

    /// Cover image URL
    #[arg(long)]
    pub image: Option<String>,

    /// Feature on the home page
    #[arg(long)]
    pub featured: bool,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONTENT
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ContentArgs {
    #[command(subcommand)]
    pub command: ContentCommand,
}

#[derive(Debug, Subcommand)]
pub enum ContentCommand {
    /// Home page hero slides
    Hero,

    /// About page copy
    About,

    /// Press coverage
    Press,

    /// Pages and sections the editor can change (admin)
    Pages,

    /// Stored fields of one page (admin)
    Fields {
        /// Page key, e.g. home or about
        page: String,
    },

    /// Set section fields on a page (admin)
    #[command(after_help = "Example: hisi content edit home 'hero.title=New Season'")]
    Edit {
        /// Page key, e.g. home or about
        page: String,

        /// Edits as section.key=value; JSON fields take a JSON literal
        #[arg(required = true, value_parser = parse_section_edit)]
        edits: Vec<SectionEdit>,
    },
}

fn parse_section_edit(raw: &str) -> Result<SectionEdit, String> {
    SectionEdit::parse(raw).ok_or_else(|| format!("expected section.key=value, got '{raw}'"))
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  BLOG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct BlogArgs {
    #[command(subcommand)]
    pub command: BlogCommand,
}

#[derive(Debug, Subcommand)]
pub enum BlogCommand {
    /// List posts
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        list: ListArgs,

        /// Category filter
        #[arg(long)]
        category: Option<String>,
    },

    /// Show a post with its content
    #[command(alias = "get")]
    Show {
        /// Post slug
        slug: String,
    },

    /// Write a new post (admin); unpublished unless --published true
    Create(BlogFields),

    /// Change some fields of a post (admin)
    Update {
        /// Post id
        id: String,

        #[command(flatten)]
        fields: BlogFields,
    },

    /// Delete a post (admin)
    #[command(alias = "rm")]
    Delete {
        /// Post id
        id: String,
    },
}

#[derive(Debug, Args)]
pub struct BlogFields {
    /// Headline
    #[arg(long)]
    pub title: Option<String>,

    /// URL slug (derived from the title on create when omitted)
    #[arg(long)]
    pub slug: Option<String>,

    /// Teaser shown in listings
    #[arg(long)]
    pub excerpt: Option<String>,

    /// Body HTML
    #[arg(long, conflicts_with = "content_file")]
    pub content: Option<String>,

    /// Read the body from a file
    #[arg(long)]
    pub content_file: Option<PathBuf>,

    /// Cover image URL
    #[arg(long)]
    pub image: Option<String>,

    /// SEO title
    #[arg(long)]
    pub meta_title: Option<String>,

    /// SEO description
    #[arg(long)]
    pub meta_description: Option<String>,

    /// Published state (true/false)
    #[arg(long)]
    pub published: Option<bool>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  REVIEWS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ReviewsArgs {
    #[command(subcommand)]
    pub command: ReviewsCommand,
}

#[derive(Debug, Subcommand)]
pub enum ReviewsCommand {
    /// Approved reviews
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        list: ListArgs,

        /// Only reviews of this product
        #[arg(long)]
        product: Option<String>,

        /// Only featured reviews
        #[arg(long)]
        featured: bool,
    },

    /// Rating summary
    Stats {
        /// Only reviews of this product
        #[arg(long)]
        product: Option<String>,
    },

    /// Submit a review; it appears once approved
    Submit {
        /// Stars, 1 to 5
        #[arg(long, short = 'r', value_parser = clap::value_parser!(u8).range(1..=5))]
        rating: u8,

        /// Headline
        #[arg(long)]
        title: Option<String>,

        /// Review text
        #[arg(long, short = 'm')]
        content: String,

        /// Product the review is about
        #[arg(long)]
        product: Option<String>,
    },

    /// The moderation queue (admin)
    Queue {
        #[command(flatten)]
        list: ListArgs,

        /// pending, approved or all
        #[arg(long, default_value = "pending")]
        status: ReviewStatus,
    },

    /// Approve, reject, feature or unfeature a review (admin)
    Moderate {
        /// Review id
        id: String,

        /// approve, reject, feature or unfeature
        action: ReviewAction,
    },

    /// Delete a review (admin)
    #[command(alias = "rm")]
    Delete {
        /// Review id
        id: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  NEWSLETTER & CONTACT
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct NewsletterArgs {
    #[command(subcommand)]
    pub command: NewsletterCommand,
}

#[derive(Debug, Subcommand)]
pub enum NewsletterCommand {
    /// Subscribe an email address
    Subscribe {
        /// Email address
        email: String,
    },
}

#[derive(Debug, Args)]
pub struct ContactArgs {
    /// Your name
    #[arg(long)]
    pub name: String,

    /// Reply address
    #[arg(long)]
    pub email: String,

    /// Phone number
    #[arg(long)]
    pub phone: Option<String>,

    /// Subject line
    #[arg(long)]
    pub subject: String,

    /// Message body
    #[arg(long, short = 'm')]
    pub message: String,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  ORDERS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct OrdersArgs {
    #[command(subcommand)]
    pub command: OrdersCommand,
}

#[derive(Debug, Subcommand)]
pub enum OrdersCommand {
    /// List orders
    #[command(alias = "ls")]
    List(OrderListArgs),

    /// Show an order with its line items
    #[command(alias = "get")]
    Show {
        /// Order id
        id: String,
    },

    /// Change an order's fulfilment status
    Status {
        /// Order id
        id: String,

        /// pending, processing, shipped, delivered or cancelled
        status: OrderStatus,
    },
}

#[derive(Debug, Args)]
pub struct OrderListArgs {
    #[command(flatten)]
    pub list: ListArgs,

    /// Status filter: pending, processing, shipped, delivered or cancelled
    #[arg(long)]
    pub status: Option<OrderStatus>,

    /// Earliest order date (YYYY-MM-DD)
    #[arg(long)]
    pub date_from: Option<chrono::NaiveDate>,

    /// Latest order date (YYYY-MM-DD)
    #[arg(long)]
    pub date_to: Option<chrono::NaiveDate>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CUSTOMERS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CustomersArgs {
    #[command(subcommand)]
    pub command: CustomersCommand,
}

#[derive(Debug, Subcommand)]
pub enum CustomersCommand {
    /// List customers
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show a customer and their orders
    #[command(alias = "get")]
    Show {
        /// Customer id
        id: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  MEDIA
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct MediaArgs {
    #[command(subcommand)]
    pub command: MediaCommand,
}

#[derive(Debug, Subcommand)]
pub enum MediaCommand {
    /// List uploaded files
    #[command(alias = "ls")]
    List(ListArgs),

    /// Upload a file
    Upload {
        /// File to upload
        path: PathBuf,

        /// Name to store it under (defaults to the file name)
        #[arg(long)]
        name: Option<String>,
    },

    /// Delete a file
    #[command(alias = "rm")]
    Delete {
        /// Media id
        id: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  INQUIRIES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct InquiriesArgs {
    #[command(subcommand)]
    pub command: InquiriesCommand,
}

#[derive(Debug, Subcommand)]
pub enum InquiriesCommand {
    /// List contact inquiries
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        list: ListArgs,

        /// Status filter (e.g. new, responded)
        #[arg(long)]
        status: Option<String>,
    },

    /// Answer an inquiry
    Respond {
        /// Inquiry id
        id: String,

        /// Response text
        message: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  ANALYTICS & DASHBOARD
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct AnalyticsArgs {
    #[command(subcommand)]
    pub command: AnalyticsCommand,
}

#[derive(Debug, Subcommand)]
pub enum AnalyticsCommand {
    /// Revenue, orders and top products for a period
    Report(PeriodArg),

    /// Download a report file
    Export {
        #[command(flatten)]
        period: PeriodArg,

        /// csv or pdf
        #[arg(long, short = 'f', default_value = "csv")]
        format: ExportFormat,

        /// Destination (defaults to analytics-<period>.<format>)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Debug, Args)]
pub struct DashboardArgs {
    #[command(flatten)]
    pub period: PeriodArg,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  MESSAGES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct MessagesArgs {
    #[command(subcommand)]
    pub command: MessagesCommand,
}

#[derive(Debug, Subcommand)]
pub enum MessagesCommand {
    /// List conversations
    #[command(alias = "ls")]
    Conversations,

    /// Show the messages in a conversation
    Show {
        /// Conversation id
        conversation: String,
    },

    /// Reply in a conversation
    Send {
        /// Conversation id
        conversation: String,

        /// Message text
        body: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  SETTINGS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub command: SettingsCommand,
}

#[derive(Debug, Subcommand)]
pub enum SettingsCommand {
    /// Show stored preferences merged over the defaults
    Show,

    /// Change one preference and save
    Set {
        /// font-size, email-notifications, push-notifications,
        /// order-notifications, inquiry-notifications, low-stock-alerts,
        /// high-contrast or keyboard-shortcuts
        key: SettingKey,

        /// New value (true/false, or small/medium/large for font-size)
        value: String,
    },

    /// Save a complete preference object from a JSON file
    Save {
        /// JSON file with camelCase keys
        #[arg(long, short = 'f')]
        from_file: PathBuf,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create initial config file with guided setup
    Init,

    /// Display current resolved configuration
    Show,

    /// Set a profile value (api_url, token_env, timeout)
    Set {
        /// Profile key
        key: String,

        /// Value to set
        value: String,
    },

    /// Store a bearer token in the system keyring
    SetToken {
        /// Profile name
        #[arg(long)]
        profile: Option<String>,
    },

    /// Remove the stored bearer token
    ClearToken {
        /// Profile name
        #[arg(long)]
        profile: Option<String>,
    },

    /// Print the config file location
    Path,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
