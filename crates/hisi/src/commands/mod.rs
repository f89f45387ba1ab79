//! Command dispatch: routes parsed CLI commands to their handlers.

pub mod analytics;
pub mod blog;
pub mod collections;
pub mod config_cmd;
pub mod contact;
pub mod content;
pub mod customers;
pub mod dashboard;
pub mod inquiries;
pub mod media;
pub mod messages;
pub mod orders;
pub mod products;
pub mod reviews;
pub mod settings;
pub mod util;

use hisi_core::{AdminConsole, ListQuery, SortOrder, Storefront};

use crate::cli::{Command, GlobalOpts, ListArgs};
use crate::config::Resolved;
use crate::error::CliError;

/// Resolved connection settings shared by every handler.
#[derive(Debug)]
pub struct Context {
    resolved: Resolved,
}

impl Context {
    pub fn new(resolved: Resolved) -> Self {
        Self { resolved }
    }

    pub fn storefront(&self) -> Result<Storefront, CliError> {
        Ok(Storefront::from_config(&self.resolved.client)?)
    }

    /// Fails before any request when no token is configured.
    pub fn admin(&self) -> Result<AdminConsole, CliError> {
        Ok(AdminConsole::from_config(&self.resolved.client)?)
    }

    /// Translate the shared list flags plus resource filters into a query.
    pub fn query(&self, args: &ListArgs, filters: &[(&str, Option<String>)]) -> ListQuery {
        let per_page = args.per_page.unwrap_or(self.resolved.per_page);
        let mut query = ListQuery::new(per_page);
        if let Some(ref sort_by) = args.sort_by {
            query.set_sort(sort_by, args.sort_order.unwrap_or(SortOrder::Desc));
        }
        if let Some(ref search) = args.search {
            query.set_filter(ListQuery::SEARCH, search);
        }
        for (key, value) in filters {
            if let Some(value) = value {
                query.set_filter(key, value);
            }
        }
        // Filter changes reset to page 1; an explicit --page wins.
        query.with_page(args.page)
    }
}

/// Dispatch a parsed command to the appropriate handler.
pub async fn dispatch(cmd: Command, ctx: &Context, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Products(args) => products::handle(ctx, args, global).await,
        Command::Collections(args) => collections::handle(ctx, args, global).await,
        Command::Content(args) => content::handle(ctx, args, global).await,
        Command::Blog(args) => blog::handle(ctx, args, global).await,
        Command::Reviews(args) => reviews::handle(ctx, args, global).await,
        Command::Newsletter(args) => contact::newsletter(ctx, args, global).await,
        Command::Contact(args) => contact::handle(ctx, args, global).await,
        Command::Orders(args) => orders::handle(ctx, args, global).await,
        Command::Customers(args) => customers::handle(ctx, args, global).await,
        Command::Media(args) => media::handle(ctx, args, global).await,
        Command::Inquiries(args) => inquiries::handle(ctx, args, global).await,
        Command::Analytics(args) => analytics::handle(ctx, args, global).await,
        Command::Dashboard(args) => dashboard::handle(ctx, args, global).await,
        Command::Messages(args) => messages::handle(ctx, args, global).await,
        Command::Settings(args) => settings::handle(ctx, args, global).await,
        Command::Config(_) | Command::Completions(_) => unreachable!("handled before dispatch"),
    }
}
