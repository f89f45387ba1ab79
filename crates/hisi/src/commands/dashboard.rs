//! Dashboard overview handler.

use hisi_core::{DashboardMetrics, format_naira};

use crate::cli::{DashboardArgs, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::Context;

fn detail(m: &DashboardMetrics) -> String {
    output::detail_lines(&[
        ("Revenue", format_naira(m.total_revenue)),
        ("Orders", m.total_orders.to_string()),
        ("Customers", m.total_customers.to_string()),
        ("Pending orders", m.pending_orders.to_string()),
        ("Low stock", m.low_stock_products.to_string()),
    ])
}

pub async fn handle(ctx: &Context, args: DashboardArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let loaded = ctx.admin()?.dashboard(args.period.period).await;
    output::note_fallback(&loaded, "empty metrics", global);
    let out = output::render_single(global.output, &loaded.data, detail, |m| {
        m.total_orders.to_string()
    })?;
    output::print_output(&out, global.quiet);
    Ok(())
}
