//! Order command handlers.

use tabled::Tabled;

use hisi_core::{Notice, OrderDetail, OrderRow, format_naira};

use crate::cli::{GlobalOpts, OrderListArgs, OrdersArgs, OrdersCommand};
use crate::error::CliError;
use crate::output;

use super::Context;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
pub(crate) struct OrderTableRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Order")]
    number: String,
    #[tabled(rename = "Customer")]
    customer: String,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Status")]
    status: &'static str,
    #[tabled(rename = "Placed")]
    placed: String,
}

impl From<&OrderRow> for OrderTableRow {
    fn from(o: &OrderRow) -> Self {
        Self {
            id: o.id.clone(),
            number: o.order_number.clone(),
            customer: o.customer_name.clone(),
            total: format_naira(o.total),
            status: o.status.label(),
            placed: output::date(o.created_at),
        }
    }
}

#[derive(Tabled)]
struct LineRow {
    #[tabled(rename = "Item")]
    item: String,
    #[tabled(rename = "Qty")]
    quantity: u32,
    #[tabled(rename = "Unit")]
    unit: String,
    #[tabled(rename = "Subtotal")]
    subtotal: String,
}

fn detail(o: &OrderDetail) -> String {
    let mut text = output::detail_lines(&[
        ("Order", o.row.order_number.clone()),
        ("ID", o.row.id.clone()),
        ("Customer", format!("{} <{}>", o.row.customer_name, o.row.customer_email)),
        ("Status", o.row.status.label().to_owned()),
        ("Total", format_naira(o.row.total)),
        ("Placed", output::date(o.row.created_at)),
        ("Ship to", output::or_dash(o.shipping_address.as_deref())),
        ("Payment", output::or_dash(o.payment_method.as_deref())),
        ("Paid", output::or_dash(o.payment_status.as_deref())),
        ("Tracking", output::or_dash(o.tracking_number.as_deref())),
    ]);
    if !o.lines.is_empty() {
        let rows: Vec<LineRow> = o
            .lines
            .iter()
            .map(|l| LineRow {
                item: l.product_name.clone(),
                quantity: l.quantity,
                unit: format_naira(l.unit_price),
                subtotal: format_naira(l.subtotal),
            })
            .collect();
        text.push_str("\n\n");
        text.push_str(&tabled::Table::new(rows).with(tabled::settings::Style::rounded()).to_string());
    }
    text
}

fn list_filters(args: &OrderListArgs) -> Vec<(&'static str, Option<String>)> {
    vec![
        ("status", args.status.map(|s| s.as_str().to_owned())),
        ("date_from", args.date_from.map(|d| d.to_string())),
        ("date_to", args.date_to.map(|d| d.to_string())),
    ]
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(ctx: &Context, args: OrdersArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let admin = ctx.admin()?;
    match args.command {
        OrdersCommand::List(list) => {
            let query = ctx.query(&list.list, &list_filters(&list));
            let page = admin.orders(&query).await?;
            let out = output::render_page(global.output, &page, |o| OrderTableRow::from(o), |o| {
                o.id.clone()
            })?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        OrdersCommand::Show { id } => {
            let order = admin.order(&id).await?;
            let out = output::render_single(global.output, &order, detail, |o| o.row.id.clone())?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        OrdersCommand::Status { id, status } => {
            let result = admin.update_order_status(&id, status).await;
            let notice = Notice::from_result("Status update", &result);
            result?;
            output::print_success(&notice.message, global);

            // No optimistic update: show what the backend now holds.
            let order = admin.order(&id).await?;
            let out = output::render_single(global.output, &order, detail, |o| {
                o.row.status.as_str().to_owned()
            })?;
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
