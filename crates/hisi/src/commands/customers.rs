//! Customer command handlers.

use tabled::Tabled;

use hisi_core::{CustomerDetail, CustomerRow, format_naira};

use crate::cli::{CustomersArgs, CustomersCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::Context;
use super::orders::OrderTableRow;

#[derive(Tabled)]
struct CustomerTableRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Orders")]
    orders: u32,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Joined")]
    joined: String,
}

impl From<&CustomerRow> for CustomerTableRow {
    fn from(c: &CustomerRow) -> Self {
        Self {
            id: c.id.clone(),
            name: c.name.clone(),
            email: c.email.clone(),
            orders: c.order_count,
            spent: format_naira(c.total_spent),
            joined: output::date(c.joined_at),
        }
    }
}

fn detail(d: &CustomerDetail) -> String {
    let c = &d.customer;
    let mut text = output::detail_lines(&[
        ("ID", c.id.clone()),
        ("Name", c.name.clone()),
        ("Email", c.email.clone()),
        ("Phone", output::or_dash(c.phone.as_deref())),
        ("Orders", c.order_count.to_string()),
        ("Spent", format_naira(c.total_spent)),
        ("Joined", output::date(c.joined_at)),
    ]);
    if !d.orders.is_empty() {
        let rows: Vec<OrderTableRow> = d.orders.iter().map(OrderTableRow::from).collect();
        text.push_str("\n\n");
        text.push_str(&tabled::Table::new(rows).with(tabled::settings::Style::rounded()).to_string());
    }
    text
}

pub async fn handle(ctx: &Context, args: CustomersArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let admin = ctx.admin()?;
    match args.command {
        CustomersCommand::List(list) => {
            let query = ctx.query(&list, &[]);
            let page = admin.customers(&query).await?;
            let out = output::render_page(global.output, &page, |c| CustomerTableRow::from(c), |c| {
                c.id.clone()
            })?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        CustomersCommand::Show { id } => {
            let customer = admin.customer(&id).await?;
            let out = output::render_single(global.output, &customer, detail, |d| {
                d.customer.id.clone()
            })?;
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
