//! Analytics report and export handlers.

use tabled::Tabled;

use hisi_core::{AnalyticsReport, TopProduct, format_naira};

use crate::cli::{AnalyticsArgs, AnalyticsCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::Context;

#[derive(Tabled)]
struct TopProductRow {
    #[tabled(rename = "Product")]
    name: String,
    #[tabled(rename = "Sales")]
    sales: u64,
    #[tabled(rename = "Revenue")]
    revenue: String,
}

impl From<&TopProduct> for TopProductRow {
    fn from(p: &TopProduct) -> Self {
        Self {
            name: p.name.clone(),
            sales: p.sales,
            revenue: format_naira(p.revenue),
        }
    }
}

fn report(r: &AnalyticsReport) -> String {
    let mut text = output::detail_lines(&[
        ("Period", r.period.to_string()),
        ("Revenue", format_naira(r.revenue)),
        ("Orders", r.orders.to_string()),
        ("Customers", r.customers.to_string()),
        ("Conversion", format!("{:.1}%", r.conversion_rate)),
    ]);
    if !r.top_products.is_empty() {
        let rows: Vec<TopProductRow> = r.top_products.iter().map(TopProductRow::from).collect();
        text.push_str("\n\nTop products\n");
        text.push_str(&tabled::Table::new(rows).with(tabled::settings::Style::rounded()).to_string());
    }
    text
}

pub async fn handle(ctx: &Context, args: AnalyticsArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let admin = ctx.admin()?;
    match args.command {
        AnalyticsCommand::Report(period) => {
            let data = admin.analytics(period.period).await?;
            let out = output::render_single(global.output, &data, report, |r| {
                format_naira(r.revenue)
            })?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        AnalyticsCommand::Export {
            period,
            format,
            out,
        } => {
            let bytes = admin.export_analytics(period.period, format).await?;
            let path = out.unwrap_or_else(|| format.file_name(period.period).into());
            tokio::fs::write(&path, &bytes).await?;
            output::print_success(
                &format!("Wrote {} bytes to {}", bytes.len(), path.display()),
                global,
            );
            Ok(())
        }
    }
}
