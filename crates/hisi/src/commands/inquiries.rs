//! Contact inquiry handlers.

use tabled::Tabled;

use hisi_core::{Inquiry, Notice};

use crate::cli::{GlobalOpts, InquiriesArgs, InquiriesCommand};
use crate::error::CliError;
use crate::output;

use super::Context;

#[derive(Tabled)]
struct InquiryRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "From")]
    from: String,
    #[tabled(rename = "Subject")]
    subject: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Received")]
    received: String,
}

impl From<&Inquiry> for InquiryRow {
    fn from(i: &Inquiry) -> Self {
        Self {
            id: i.id.clone(),
            from: format!("{} <{}>", i.name, i.email),
            subject: i.subject.clone(),
            status: i.status.clone(),
            received: output::date(i.created_at),
        }
    }
}

pub async fn handle(ctx: &Context, args: InquiriesArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let admin = ctx.admin()?;
    match args.command {
        InquiriesCommand::List { list, status } => {
            let query = ctx.query(&list, &[("status", status)]);
            let page = admin.inquiries(&query).await?;
            let out = output::render_page(global.output, &page, |i| InquiryRow::from(i), |i| {
                i.id.clone()
            })?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        InquiriesCommand::Respond { id, message } => {
            let result = admin.respond_inquiry(&id, &message).await;
            let notice = Notice::from_result("Response", &result);
            result?;
            output::print_success(&notice.message, global);
            Ok(())
        }
    }
}
