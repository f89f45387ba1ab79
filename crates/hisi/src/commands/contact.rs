//! Newsletter sign-up and the contact form.

use hisi_core::ContactForm;

use crate::cli::{ContactArgs, GlobalOpts, NewsletterArgs, NewsletterCommand};
use crate::error::CliError;
use crate::output;

use super::Context;

pub async fn newsletter(
    ctx: &Context,
    args: NewsletterArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        NewsletterCommand::Subscribe { email } => {
            ctx.storefront()?.subscribe_newsletter(&email).await?;
            output::print_success(&format!("Subscribed {}", email.trim()), global);
            Ok(())
        }
    }
}

pub async fn handle(ctx: &Context, args: ContactArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let form = ContactForm {
        name: args.name,
        email: args.email,
        phone: args.phone,
        subject: args.subject,
        message: args.message,
    };
    ctx.storefront()?.submit_contact(&form).await?;
    output::print_success("Message sent. We will get back to you soon.", global);
    Ok(())
}
