//! Conversation handlers.

use tabled::Tabled;

use hisi_core::{Conversation, Message};

use crate::cli::{GlobalOpts, MessagesArgs, MessagesCommand};
use crate::error::CliError;
use crate::output;

use super::Context;

#[derive(Tabled)]
struct ConversationRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Customer")]
    customer: String,
    #[tabled(rename = "Subject")]
    subject: String,
    #[tabled(rename = "Unread")]
    unread: u32,
    #[tabled(rename = "Updated")]
    updated: String,
}

impl From<&Conversation> for ConversationRow {
    fn from(c: &Conversation) -> Self {
        Self {
            id: c.id.clone(),
            customer: c.customer_name.clone(),
            subject: c.subject.clone(),
            unread: c.unread_count,
            updated: output::date(c.updated_at),
        }
    }
}

#[derive(Tabled)]
struct MessageRow {
    #[tabled(rename = "Sent")]
    sent: String,
    #[tabled(rename = "From")]
    sender: String,
    #[tabled(rename = "Message")]
    body: String,
}

impl From<&Message> for MessageRow {
    fn from(m: &Message) -> Self {
        Self {
            sent: m
                .sent_at
                .map_or_else(|| "-".into(), |d| d.format("%Y-%m-%d %H:%M").to_string()),
            sender: m.sender.clone(),
            body: m.body.clone(),
        }
    }
}

pub async fn handle(ctx: &Context, args: MessagesArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let admin = ctx.admin()?;
    match args.command {
        MessagesCommand::Conversations => {
            let conversations = admin.conversations().await?;
            let out = output::render_list(
                global.output,
                &conversations,
                |c| ConversationRow::from(c),
                |c| c.id.clone(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        MessagesCommand::Show { conversation } => {
            let messages = admin.messages(&conversation).await?;
            let out = output::render_list(
                global.output,
                &messages,
                |m| MessageRow::from(m),
                |m| m.body.clone(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        MessagesCommand::Send { conversation, body } => {
            admin.send_message(&conversation, &body).await?;
            output::print_success("Message sent", global);
            Ok(())
        }
    }
}
