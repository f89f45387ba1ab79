//! Media library handlers.

use bytesize::ByteSize;
use tabled::Tabled;

use hisi_core::MediaItem;

use crate::cli::{GlobalOpts, MediaArgs, MediaCommand};
use crate::error::CliError;
use crate::output;

use super::{Context, util};

#[derive(Tabled)]
struct MediaRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "File")]
    filename: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Size")]
    size: String,
    #[tabled(rename = "Uploaded")]
    uploaded: String,
}

impl From<&MediaItem> for MediaRow {
    fn from(m: &MediaItem) -> Self {
        Self {
            id: m.id.clone(),
            filename: m.filename.clone(),
            kind: output::or_dash(Some(&m.kind)),
            size: ByteSize::b(m.size_bytes).to_string(),
            uploaded: output::date(m.uploaded_at),
        }
    }
}

pub async fn handle(ctx: &Context, args: MediaArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let admin = ctx.admin()?;
    match args.command {
        MediaCommand::List(list) => {
            let query = ctx.query(&list, &[]);
            let page = admin.media(&query).await?;
            let out = output::render_page(global.output, &page, |m| MediaRow::from(m), |m| {
                m.url.clone()
            })?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        MediaCommand::Upload { path, name } => {
            let filename = match name {
                Some(name) => name,
                None => path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .ok_or_else(|| CliError::Validation {
                        field: "path".into(),
                        reason: format!("{} has no file name", path.display()),
                    })?,
            };
            let bytes = tokio::fs::read(&path).await?;
            let item = admin.upload_media(&filename, bytes).await?;
            output::print_success(&format!("Uploaded {} ({})", item.filename, item.url), global);
            let out = output::render_list(
                global.output,
                std::slice::from_ref(&item),
                |m| MediaRow::from(m),
                |m| m.url.clone(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        MediaCommand::Delete { id } => {
            if !util::confirm(&format!("Delete media {id}?"), "media delete", global.yes)? {
                return Ok(());
            }
            admin.delete_media(&id).await?;
            output::print_success(&format!("Media {id} deleted"), global);
            Ok(())
        }
    }
}
