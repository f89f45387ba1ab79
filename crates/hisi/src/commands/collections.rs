//! Collection command handlers.

use tabled::Tabled;

use hisi_core::{CollectionCard, CollectionDraft};

use crate::cli::{CollectionFields, CollectionsArgs, CollectionsCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::{Context, util};

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
pub(crate) struct CollectionRow {
    #[tabled(rename = "Slug")]
    slug: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Products")]
    products: u32,
    #[tabled(rename = "Featured")]
    featured: &'static str,
    #[tabled(rename = "Description")]
    description: String,
}

impl From<&CollectionCard> for CollectionRow {
    fn from(c: &CollectionCard) -> Self {
        Self {
            slug: c.slug.clone(),
            name: c.name.clone(),
            products: c.product_count,
            featured: if c.featured { "yes" } else { "no" },
            description: truncate(&c.description, 48),
        }
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_owned();
    }
    let cut: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", cut.trim_end())
}

impl From<CollectionFields> for CollectionDraft {
    fn from(f: CollectionFields) -> Self {
        Self {
            name: f.name,
            slug: f.slug,
            description: f.description,
            image: f.image,
            featured: f.featured,
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    ctx: &Context,
    args: CollectionsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        CollectionsCommand::List => {
            let loaded = ctx.storefront()?.collections().await;
            output::note_fallback(&loaded, "collections", global);
            let out = output::render_list(global.output, &loaded.data, |c| CollectionRow::from(c), |c| {
                c.slug.clone()
            })?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        CollectionsCommand::Create(fields) => {
            let created = ctx
                .admin()?
                .create_collection(&CollectionDraft::from(fields))
                .await?;
            output::print_success(&format!("Collection '{}' created", created.slug), global);
            let out = output::render_list(
                global.output,
                std::slice::from_ref(&created),
                |c| CollectionRow::from(c),
                |c| c.id.clone(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        CollectionsCommand::Update { id, fields } => {
            ctx.admin()?
                .update_collection(&id, &CollectionDraft::from(fields))
                .await?;
            output::print_success(&format!("Collection {id} updated"), global);
            Ok(())
        }

        CollectionsCommand::Delete { id } => {
            let admin = ctx.admin()?;
            if !util::confirm(
                &format!("Delete collection {id}?"),
                "collections delete",
                global.yes,
            )? {
                return Ok(());
            }
            admin.delete_collection(&id).await?;
            output::print_success(&format!("Collection {id} deleted"), global);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_descriptions_are_cut() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("Pieces designed for seated wear", 12), "Pieces desi…");
    }
}
