//! Journal handlers.

use tabled::Tabled;

use hisi_core::{BlogPost, BlogPostDraft};

use crate::cli::{BlogArgs, BlogCommand, BlogFields, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::{Context, util};

#[derive(Tabled)]
struct PostRow {
    #[tabled(rename = "Slug")]
    slug: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Author")]
    author: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Published")]
    published: String,
}

impl From<&BlogPost> for PostRow {
    fn from(p: &BlogPost) -> Self {
        Self {
            slug: p.slug.clone(),
            title: p.title.clone(),
            author: output::or_dash(Some(&p.author)),
            category: output::or_dash(Some(&p.category)),
            published: output::date(p.published_at),
        }
    }
}

fn detail(p: &BlogPost) -> String {
    let header = output::detail_lines(&[
        ("Title", p.title.clone()),
        ("Author", output::or_dash(Some(&p.author))),
        ("Category", output::or_dash(Some(&p.category))),
        ("Published", output::date(p.published_at)),
    ]);
    let body = p.content.as_deref().unwrap_or(&p.excerpt);
    format!("{header}\n\n{body}")
}

/// Builds the draft, reading the body from `--content-file` when given.
fn draft(fields: BlogFields) -> Result<BlogPostDraft, CliError> {
    let content = match fields.content_file {
        Some(path) => Some(std::fs::read_to_string(path)?),
        None => fields.content,
    };
    Ok(BlogPostDraft {
        title: fields.title,
        slug: fields.slug,
        excerpt: fields.excerpt,
        content,
        featured_image: fields.image,
        meta_title: fields.meta_title,
        meta_description: fields.meta_description,
        published: fields.published,
    })
}

pub async fn handle(ctx: &Context, args: BlogArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        BlogCommand::List { list, category } => {
            let query = ctx.query(&list, &[("category", category)]);
            let loaded = ctx.storefront()?.blog_posts(&query).await;
            output::note_fallback(&loaded, "journal", global);
            let out = output::render_page(global.output, &loaded.data, |p| PostRow::from(p), |p| {
                p.slug.clone()
            })?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        BlogCommand::Show { slug } => {
            let post = ctx.storefront()?.blog_post(&slug).await?;
            let out = output::render_single(global.output, &post, detail, |p| p.slug.clone())?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        BlogCommand::Create(fields) => {
            let draft = draft(fields)?;
            let post = ctx.admin()?.create_blog_post(&draft).await?;
            let state = if post.published_at.is_some() { "published" } else { "saved as draft" };
            output::print_success(&format!("Post '{}' {state}", post.slug), global);
            Ok(())
        }

        BlogCommand::Update { id, fields } => {
            let draft = draft(fields)?;
            let post = ctx.admin()?.update_blog_post(&id, &draft).await?;
            output::print_success(&format!("Post '{}' updated", post.slug), global);
            Ok(())
        }

        BlogCommand::Delete { id } => {
            let admin = ctx.admin()?;
            if !util::confirm(&format!("Delete blog post {id}?"), "blog delete", global.yes)? {
                return Ok(());
            }
            admin.delete_blog_post(&id).await?;
            output::print_success(&format!("Blog post {id} deleted"), global);
            Ok(())
        }
    }
}
