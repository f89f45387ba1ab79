//! Marketing content handlers: hero slides, about, press, and the page
//! section editor.

use tabled::Tabled;

use hisi_core::{AboutContent, EditablePage, HeroSlide, PressItem, SectionField};

use crate::cli::{ContentArgs, ContentCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::Context;

#[derive(Tabled)]
struct SlideRow {
    #[tabled(rename = "#")]
    id: u32,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Subtitle")]
    subtitle: String,
    #[tabled(rename = "Call to action")]
    cta: String,
}

impl From<&HeroSlide> for SlideRow {
    fn from(s: &HeroSlide) -> Self {
        Self {
            id: s.id,
            title: s.title.clone(),
            subtitle: s.subtitle.clone(),
            cta: format!("{} → {}", s.cta, s.cta_link),
        }
    }
}

#[derive(Tabled)]
struct PressRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Outlet")]
    outlet: String,
    #[tabled(rename = "Title")]
    title: String,
}

impl From<&PressItem> for PressRow {
    fn from(p: &PressItem) -> Self {
        Self {
            date: output::date(p.published_at),
            outlet: p.outlet.clone(),
            title: p.title.clone(),
        }
    }
}

#[derive(Tabled)]
struct PageRow {
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Page")]
    name: String,
    #[tabled(rename = "Sections")]
    sections: String,
}

impl From<&EditablePage> for PageRow {
    fn from(p: &EditablePage) -> Self {
        Self {
            key: p.key.clone(),
            name: p.name.clone(),
            sections: p.sections.join(", "),
        }
    }
}

#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "Field")]
    path: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Value")]
    value: String,
}

impl From<&SectionField> for FieldRow {
    fn from(f: &SectionField) -> Self {
        let mut value = f.display_value();
        if value.chars().count() > 60 {
            value = format!("{}…", value.chars().take(59).collect::<String>());
        }
        Self {
            path: format!("{}.{}", f.section, f.key),
            kind: f.kind.clone(),
            value,
        }
    }
}

fn about_detail(about: &AboutContent) -> String {
    let mut text = format!("{}\n{}\n\n{}", about.title, about.subtitle, about.body);
    if !about.values.is_empty() {
        text.push_str("\n\nValues:");
        for value in &about.values {
            text.push_str("\n  • ");
            text.push_str(value);
        }
    }
    text
}

pub async fn handle(ctx: &Context, args: ContentArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let out = match args.command {
        ContentCommand::Hero => {
            let loaded = ctx.storefront()?.hero_slides().await;
            output::note_fallback(&loaded, "hero slides", global);
            output::render_list(global.output, &loaded.data, |s| SlideRow::from(s), |s| {
                s.id.to_string()
            })?
        }

        ContentCommand::About => {
            let loaded = ctx.storefront()?.about().await;
            output::note_fallback(&loaded, "about content", global);
            output::render_single(global.output, &loaded.data, about_detail, |a| a.title.clone())?
        }

        ContentCommand::Press => {
            let loaded = ctx.storefront()?.press().await;
            output::note_fallback(&loaded, "press coverage", global);
            output::render_list(global.output, &loaded.data, |p| PressRow::from(p), |p| {
                p.url.clone()
            })?
        }

        ContentCommand::Pages => {
            let pages = ctx.admin()?.editable_pages().await?;
            output::render_list(global.output, &pages, |p| PageRow::from(p), |p| p.key.clone())?
        }

        ContentCommand::Fields { page } => {
            let fields = ctx.admin()?.section_fields(&page).await?;
            output::render_list(global.output, &fields, |f| FieldRow::from(f), |f| {
                format!("{}.{}", f.section, f.key)
            })?
        }

        ContentCommand::Edit { page, edits } => {
            let report = ctx.admin()?.edit_sections(&page, &edits).await?;
            output::print_success(
                &format!(
                    "Page '{page}' saved: {} updated, {} added",
                    report.updated, report.created
                ),
                global,
            );
            return Ok(());
        }
    };
    output::print_output(&out, global.quiet);
    Ok(())
}
