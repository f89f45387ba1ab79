//! Product command handlers.

use tabled::Tabled;

use hisi_core::{ProductCard, ProductDraft};

use crate::cli::{GlobalOpts, ProductFields, ProductListArgs, ProductsArgs, ProductsCommand};
use crate::error::CliError;
use crate::output;

use super::collections::CollectionRow;
use super::{Context, util};

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct ProductRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Was")]
    was: String,
    #[tabled(rename = "Collection")]
    collection: String,
    #[tabled(rename = "Badge")]
    badge: String,
}

impl From<&ProductCard> for ProductRow {
    fn from(p: &ProductCard) -> Self {
        Self {
            id: p.id.clone(),
            name: p.name.clone(),
            price: p.price_label(),
            was: p
                .original_price_label()
                .map_or_else(|| "-".into(), |was| {
                    match p.discount_percent() {
                        Some(pct) => format!("{was} (-{pct}%)"),
                        None => was,
                    }
                }),
            collection: output::or_dash(Some(&p.collection)),
            badge: output::or_dash(p.badge.as_deref()),
        }
    }
}

fn detail(p: &ProductCard) -> String {
    let mut pairs = vec![
        ("ID", p.id.clone()),
        ("Name", p.name.clone()),
        ("Slug", output::or_dash(p.slug.as_deref())),
        ("Price", p.price_label()),
    ];
    if let Some(was) = p.original_price_label() {
        pairs.push(("Was", was));
    }
    if let Some(pct) = p.discount_percent() {
        pairs.push(("Discount", format!("{pct}%")));
    }
    pairs.push(("Collection", output::or_dash(Some(&p.collection))));
    pairs.push(("Badge", output::or_dash(p.badge.as_deref())));
    pairs.push(("Image", p.image.clone()));
    if !p.accessibility_features.is_empty() {
        pairs.push(("Adaptive", p.accessibility_features.join(", ")));
    }
    output::detail_lines(&pairs)
}

fn list_filters(args: &ProductListArgs) -> Vec<(&'static str, Option<String>)> {
    vec![
        ("category", args.category.clone()),
        ("featured", args.featured.then(|| "true".to_owned())),
        ("min_price", args.min_price.map(|p| p.to_string())),
        ("max_price", args.max_price.map(|p| p.to_string())),
    ]
}

impl From<ProductFields> for ProductDraft {
    fn from(f: ProductFields) -> Self {
        Self {
            name: f.name,
            slug: f.slug,
            sku: f.sku,
            price: f.price,
            original_price: f.original_price,
            stock_quantity: f.stock,
            description: f.description,
            short_description: f.short_description,
            category_id: f.category_id,
            brand: f.brand,
            gender: f.gender,
            main_image: f.main_image,
            hover_image: f.hover_image,
            badge: f.badge,
            featured: f.featured,
            active: f.active,
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(ctx: &Context, args: ProductsArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ProductsCommand::Featured { limit } => {
            let loaded = ctx.storefront()?.featured_products(limit).await;
            output::note_fallback(&loaded, "products", global);
            let out = output::render_list(global.output, &loaded.data, |p| ProductRow::from(p), |p| {
                p.id.clone()
            })?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ProductsCommand::List(list) => {
            let query = ctx.query(&list.list, &list_filters(&list));
            let loaded = ctx.storefront()?.products(&query).await;
            output::note_fallback(&loaded, "product list", global);
            let out = output::render_page(global.output, &loaded.data, |p| ProductRow::from(p), |p| {
                p.id.clone()
            })?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ProductsCommand::Show { product } => {
            let card = ctx.storefront()?.product(&product).await?;
            let out = output::render_single(global.output, &card, detail, |p| p.id.clone())?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ProductsCommand::Categories => {
            let categories = ctx.storefront()?.categories().await?;
            let out = output::render_list(global.output, &categories, |c| CollectionRow::from(c), |c| {
                c.slug.clone()
            })?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ProductsCommand::Create(fields) => {
            let created = ctx
                .admin()?
                .create_product(&ProductDraft::from(fields))
                .await?;
            output::print_success(&format!("Product '{}' created", created.name), global);
            let out = output::render_single(global.output, &created, detail, |p| p.id.clone())?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ProductsCommand::Update { id, fields } => {
            let updated = ctx
                .admin()?
                .update_product(&id, &ProductDraft::from(fields))
                .await?;
            output::print_success(&format!("Product {id} updated"), global);
            let out = output::render_single(global.output, &updated, detail, |p| p.id.clone())?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ProductsCommand::Delete { id } => {
            let admin = ctx.admin()?;
            if !util::confirm(&format!("Delete product {id}?"), "products delete", global.yes)? {
                return Ok(());
            }
            admin.delete_product(&id).await?;
            output::print_success(&format!("Product {id} deleted"), global);
            Ok(())
        }
    }
}
