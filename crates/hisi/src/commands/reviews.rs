//! Review handlers: the public feed, rating summary, submission and the
//! moderation queue.

use tabled::Tabled;

use hisi_core::{Review, ReviewDraft, ReviewStats};

use crate::cli::{GlobalOpts, ReviewsArgs, ReviewsCommand};
use crate::error::CliError;
use crate::output;

use super::{Context, util};

#[derive(Tabled)]
struct ReviewRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Rating")]
    rating: String,
    #[tabled(rename = "Author")]
    author: String,
    #[tabled(rename = "Product")]
    product: String,
    #[tabled(rename = "Review")]
    text: String,
    #[tabled(rename = "Status")]
    status: &'static str,
    #[tabled(rename = "Date")]
    date: String,
}

impl From<&Review> for ReviewRow {
    fn from(r: &Review) -> Self {
        let text = if r.title.is_empty() { &r.content } else { &r.title };
        let text = if text.chars().count() > 48 {
            format!("{}…", text.chars().take(47).collect::<String>().trim_end())
        } else {
            text.clone()
        };
        Self {
            id: r.id.clone(),
            rating: r.stars(),
            author: r.author.clone(),
            product: output::or_dash(r.product.as_deref()),
            text,
            status: match (r.approved, r.featured) {
                (true, true) => "featured",
                (true, false) => "approved",
                (false, _) => "pending",
            },
            date: output::date(r.created_at),
        }
    }
}

fn stats_detail(stats: &ReviewStats) -> String {
    let mut text = output::detail_lines(&[
        ("Reviews", stats.total_reviews.to_string()),
        ("Average", format!("{:.1} / 5", stats.average_rating)),
    ]);
    let widest = stats.distribution.iter().copied().max().unwrap_or(0).max(1);
    for stars in (1..=5_usize).rev() {
        let count = stats.distribution[stars - 1];
        let bar = usize::try_from(count * 20 / widest).unwrap_or(20);
        text.push_str(&format!("\n{stars}★ {:<20} {count}", "█".repeat(bar)));
    }
    text
}

pub async fn handle(ctx: &Context, args: ReviewsArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ReviewsCommand::List {
            list,
            product,
            featured,
        } => {
            let query = ctx.query(
                &list,
                &[
                    ("product_id", product),
                    ("featured", featured.then(|| "true".to_owned())),
                ],
            );
            let loaded = ctx.storefront()?.reviews(&query).await;
            output::note_fallback(&loaded, "reviews", global);
            let out = output::render_page(global.output, &loaded.data, |r| ReviewRow::from(r), |r| {
                r.id.clone()
            })?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ReviewsCommand::Stats { product } => {
            let loaded = ctx.storefront()?.review_stats(product.as_deref()).await;
            output::note_fallback(&loaded, "review stats", global);
            let out = output::render_single(global.output, &loaded.data, stats_detail, |s| {
                s.total_reviews.to_string()
            })?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ReviewsCommand::Submit {
            rating,
            title,
            content,
            product,
        } => {
            let draft = ReviewDraft {
                rating,
                title,
                content,
                product_id: product,
            };
            let review = ctx.storefront()?.submit_review(&draft).await?;
            output::print_success(
                &format!("Review {} received; it will appear once approved", review.id),
                global,
            );
            Ok(())
        }

        ReviewsCommand::Queue { list, status } => {
            let query = ctx.query(&list, &[]);
            let page = ctx.admin()?.reviews(status, &query).await?;
            let out = output::render_page(global.output, &page, |r| ReviewRow::from(r), |r| {
                r.id.clone()
            })?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ReviewsCommand::Moderate { id, action } => {
            let review = ctx.admin()?.moderate_review(&id, action).await?;
            output::print_success(
                &format!("Review {} {}", review.id, action.done_label()),
                global,
            );
            Ok(())
        }

        ReviewsCommand::Delete { id } => {
            let admin = ctx.admin()?;
            if !util::confirm(&format!("Delete review {id}?"), "reviews delete", global.yes)? {
                return Ok(());
            }
            admin.delete_review(&id).await?;
            output::print_success(&format!("Review {id} deleted"), global);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_bars_scale_to_the_busiest_rating() {
        let stats = ReviewStats {
            total_reviews: 6,
            average_rating: 4.3,
            distribution: [0, 0, 1, 1, 4],
        };
        let text = stats_detail(&stats);
        assert!(text.contains("4.3 / 5"));
        assert!(text.contains(&format!("5★ {} 4", "█".repeat(20))));
        assert!(text.contains(&format!("4★ {:<20} 1", "█".repeat(5))));
        assert!(text.contains(&format!("1★ {:<20} 0", "")));
    }
}
