// ── Built-in storefront content ──
//
// Rendered whenever a live fetch fails, or returns nothing for a view whose
// empty policy is `UseFallback`. Every constructor returns owned data so
// callers can hand it straight to the fetch helper.

use crate::model::{AboutContent, CollectionCard, HeroSlide, PressItem, ProductCard};

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    name: &str,
    price: f64,
    original_price: Option<f64>,
    image: &str,
    collection: &str,
    badge: &str,
    features: &[&str],
) -> ProductCard {
    ProductCard {
        id: id.into(),
        name: name.into(),
        slug: None,
        price,
        original_price,
        image: format!("/images/products/{image}-main.jpg"),
        hover_image: Some(format!("/images/products/{image}-hover.jpg")),
        collection: collection.into(),
        badge: Some(badge.into()),
        accessibility_features: features.iter().map(|f| (*f).to_owned()).collect(),
    }
}

/// The five default featured products.
pub fn featured_products() -> Vec<ProductCard> {
    vec![
        product(
            "1",
            "Adaptive Bomber Jacket",
            89_000.0,
            Some(120_000.0),
            "jacket",
            "Adaptive Outerwear",
            "New",
            &["Magnetic closures", "Easy grip zippers"],
        ),
        product(
            "2",
            "Inclusive Wrap Dress",
            65_000.0,
            None,
            "dress",
            "Easy Dressing Solutions",
            "Best Seller",
            &["Adjustable waist", "Side openings"],
        ),
        product(
            "3",
            "Adaptive Trousers",
            55_000.0,
            Some(75_000.0),
            "trousers",
            "Seated Comfort Collection",
            "Sale",
            &["Elastic waistband", "Seated comfort"],
        ),
        product(
            "4",
            "Sensory-Friendly Top",
            42_000.0,
            None,
            "top",
            "Sensory-Friendly Essentials",
            "Featured",
            &["Tag-free", "Soft fabric", "Flat seams"],
        ),
        product(
            "5",
            "Braille Logo Tote Bag",
            28_000.0,
            None,
            "tote",
            "Braille-Branded Collection",
            "Exclusive",
            &["Braille labels", "Easy-use closures"],
        ),
    ]
}

fn slide(id: u32, title: &str, subtitle: &str, cta: &str, cta_link: &str) -> HeroSlide {
    HeroSlide {
        id,
        image: format!("/images/hero/slide-{id}.jpg"),
        title: title.into(),
        subtitle: subtitle.into(),
        cta: cta.into(),
        cta_link: cta_link.into(),
    }
}

pub fn hero_slides() -> Vec<HeroSlide> {
    vec![
        slide(1, "Adaptive Fashion", "Style Meets Accessibility", "Shop Now", "/shop"),
        slide(2, "New Collection", "Designed for Everyone", "Explore", "/collections"),
        slide(3, "Our Story", "Inclusivity in Every Stitch", "Learn More", "/about"),
    ]
}

fn collection(
    id: &str,
    name: &str,
    slug: &str,
    description: &str,
    product_count: u32,
    featured: bool,
    features: [&str; 3],
) -> CollectionCard {
    CollectionCard {
        id: id.into(),
        name: name.into(),
        slug: slug.into(),
        description: description.into(),
        image: format!("/images/collections/{slug}.jpg"),
        product_count,
        features: features.iter().map(|f| (*f).to_owned()).collect(),
        featured,
    }
}

pub fn collections() -> Vec<CollectionCard> {
    vec![
        collection(
            "1",
            "Adaptive Outerwear",
            "adaptive-outerwear",
            "Stylish jackets, coats, and blazers designed with magnetic closures, easy-access pockets, and wheelchair-friendly features.",
            12,
            true,
            ["Magnetic Closures", "Easy Access Pockets", "Seated Comfort Design"],
        ),
        collection(
            "2",
            "Sensory-Friendly Essentials",
            "sensory-friendly",
            "Ultra-soft, tagless clothing with flat seams designed for people with sensory sensitivities and autism.",
            18,
            true,
            ["Tag-Free Design", "Flat Seams", "Soft Fabrics"],
        ),
        collection(
            "3",
            "Seated Comfort Collection",
            "seated-comfort",
            "Specially tailored for wheelchair users with longer backs, shorter fronts, and strategic seam placement.",
            15,
            true,
            ["Extended Back Length", "Pressure-Free Zones", "Breathable Materials"],
        ),
        collection(
            "4",
            "Easy Dressing Solutions",
            "easy-dressing",
            "Clothing with side openings, magnetic closures, and adaptive features for independent dressing or caregiver assistance.",
            20,
            false,
            ["Side Openings", "Magnetic Fasteners", "Dignified Dressing"],
        ),
        collection(
            "5",
            "Braille-Branded Collection",
            "braille-branded",
            "Exclusive pieces featuring integrated Braille branding, celebrating inclusive design and empowering blind communities.",
            10,
            false,
            ["Braille Integration", "Tactile Elements", "Inclusive Design"],
        ),
        collection(
            "6",
            "African Heritage Line",
            "african-heritage",
            "Contemporary adaptive fashion celebrating African patterns, textiles, and craftsmanship with modern accessibility features.",
            14,
            false,
            ["African Patterns", "Artisan Crafted", "Cultural Pride"],
        ),
    ]
}

pub fn about() -> AboutContent {
    AboutContent {
        title: "Fashion That Feels Right".into(),
        subtitle: "Our Mission".into(),
        body: "At Hisi Studio, we believe that everyone deserves to feel confident and \
               comfortable in what they wear. We create adaptive fashion that combines \
               cutting-edge design with thoughtful accessibility features, ensuring that \
               style is truly inclusive."
            .into(),
        values: vec![
            "Designed with input from the disability community".into(),
            "Sustainable and ethically sourced materials".into(),
            "Inclusive sizing from XS to 5XL".into(),
            "Adaptive features across all collections".into(),
        ],
    }
}

fn press_item(title: &str, outlet: &str, date: &str, url: &str, excerpt: &str) -> PressItem {
    PressItem {
        title: title.into(),
        outlet: outlet.into(),
        url: url.into(),
        published_at: hisi_api::types::parse_timestamp(&format!("{date}T00:00:00Z")),
        excerpt: excerpt.into(),
    }
}

pub fn press() -> Vec<PressItem> {
    vec![
        press_item(
            "Deutsche Welle Feature: Pioneering Adaptive Fashion in Africa",
            "Deutsche Welle (DW)",
            "2023-08-15",
            "https://www.dw.com/hisi-studio-feature",
            "An in-depth look at how Hisi Studio is revolutionizing fashion accessibility and championing disability inclusion across Africa.",
        ),
        press_item(
            "Global Social Media Entrepreneurs Spotlight",
            "GSME",
            "2023-10-22",
            "https://gsme.org/hisi-studio",
            "Featured as a leading social entrepreneur using fashion as a tool for disability advocacy and community empowerment.",
        ),
        press_item(
            "The Future of Inclusive Fashion",
            "Fashion Forward Africa",
            "2024-03-10",
            "#",
            "How Hisi Studio is setting new standards for adaptive design and accessibility in the African fashion industry.",
        ),
        press_item(
            "TactART: Making Art Accessible",
            "Art & Culture Magazine",
            "2024-05-18",
            "#",
            "Exploring the groundbreaking TactART initiative that brings visual art to blind and visually impaired communities.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_default_products() {
        let products = featured_products();
        assert_eq!(products.len(), 5);
        assert_eq!(products[0].name, "Adaptive Bomber Jacket");
        assert_eq!(products[0].discount_percent(), Some(26));
        assert_eq!(products[4].price_label(), "₦28,000");
    }

    #[test]
    fn hero_slide_links() {
        let links: Vec<_> = hero_slides().into_iter().map(|s| s.cta_link).collect();
        assert_eq!(links, ["/shop", "/collections", "/about"]);
    }

    #[test]
    fn press_dates_parse() {
        assert!(press().iter().all(|p| p.published_at.is_some()));
    }
}
