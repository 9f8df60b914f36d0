use crate::infra::{parse_entity_type, render_score, resolve_settings};
use clap::Args;
use seo_engine::config::AppConfig;
use seo_engine::error::AppError;
use seo_engine::{create_config, evaluate, EntityType, Record};
use serde_json::json;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Only score the sample for this entity type
    #[arg(long, value_parser = parse_entity_type)]
    pub(crate) entity: Option<EntityType>,
    /// Print the generated JSON-LD after each score
    #[arg(long)]
    pub(crate) structured_data: bool,
}

pub(crate) fn run_demo(config: AppConfig, args: DemoArgs) -> Result<(), AppError> {
    let settings = resolve_settings(config, None)?;
    println!("SEO scoring demo");
    if let Some(settings) = &settings {
        println!(
            "- custom thresholds: title {}-{} | description {}-{}",
            settings.title_min_length,
            settings.title_max_length,
            settings.description_min_length,
            settings.description_max_length
        );
    }

    for (entity, record) in sample_records() {
        if args.entity.is_some_and(|only| only != entity) {
            continue;
        }

        println!();
        let entity_config = create_config(entity, settings.as_ref());
        let result = evaluate(&record, &entity_config, settings.as_ref());
        render_score(&result);

        if args.structured_data {
            let data = entity_config.generate_structured_data(&record);
            match serde_json::to_string_pretty(&data) {
                Ok(json) => println!("  JSON-LD:\n{json}"),
                Err(err) => println!("  JSON-LD unavailable: {err}"),
            }
        }
    }

    Ok(())
}

fn sample_records() -> Vec<(EntityType, Record)> {
    let content = format!(
        "<p>{}</p>",
        "Temperature logging keeps chilled freight safe. ".repeat(60)
    );

    vec![
        (
            EntityType::Organization,
            Record::new()
                .with("name", "Northwind Logistics")
                .with("slug", "northwind-logistics")
                .with("url", "https://northwind.example.com")
                .with(
                    "description",
                    "Northwind runs regional freight and last-mile delivery for grocery chains.",
                )
                .with("seoTitle", "Northwind Logistics | Regional Grocery Freight Partner")
                .with(
                    "seoDescription",
                    "Northwind Logistics moves chilled and ambient grocery freight across the \
                     region with tracked last-mile delivery and same-day slots.",
                )
                .with(
                    "logoMedia",
                    json!({
                        "url": "https://cdn.example.com/northwind/logo.svg",
                        "altText": "Northwind logo"
                    }),
                )
                .with(
                    "ogImageMedia",
                    json!({
                        "url": "https://cdn.example.com/northwind/og.jpg",
                        "width": 1200,
                        "height": 630
                    }),
                )
                .with("twitterHandle", "@northwind")
                .with("sameAs", json!(["https://www.linkedin.com/company/northwind"]))
                .with("email", "hello@northwind.example.com")
                .with("addressLocality", "Leeds")
                .with("addressCountry", "GB")
                .with("gtmId", "GTM-N0RTH1"),
        ),
        (
            EntityType::Article,
            Record::new()
                .with("title", "Cold chain checks before the holiday peak")
                .with("slug", "cold-chain-checks")
                .with("seoTitle", "Cold Chain Checks Before the Holiday Peak")
                .with("content", content)
                .with(
                    "featuredImageMedia",
                    json!({ "url": "https://cdn.example.com/blog/cold-chain.webp" }),
                )
                .with(
                    "author",
                    json!({
                        "name": "Priya Natarajan",
                        "url": "https://northwind.example.com/team/priya"
                    }),
                )
                .with("category", json!({ "name": "Operations" }))
                .with("tags", json!(["cold chain", "peak season"]))
                .with(
                    "focusKeywords",
                    "cold chain, holiday logistics, temperature logging",
                )
                .with("publishedAt", "2024-11-20T08:00:00Z"),
        ),
        (
            EntityType::Person,
            Record::new()
                .with("name", "Priya Natarajan")
                .with("slug", "priya-natarajan")
                .with(
                    "bio",
                    "Priya leads fleet operations at Northwind and writes about cold chain \
                     compliance.",
                )
                .with("jobTitle", "Head of Fleet Operations")
                .with(
                    "avatarMedia",
                    json!({ "url": "https://cdn.example.com/team/priya.jpg" }),
                )
                .with(
                    "expertiseAreas",
                    json!(["cold chain", "fleet operations", "food safety"]),
                )
                .with("linkedinUrl", "https://www.linkedin.com/in/priya-natarajan"),
        ),
        (
            EntityType::Category,
            Record::new()
                .with("name", "Operations")
                .with("slug", "operations")
                .with(
                    "description",
                    "Field notes on fleet scheduling, depot staffing and delivery windows.",
                )
                .with("seoTitle", "Logistics Operations Guides and Field Notes")
                .with("canonicalUrl", "https://northwind.example.com/blog/operations"),
        ),
        (
            EntityType::Tag,
            Record::new()
                .with("name", "Cold Chain")
                .with("slug", "cold-chain"),
        ),
        (
            EntityType::Industry,
            Record::new()
                .with("name", "Grocery Retail")
                .with("slug", "grocery-retail")
                .with("description", "Supermarkets and convenience chains.")
                .with(
                    "iconMedia",
                    json!({ "url": "https://cdn.example.com/icons/grocery.svg" }),
                ),
        ),
    ]
}
