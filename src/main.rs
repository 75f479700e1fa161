// src/main.rs

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    Config,
};
use notionfolio::{
    page_markdown_by_slug, CommandLineInput, ContentItem, NotionHttpClient, PageData, Pagination,
    QueryParams, SiteConfig,
};

/// Sets up logging configuration.
fn setup_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let stdout_appender = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout_appender)))
        .build(Root::builder().appender("stdout").build(log_level))?;

    log4rs::init_config(config)?;
    Ok(())
}

/// Shortens an RFC 3339 timestamp to its date for listing output,
/// passing anything unparseable through unchanged.
fn short_date(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

/// Prints one adapted record as a listing line.
fn print_item(item: &ContentItem) {
    match item {
        ContentItem::Blog(b) => println!(
            "{}  {}  [{}]  {}min",
            short_date(&b.date),
            b.title,
            b.category,
            b.read_time
        ),
        ContentItem::Activity(a) => println!("{}  {}  [{}]", short_date(&a.date), a.name, a.kind),
        ContentItem::Bookmark(b) => println!("{}  [{}]  {}", b.name, b.kind, b.link),
        ContentItem::Project(p) => {
            let status = if p.is_completed { "done" } else { "wip" };
            println!("{}  {}  ({})  [{}]", p.name, p.kind, p.year, status)
        }
        ContentItem::Image(i) => println!("{}  {}  {}", short_date(&i.date), i.alt, i.src),
    }
}

async fn run(cli: CommandLineInput) -> anyhow::Result<()> {
    let config = SiteConfig::from_env().context("resolving site configuration")?;
    let client = NotionHttpClient::new(&config.api_key).context("building Notion client")?;

    // Slug mode: render one page as markdown and exit
    if let Some(slug) = &cli.slug {
        let markdown = page_markdown_by_slug(&client, slug)
            .await
            .with_context(|| format!("rendering page for slug '{}'", slug))?;
        println!("{}", markdown);
        return Ok(());
    }

    let kind = cli.content_kind()?;
    let sort = cli.sort_order()?;

    let mut query = QueryParams::new();
    if let Some(cursor) = &cli.cursor {
        query.set(kind.cursor_key(), cursor);
    }

    let pagination = Pagination::new(&client, &config.databases, query, kind);
    let data: PageData = pagination.current_page_data(sort).await?;

    let bundle = data
        .bundle(kind)
        .context("current page data is missing the requested kind")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(bundle)?);
    } else {
        for item in &bundle.results {
            print_item(item);
        }
        println!("\n{} item(s)", bundle.results.len());
        if let Some(url) = pagination.next_page_url(&data) {
            println!("next page: {}", url);
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CommandLineInput::parse();

    if let Err(e) = setup_logging(cli.verbose) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    run(cli).await
}
