// src/markdown.rs
//! Renders a single page's content blocks to markdown, for the blog and
//! project detail views that are addressed by slug.

use crate::api::responses::{plain_text, BlockObject};
use crate::api::ContentSource;
use crate::error::AppError;
use crate::model::page_id_from_slug;

/// Fetches a page by its slug and renders its blocks to markdown.
///
/// The page id embedded in the slug is the sole lookup key; there is no
/// separate slug index to consult.
pub async fn page_markdown_by_slug(
    source: &dyn ContentSource,
    slug: &str,
) -> Result<String, AppError> {
    let id = page_id_from_slug(slug)?;
    log::debug!("Rendering page {} from slug", id);
    let blocks = source.block_children(&id).await?;
    Ok(render_blocks(&blocks))
}

/// Renders blocks to markdown in document order.
///
/// Numbered list items count consecutively and the counter resets at the
/// first non-numbered block. Unknown block types render as nothing.
pub fn render_blocks(blocks: &[BlockObject]) -> String {
    let mut output = String::new();
    let mut numbered_index = 0usize;

    for block in blocks {
        if block.block_type != "numbered_list_item" {
            numbered_index = 0;
        }

        match block.block_type.as_str() {
            "paragraph" => {
                if let Some(text) = &block.paragraph {
                    output.push_str(&plain_text(&text.rich_text));
                    output.push_str("\n\n");
                }
            }
            "heading_1" => push_heading(&mut output, "#", block.heading_1.as_ref()),
            "heading_2" => push_heading(&mut output, "##", block.heading_2.as_ref()),
            "heading_3" => push_heading(&mut output, "###", block.heading_3.as_ref()),
            "bulleted_list_item" => {
                if let Some(item) = &block.bulleted_list_item {
                    output.push_str(&format!("- {}\n", plain_text(&item.rich_text)));
                }
            }
            "numbered_list_item" => {
                if let Some(item) = &block.numbered_list_item {
                    numbered_index += 1;
                    output.push_str(&format!(
                        "{}. {}\n",
                        numbered_index,
                        plain_text(&item.rich_text)
                    ));
                }
            }
            "to_do" => {
                if let Some(todo) = &block.to_do {
                    let mark = if todo.checked { "x" } else { " " };
                    output.push_str(&format!("- [{}] {}\n", mark, plain_text(&todo.rich_text)));
                }
            }
            "quote" => {
                if let Some(quote) = &block.quote {
                    output.push_str(&format!("> {}\n\n", plain_text(&quote.rich_text)));
                }
            }
            "code" => {
                if let Some(code) = &block.code {
                    let language = code.language.as_deref().unwrap_or("");
                    output.push_str(&format!(
                        "```{}\n{}\n```\n\n",
                        language,
                        plain_text(&code.rich_text)
                    ));
                }
            }
            "divider" => output.push_str("---\n\n"),
            "image" => {
                if let Some(image) = &block.image {
                    if let Some(url) = image.resolve_url() {
                        let alt = image
                            .caption
                            .as_deref()
                            .map(plain_text)
                            .unwrap_or_default();
                        output.push_str(&format!("![{}]({})\n\n", alt, url));
                    }
                }
            }
            "bookmark" => {
                if let Some(bookmark) = &block.bookmark {
                    let label = bookmark
                        .caption
                        .as_deref()
                        .map(plain_text)
                        .filter(|caption| !caption.is_empty())
                        .unwrap_or_else(|| bookmark.url.clone());
                    output.push_str(&format!("[{}]({})\n\n", label, bookmark.url));
                }
            }
            other => {
                log::debug!("Skipping unsupported block type: {}", other);
            }
        }
    }

    output
}

fn push_heading(
    output: &mut String,
    marker: &str,
    text: Option<&crate::api::responses::TextBlock>,
) {
    if let Some(text) = text {
        output.push_str(&format!("{} {}\n\n", marker, plain_text(&text.rich_text)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn blocks(value: serde_json::Value) -> Vec<BlockObject> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn renders_a_representative_document() {
        let blocks = blocks(json!([
            {"id": "1", "type": "heading_1", "heading_1": {"rich_text": [{"plain_text": "Trip notes"}]}},
            {"id": "2", "type": "paragraph", "paragraph": {"rich_text": [{"plain_text": "Day one was "}, {"plain_text": "long"}]}},
            {"id": "3", "type": "bulleted_list_item", "bulleted_list_item": {"rich_text": [{"plain_text": "pack light"}]}},
            {"id": "4", "type": "divider"},
            {"id": "5", "type": "code", "code": {"rich_text": [{"plain_text": "cargo run"}], "language": "bash"}},
        ]));

        let markdown = render_blocks(&blocks);
        assert_eq!(
            markdown,
            "# Trip notes\n\nDay one was long\n\n- pack light\n---\n\n```bash\ncargo run\n```\n\n"
        );
    }

    #[test]
    fn numbered_lists_count_and_reset() {
        let blocks = blocks(json!([
            {"id": "1", "type": "numbered_list_item", "numbered_list_item": {"rich_text": [{"plain_text": "first"}]}},
            {"id": "2", "type": "numbered_list_item", "numbered_list_item": {"rich_text": [{"plain_text": "second"}]}},
            {"id": "3", "type": "paragraph", "paragraph": {"rich_text": [{"plain_text": "break"}]}},
            {"id": "4", "type": "numbered_list_item", "numbered_list_item": {"rich_text": [{"plain_text": "fresh start"}]}},
        ]));

        let markdown = render_blocks(&blocks);
        assert_eq!(
            markdown,
            "1. first\n2. second\nbreak\n\n1. fresh start\n"
        );
    }

    #[test]
    fn unknown_blocks_render_as_nothing() {
        let blocks = blocks(json!([
            {"id": "1", "type": "synced_block"},
            {"id": "2", "type": "paragraph", "paragraph": {"rich_text": [{"plain_text": "kept"}]}},
        ]));
        assert_eq!(render_blocks(&blocks), "kept\n\n");
    }

    #[test]
    fn image_uses_caption_as_alt_text() {
        let blocks = blocks(json!([
            {"id": "1", "type": "image", "image": {
                "external": {"url": "https://example.com/pic.jpg"},
                "caption": [{"plain_text": "A sunset"}]
            }},
        ]));
        assert_eq!(
            render_blocks(&blocks),
            "![A sunset](https://example.com/pic.jpg)\n\n"
        );
    }
}
