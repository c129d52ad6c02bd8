//! RSS 2.0 rendering with Google Merchant product fields.

use std::io::Write;

use adfeed_core::ProductRecord;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::FeedError;

pub const GOOGLE_MERCHANT_NAMESPACE: &str = "http://base.google.com/ns/1.0";

const INDENT_WIDTH: usize = 2;

/// Channel-level metadata of the feed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedChannel {
    pub title: String,
    pub link: String,
    pub description: String,
}

impl FeedChannel {
    #[must_use]
    pub fn new(title: &str, link: &str, description: &str) -> Self {
        Self {
            title: title.to_owned(),
            link: link.to_owned(),
            description: description.to_owned(),
        }
    }
}

/// Render `records` as an RSS 2.0 document, one `<item>` per record in the
/// order given.
///
/// The document carries no build dates, so identical input always renders
/// to identical bytes. Every value is XML-escaped except `image_link`, which
/// the projector already stores escaped.
///
/// # Errors
///
/// Returns [`FeedError`] if the XML writer fails.
pub fn render_feed(channel: &FeedChannel, records: &[ProductRecord]) -> Result<Vec<u8>, FeedError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', INDENT_WIDTH);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut rss = BytesStart::new("rss");
    rss.push_attribute(("version", "2.0"));
    rss.push_attribute(("xmlns:g", GOOGLE_MERCHANT_NAMESPACE));
    writer.write_event(Event::Start(rss))?;
    writer.write_event(Event::Start(BytesStart::new("channel")))?;

    write_text_element(&mut writer, "title", BytesText::new(&channel.title))?;
    write_text_element(&mut writer, "link", BytesText::new(&channel.link))?;
    write_text_element(
        &mut writer,
        "description",
        BytesText::new(&channel.description),
    )?;

    for record in records {
        write_item(&mut writer, record)?;
    }

    writer.write_event(Event::End(BytesEnd::new("channel")))?;
    writer.write_event(Event::End(BytesEnd::new("rss")))?;

    let mut bytes = writer.into_inner();
    bytes.push(b'\n');

    tracing::debug!(
        items = records.len(),
        bytes = bytes.len(),
        "rendered feed document"
    );
    Ok(bytes)
}

fn write_item<W: Write>(writer: &mut Writer<W>, record: &ProductRecord) -> Result<(), FeedError> {
    writer.write_event(Event::Start(BytesStart::new("item")))?;

    write_text_element(writer, "g:id", BytesText::new(&record.id))?;
    write_text_element(writer, "title", BytesText::new(&record.title))?;
    write_text_element(writer, "description", BytesText::new(&record.description))?;
    write_text_element(writer, "link", BytesText::new(&record.link))?;
    write_text_element(
        writer,
        "g:image_link",
        BytesText::from_escaped(record.image_link.as_str()),
    )?;
    write_text_element(writer, "g:brand", BytesText::new(&record.brand))?;
    write_text_element(writer, "g:price", BytesText::new(&record.price))?;
    write_text_element(
        writer,
        "g:availability",
        BytesText::new(&record.availability),
    )?;
    write_text_element(writer, "g:gtin", BytesText::new(&record.code_number))?;

    writer.write_event(Event::End(BytesEnd::new("item")))?;
    Ok(())
}

fn write_text_element<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    text: BytesText<'_>,
) -> Result<(), FeedError> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(text))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
