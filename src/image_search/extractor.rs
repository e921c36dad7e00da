//! Result-page metadata extraction
//!
//! The result markup embeds one JSON blob per image inside an HTML attribute,
//! with quotes escaped as `&quot;`. Each attribute is matched as its own stream
//! over the whole page, in document order. The streams are then zipped by
//! position against the image URL stream.
//!
//! Alignment is positional, not by identity: if some result lacks a source
//! title, every later record's source title shifts by one. That is a property
//! of the markup format and is kept as is. Fields whose stream runs out before
//! the URL stream are `None`.

use once_cell::sync::Lazy;
use regex::Regex;

use super::types::ExtractedImage;

static IMAGE_URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"murl&quot;:&quot;(.*?)&quot;").expect("Invalid image url regex")
});

static SOURCE_URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"purl&quot;:&quot;(.*?)&quot;").expect("Invalid source url regex")
});

// Also matches inside `pt&quot;:` keys, so source titles feed this stream too.
static TITLE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"t&quot;:&quot;(.*?)&quot;").expect("Invalid title regex"));

static SOURCE_TITLE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"pt&quot;:&quot;(.*?)&quot;").expect("Invalid source title regex")
});

static DIMENSIONS_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"&quot;w&quot;:(\d+),&quot;h&quot;:(\d+)").expect("Invalid dimensions regex")
});

/// All first-group matches of `pattern`, in document order
fn match_stream(pattern: &Regex, markup: &str) -> Vec<String> {
    pattern
        .captures_iter(markup)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
        .collect()
}

/// All `(width, height)` pairs in document order
///
/// A number too large for `u64` becomes `None` but keeps its slot in the
/// stream, so alignment with later records is unaffected.
fn match_dimensions(markup: &str) -> Vec<(Option<u64>, Option<u64>)> {
    DIMENSIONS_PATTERN
        .captures_iter(markup)
        .map(|caps| {
            let parse = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u64>().ok());
            (parse(1), parse(2))
        })
        .collect()
}

/// Make an extracted image URL usable as a fetch target
fn normalize_image_url(raw: &str) -> String {
    raw.replace(' ', "%20")
}

/// Extract candidate images from one page of result markup
///
/// Returns records in page order, one per image URL match. Pure function of
/// the markup: no network or filesystem access.
#[must_use]
pub fn extract_images(markup: &str) -> Vec<ExtractedImage> {
    let image_urls = match_stream(&IMAGE_URL_PATTERN, markup);
    if image_urls.is_empty() {
        return Vec::new();
    }

    let source_urls = match_stream(&SOURCE_URL_PATTERN, markup);
    let titles = match_stream(&TITLE_PATTERN, markup);
    let source_titles = match_stream(&SOURCE_TITLE_PATTERN, markup);
    let dimensions = match_dimensions(markup);

    image_urls
        .into_iter()
        .enumerate()
        .map(|(idx, url)| {
            let (width, height) = dimensions.get(idx).copied().unwrap_or((None, None));
            ExtractedImage {
                image_url: normalize_image_url(&url),
                source_url: source_urls.get(idx).cloned(),
                title: titles.get(idx).cloned(),
                source_title: source_titles.get(idx).cloned(),
                width,
                height,
            }
        })
        .filter(|image| !image.image_url.is_empty())
        .collect()
}
