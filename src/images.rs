//! Image collector.
//!
//! Extracts, filters, absolutizes, and deduplicates the image URLs
//! referenced by a content fragment. Purely string/URL manipulation; no
//! network I/O.

use crate::options::Options;
use crate::patterns::IMG_SRC;
use crate::rules;
use crate::url_utils;

/// Collect image URLs from a content fragment.
///
/// Sources containing `data:`, `pixel`, or `tracking` are discarded;
/// relative references resolve against `base_url`; duplicates keep their
/// first-seen position. When `main_image` is supplied and survives the
/// same filter it is forced to index 0, making it the highest-priority
/// image rather than merely present. The result is capped at `options.max_images`.
#[must_use]
pub fn collect(
    fragment: &str,
    base_url: &str,
    main_image: Option<&str>,
    options: &Options,
) -> Vec<String> {
    let base = url_utils::parse_base(base_url);
    let mut images: Vec<String> = Vec::new();

    for caps in IMG_SRC.captures_iter(fragment) {
        let Some(src) = caps.get(1) else { continue };
        let src = src.as_str();

        if rules::is_rejected_image_src(src) {
            continue;
        }

        let absolute = if src.starts_with("http") {
            src.to_string()
        } else if let Some(ref base) = base {
            url_utils::create_absolute_url(src, base)
        } else {
            continue;
        };

        if !absolute.starts_with("http") {
            continue;
        }

        if !images.contains(&absolute) {
            images.push(absolute);
        }
    }

    if let Some(main) = main_image {
        if !main.is_empty() && !rules::is_rejected_image_src(main) {
            images.retain(|img| img != main);
            images.insert(0, main.to_string());
        }
    }

    images.truncate(options.max_images);
    images
}
