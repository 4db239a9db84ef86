//! Markdown link rewriting
//!
//! Rewrites every `[text](target)` and `![alt](target)` occurrence in a
//! converted document so that links between crawled pages point at their
//! flat-file identifiers instead of live URLs. Identifier assignment goes
//! through the owning [`Resolver`], so a page linked from many documents
//! always resolves to the same file, suffixed or not.

use crate::resolve::registry::Resolver;
use url::Url;

/// A document with its links rewritten
#[derive(Debug, Clone)]
pub struct RewrittenDocument {
    /// Markdown content with rewritten link targets
    pub content: String,
    /// Distinct local files this document links to, in first-seen order
    pub linked_files: Vec<String>,
}

impl Resolver {
    /// Rewrites all Markdown links in `content`
    ///
    /// `page_url` is the URL the content was fetched from; relative targets
    /// resolve against it. Link targets are transformed as follows:
    ///
    /// * empty target: replaced with `#`
    /// * fragment-only target: kept verbatim, or reduced to the bare link
    ///   text when anchor preservation is off
    /// * absolute target on the crawl host: replaced with `./IDENT.md`,
    ///   carrying the fragment when anchors are preserved
    /// * absolute target on any other host: left unchanged
    /// * relative target: resolved against `page_url`, then treated as an
    ///   absolute target
    ///
    /// Images keep their remote targets; relative image sources are
    /// absolutized so they still load from the mirrored file.
    pub fn rewrite_markdown(&mut self, content: &str, page_url: &Url) -> RewrittenDocument {
        let mut rewritten = String::with_capacity(content.len());
        let mut linked_files = Vec::new();
        let mut cursor = 0;

        let matches: Vec<_> = self
            .link_pattern
            .captures_iter(content)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let bang = caps.get(1)?.as_str().to_string();
                let text = caps.get(2)?.as_str().to_string();
                let target = caps.get(3)?.as_str().to_string();
                Some((whole.start(), whole.end(), bang, text, target))
            })
            .collect();

        for (start, end, bang, text, target) in matches {
            rewritten.push_str(&content[cursor..start]);
            cursor = end;

            let replacement = if bang.is_empty() {
                self.rewrite_link(&text, &target, page_url, &mut linked_files)
            } else {
                rewrite_image(&text, &target, page_url)
            };

            rewritten.push_str(&replacement);
        }

        rewritten.push_str(&content[cursor..]);

        RewrittenDocument {
            content: rewritten,
            linked_files,
        }
    }

    fn rewrite_link(
        &mut self,
        text: &str,
        target: &str,
        page_url: &Url,
        linked_files: &mut Vec<String>,
    ) -> String {
        let target = target.trim();

        if target.is_empty() {
            return format!("[{}](#)", text);
        }

        if let Some(stripped) = target.strip_prefix('#') {
            return if self.preserve_anchors {
                format!("[{}](#{})", text, stripped)
            } else {
                format!("[{}]", text)
            };
        }

        match Url::parse(target) {
            Ok(url) if url.host_str() == Some(self.base_host.as_str()) => {
                self.file_reference(text, &url, linked_files)
            }
            Ok(_) => {
                // Absolute link to another host, left alone
                format!("[{}]({})", text, target)
            }
            Err(url::ParseError::RelativeUrlWithoutBase) => match page_url.join(target) {
                Ok(url) if url.host_str() == Some(self.base_host.as_str()) => {
                    self.file_reference(text, &url, linked_files)
                }
                Ok(url) => format!("[{}]({})", text, url),
                Err(_) => format!("[{}]({})", text, target),
            },
            Err(_) => format!("[{}]({})", text, target),
        }
    }

    /// Builds a `./IDENT.md` reference for an in-domain URL
    fn file_reference(
        &mut self,
        text: &str,
        url: &Url,
        linked_files: &mut Vec<String>,
    ) -> String {
        let fragment = url.fragment().map(str::to_string);

        let mut bare = url.clone();
        bare.set_fragment(None);

        let ident = self.assign(&bare);

        if !linked_files.contains(&ident) {
            linked_files.push(ident.clone());
        }

        match fragment {
            Some(frag) if self.preserve_anchors => format!("[{}](./{}#{})", text, ident, frag),
            _ => format!("[{}](./{})", text, ident),
        }
    }
}

/// Rewrites one image occurrence
///
/// Images are referenced remotely rather than mirrored, so absolute sources
/// stay untouched and relative sources are resolved to absolute URLs.
fn rewrite_image(alt: &str, target: &str, page_url: &Url) -> String {
    match Url::parse(target) {
        Ok(_) => format!("![{}]({})", alt, target),
        Err(url::ParseError::RelativeUrlWithoutBase) => match page_url.join(target) {
            Ok(url) => format!("![{}]({})", alt, url),
            Err(_) => format!("![{}]({})", alt, target),
        },
        Err(_) => format!("![{}]({})", alt, target),
    }
}
