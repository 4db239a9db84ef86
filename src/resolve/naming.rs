//! URL path to file identifier conversion

use serde::Deserialize;

/// Casing convention applied to generated file identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum NamingConvention {
    /// `GETTING_STARTED.md`
    #[default]
    #[serde(rename = "UPPERCASE_WITH_UNDERSCORES")]
    UpperSnake,

    /// `getting_started.md`
    #[serde(rename = "lowercase_with_underscores")]
    LowerSnake,

    /// `GettingStarted.md`
    #[serde(rename = "CamelCase")]
    CamelCase,
}

/// Derives a canonical file identifier from a URL path
///
/// Every path segment contributes to the identifier, so `/api/v2/auth` and
/// `/guides/v2/auth` never collide by construction. The final segment loses
/// its extension, segments are joined with underscores, the convention is
/// applied, and any character outside `[A-Za-z0-9_]` is dropped. The result
/// always carries the configured prefix and a `.md` extension.
///
/// # Arguments
///
/// * `path` - URL path component, with or without leading/trailing slashes
/// * `convention` - casing convention to apply
/// * `prefix` - verbatim prefix prepended before the identifier
///
/// # Returns
///
/// The file identifier, e.g. `EX_API_V2_AUTH.md` for `/api/v2/auth`.
pub fn path_to_identifier(path: &str, convention: NamingConvention, prefix: &str) -> String {
    let trimmed = path.trim_matches('/');

    let raw = if trimmed.is_empty() {
        "index".to_string()
    } else {
        let mut segments: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();

        if let Some(last) = segments.last_mut() {
            *last = strip_extension(last);
        }

        segments.join("_")
    };

    let cased = apply_convention(&raw, convention);

    let ident: String = cased
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();

    format!("{}{}.md", prefix, ident)
}

/// Removes a trailing `.ext` from a segment, keeping dotfile-style names whole
fn strip_extension(segment: &str) -> &str {
    match segment.rfind('.') {
        Some(idx) if idx > 0 => &segment[..idx],
        _ => segment,
    }
}

fn apply_convention(raw: &str, convention: NamingConvention) -> String {
    match convention {
        NamingConvention::UpperSnake => raw
            .chars()
            .map(|c| match c {
                '-' | ' ' | '.' => '_',
                c => c.to_ascii_uppercase(),
            })
            .collect(),
        NamingConvention::LowerSnake => raw
            .chars()
            .map(|c| match c {
                '-' | ' ' | '.' => '_',
                c => c.to_ascii_lowercase(),
            })
            .collect(),
        NamingConvention::CamelCase => raw
            .split(|c: char| !c.is_ascii_alphanumeric())
            .filter(|w| !w.is_empty())
            .map(capitalize)
            .collect(),
    }
}

/// Uppercases the first character and leaves the tail untouched
///
/// The tail must keep its casing so that feeding an already-converted
/// identifier back through the mapping changes nothing: `GettingStarted` is
/// one alphanumeric run, and lowercasing its tail would collapse it.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_path() {
        assert_eq!(
            path_to_identifier("/getting-started", NamingConvention::UpperSnake, ""),
            "GETTING_STARTED.md"
        );
    }

    #[test]
    fn test_nested_path_keeps_all_segments() {
        assert_eq!(
            path_to_identifier("/api/v2/auth", NamingConvention::UpperSnake, ""),
            "API_V2_AUTH.md"
        );
        // Same leaf, different parent, different identifier
        assert_eq!(
            path_to_identifier("/guides/v2/auth", NamingConvention::UpperSnake, ""),
            "GUIDES_V2_AUTH.md"
        );
    }

    #[test]
    fn test_root_path_becomes_index() {
        assert_eq!(
            path_to_identifier("/", NamingConvention::UpperSnake, ""),
            "INDEX.md"
        );
        assert_eq!(
            path_to_identifier("", NamingConvention::LowerSnake, ""),
            "index.md"
        );
    }

    #[test]
    fn test_extension_stripped_from_final_segment_only() {
        assert_eq!(
            path_to_identifier("/docs/intro.html", NamingConvention::UpperSnake, ""),
            "DOCS_INTRO.md"
        );
        assert_eq!(
            path_to_identifier("/v1.2/guide.html", NamingConvention::LowerSnake, ""),
            "v1_2_guide.md"
        );
    }

    #[test]
    fn test_trailing_slash_ignored() {
        assert_eq!(
            path_to_identifier("/docs/intro/", NamingConvention::UpperSnake, ""),
            "DOCS_INTRO.md"
        );
    }

    #[test]
    fn test_prefix_applied() {
        assert_eq!(
            path_to_identifier("/api/auth", NamingConvention::UpperSnake, "EX_"),
            "EX_API_AUTH.md"
        );
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(
            path_to_identifier("/getting-started/quick-tour", NamingConvention::CamelCase, ""),
            "GettingStartedQuickTour.md"
        );
    }

    #[test]
    fn test_mapping_is_idempotent() {
        // Feeding an identifier back through the mapping must be a no-op,
        // for every convention.
        for convention in [
            NamingConvention::UpperSnake,
            NamingConvention::LowerSnake,
            NamingConvention::CamelCase,
        ] {
            for path in ["/getting-started/quick-tour", "/api/v2/auth", "/", "/docs/intro.html"] {
                let once = path_to_identifier(path, convention, "");
                let twice = path_to_identifier(&once, convention, "");
                assert_eq!(once, twice, "{:?} not idempotent for {}", convention, path);
            }
        }
    }

    #[test]
    fn test_camel_case_keeps_interior_casing() {
        assert_eq!(
            path_to_identifier("GettingStartedQuickTour.md", NamingConvention::CamelCase, ""),
            "GettingStartedQuickTour.md"
        );
        assert_eq!(
            path_to_identifier("/API/reference", NamingConvention::CamelCase, ""),
            "APIReference.md"
        );
    }

    #[test]
    fn test_unsafe_characters_dropped() {
        assert_eq!(
            path_to_identifier("/docs/c++ guide!", NamingConvention::LowerSnake, ""),
            "docs_c_guide.md"
        );
    }

    #[test]
    fn test_default_convention_is_upper_snake() {
        assert_eq!(NamingConvention::default(), NamingConvention::UpperSnake);
    }
}
