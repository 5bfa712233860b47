/// Maximum slug length; matches the `slug` column checks in the server schema.
pub const MAX_SLUG_LEN: usize = 100;

/// Turn a free-form title into a URL slug.
///
/// ASCII alphanumerics are lowercased and kept, any other ASCII run collapses
/// into a single dash, and non-ASCII characters are dropped.
pub fn slugify(input: &str) -> String {
    let mut slug = String::new();
    let mut last_was_dash = false;

    for ch in input.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            last_was_dash = false;
        } else if ch.is_ascii() && !slug.is_empty() && !last_was_dash {
            slug.push('-');
            last_was_dash = true;
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }

    if slug.len() > MAX_SLUG_LEN {
        slug.truncate(MAX_SLUG_LEN);
        while slug.ends_with('-') {
            slug.pop();
        }
    }

    slug
}

/// True when `s` already has the shape `slugify` produces.
pub fn is_slug(s: &str) -> bool {
    !s.is_empty()
        && s.len() <= MAX_SLUG_LEN
        && !s.starts_with('-')
        && !s.ends_with('-')
        && !s.contains("--")
        && s.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_basic_cases() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("Rust & Axum: a tour!"), "rust-axum-a-tour");
        assert_eq!(slugify("café latte"), "caf-latte");
        assert_eq!(slugify("  --leading"), "leading");
    }

    #[test]
    fn slugify_truncates_and_cleans() {
        let long = "ab ".repeat(60);
        let slug = slugify(&long);
        assert!(slug.len() <= MAX_SLUG_LEN);
        assert!(!slug.ends_with('-'));
    }

    #[test]
    fn slugify_of_symbols_is_empty() {
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify("日本語"), "");
    }

    #[test]
    fn is_slug_accepts_slugify_output() {
        assert!(is_slug(&slugify("My First Post")));
        assert!(is_slug("post-2024"));
    }

    #[test]
    fn is_slug_rejects_bad_shapes() {
        assert!(!is_slug(""));
        assert!(!is_slug("Upper"));
        assert!(!is_slug("-lead"));
        assert!(!is_slug("trail-"));
        assert!(!is_slug("double--dash"));
        assert!(!is_slug("has space"));
    }
}
