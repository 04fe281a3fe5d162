//! URLs that respect the deployment base path.
use flora_core::PLACEHOLDER_IMAGE;

/// When `PUBLIC_URL` is set at compile time (e.g. `/flora` for a project
/// page), bundled asset URLs are prefixed with it.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    asset_path_with_base(relative, public_url())
}

/// Base path for the router, `None` when the app is served from the root.
#[must_use]
pub fn router_base() -> Option<String> {
    router_base_with_base(public_url())
}

/// Resolve a catalog image reference for an `<img src>`.
///
/// Remote URLs pass through, bundled paths get the base prefix and blanks
/// fall back to the placeholder.
#[must_use]
pub fn image_src(reference: &str) -> String {
    image_src_with_base(reference, public_url())
}

fn public_url() -> &'static str {
    option_env!("PUBLIC_URL").unwrap_or("")
}

fn asset_path_with_base(relative: &str, base: &str) -> String {
    let base = base.trim_end_matches('/');
    let rel = relative.trim_start_matches('/');

    if base.is_empty() {
        format!("/{rel}")
    } else {
        format!("{base}/{rel}")
    }
}

fn router_base_with_base(base: &str) -> Option<String> {
    let base = base.trim_end_matches('/').trim();
    (!base.is_empty()).then(|| base.to_string())
}

fn image_src_with_base(reference: &str, base: &str) -> String {
    let reference = reference.trim();
    if reference.is_empty() {
        PLACEHOLDER_IMAGE.to_string()
    } else if reference.starts_with("http://")
        || reference.starts_with("https://")
        || reference.starts_with("data:")
    {
        reference.to_string()
    } else {
        asset_path_with_base(reference, base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assets_are_root_anchored_without_a_base() {
        assert_eq!(asset_path("static/img/logo.svg"), "/static/img/logo.svg");
        assert_eq!(asset_path("/static/img/logo.svg"), "/static/img/logo.svg");
        assert_eq!(router_base(), None);
    }

    #[test]
    fn assets_and_router_use_the_public_base() {
        assert_eq!(
            asset_path_with_base("static/img/logo.svg", "/flora/"),
            "/flora/static/img/logo.svg"
        );
        assert_eq!(router_base_with_base("/flora/"), Some("/flora".to_string()));
        assert_eq!(router_base_with_base(" / "), None);
    }

    #[test]
    fn catalog_images_resolve_by_kind() {
        let remote = "https://images.unsplash.com/photo-1";
        assert_eq!(image_src_with_base(remote, "/flora"), remote);
        assert_eq!(
            image_src_with_base("static/img/rose.jpg", "/flora"),
            "/flora/static/img/rose.jpg"
        );
        assert_eq!(image_src_with_base("  ", "/flora"), PLACEHOLDER_IMAGE);
    }
}
