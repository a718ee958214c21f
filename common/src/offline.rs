//! What the service worker keeps available offline.

use crate::routes;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OfflineManifest {
    /// Name of the cache bucket. Bumping it invalidates every previous
    /// version at activation time.
    pub cache_name: &'static str,
    /// Assets written to the cache at install time. Do not list `/` or
    /// `/gestion-caisses/` here: navigations must stay network-first.
    pub preload: &'static [&'static str],
    /// The page served when a navigation cannot reach the network.
    pub navigation_fallback: &'static str,
}

pub const MANIFEST: OfflineManifest = OfflineManifest {
    cache_name: "caisse-pwa-v2",
    preload: &["/static/jazzmin/overrides.css"],
    navigation_fallback: routes::LOGIN,
};

#[cfg(test)]
mod tests {
    use super::*;
    use speculoos::prelude::*;

    #[test]
    fn manifest_should_not_preload_navigable_pages() {
        for url in MANIFEST.preload {
            assert_that(&url.starts_with("/static/")).is_true();
        }
    }

    #[test]
    fn manifest_should_fall_back_to_the_login_page() {
        assert_that(&MANIFEST.navigation_fallback).is_equal_to(routes::LOGIN);
    }
}
