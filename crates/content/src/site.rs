//! Site-wide copy: name, per-page document metadata and hero blocks.

use crate::navigation::Page;

pub const SITE_NAME: &str = "ComputeDHT";

/// Document metadata applied when a page becomes active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMeta {
    pub title: &'static str,
    pub description: &'static str,
}

pub fn page_meta(page: Page) -> PageMeta {
    match page {
        Page::Platform => PageMeta {
            title: "ComputeDHT - Home",
            description: "Next generation distributed computing platform",
        },
        Page::Language => PageMeta {
            title: "Replica Language - ComputeDHT",
            description: "Modern programming language for distributed computing",
        },
    }
}

/// Copy for the banner at the top of each page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroCopy {
    pub heading: &'static str,
    pub tagline: &'static str,
}

pub fn hero_copy(page: Page) -> HeroCopy {
    match page {
        Page::Platform => HeroCopy {
            heading: "ComputeDHT",
            tagline: "A Next-Generation DHT-based Distributed Computing Platform \
                      with WebAssembly Runtime",
        },
        Page::Language => HeroCopy {
            heading: "Replica",
            tagline: "A modern programming language designed for distributed \
                      computing with built-in actor model support",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_page_has_meta_and_hero() {
        for page in Page::ALL {
            let meta = page_meta(page);
            assert!(!meta.title.is_empty());
            assert!(!meta.description.is_empty());
            assert!(meta.title.contains(SITE_NAME));

            let hero = hero_copy(page);
            assert!(!hero.heading.is_empty());
            assert!(!hero.tagline.is_empty());
        }
    }
}
