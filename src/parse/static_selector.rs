use std::sync::OnceLock;

use scraper::Selector;

/// A CSS selector compiled lazily from a `'static` source string, so each
/// selector is parsed at most once per process. The sources are literals, so
/// a parse failure is a programmer error and panics.
#[derive(Debug)]
pub(crate) struct StaticSelector {
    cell: OnceLock<Selector>,
    source: &'static str,
}

impl StaticSelector {
    pub(crate) const fn new(source: &'static str) -> Self {
        Self {
            cell: OnceLock::new(),
            source,
        }
    }
}

impl core::ops::Deref for StaticSelector {
    type Target = Selector;

    fn deref(&self) -> &Self::Target {
        self.cell.get_or_init(|| {
            Selector::parse(self.source)
                .unwrap_or_else(|e| panic!("invalid selector {:?}: {e:?}", self.source))
        })
    }
}

#[macro_export]
macro_rules! static_selector {
    ($name: ident <- $source: literal) => {
        static $name: $crate::parse::static_selector::StaticSelector =
            $crate::parse::static_selector::StaticSelector::new($source);
    };
}
