//! Deep links from a fixed origin to a record identifier

/// Builds in-grid hyperlinks as `<origin>/<id>`.
///
/// This is a plain string join; neither part is validated or normalized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeepLinker {
    origin: String,
}

impl DeepLinker {
    #[must_use]
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
        }
    }

    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    #[must_use]
    pub fn link(&self, id: &str) -> String {
        format!("{}/{id}", self.origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_is_plain_join() {
        let linker = DeepLinker::new("https://example.my.site.com");
        assert_eq!(linker.link("001A"), "https://example.my.site.com/001A");

        // no normalization of a trailing slash
        let linker = DeepLinker::new("https://example.com/");
        assert_eq!(linker.link("1"), "https://example.com//1");
    }

    #[test]
    fn test_default_origin_is_relative() {
        assert_eq!(DeepLinker::default().link("7"), "/7");
    }
}
