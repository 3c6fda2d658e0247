use scraper::{ElementRef, Html};

/// Attribute condition an element must satisfy to match a query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrFilter {
    /// No attribute condition
    Any,
    /// The attribute must be present, with any value (including empty)
    Present(&'static str),
    /// The attribute must be present with exactly this value
    Equals(&'static str, &'static str),
}

/// Tag name plus attribute predicate, the equivalent of `tag`, `tag[attr]`
/// or `tag[attr="value"]` in CSS
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementQuery {
    pub tag: &'static str,
    pub attribute: AttrFilter,
}

impl ElementQuery {
    pub const fn tag(tag: &'static str) -> Self {
        Self {
            tag,
            attribute: AttrFilter::Any,
        }
    }

    pub const fn with_attr(tag: &'static str, name: &'static str) -> Self {
        Self {
            tag,
            attribute: AttrFilter::Present(name),
        }
    }

    pub const fn with_attr_value(
        tag: &'static str,
        name: &'static str,
        value: &'static str,
    ) -> Self {
        Self {
            tag,
            attribute: AttrFilter::Equals(name, value),
        }
    }

    /// Tests an element against the query
    pub fn matches<E: Element>(&self, element: &E) -> bool {
        if !element.tag_name().eq_ignore_ascii_case(self.tag) {
            return false;
        }

        match self.attribute {
            AttrFilter::Any => true,
            AttrFilter::Present(name) => element.attr(name).is_some(),
            AttrFilter::Equals(name, value) => element.attr(name) == Some(value),
        }
    }
}

/// Read access to a single element
pub trait Element {
    /// Lower-case local name, e.g. `a` or `img`
    fn tag_name(&self) -> &str;

    /// Concatenated text of all descendant text nodes, trimmed
    fn trimmed_text(&self) -> String;

    /// Raw attribute value, if the attribute is present
    fn attr(&self, name: &str) -> Option<&str>;
}

/// A traversable tree that can be searched for elements
pub trait Document {
    type Element<'a>: Element
    where
        Self: 'a;

    /// All descendants matching `query`, in document order
    fn select_all<'a>(
        &'a self,
        query: ElementQuery,
    ) -> Box<dyn Iterator<Item = Self::Element<'a>> + 'a>;

    /// First descendant matching `query`
    fn select_first<'a>(&'a self, query: ElementQuery) -> Option<Self::Element<'a>> {
        self.select_all(query).next()
    }
}

impl Element for ElementRef<'_> {
    fn tag_name(&self) -> &str {
        self.value().name()
    }

    fn trimmed_text(&self) -> String {
        self.text().collect::<String>().trim().to_string()
    }

    fn attr(&self, name: &str) -> Option<&str> {
        self.value().attr(name)
    }
}

impl Document for Html {
    type Element<'a> = ElementRef<'a>;

    fn select_all<'a>(
        &'a self,
        query: ElementQuery,
    ) -> Box<dyn Iterator<Item = ElementRef<'a>> + 'a> {
        Box::new(
            self.tree
                .root()
                .descendants()
                .filter_map(ElementRef::wrap)
                .filter(move |element| query.matches(element)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragment() -> Html {
        Html::parse_document(
            r#"<html><head>
                <meta name="author" content="Jo">
                <meta name="description" content="">
            </head><body>
                <a href="/one">  One  </a>
                <a>No href</a>
                <A HREF="/two">Two</A>
                <img src="a.png"><img alt="missing src">
            </body></html>"#,
        )
    }

    #[test]
    fn test_select_by_tag_and_attribute_presence() {
        let doc = fragment();

        let anchors: Vec<_> = doc.select_all(ElementQuery::tag("a")).collect();
        assert_eq!(anchors.len(), 3);

        let with_href: Vec<_> = doc
            .select_all(ElementQuery::with_attr("a", "href"))
            .map(|a| a.trimmed_text())
            .collect();
        assert_eq!(with_href, vec!["One", "Two"]);

        let images = doc.select_all(ElementQuery::with_attr("img", "src")).count();
        assert_eq!(images, 1);
    }

    #[test]
    fn test_select_by_attribute_value() {
        let doc = fragment();

        let author = doc
            .select_first(ElementQuery::with_attr_value("meta", "name", "author"))
            .and_then(|m| m.attr("content").map(str::to_string));
        assert_eq!(author.as_deref(), Some("Jo"));

        let description = doc
            .select_first(ElementQuery::with_attr_value("meta", "name", "description"))
            .and_then(|m| m.attr("content").map(str::to_string));
        assert_eq!(description.as_deref(), Some(""));

        assert!(
            doc.select_first(ElementQuery::with_attr_value("meta", "name", "keywords"))
                .is_none()
        );
    }

    #[test]
    fn test_trimmed_text_includes_nested_elements() {
        let doc = Html::parse_document("<h1>\n  Hello <em>nested</em> world \t</h1>");
        let heading = doc.select_first(ElementQuery::tag("h1")).unwrap();
        assert_eq!(heading.trimmed_text(), "Hello nested world");
    }
}
