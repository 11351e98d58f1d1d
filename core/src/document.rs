//! # Document Model
//!
//! A contract is an ordered list of block-level nodes. Order is significant:
//! renderers emit the nodes exactly as they appear in the [`Document`].

/// A block-level unit of structured text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentNode {
    /// Section or sub-section title. `level` starts at 1.
    Heading { level: u8, text: String },
    Quote(String),
    /// One or more paragraphs rendered back to back.
    Paragraph(Vec<String>),
    /// Unordered list.
    List(Vec<String>),
}

impl DocumentNode {
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        DocumentNode::Heading {
            level,
            text: text.into(),
        }
    }

    pub fn quote(text: impl Into<String>) -> Self {
        DocumentNode::Quote(text.into())
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        DocumentNode::Paragraph(vec![text.into()])
    }

    pub fn paragraphs<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        DocumentNode::Paragraph(texts.into_iter().map(Into::into).collect())
    }

    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        DocumentNode::List(items.into_iter().map(Into::into).collect())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    nodes: Vec<DocumentNode>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: DocumentNode) {
        self.nodes.push(node);
    }

    pub fn nodes(&self) -> &[DocumentNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DocumentNode> {
        self.nodes.iter()
    }

    /// Headings in document order as `(level, text)`.
    pub fn headings(&self) -> impl Iterator<Item = (u8, &str)> {
        self.nodes.iter().filter_map(|node| match node {
            DocumentNode::Heading { level, text } => Some((*level, text.as_str())),
            _ => None,
        })
    }
}

impl Extend<DocumentNode> for Document {
    fn extend<T: IntoIterator<Item = DocumentNode>>(&mut self, iter: T) {
        self.nodes.extend(iter);
    }
}

impl FromIterator<DocumentNode> for Document {
    fn from_iter<T: IntoIterator<Item = DocumentNode>>(iter: T) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a DocumentNode;
    type IntoIter = std::slice::Iter<'a, DocumentNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

impl IntoIterator for Document {
    type Item = DocumentNode;
    type IntoIter = std::vec::IntoIter<DocumentNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings_skip_other_nodes() {
        let document: Document = [
            DocumentNode::heading(1, "Title"),
            DocumentNode::quote("Subtitle"),
            DocumentNode::heading(2, "Intro"),
            DocumentNode::paragraph("Body"),
            DocumentNode::list(["a", "b"]),
        ]
        .into_iter()
        .collect();

        let headings: Vec<(u8, &str)> = document.headings().collect();
        assert_eq!(headings, vec![(1, "Title"), (2, "Intro")]);
        assert_eq!(document.len(), 5);
    }

    #[test]
    fn single_paragraph_is_one_element() {
        assert_eq!(
            DocumentNode::paragraph("x"),
            DocumentNode::Paragraph(vec![String::from("x")])
        );
    }
}
