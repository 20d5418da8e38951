// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Rich content of a subsection.
//!
//! The editor stores a subsection's content as a tree of typed nodes where
//! the root is a [`Node::Doc`] and the leaves are [`Node::Text`]. With the
//! `serde` feature the tree reads the editor's JSON representation e.g.
//! `{"type": "paragraph", "content": [{"type": "text", "text": "RWY 09L"}]}`.
//! Node types unknown to this crate are read as [`Node::Unsupported`] with
//! their children.
//!
//! The tree is traversed with a [`Visitor`]:
//!
//! ```
//! use aip::content::{Node, Visitor};
//!
//! struct CountText(usize);
//!
//! impl Visitor for CountText {
//!     fn visit_text(&mut self, _text: &str) {
//!         self.0 += 1;
//!     }
//! }
//!
//! let doc = Node::doc(vec![Node::paragraph("ARP 533750N 0095917E"), Node::paragraph("ELEV 53 ft")]);
//! let mut counter = CountText(0);
//! doc.walk(&mut counter);
//!
//! assert_eq!(counter.0, 2);
//! assert_eq!(doc.text(), "ARP 533750N 0095917E\nELEV 53 ft\n");
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A node of the content tree.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawNode", into = "RawNode"))]
pub enum Node {
    Doc { content: Vec<Node> },
    Paragraph { content: Vec<Node> },
    Heading { content: Vec<Node> },
    Text { text: String },
    Table { content: Vec<Node> },
    TableRow { content: Vec<Node> },
    TableHeader { content: Vec<Node> },
    TableCell { content: Vec<Node> },
    BulletList { content: Vec<Node> },
    OrderedList { content: Vec<Node> },
    ListItem { content: Vec<Node> },
    Blockquote { content: Vec<Node> },
    HardBreak,
    /// A node of an editor type like `codeBlock` that has no variant. Its
    /// children are kept so that their text isn't lost.
    Unsupported {
        kind: String,
        content: Vec<Node>,
    },
}

impl Default for Node {
    fn default() -> Self {
        Self::Doc {
            content: Vec::new(),
        }
    }
}

/// A visitor of the content tree.
///
/// All methods have an empty default implementation, so a visitor needs to
/// implement only what it's interested in.
pub trait Visitor {
    /// Called before the children of `node` are visited.
    fn enter(&mut self, _node: &Node) {}

    /// Called for the text of every [`Node::Text`].
    fn visit_text(&mut self, _text: &str) {}

    /// Called after the children of `node` were visited.
    fn leave(&mut self, _node: &Node) {}
}

impl Node {
    /// Creates the root node.
    pub fn doc(content: Vec<Node>) -> Self {
        Self::Doc { content }
    }

    /// Creates a paragraph holding a single text.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::Paragraph {
            content: vec![Self::Text { text: text.into() }],
        }
    }

    /// Creates a table from its rows. The first row is made of
    /// [`Node::TableHeader`] cells if `header` is `true`.
    pub fn table(rows: &[&[&str]], header: bool) -> Self {
        let content = rows
            .iter()
            .enumerate()
            .map(|(i, row)| Self::TableRow {
                content: row
                    .iter()
                    .map(|cell| {
                        let content = vec![Self::paragraph(*cell)];
                        if header && i == 0 {
                            Self::TableHeader { content }
                        } else {
                            Self::TableCell { content }
                        }
                    })
                    .collect(),
            })
            .collect();

        Self::Table { content }
    }

    /// Returns the child nodes.
    pub fn children(&self) -> &[Node] {
        match self {
            Self::Doc { content }
            | Self::Paragraph { content }
            | Self::Heading { content }
            | Self::Table { content }
            | Self::TableRow { content }
            | Self::TableHeader { content }
            | Self::TableCell { content }
            | Self::BulletList { content }
            | Self::OrderedList { content }
            | Self::ListItem { content }
            | Self::Blockquote { content }
            | Self::Unsupported { content, .. } => content,
            Self::Text { .. } | Self::HardBreak => &[],
        }
    }

    /// Returns the editor's name of the node type.
    pub fn kind(&self) -> &str {
        match self {
            Self::Doc { .. } => "doc",
            Self::Paragraph { .. } => "paragraph",
            Self::Heading { .. } => "heading",
            Self::Text { .. } => "text",
            Self::Table { .. } => "table",
            Self::TableRow { .. } => "tableRow",
            Self::TableHeader { .. } => "tableHeader",
            Self::TableCell { .. } => "tableCell",
            Self::BulletList { .. } => "bulletList",
            Self::OrderedList { .. } => "orderedList",
            Self::ListItem { .. } => "listItem",
            Self::Blockquote { .. } => "blockquote",
            Self::HardBreak => "hardBreak",
            Self::Unsupported { kind, .. } => kind,
        }
    }

    /// Returns `true` if the node ends a line of text.
    pub fn is_block(&self) -> bool {
        matches!(
            self,
            Self::Paragraph { .. }
                | Self::Heading { .. }
                | Self::TableHeader { .. }
                | Self::TableCell { .. }
                | Self::ListItem { .. }
                | Self::Blockquote { .. }
                | Self::HardBreak
                | Self::Unsupported { .. }
        )
    }

    /// Walks depth-first through the tree.
    pub fn walk<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        visitor.enter(self);

        if let Self::Text { text } = self {
            visitor.visit_text(text);
        }

        for child in self.children() {
            child.walk(visitor);
        }

        visitor.leave(self);
    }

    /// Returns the plain text of this tree.
    ///
    /// Blocks like paragraphs or table cells are terminated by a line break,
    /// so that values of neighboring blocks are not glued together.
    pub fn text(&self) -> String {
        let mut collector = TextCollector::default();
        self.walk(&mut collector);
        collector.text
    }

    /// Returns `true` if the tree contains a table.
    pub fn contains_table(&self) -> bool {
        self.any(|node| matches!(node, Self::Table { .. }))
    }

    /// Returns `true` if the tree contains a table header cell.
    pub fn has_table_headers(&self) -> bool {
        self.any(|node| matches!(node, Self::TableHeader { .. }))
    }

    fn any<F>(&self, predicate: F) -> bool
    where
        F: Fn(&Node) -> bool,
    {
        struct Any<F> {
            predicate: F,
            found: bool,
        }

        impl<F: Fn(&Node) -> bool> Visitor for Any<F> {
            fn enter(&mut self, node: &Node) {
                self.found |= (self.predicate)(node);
            }
        }

        let mut any = Any {
            predicate,
            found: false,
        };
        self.walk(&mut any);
        any.found
    }
}

/// A node as the editor stores it.
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct RawNode {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    content: Vec<Node>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[cfg(feature = "serde")]
impl From<RawNode> for Node {
    fn from(raw: RawNode) -> Self {
        let RawNode {
            kind,
            content,
            text,
        } = raw;

        match kind.as_str() {
            "doc" => Self::Doc { content },
            "paragraph" => Self::Paragraph { content },
            "heading" => Self::Heading { content },
            "text" => Self::Text {
                text: text.unwrap_or_default(),
            },
            "table" => Self::Table { content },
            "tableRow" => Self::TableRow { content },
            "tableHeader" => Self::TableHeader { content },
            "tableCell" => Self::TableCell { content },
            "bulletList" => Self::BulletList { content },
            "orderedList" => Self::OrderedList { content },
            "listItem" => Self::ListItem { content },
            "blockquote" => Self::Blockquote { content },
            "hardBreak" => Self::HardBreak,
            _ => Self::Unsupported { kind, content },
        }
    }
}

#[cfg(feature = "serde")]
impl From<Node> for RawNode {
    fn from(node: Node) -> Self {
        let kind = node.kind().to_string();
        let text = match &node {
            Node::Text { text } => Some(text.clone()),
            _ => None,
        };

        Self {
            kind,
            content: node.children().to_vec(),
            text,
        }
    }
}

#[derive(Default)]
struct TextCollector {
    text: String,
}

impl Visitor for TextCollector {
    fn visit_text(&mut self, text: &str) {
        self.text.push_str(text);
    }

    fn leave(&mut self, node: &Node) {
        if node.is_block() && !self.text.is_empty() && !self.text.ends_with(char::is_whitespace)
        {
            self.text.push('\n');
        }
    }
}
