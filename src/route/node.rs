use std::{
    borrow::Cow,
    fmt::{self, Display, Formatter},
};

use percent_encoding::percent_decode_str;

use super::Params;
use crate::error::RouteError;

const SEP: char = '/';
const PARAM_MARKER: char = ':';
const ROOT: &str = "/";

/// One `/`-delimited token of a registered path.
#[derive(Debug, Clone, Eq, PartialEq)]
pub(crate) enum Segment {
    /// Matched by exact string equality.
    Literal(String),
    /// Matches any single segment and binds it to the name.
    Param(String),
}

impl Segment {
    fn parse(s: &str) -> Self {
        match s.strip_prefix(PARAM_MARKER) {
            Some(name) => Segment::Param(name.to_string()),
            None => Segment::Literal(s.to_string()),
        }
    }
}

impl Display for Segment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Literal(s) => write!(f, "{}", s),
            Segment::Param(name) => write!(f, "{}{}", PARAM_MARKER, name),
        }
    }
}

/// A segment trie holding the routes of one HTTP method.
///
/// The root node has no segment of its own, every other node is reached from
/// its parent by a unique segment. Children are kept in insertion order.
#[derive(Debug, Eq, PartialEq)]
pub(crate) struct Node<T> {
    segment: Option<Segment>,
    data: Option<T>,
    children: Vec<Node<T>>,
}

impl<T> Default for Node<T> {
    fn default() -> Self {
        Self {
            segment: None,
            data: None,
            children: Vec::new(),
        }
    }
}

impl<T> Node<T> {
    fn with_segment(segment: Segment) -> Self {
        Self {
            segment: Some(segment),
            ..Default::default()
        }
    }

    /// Registers `data` at `path`, replacing whatever was registered there
    /// before.
    pub(crate) fn add_route(&mut self, path: &str, data: T) -> Result<(), RouteError> {
        if !path.starts_with(SEP) {
            return Err(RouteError::InvalidPath(path.to_string()));
        }

        let node = if path == ROOT {
            self.insert_child(Segment::Literal(ROOT.to_string()))
        } else {
            path[1..]
                .split(SEP)
                .map(Segment::parse)
                .fold(self, |node, segment| node.insert_child(segment))
        };

        if node.data.replace(data).is_some() {
            tracing::debug!(path = %path, "route handler replaced");
        }
        Ok(())
    }

    fn insert_child(&mut self, segment: Segment) -> &mut Node<T> {
        let idx = match self
            .children
            .iter()
            .position(|child| child.segment.as_ref() == Some(&segment))
        {
            Some(idx) => idx,
            None => {
                if let Segment::Param(name) = &segment {
                    if let Some(shadow) = self.param_child() {
                        tracing::warn!(
                            segment = %shadow.segment_str(),
                            shadowed = %name,
                            "parameter segment is unreachable, a sibling parameter always matches first"
                        );
                    }
                }
                self.children.push(Node::with_segment(segment));
                self.children.len() - 1
            }
        };
        &mut self.children[idx]
    }

    fn param_child(&self) -> Option<&Node<T>> {
        self.children
            .iter()
            .find(|child| matches!(child.segment, Some(Segment::Param(_))))
    }

    fn segment_str(&self) -> String {
        self.segment
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default()
    }

    fn literal_child(&self, segment: &str) -> Option<&Node<T>> {
        self.children.iter().find(|child| match &child.segment {
            Some(Segment::Literal(s)) => s == segment,
            _ => false,
        })
    }

    /// Finds the child matching `segment`, an exact literal match takes
    /// precedence over the first parameter child.
    ///
    /// The root route is the only literal spelled `/`, a decoded `%2F`
    /// segment never reaches it.
    fn find_child<'a>(&'a self, segment: &str, params: &mut Params) -> Option<&'a Node<T>> {
        if segment != ROOT {
            if let Some(child) = self.literal_child(segment) {
                return Some(child);
            }
        }

        let child = self.param_child()?;
        if let Some(Segment::Param(name)) = &child.segment {
            params.push(name.clone(), segment.to_string());
        }
        Some(child)
    }

    /// Resolves a concrete request path.
    ///
    /// Returns `None` if any segment fails to match or the node reached by the
    /// last segment carries no data. A failed segment never backtracks to try
    /// another sibling.
    pub(crate) fn find_route(&self, path: &str) -> Option<(&T, Params)> {
        let mut params = Params::default();

        let node = if path == ROOT {
            self.literal_child(ROOT)?
        } else {
            let mut node = self;
            for segment in path.strip_prefix(SEP)?.split(SEP) {
                node = node.find_child(&decode_segment(segment), &mut params)?;
            }
            node
        };

        node.data.as_ref().map(|data| (data, params))
    }
}

/// Percent-decodes one request segment. Segments are split before decoding,
/// so an encoded `%2F` stays inside its segment. A segment that does not
/// decode to valid utf8 is matched as is.
fn decode_segment(segment: &str) -> Cow<'_, str> {
    percent_decode_str(segment)
        .decode_utf8()
        .unwrap_or(Cow::Borrowed(segment))
}
