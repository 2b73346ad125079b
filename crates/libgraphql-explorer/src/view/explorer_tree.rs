use crate::explorer::ExplorerPath;
use crate::operation::OperationKind;
use crate::plugins::RenderedControl;

#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum ExplorerNodeKind {
    Argument,
    Field,
    Fragment,
    InputField,
}

/// One checkbox of the explorer tree.
///
/// Children are only expanded below selected nodes. A selected leaf argument
/// or input field carries the `control` that edits its value.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ExplorerNode {
    pub children: Vec<ExplorerNode>,
    pub control: Option<RenderedControl>,
    pub kind: ExplorerNodeKind,
    pub name: String,
    pub path: ExplorerPath,
    pub selected: bool,
    /// The declared type, e.g. `[User!]!`. Fragments carry their type
    /// condition.
    pub type_annotation: String,
}
impl ExplorerNode {
    /// Find a node anywhere below this one.
    pub fn descendant(&self, path: &ExplorerPath) -> Option<&ExplorerNode> {
        self.children.iter().find_map(|child| {
            if &child.path == path {
                Some(child)
            } else if path.is_descendant_of(&child.path) {
                child.descendant(path)
            } else {
                None
            }
        })
    }
}

/// The explorer tree of one operation kind.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ExplorerTree {
    pub kind: OperationKind,
    pub nodes: Vec<ExplorerNode>,
    pub root_type_name: String,
}
impl ExplorerTree {
    pub fn node(&self, path: &ExplorerPath) -> Option<&ExplorerNode> {
        self.nodes.iter().find_map(|node| {
            if &node.path == path {
                Some(node)
            } else if path.is_descendant_of(&node.path) {
                node.descendant(path)
            } else {
                None
            }
        })
    }

    /// Paths of every selected node, depth first.
    pub fn selected_paths(&self) -> Vec<&ExplorerPath> {
        fn collect<'t>(nodes: &'t [ExplorerNode], out: &mut Vec<&'t ExplorerPath>) {
            for node in nodes.iter().filter(|node| node.selected) {
                out.push(&node.path);
                collect(&node.children, out);
            }
        }

        let mut paths = vec![];
        collect(&self.nodes, &mut paths);
        paths
    }
}
