use libgraphql_explorer::plugins::InputKind;
use libgraphql_explorer::plugins::RenderedControl;
use libgraphql_explorer::view::ExplorerNode;
use libgraphql_explorer::view::ExplorerNodeKind;
use libgraphql_explorer::view::ExplorerTree;
use std::fmt::Write;

pub(crate) const GREEN_CHECK: &str = "\u{2705}";
pub(crate) const RED_X: &str = "\u{274C}";

/// One line per node, indented by depth:
///
/// ```text
/// [x] user: User
///     [x] (id: ID!) = "1" <text>
///     [ ] name: String
/// ```
pub(crate) fn format_tree(tree: &ExplorerTree, selected_only: bool) -> String {
    let mut out = format!("{} ({})\n", tree.kind, tree.root_type_name);
    for node in &tree.nodes {
        format_node(&mut out, node, 0, selected_only);
    }
    out.trim_end().to_string()
}

fn format_node(out: &mut String, node: &ExplorerNode, depth: usize, selected_only: bool) {
    if selected_only && !node.selected {
        return;
    }

    let checkbox = if node.selected { "[x]" } else { "[ ]" };
    let indent = "    ".repeat(depth);
    let label = match node.kind {
        ExplorerNodeKind::Argument => format!("({}: {})", node.name, node.type_annotation),
        ExplorerNodeKind::Field => format!("{}: {}", node.name, node.type_annotation),
        ExplorerNodeKind::Fragment => format!("... on {}", node.name),
        ExplorerNodeKind::InputField => format!("{{{}: {}}}", node.name, node.type_annotation),
    };
    // Writing to a String cannot fail.
    let _ = write!(out, "{indent}{checkbox} {label}");
    if let Some(control) = &node.control {
        let _ = write!(out, " = {}", format_control(control));
    }
    out.push('\n');

    for child in &node.children {
        format_node(out, child, depth + 1, selected_only);
    }
}

fn format_control(control: &RenderedControl) -> String {
    let kind = match &control.input_kind {
        InputKind::Checkbox => "checkbox".to_string(),
        InputKind::Date => "date".to_string(),
        InputKind::Number => "number".to_string(),
        InputKind::Select { options } => format!("one of {}", options.join("|")),
        InputKind::Text => "text".to_string(),
    };
    format!("{:?} <{kind}>", control.value)
}
