use log::trace;

use super::code::{Code, CodeTable};

#[derive(Eq, PartialEq, Debug, Clone)]
pub enum NodeData {
    Kids(Box<Node>, Box<Node>),
    Leaf(u8),
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Node {
    pub weight: u64,
    /// Smallest byte value in this subtree. Breaks weight ties.
    pub sym: u8,
    pub node_data: NodeData,
}

impl Node {
    /// Create a new node
    pub fn new(weight: u64, sym: u8, node_data: NodeData) -> Node {
        Node {
            weight,
            sym,
            node_data,
        }
    }
}

/// Build the prefix-free code table for the given byte histogram (256
/// buckets). Frequency ties break by ascending byte value, so repeated
/// encodes of one input always produce the same table.
pub fn build_code_table(freqs: &[u64]) -> CodeTable {
    // Turn the histogram into a leaf per distinct byte value.
    let mut tree: Vec<Node> = freqs
        .iter()
        .enumerate()
        .filter(|(_, &weight)| weight > 0)
        .map(|(sym, &weight)| Node::new(weight, sym as u8, NodeData::Leaf(sym as u8)))
        .collect();

    let mut table = CodeTable::default();
    if tree.is_empty() {
        return table;
    }
    // An input with one distinct byte still needs a non-empty code.
    if tree.len() == 1 {
        table.insert(tree[0].sym, Code::new(0, 1));
        return table;
    }

    // ...then pare the forest down to a single root, merging the two
    // lightest nodes each round. Keep it sorted so we pop the right ones.
    while tree.len() > 1 {
        tree.sort_unstable_by(|a, b| (b.weight, b.sym).cmp(&(a.weight, a.sym)));

        // Pull off the bottom nodes and make a new parent
        let lighter = tree.pop().unwrap();
        let heavier = tree.pop().unwrap();
        tree.push(Node::new(
            lighter.weight + heavier.weight,
            lighter.sym.min(heavier.sym),
            NodeData::Kids(Box::new(lighter), Box::new(heavier)),
        ));
    }

    assign_codes(&tree[0], Code::root(), &mut table);
    trace!("built {} codes", table.len());
    table
}

/// Recursively walk the tree root to leaves, extending the code with 0
/// toward the lighter child and 1 toward the heavier.
fn assign_codes(node: &Node, code: Code, table: &mut CodeTable) {
    match &node.node_data {
        NodeData::Kids(lighter, heavier) => {
            assign_codes(lighter, code.child(0), table);
            assign_codes(heavier, code.child(1), table);
        }
        NodeData::Leaf(sym) => {
            table.insert(*sym, code);
        }
    };
}
