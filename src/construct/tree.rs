use crate::construct::visit::{walk, Visitor};

/// A node in the syntax tree built by the parser.
/// Every `Call` owns its arguments outright,
/// so the tree never shares nodes and can't contain cycles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    NumberLiteral(String),
    /// Only reachable from a `string` token,
    /// which the lexer currently never produces.
    StringLiteral(String),
    Call {
        name: String,
        arguments: Vec<Node>,
    },
}

impl Node {
    /// Shortcut for creating a `Node::Call` variant.
    pub fn call(name: &str, arguments: Vec<Node>) -> Node {
        Node::Call {
            name: name.to_string(),
            arguments,
        }
    }

    pub fn number(value: &str) -> Node {
        Node::NumberLiteral(value.to_string())
    }

    pub fn string(value: &str) -> Node {
        Node::StringLiteral(value.to_string())
    }

    /// The tag shown in the first column of an AST dump.
    pub fn type_name(&self) -> &'static str {
        match self {
            Node::NumberLiteral(_) => "NumberLiteral",
            Node::StringLiteral(_) => "StringLiteral",
            Node::Call { .. } => "CallExpression",
        }
    }

    /// The called function's name, empty for literals.
    pub fn name(&self) -> &str {
        match self {
            Node::Call { name, .. } => name,
            _ => "",
        }
    }

    /// The literal's value, empty for calls.
    pub fn value(&self) -> &str {
        match self {
            Node::NumberLiteral(value) | Node::StringLiteral(value) => value,
            Node::Call { .. } => "",
        }
    }

    pub fn arguments(&self) -> &[Node] {
        match self {
            Node::Call { arguments, .. } => arguments,
            _ => &[],
        }
    }

    /// Pre-order dump of this subtree,
    /// one `<type> <name> <value>` line per node.
    pub fn dump(&self) -> String {
        let mut dump = Dump::default();
        walk(self, &mut dump);
        dump.output
    }

    /// How many calls deep the tree nests.
    /// Literals have a depth of `0`.
    pub fn depth(&self) -> usize {
        let mut depth = Depth::default();
        walk(self, &mut depth);
        depth.deepest
    }
}

/// The result of parsing: every top-level expression,
/// in the order it appeared in the source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    pub body: Vec<Node>,
}

impl Program {
    pub fn new(body: Vec<Node>) -> Program {
        Program { body }
    }

    pub fn first(&self) -> Option<&Node> {
        self.body.first()
    }

    pub fn dump(&self) -> String {
        self.body.iter().map(Node::dump).collect()
    }
}

#[derive(Default)]
struct Dump {
    output: String,
}

impl Visitor for Dump {
    fn enter(&mut self, node: &Node, _depth: usize) {
        self.output.push_str(&format!(
            "{} {} {}\n",
            node.type_name(),
            node.name(),
            node.value(),
        ));
    }
}

#[derive(Default)]
struct Depth {
    deepest: usize,
}

impl Visitor for Depth {
    fn enter(&mut self, node: &Node, depth: usize) {
        if let Node::Call { .. } = node {
            self.deepest = self.deepest.max(depth + 1);
        }
    }
}
