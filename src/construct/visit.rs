use crate::construct::tree::Node;

/// Hooks called while walking a tree depth-first.
/// `depth` counts the calls enclosing `node`,
/// so top-level nodes sit at depth `0`.
pub trait Visitor {
    fn enter(&mut self, _node: &Node, _depth: usize) {}
    fn exit(&mut self, _node: &Node, _depth: usize) {}
}

/// Walks `node` depth-first, calling `enter` before a node's
/// arguments are visited and `exit` after.
pub fn walk(node: &Node, visitor: &mut impl Visitor) {
    walk_at(node, visitor, 0);
}

fn walk_at(node: &Node, visitor: &mut impl Visitor, depth: usize) {
    visitor.enter(node, depth);
    for argument in node.arguments() {
        walk_at(argument, visitor, depth + 1);
    }
    visitor.exit(node, depth);
}

#[cfg(test)]
mod test {
    use super::*;

    #[derive(Default)]
    struct Trace(Vec<String>);

    impl Visitor for Trace {
        fn enter(&mut self, node: &Node, depth: usize) {
            self.0.push(format!("enter {} {}", node.type_name(), depth));
        }

        fn exit(&mut self, node: &Node, depth: usize) {
            self.0.push(format!("exit {} {}", node.type_name(), depth));
        }
    }

    #[test]
    fn enter_then_exit() {
        let tree = Node::call("add", vec![Node::number("2")]);
        let mut trace = Trace::default();
        walk(&tree, &mut trace);

        assert_eq!(trace.0, vec![
            "enter CallExpression 0",
            "enter NumberLiteral 1",
            "exit NumberLiteral 1",
            "exit CallExpression 0",
        ]);
    }
}
