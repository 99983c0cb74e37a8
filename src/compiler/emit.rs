use crate::construct::tree::{Node, Program};

/// Emitter walks a syntax tree and writes it back out
/// as C-style call expressions:
/// ```plain
/// (add 2 (subtract 4 2))  =>  add(2,subtract(4,2))
/// ```
/// The tree has been fully validated by the parser,
/// so emitting can't fail.
#[derive(Debug, Default)]
pub struct Emitter {
    output: String,
}

impl Emitter {
    /// Emits a single expression.
    pub fn emit(node: &Node) -> String {
        let mut emitter = Emitter::default();
        emitter.walk(node);

        tracing::debug!(bytes = emitter.output.len(), "emitted expression");
        emitter.output
    }

    /// Emits every top-level expression of a program,
    /// back to back, in source order.
    pub fn emit_program(program: &Program) -> String {
        let mut emitter = Emitter::default();
        for node in program.body.iter() {
            emitter.walk(node);
        }

        tracing::debug!(
            expressions = program.body.len(),
            bytes = emitter.output.len(),
            "emitted program"
        );
        emitter.output
    }

    fn walk(&mut self, node: &Node) {
        match node {
            // literals are written verbatim, strings unquoted
            Node::NumberLiteral(value) | Node::StringLiteral(value) => {
                self.output.push_str(value)
            },
            Node::Call { name, arguments } => self.call(name, arguments),
        }
    }

    fn call(&mut self, name: &str, arguments: &[Node]) {
        self.output.push_str(name);
        self.output.push('(');

        for (index, argument) in arguments.iter().enumerate() {
            if index > 0 {
                self.output.push(',');
            }
            self.walk(argument);
        }

        self.output.push(')');
    }
}
