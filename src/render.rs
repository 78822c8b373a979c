use crate::syntax::Expression;

/// Flattens an expression tree into one line per node, pre-order.
///
/// Nodes are numbered 0.. in visitation order and every line starts with the
/// index of the node's parent. The root has no parent and carries `-1`.
pub(crate) struct TreePrinter {
    next: usize,
}

impl TreePrinter {
    pub fn new() -> Self {
        Self { next: 0 }
    }

    pub fn render(&mut self, expr: &Expression) -> Vec<String> {
        self.next = 0;
        let mut lines = vec![];
        self.visit(expr, -1, &mut lines);
        lines
    }

    fn visit(&mut self, expr: &Expression, parent: i64, lines: &mut Vec<String>) {
        let index = self.next as i64;
        self.next += 1;

        match expr {
            Expression::Number(v) => lines.push(format!("{parent} num {v}")),
            Expression::Var(id) => lines.push(format!("{parent} var {id}")),
            Expression::Unary(inner) => {
                lines.push(format!("{parent} oper m"));
                self.visit(inner, index, lines);
            }
            Expression::Binary { lhs, op, rhs } => {
                lines.push(format!("{parent} oper {}", op.symbol()));
                self.visit(lhs, index, lines);
                self.visit(rhs, index, lines);
            }
            Expression::Call { id, args } => {
                lines.push(format!("{parent} func {id}"));
                for arg in args {
                    self.visit(arg, index, lines);
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::TreePrinter;
    use crate::syntax::{parse, tokenize, Expression};

    fn render_str(src: &str) -> Vec<String> {
        let tokens = tokenize(src).unwrap();
        let expr = parse(&tokens).unwrap();
        TreePrinter::new().render(&expr)
    }

    #[test]
    fn flattened_output() {
        let lines = render_str("f(1+2, -x) * 3");
        let expected = &[
            "-1 oper *",
            "0 func f",
            "1 oper +",
            "2 num 1",
            "2 num 2",
            "1 oper m",
            "5 var x",
            "0 num 3",
        ];

        assert_eq!(lines, expected);
    }

    #[test]
    fn single_node_tree() {
        assert_eq!(render_str("42"), &["-1 num 42"]);
        assert_eq!(render_str("foo"), &["-1 var foo"]);
    }

    #[test]
    fn one_line_per_node_with_valid_parents() {
        let tokens = tokenize("g(a*b, c) + h(-d+2, e, f(i))").unwrap();
        let expr = parse(&tokens).unwrap();
        let lines = TreePrinter::new().render(&expr);

        assert_eq!(lines.len(), node_count(&expr));

        // The root has the no-parent marker; every other line points at an
        // earlier line.
        for (i, line) in lines.iter().enumerate() {
            let parent: i64 = line.split_whitespace().next().unwrap().parse().unwrap();
            if i == 0 {
                assert_eq!(parent, -1);
            } else {
                assert!(parent >= 0 && (parent as usize) < i, "line {i}: {line}");
            }
        }
    }

    fn node_count(expr: &Expression) -> usize {
        match expr {
            Expression::Number(_) | Expression::Var(_) => 1,
            Expression::Unary(inner) => 1 + node_count(inner),
            Expression::Binary { lhs, rhs, .. } => 1 + node_count(lhs) + node_count(rhs),
            Expression::Call { args, .. } => 1 + args.iter().map(node_count).sum::<usize>(),
        }
    }
}
