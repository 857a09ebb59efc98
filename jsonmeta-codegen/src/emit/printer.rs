//! Text rendering of the statement tree.
//!
//! Every primitive takes the current indentation depth as an argument and
//! returns the depth for whatever follows, so nesting is carried explicitly
//! through the call stack.

use super::ast::{Declare, If, Method, Stmt, Unit};

/// Spaces per indentation level.
pub const INDENT: &str = "    ";

/// Renders a complete unit to text.
#[must_use]
pub fn render(unit: &Unit) -> String {
    let mut printer = Printer::new();
    printer.unit(unit);
    printer.finish()
}

/// Output buffer plus the rendering primitives.
#[derive(Debug, Default)]
pub struct Printer {
    out: String,
}

impl Printer {
    /// Creates an empty printer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the rendered text.
    #[must_use]
    pub fn finish(self) -> String {
        self.out
    }

    /// Writes `depth` levels of indentation.
    pub fn indent(&mut self, depth: usize) {
        for _ in 0..depth {
            self.out.push_str(INDENT);
        }
    }

    /// Writes one indented line.
    pub fn line(&mut self, depth: usize, text: &str) {
        self.indent(depth);
        self.out.push_str(text);
        self.out.push('\n');
    }

    /// Writes an empty line (no indentation).
    pub fn blank(&mut self) {
        self.out.push('\n');
    }

    /// Writes `header {` and returns the body depth.
    pub fn begin_block(&mut self, depth: usize, header: &str) -> usize {
        self.indent(depth);
        self.out.push_str(header);
        self.out.push_str(" {\n");
        depth + 1
    }

    /// Closes the current block with `} header {` and returns the new body depth.
    pub fn continue_block(&mut self, body_depth: usize, header: &str) -> usize {
        let depth = body_depth.saturating_sub(1);
        self.indent(depth);
        self.out.push_str("} ");
        self.out.push_str(header);
        self.out.push_str(" {\n");
        depth + 1
    }

    /// Writes `}` and returns the depth outside the block.
    pub fn end_block(&mut self, body_depth: usize) -> usize {
        let depth = body_depth.saturating_sub(1);
        self.line(depth, "}");
        depth
    }

    /// Writes usings, then opens the namespace and class. Returns the member depth.
    pub fn begin_unit(&mut self, depth: usize, unit: &Unit) -> usize {
        for name in &unit.usings {
            self.out.push_str(&format!("using {name};\n"));
        }
        if !unit.usings.is_empty() {
            self.blank();
        }

        let depth = self.begin_block(depth, &format!("namespace {}", unit.namespace));
        self.begin_block(
            depth,
            &format!("{} class {}", unit.class_modifiers, unit.class_name),
        )
    }

    /// Closes the class and namespace. The final brace has no trailing newline.
    pub fn end_unit(&mut self, member_depth: usize) -> usize {
        let depth = self.end_block(member_depth);
        let depth = depth.saturating_sub(1);
        self.indent(depth);
        self.out.push('}');
        depth
    }

    /// Renders a whole unit starting at depth zero.
    pub fn unit(&mut self, unit: &Unit) {
        let depth = self.begin_unit(0, unit);
        for method in &unit.methods {
            self.method(depth, method);
            self.blank();
        }
        self.end_unit(depth);
    }

    /// Renders one method.
    pub fn method(&mut self, depth: usize, method: &Method) {
        let header = format!(
            "{} {} {}({})",
            method.modifiers,
            method.return_type,
            method.name,
            method.params.join(", ")
        );
        let body_depth = self.begin_block(depth, &header);
        self.stmts(body_depth, &method.body);
        self.end_block(body_depth);
    }

    /// Renders a sequence of statements at one depth.
    pub fn stmts(&mut self, depth: usize, stmts: &[Stmt]) {
        for stmt in stmts {
            self.stmt(depth, stmt);
        }
    }

    /// Renders one statement.
    pub fn stmt(&mut self, depth: usize, stmt: &Stmt) {
        match stmt {
            Stmt::Declare(declare) => self.declare(depth, declare),
            Stmt::Assign { left, right } => self.line(depth, &format!("{left} = {right};")),
            Stmt::Expr(expr) => self.line(depth, &format!("{expr};")),
            Stmt::If(cond) => self.conditional(depth, cond),
            Stmt::For {
                init,
                cond,
                step,
                body,
            } => {
                let body_depth =
                    self.begin_block(depth, &format!("for ({init}; {cond}; {step})"));
                self.stmts(body_depth, body);
                self.end_block(body_depth);
            }
            Stmt::Foreach { var, iter, body } => {
                let body_depth = self.begin_block(depth, &format!("foreach (var {var} in {iter})"));
                self.stmts(body_depth, body);
                self.end_block(body_depth);
            }
            Stmt::Return(None) => self.line(depth, "return;"),
            Stmt::Return(Some(expr)) if expr.is_empty() => self.line(depth, "return;"),
            Stmt::Return(Some(expr)) => self.line(depth, &format!("return {expr};")),
            Stmt::Blank => self.blank(),
        }
    }

    fn declare(&mut self, depth: usize, declare: &Declare) {
        let mut text = format!("{} {}", declare.ty, declare.name);
        if let Some(args) = &declare.construct {
            text.push_str(&format!(" = new {}({args})", declare.ty));
        }
        if let Some(value) = &declare.value {
            text.push_str(&format!(" = {value}"));
        }
        text.push(';');
        self.line(depth, &text);
    }

    fn conditional(&mut self, depth: usize, cond: &If) {
        let mut body_depth = depth + 1;
        for (index, (test, body)) in cond.branches.iter().enumerate() {
            body_depth = if index == 0 {
                self.begin_block(depth, &format!("if ({test})"))
            } else {
                self.continue_block(body_depth, &format!("else if ({test})"))
            };
            self.stmts(body_depth, body);
        }
        if let Some(body) = &cond.otherwise {
            body_depth = self.continue_block(body_depth, "else");
            self.stmts(body_depth, body);
        }
        self.end_block(body_depth);
    }
}
