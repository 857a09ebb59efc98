//! Statement tree for generated code.
//!
//! Nodes are plain values with no knowledge of types or schemas. Text is
//! passed through verbatim, so malformed input produces malformed (but
//! never panicking) output.

/// A namespace holding one class full of methods.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Unit {
    /// Imported namespaces, one `using` line each.
    pub usings: Vec<String>,
    /// Enclosing namespace name.
    pub namespace: String,
    /// Class modifiers, e.g. `public static`.
    pub class_modifiers: String,
    /// Class name.
    pub class_name: String,
    /// Methods in emission order.
    pub methods: Vec<Method>,
}

impl Unit {
    /// Creates an empty unit.
    #[must_use]
    pub fn new(
        namespace: impl Into<String>,
        class_modifiers: impl Into<String>,
        class_name: impl Into<String>,
    ) -> Self {
        Self {
            usings: Vec::new(),
            namespace: namespace.into(),
            class_modifiers: class_modifiers.into(),
            class_name: class_name.into(),
            methods: Vec::new(),
        }
    }

    /// Adds an imported namespace.
    #[must_use]
    pub fn using(mut self, name: impl Into<String>) -> Self {
        self.usings.push(name.into());
        self
    }

    /// Appends a method.
    pub fn push_method(&mut self, method: Method) {
        self.methods.push(method);
    }
}

/// A method declaration with its body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Method {
    /// Modifiers, e.g. `public static`.
    pub modifiers: String,
    /// Return type.
    pub return_type: String,
    /// Method name.
    pub name: String,
    /// Parameters, each already spelled (`ref Person val`).
    pub params: Vec<String>,
    /// Body statements.
    pub body: Vec<Stmt>,
}

impl Method {
    /// Creates a method with no parameters and an empty body.
    #[must_use]
    pub fn new(
        modifiers: impl Into<String>,
        return_type: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            modifiers: modifiers.into(),
            return_type: return_type.into(),
            name: name.into(),
            params: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Adds a parameter.
    #[must_use]
    pub fn param(mut self, param: impl Into<String>) -> Self {
        self.params.push(param.into());
        self
    }

    /// Sets the body.
    #[must_use]
    pub fn body(mut self, body: Vec<Stmt>) -> Self {
        self.body = body;
        self
    }
}

/// Local variable declaration.
///
/// Renders as `T name[ = new T(args)][ = value];`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declare {
    /// Declared type.
    pub ty: String,
    /// Variable name.
    pub name: String,
    /// Constructor arguments when default-constructed with `new`.
    pub construct: Option<String>,
    /// Assigned expression.
    pub value: Option<String>,
}

impl Declare {
    /// Creates a bare declaration.
    #[must_use]
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
            construct: None,
            value: None,
        }
    }

    /// Constructs the variable with `new T(args)`.
    #[must_use]
    pub fn construct(mut self, args: impl Into<String>) -> Self {
        self.construct = Some(args.into());
        self
    }

    /// Assigns an initial expression.
    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

impl From<Declare> for Stmt {
    fn from(declare: Declare) -> Self {
        Self::Declare(declare)
    }
}

/// Conditional with optional `else if` arms and an optional `else`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct If {
    /// `(condition, body)` arms, the first is the `if`.
    pub branches: Vec<(String, Vec<Stmt>)>,
    /// Trailing `else` body.
    pub otherwise: Option<Vec<Stmt>>,
}

impl If {
    /// Creates an `if` with a single arm.
    #[must_use]
    pub fn new(cond: impl Into<String>, body: Vec<Stmt>) -> Self {
        Self {
            branches: vec![(cond.into(), body)],
            otherwise: None,
        }
    }

    /// Chains an `else if` arm.
    #[must_use]
    pub fn else_if(mut self, cond: impl Into<String>, body: Vec<Stmt>) -> Self {
        self.branches.push((cond.into(), body));
        self
    }

    /// Sets the `else` body.
    #[must_use]
    pub fn otherwise(mut self, body: Vec<Stmt>) -> Self {
        self.otherwise = Some(body);
        self
    }
}

impl From<If> for Stmt {
    fn from(cond: If) -> Self {
        Self::If(cond)
    }
}

/// A statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    /// Variable declaration.
    Declare(Declare),
    /// `left = right;`
    Assign {
        /// Assignment target.
        left: String,
        /// Assigned expression.
        right: String,
    },
    /// Expression statement, e.g. a call.
    Expr(String),
    /// Conditional.
    If(If),
    /// `for (init; cond; step) { .. }`
    For {
        /// Initializer clause.
        init: String,
        /// Loop condition.
        cond: String,
        /// Increment clause.
        step: String,
        /// Loop body.
        body: Vec<Stmt>,
    },
    /// `foreach (var var in iter) { .. }`
    Foreach {
        /// Loop variable.
        var: String,
        /// Iterated expression.
        iter: String,
        /// Loop body.
        body: Vec<Stmt>,
    },
    /// `return;` or `return expr;`
    Return(Option<String>),
    /// Empty line.
    Blank,
}

impl Stmt {
    /// `left = right;`
    #[must_use]
    pub fn assign(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self::Assign {
            left: left.into(),
            right: right.into(),
        }
    }

    /// Expression statement.
    #[must_use]
    pub fn expr(expr: impl Into<String>) -> Self {
        Self::Expr(expr.into())
    }

    /// `return expr;`
    #[must_use]
    pub fn ret(expr: impl Into<String>) -> Self {
        Self::Return(Some(expr.into()))
    }

    /// `if (cond) { body }`
    #[must_use]
    pub fn when(cond: impl Into<String>, body: Vec<Stmt>) -> Self {
        Self::If(If::new(cond, body))
    }

    /// Counted loop.
    #[must_use]
    pub fn for_loop(
        init: impl Into<String>,
        cond: impl Into<String>,
        step: impl Into<String>,
        body: Vec<Stmt>,
    ) -> Self {
        Self::For {
            init: init.into(),
            cond: cond.into(),
            step: step.into(),
            body,
        }
    }

    /// Iteration loop.
    #[must_use]
    pub fn foreach(var: impl Into<String>, iter: impl Into<String>, body: Vec<Stmt>) -> Self {
        Self::Foreach {
            var: var.into(),
            iter: iter.into(),
            body,
        }
    }
}
