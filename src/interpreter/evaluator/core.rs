use std::{io, rc::Rc};

use crate::{
    ast::{Expr, Program, Statement, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        env::{EnvArena, ScopeId},
        evaluator::call::BUILTINS,
        lexer::Position,
        value::{MethodValue, Value},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Maximum method-call nesting depth.
///
/// Recursion past this budget fails with `RuntimeError::StackOverflow`
/// instead of exhausting the host thread's stack. The budget is sized so
/// the tree walk stays well inside a 2 MiB thread stack even in
/// unoptimized builds.
pub const MAX_CALL_DEPTH: usize = 256;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the scope arena, the handle of
/// the global scope, the host-supplied output sink that `print` appends
/// to, and the current call depth.
///
/// ## Usage
///
/// A `Context` is created once per evaluation with the host's output sink
/// and then driven through [`Context::run`], which binds all top-level
/// method definitions before evaluating the expression statements so that
/// forward references and self-recursion resolve regardless of definition
/// order.
pub struct Context<'host> {
    /// Arena owning every scope of this evaluation.
    pub arena:          EnvArena,
    /// Handle of the global scope.
    pub(crate) globals: ScopeId,
    /// Output sink that `print` writes to, owned by the host.
    pub(crate) out:     &'host mut dyn io::Write,
    /// Current method-call nesting depth.
    pub(crate) depth:   usize,
}

impl<'host> Context<'host> {
    /// Creates a new evaluation context writing `print` output to `out`.
    ///
    /// The builtin methods are bound into the global scope before any user
    /// definition is processed, so user methods may shadow them.
    pub fn new(out: &'host mut dyn io::Write) -> Self {
        let mut arena = EnvArena::new();
        let globals = arena.global();

        for builtin in BUILTINS {
            arena.define(globals, builtin.name, Value::Builtin(builtin));
        }

        Self { arena,
               globals,
               out,
               depth: 0 }
    }

    /// Runs a whole program.
    ///
    /// Evaluation happens in two passes. First every top-level method
    /// definition is bound in the global scope, in source order, so a
    /// method may call itself or a method defined later in the source.
    /// Then the top-level expression statements are evaluated in order.
    ///
    /// # Parameters
    /// - `program`: The parsed program.
    ///
    /// # Returns
    /// The values of the top-level expression statements, in order, or the
    /// first `RuntimeError` raised.
    pub fn run(&mut self, program: &Program) -> EvalResult<Vec<Value>> {
        for statement in &program.statements {
            if let Statement::Method(def) = statement {
                let method = MethodValue { name:   def.name.clone(),
                                           params: def.params.clone(),
                                           body:   def.body.clone(),
                                           env:    self.globals, };
                self.arena
                    .define(self.globals, &def.name, Value::Method(Rc::new(method)));
            }
        }

        let mut results = Vec::new();
        for statement in &program.statements {
            if let Statement::Expression { expr, .. } = statement {
                results.push(self.eval(expr, self.globals)?);
            }
        }

        Ok(results)
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The
    /// evaluator dispatches based on expression variant: literals, name
    /// references, the implicit subject, unary and binary operations,
    /// calls, and `given` expressions.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    /// - `env`: Scope in which names resolve.
    ///
    /// # Returns
    /// The computed [`Value`].
    pub fn eval(&mut self, expr: &Expr, env: ScopeId) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::from(value)),
            Expr::Identifier { name, pos } => {
                self.arena
                    .lookup(env, name)
                    .cloned()
                    .ok_or_else(|| RuntimeError::UnboundName { name: name.clone(),
                                                               pos:  *pos, })
            },
            Expr::ImplicitSubject { pos } => {
                self.arena
                    .lookup(env, "it")
                    .cloned()
                    .ok_or_else(|| RuntimeError::UnboundName { name: "it".to_string(),
                                                               pos:  *pos, })
            },
            Expr::UnaryOp { op, expr, pos } => {
                let value = self.eval(expr, env)?;
                Self::eval_unary(*op, &value, *pos)
            },
            Expr::BinaryOp { left, op, right, pos } => {
                let lval = self.eval(left, env)?;
                let rval = self.eval(right, env)?;
                Self::eval_binary(*op, &lval, &rval, *pos)
            },
            Expr::Call { name, arguments, pos } => self.eval_call(name, arguments, env, *pos),
            Expr::Given { subject,
                          clauses,
                          default,
                          pos, } => {
                self.eval_given(subject, clauses, default.as_ref(), env, *pos)
            },
        }
    }

    /// Evaluates a unary operator applied to a value.
    ///
    /// Negation is defined for integers (checked, so `-i64::MIN` reports
    /// `Overflow`) and floats; all other kinds are a `TypeMismatch`.
    fn eval_unary(op: UnaryOperator, value: &Value, pos: Position) -> EvalResult<Value> {
        match (op, value) {
            (UnaryOperator::Negate, Value::Int(n)) => {
                n.checked_neg()
                 .map(Value::Int)
                 .ok_or(RuntimeError::Overflow { pos })
            },
            (UnaryOperator::Negate, Value::Float(r)) => Ok(Value::Float(-r)),
            (UnaryOperator::Negate, other) => {
                Err(RuntimeError::TypeMismatch { details: format!("cannot negate a {}",
                                                                  other.kind_name()),
                                                 pos })
            },
        }
    }
}
