use std::io::{self};

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        env::ScopeId,
        evaluator::core::{Context, EvalResult, MAX_CALL_DEPTH},
        lexer::Position,
        value::Value,
    },
};

/// Type alias for builtin method handlers.
///
/// A builtin receives the host's output sink, a slice of evaluated
/// argument values, and the call's source position. It returns a value
/// wrapped in `EvalResult`.
pub type BuiltinFn = fn(&mut dyn io::Write, &[Value], Position) -> EvalResult<Value>;

/// Metadata for one builtin method.
///
/// Builtins are bound into the global environment as ordinary values when
/// a [`Context`] is created, so name resolution treats them exactly like
/// user-defined methods and user definitions may shadow them.
#[derive(Debug)]
pub struct BuiltinDef {
    /// The name the builtin is bound to.
    pub name:  &'static str,
    /// The exact number of arguments the builtin accepts.
    pub arity: usize,
    func:      BuiltinFn,
}

/// The builtin methods every program starts with.
pub static BUILTINS: &[BuiltinDef] = &[BuiltinDef { name:  "print",
                                                    arity: 1,
                                                    func:  print, }];

/// Writes a value to the output sink, newline-terminated, and returns it
/// unchanged.
///
/// Accepts exactly one argument. The value is formatted using its
/// `Display` implementation. Because `print` evaluates to its own
/// argument, chains like `x.calculate.print.store` keep composing.
fn print(out: &mut dyn io::Write, args: &[Value], _pos: Position) -> EvalResult<Value> {
    let _ = writeln!(out, "{}", args[0]);
    Ok(args[0].clone())
}

impl Context<'_> {
    /// Evaluates a call.
    ///
    /// The callee name is resolved through the environment chain first; a
    /// missing binding is `UnboundName` and a binding to a non-method
    /// value is `NotCallable`. Arguments are then evaluated left to right
    /// in the caller's environment. For a user-defined method, a fresh
    /// child scope of the method's captured environment is created, the
    /// parameters are bound to the argument values, and the body
    /// statements are evaluated in order; the last one's value is the
    /// call's value.
    ///
    /// Scopes created during the call are reclaimed when it returns. This
    /// is sound because methods are only defined at the top level, so no
    /// value produced by the call can retain a call-local scope.
    ///
    /// # Parameters
    /// - `name`: The callee name.
    /// - `arguments`: Unevaluated argument expressions.
    /// - `env`: The caller's environment.
    /// - `pos`: Source position of the call.
    ///
    /// # Returns
    /// The call's result value.
    ///
    /// # Errors
    /// - `UnboundName` if the callee name has no binding.
    /// - `NotCallable` if the name is bound to a non-method value.
    /// - `ArityMismatch` if the argument count differs from the parameter
    ///   count.
    /// - `StackOverflow` if the call depth budget is exhausted.
    pub(crate) fn eval_call(&mut self,
                            name: &str,
                            arguments: &[Expr],
                            env: ScopeId,
                            pos: Position)
                            -> EvalResult<Value> {
        let callee = self.arena
                         .lookup(env, name)
                         .cloned()
                         .ok_or_else(|| RuntimeError::UnboundName { name: name.to_string(),
                                                                    pos })?;

        match callee {
            Value::Builtin(builtin) => {
                if arguments.len() != builtin.arity {
                    return Err(RuntimeError::ArityMismatch { name:     name.to_string(),
                                                             expected: builtin.arity,
                                                             found:    arguments.len(),
                                                             pos });
                }

                let args = self.eval_arguments(arguments, env)?;
                (builtin.func)(&mut *self.out, &args, pos)
            },

            Value::Method(method) => {
                if arguments.len() != method.params.len() {
                    return Err(RuntimeError::ArityMismatch { name:     name.to_string(),
                                                             expected: method.params.len(),
                                                             found:    arguments.len(),
                                                             pos });
                }
                if self.depth >= MAX_CALL_DEPTH {
                    return Err(RuntimeError::StackOverflow { pos });
                }

                let args = self.eval_arguments(arguments, env)?;

                self.depth += 1;
                let mark = self.arena.len();
                let scope = self.arena.child(method.env);

                for (param, value) in method.params.iter().zip(args) {
                    self.arena.define(scope, param, value);
                }

                let mut result = Ok(Value::Nil);
                for expr in &method.body {
                    result = self.eval(expr, scope);
                    if result.is_err() {
                        break;
                    }
                }

                self.arena.truncate(mark);
                self.depth -= 1;

                result
            },

            _ => Err(RuntimeError::NotCallable { name: name.to_string(),
                                                 pos }),
        }
    }

    /// Evaluates call arguments left to right in the caller's environment.
    fn eval_arguments(&mut self, arguments: &[Expr], env: ScopeId) -> EvalResult<Vec<Value>> {
        let mut args = Vec::with_capacity(arguments.len());
        for argument in arguments {
            args.push(self.eval(argument, env)?);
        }
        Ok(args)
    }
}
