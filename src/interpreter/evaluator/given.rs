use crate::{
    ast::{DefaultClause, Expr, WhenClause},
    error::RuntimeError,
    interpreter::{
        env::ScopeId,
        evaluator::core::{Context, EvalResult},
        lexer::Position,
        value::Value,
    },
};

impl Context<'_> {
    /// Evaluates a `given` matching expression.
    ///
    /// The subject is evaluated exactly once. Each `when` clause is then
    /// tried in source order: a short-lived child scope binding `it` to
    /// the subject's value is entered, the predicate is evaluated in it,
    /// and if the predicate is `true` the clause's result expression is
    /// evaluated in that same scope and becomes the value of the whole
    /// expression. A predicate that produces anything other than a
    /// boolean is a `TypeMismatch`.
    ///
    /// If no clause matches, the `default` clause's result is evaluated
    /// without an `it` binding, or, when there is no `default`,
    /// evaluation fails with `NoMatchingClause`.
    ///
    /// # Parameters
    /// - `subject`: The subject expression.
    /// - `clauses`: The `when` clauses, in source order.
    /// - `default`: The optional `default` clause.
    /// - `env`: The enclosing environment.
    /// - `pos`: Source position of the `given` keyword.
    ///
    /// # Returns
    /// The value of the first matching clause's result expression.
    pub(crate) fn eval_given(&mut self,
                             subject: &Expr,
                             clauses: &[WhenClause],
                             default: Option<&DefaultClause>,
                             env: ScopeId,
                             pos: Position)
                             -> EvalResult<Value> {
        let subject_value = self.eval(subject, env)?;

        for clause in clauses {
            let mark = self.arena.len();
            let scope = self.arena.child(env);
            self.arena.define(scope, "it", subject_value.clone());

            let matched = match self.eval(&clause.predicate, scope)? {
                Value::Bool(b) => b,
                other => {
                    return Err(RuntimeError::TypeMismatch { details: format!("'when' predicate must be a boolean, not a {}",
                                                                             other.kind_name()),
                                                            pos:     clause.pos, });
                },
            };

            if matched {
                return self.eval(&clause.result, scope);
            }

            self.arena.truncate(mark);
        }

        match default {
            Some(clause) => self.eval(&clause.result, env),
            None => Err(RuntimeError::NoMatchingClause { pos }),
        }
    }
}
