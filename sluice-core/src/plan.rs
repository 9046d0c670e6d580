use crate::{Value, separated_by};

/// Role of a statement inside a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    /// The parent statement, always executed first.
    Root,
    /// A dependent collection statement correlated to the root rows.
    Collection,
}

/// One statement of a compiled plan, reduced to what classification and
/// materialization need. Rendering it to an actual SQL dialect is the job of
/// the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanStatement {
    pub table: String,
    pub columns: Vec<String>,
    /// Equality predicate evaluated by the backend.
    pub filter: Option<(String, Value)>,
    pub kind: StatementKind,
    /// The projection must be enumerated into memory before further
    /// processing (client evaluated step).
    pub client_eval: bool,
}

impl PlanStatement {
    fn new(kind: StatementKind, table: impl Into<String>, columns: &[&str]) -> Self {
        Self {
            table: table.into(),
            columns: columns.iter().map(|v| (*v).to_owned()).collect(),
            filter: None,
            kind,
            client_eval: false,
        }
    }
    pub fn root(table: impl Into<String>, columns: &[&str]) -> Self {
        Self::new(StatementKind::Root, table, columns)
    }
    pub fn collection(table: impl Into<String>, columns: &[&str]) -> Self {
        Self::new(StatementKind::Collection, table, columns)
    }
    pub fn filtered(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filter = Some((column.into(), value.into()));
        self
    }
    pub fn client_evaluated(mut self) -> Self {
        self.client_eval = true;
        self
    }
}

/// An ordered, dialect-independent query plan: one root statement followed by
/// zero or more dependent collection statements.
///
/// Statement order is fixed at construction and never altered afterwards; the
/// buffering decision only moves the release point of each result set, never
/// the execution order.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryPlan {
    statements: Vec<PlanStatement>,
}

impl QueryPlan {
    pub fn new(root: PlanStatement) -> Self {
        Self {
            statements: vec![root],
        }
    }

    /// Append a dependent collection statement.
    pub fn expanded(mut self, statement: PlanStatement) -> Self {
        self.statements.push(statement);
        self
    }

    pub fn statements(&self) -> &[PlanStatement] {
        &self.statements
    }

    pub fn root(&self) -> &PlanStatement {
        &self.statements[0]
    }

    /// A plan compiled into more than one dependent statement.
    pub fn is_split(&self) -> bool {
        self.statements.len() > 1
    }

    pub fn requires_client_eval(&self) -> bool {
        self.statements.iter().any(|v| v.client_eval)
    }

    /// Normalized key identifying the plan shape, independent of the bound
    /// parameter values. Two plans with the same key share one compiled
    /// artifact.
    pub fn shape_key(&self) -> String {
        let mut out = String::with_capacity(64 * self.statements.len());
        for statement in &self.statements {
            out.push_str("SELECT ");
            separated_by(&mut out, &statement.columns, |out, c| out.push_str(c), ", ");
            out.push_str(" FROM ");
            out.push_str(&statement.table);
            if let Some((column, _)) = &statement.filter {
                out.push_str(" WHERE ");
                out.push_str(column);
                out.push_str(" = ?");
            }
            if statement.client_eval {
                out.push_str(" !client");
            }
            out.push(';');
        }
        out
    }
}
