/// A declared configuration field found in strategy source: `(type, name)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub param_type: String,
    pub name: String,
}

/// Recognises parameter declarations and their default assignments for one
/// source dialect. Matching is textual and unaware of comments or scopes.
pub trait DeclarationPattern: Send + Sync {

    fn dialect(&self) -> &str;

    /// All declarations, in order of appearance. Repeats are kept.
    fn declarations(&self, source: &str) -> Vec<Declaration>;

    /// Right-hand side of the first assignment to `name` anywhere in `source`.
    fn default_value(&self, source: &str, name: &str) -> Option<String>;
}
