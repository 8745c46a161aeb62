use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BalanceError {
    #[error("expected exactly 10 distinct players, got {found}")]
    RosterSize { found: usize },
    #[error("unsatisfiable role coverage: ran out of candidates before every role was filled")]
    UnsatisfiableRoles,
}
