/// How a candidate identifier was recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateReason {
    /// The identifier itself looks like a table name (`df`, `sales_df`, ...)
    Name,
    /// The identifier is assigned from a table constructor or reader
    Constructor,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableCandidate {
    pub name: String,
    /// 1-based line of the first occurrence
    pub line: usize,
    pub reason: CandidateReason,
}
