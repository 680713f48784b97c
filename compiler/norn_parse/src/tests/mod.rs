//! Parser tests.
//!
//! - `parser`: trees built for literals, operators and precedence
//! - `errors`: rejected input and the reported spans
