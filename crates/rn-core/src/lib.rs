//! rn-core - Core library for Relnorm
//!
//! This crate provides the relational normalization engine: the schema data
//! model (attributes, relations, functional dependencies), attribute-set
//! closure computation, super-key and candidate-key enumeration, and the
//! BCNF and 3NF membership tests and decomposition algorithms.
//!
//! Everything here is pure and synchronous: operations take immutable value
//! objects and return fresh ones. The search primitives are deliberate
//! brute force over the attribute power set (`O(2^n · n · |fds|)`), which
//! is the intended contract for the small schemas this library targets.

pub mod attribute;
pub mod attribute_set;
pub mod bcnf;
pub mod closure;
pub mod error;
pub mod fd;
pub mod keys;
pub mod relation;
pub mod subsets;
pub mod third_nf;

pub use attribute::Attribute;
pub use attribute_set::AttributeSet;
pub use bcnf::{decompose_bcnf, implied_fds, is_bcnf, project_fds, violations};
pub use closure::{closure, ClosureResult};
pub use error::{CoreError, CoreResult};
pub use fd::FunctionalDependency;
pub use keys::{candidate_keys, super_keys};
pub use relation::Relation;
pub use subsets::subsets;
pub use third_nf::{decompose_3nf, is_third_nf, minimal_basis};
