//! The five transformer stages, in the order the pipeline runs them.

pub mod data_ownership;
pub mod domain_alignment;
pub mod interfaces;
pub mod merge;
pub mod split;

pub use data_ownership::DataOwnershipStage;
pub use domain_alignment::{feature_similarity, DomainAlignmentStage};
pub use interfaces::optimize_interfaces;
pub use merge::{apply_pairwise_merges, merge_pair, MergeStage};
pub use split::{split_boundary, SplitStage};
