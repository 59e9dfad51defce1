pub mod domain;
pub mod service;
pub mod error;
pub mod pagination;
pub mod workflow;

pub use error::*;
pub use domain::*;
pub use service::*;
pub use pagination::{Page, PageRequest};
pub use workflow::{evaluate_transition, TransitionDecision};
