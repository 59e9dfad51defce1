pub mod audit;
pub mod auditable;
pub mod identifiable;
pub mod ticket;

pub use audit::*;
pub use auditable::*;
pub use identifiable::*;
pub use ticket::*;
