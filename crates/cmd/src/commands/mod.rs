pub mod convert;
pub mod describe;
pub mod plan;
pub mod reconcile;

pub use self::convert::convert_command;
pub use self::describe::describe_command;
pub use self::plan::plan_command;
pub use self::reconcile::reconcile_command;
