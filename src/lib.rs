//! hello-app: prints a greeting and the sum of two integers.

pub mod constants;
pub mod error;
pub mod logging;
pub mod math;
pub mod output;

pub use error::{AppError, Result};
pub use math::add;
pub use output::{run, Report};
