//! Central constants for hello-app
//!
//! Every literal that shows up on stdout or in the environment is defined here.

/// First line of the report
pub const GREETING: &str = "Hello World!";

/// Text printed before the computed sum on the second line
pub const SUM_PREFIX: &str = "Le résultat de l'addition est : ";

/// Left operand of the reported addition
pub const LHS: i32 = 5;

/// Right operand of the reported addition
pub const RHS: i32 = 3;

/// Environment variable holding the log filter.
///
/// Falls back to `RUST_LOG` when unset. Uses `tracing_subscriber::EnvFilter` syntax.
pub const LOG_ENV_VAR: &str = "HELLO_APP_LOG";

/// Filter used when neither log variable is set
pub const DEFAULT_LOG_FILTER: &str = "warn";
