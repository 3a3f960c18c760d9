pub mod config;
pub mod decimal;
pub mod errors;
pub mod export;
pub mod format;
pub mod pricing;
pub mod schedule;
pub mod types;

// re-export key types
pub use config::PlanConfig;
pub use decimal::{ceil_to_multiple, floor_to_multiple, Money};
pub use errors::{PlanError, Result};
pub use export::{share_text, to_csv, whatsapp_link};
pub use pricing::Pricing;
pub use schedule::{PaymentSchedule, Reconciliation, YearMonth};
pub use types::{ExtraPayment, PlanId, PlanInputs, RowKind, ScheduleRow, ScheduleTotals};

// re-export external dependencies that users will need
pub use chrono;
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
