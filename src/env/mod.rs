//! Environment abstraction layer for time and deferred execution
//!
//! The function-control decorators depend on two outside services, both
//! expressed as traits so that production code and tests can supply
//! different implementations:
//!
//! - **Traits**: `Clock` (monotonic time) and `Scheduler` (run a task later)
//! - **Real Implementations**: `MonotonicClock` and the tokio-backed
//!   `TokioScheduler`
//! - **Mock Implementations**: `MockClock` and `ManualScheduler`, which only
//!   move when a test advances them
//! - **Combined Environment**: `KernelEnv` bundles one of each
//!
//! # Testing
//!
//! ```
//! use utilkit::decorators::throttle_with_clock;
//! use utilkit::env::MockClock;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! let clock = MockClock::new();
//! let mut limited = throttle_with_clock(
//!     |n: i32| n * 2,
//!     Duration::from_millis(100),
//!     Arc::new(clock.clone()),
//! );
//!
//! assert_eq!(limited.call(1), 2);
//! clock.advance(Duration::from_millis(50));
//! assert_eq!(limited.call(5), 2);
//! clock.advance(Duration::from_millis(100));
//! assert_eq!(limited.call(5), 10);
//! ```

mod app;
mod mock;
mod real;
mod traits;

pub use app::KernelEnv;
pub use mock::{ManualScheduler, MockClock};
pub use real::{MonotonicClock, TokioScheduler};
pub use traits::{Clock, Scheduler, Task};
