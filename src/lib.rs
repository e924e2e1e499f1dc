//! # utilkit
//!
//! A small functional-utility kit: collection traversal, reduction and the
//! query, structural and merge operations built on them, plus function
//! decorators that cache results or control when a function runs.
//!
//! ## Usage
//!
//! ```
//! use utilkit::core::{every, filter, reduce, uniq};
//!
//! let numbers = vec![1, 2, 2, 3, 4];
//! let evens = filter(&numbers, |n| n % 2 == 0);
//! assert_eq!(evens, vec![2, 2, 4]);
//! assert_eq!(uniq(&numbers), vec![1, 2, 3, 4]);
//! assert!(every(&evens, |n| n % 2 == 0));
//! assert_eq!(reduce(&numbers, |acc, n| acc + n, None), Some(12));
//! ```
//!
//! ## Modules
//!
//! - `core` - Pure collection operations built on `each` and `reduce`
//! - `decorators` - `once`, `memoize`, `delay` and `throttle`
//! - `env` - Clock and scheduler services with real and mock implementations
//! - `config` - TOML configuration with environment overrides
//! - `error` - Error type and error codes
//! - `logging` - Tracing subscriber setup
//! - `toolkit` - Configured facade over the policy-dependent operations
pub mod config;
pub mod core;
pub mod decorators;
pub mod env;
pub mod error;
pub mod logging;
pub mod toolkit;

pub use error::{KernelError, Result};
pub use toolkit::Toolkit;
