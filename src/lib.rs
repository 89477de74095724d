//! Calculadora : quatre opérations entières (soma, subtração, multiplicação, divisão).
//!
//! ```
//! use calculadora::{add, divide, CalcError};
//!
//! assert_eq!(add(2, 3), 5);
//! assert_eq!(divide(7, 2), Ok(3.5));
//! assert!(matches!(divide(5, 0), Err(CalcError::InvalidArgument(_))));
//! ```

#![forbid(unsafe_code)]

pub mod noyau;

pub use noyau::{add, divide, multiply, subtract, CalcError};

pub type Result<T> = std::result::Result<T, crate::noyau::CalcError>;
