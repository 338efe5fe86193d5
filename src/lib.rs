//! DNS CLASS values.
//!
//! This crate provides [`Class`], a type for the values of the CLASS field
//! of DNS resource records and the QCLASS field of DNS questions. The type
//! wraps the raw 16 bit value and provides associated constants for the
//! assigned values, conversions from and to the raw integer, and parsing
//! and formatting of the symbolic mnemonics. Values without a mnemonic are
//! formatted as their plain decimal value, so formatting a class never
//! fails.
//!
//! # Reference of Feature Flags
//!
//! The following is the complete list of the feature flags available.
//!
//! * `serde`: Adds serialization and deserialization via the
//!   [serde](https://serde.rs/) crate. Human readable formats use the
//!   mnemonic where there is one, compact formats always use the raw
//!   integer.
//! * `std`: support for the Rust std library. This feature is enabled by
//!   default. Without it, the crate is `no_std`.

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "std")]
#[allow(unused_imports)] // Import macros even if unused.
#[macro_use]
extern crate std;

#[macro_use]
mod macros;

pub mod class;
pub mod serde;

pub use self::class::Class;
