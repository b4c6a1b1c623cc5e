//! # indent-types
//!
//! Collects the names introduced by `typedef` declarations in C sources so that
//! GNU `indent` can be told about them with `-T <name>`. Without that hint indent
//! reads `foo_t *p` as a multiplication and misaligns the pointer.
//!
//! The scan is lexical: braces and top-level semicolons delimit a declaration, and
//! typedefs of function-pointer types are skipped.
//!
//! ## Output Formats
//!
//! - **Indent**: ` -T name` arguments, ready to splice into an indent command line
//! - **Lines**: one name per line
//! - **JSON**: names grouped by source file

pub mod core;
pub mod formatters;
