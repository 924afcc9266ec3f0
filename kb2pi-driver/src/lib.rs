#![no_std]
pub mod config;
pub mod decoder;
pub mod keymap;
pub mod reporter;
pub mod service;

#[cfg(any(test, feature = "test-utils"))]
pub mod sink_test_stub;
#[cfg(any(test, feature = "test-utils"))]
pub mod uart_test_stub;

#[macro_use]
mod macros;
