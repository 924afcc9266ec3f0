#![no_std]
pub mod scancode;
pub mod translate;
