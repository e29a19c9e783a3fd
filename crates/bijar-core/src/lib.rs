// bijar-core: shared types and utilities for Bijar Sorani Kurdish spell checking.

pub mod character;
pub mod enums;
pub mod token;
