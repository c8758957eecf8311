pub mod error;
pub mod result;
pub mod sealed;

#[cfg(test)]
pub mod alloc;
#[cfg(test)]
pub mod panic;
