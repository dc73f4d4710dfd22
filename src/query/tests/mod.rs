#![cfg(test)]

mod slice;

#[cfg(feature = "aggregate")]
mod aggregate;
