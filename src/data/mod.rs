//! Plain data types behind the accumulator: sample buffers, update payloads,
//! grid layout and smoothing.

pub mod layout;
pub mod series;
pub mod smoothing;
pub mod values;
