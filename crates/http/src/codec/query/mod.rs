//! Query string encoding and decoding.
//!
//! - [`build_query_string`]: encodes keys and values into `a=1&b=2` form,
//!   repeating keys for list values
//! - [`get_query_params`]: decodes a URL's query, every parameter a list unless
//!   explicitly collapsed
//! - [`get_query_params_collapsed`]: decodes a URL's query, every parameter a
//!   single value unless explicitly kept as a list

mod query_decoder;
mod query_encoder;

pub use query_decoder::{get_query_params, get_query_params_collapsed};
pub use query_encoder::build_query_string;
