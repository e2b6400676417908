//! Value types shared by the header parser and the query codec.
//!
//! - **Headers** ([`header`]): [`ParsedHeaders`] and [`HeaderValue`], plus the
//!   names of the entries synthesized from a status or request line
//! - **Query strings** ([`query`]): [`QueryValue`]/[`Scalar`] on the encode
//!   side, [`ParsedQuery`]/[`QueryParam`] on the decode side
//! - **Errors** ([`error`]): [`ParseError`], [`QueryError`] and the umbrella
//!   [`CodecError`]
//! - **Exception** ([`exception`]): [`HttpException`], the status-code-carrying
//!   error callers raise across a service boundary
//!
//! Everything here is a plain value: built fresh per call, `Send + Sync`, and
//! serializable to its natural JSON shape.

pub mod header;
pub use header::HeaderValue;
pub use header::ParsedHeaders;

pub mod query;
pub use query::ParsedQuery;
pub use query::QueryData;
pub use query::QueryParam;
pub use query::QueryValue;
pub use query::Scalar;

mod error;
pub use error::CodecError;
pub use error::CollapsePolicy;
pub use error::ParseError;
pub use error::QueryError;

mod exception;
pub use exception::HttpException;
