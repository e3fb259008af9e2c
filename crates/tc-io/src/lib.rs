//! `tc-io` — JSON request/response document shapes and their translation
//! to/from `tc-catalog`/`tc-router`/`tc-render` types.
//!
//! | Module      | Contents                                           |
//! |-------------|-------------------------------------------------------|
//! | [`requests`]| `BaseRequest`, `StatRequest`, `MakeBaseDocument`, `ProcessRequestsDocument` |
//! | [`apply`]   | `apply_base_requests`                               |
//! | [`answer`]  | `answer_stat_request`                               |
//! | [`error`]   | `IoError`, `IoResult`                               |

pub mod answer;
pub mod apply;
pub mod error;
pub mod requests;

pub use answer::answer_stat_request;
pub use apply::apply_base_requests;
pub use error::{IoError, IoResult};
pub use requests::{BaseRequest, MakeBaseDocument, ProcessRequestsDocument, RoutingSettings, SerializationSettings, StatRequest};
