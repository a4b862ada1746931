pub mod event;
pub mod ids;
pub mod procedure;
pub mod terms;

pub use event::{AcceptanceEvent, AcceptanceMethod, DocumentKind, ViewEvent};
pub use ids::{DocumentId, InvalidId, UserId};
pub use procedure::{Params, Procedure};
pub use terms::{TermsDocument, TermsVersionSummary};
