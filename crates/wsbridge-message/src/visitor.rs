use crate::command::{AsyncCall, Execute, SyncCall};
use crate::session::{SessionCreate, SessionDestroy};

/// Handles decoded incoming messages, one method per variant.
///
/// [`crate::Incoming::accept`] calls exactly one of these. The framing code
/// never looks at what a handler does; issuing calls against the runtime and
/// writing replies back is entirely up to the implementation.
pub trait Visitor {
    /// Error returned by every handler method.
    type Error;

    fn visit_sync_call(&mut self, msg: SyncCall) -> Result<(), Self::Error>;

    fn visit_async_call(&mut self, msg: AsyncCall) -> Result<(), Self::Error>;

    fn visit_execute(&mut self, msg: Execute) -> Result<(), Self::Error>;

    fn visit_session_create(&mut self, msg: SessionCreate) -> Result<(), Self::Error>;

    fn visit_session_destroy(&mut self, msg: SessionDestroy) -> Result<(), Self::Error>;
}
