//! The [`AgentBase`] capability trait for agent runtimes.

use crate::args::AgentInitArgs;

/// Capability trait for agent runtimes that consume a normalized option set.
///
/// Configuration adapters validate caller options, bind a transport client,
/// and hand the resulting [`AgentInitArgs`] to an implementation of this
/// trait. Keeping the hand-off behind a trait (rather than a concrete base
/// type) lets adapters be exercised in tests without a live runtime.
///
/// `C` is the transport client handle type the runtime expects.
pub trait AgentBase<C>: Sized {
    /// Builds the agent from a normalized option set.
    ///
    /// Implementations must not perform I/O; remote registration, if any,
    /// is a separate step owned by the adapter.
    fn from_init_args(args: AgentInitArgs<C>) -> Self;
}
