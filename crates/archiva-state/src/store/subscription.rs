use super::app_state::AppState;

/// Which part of the store a notification refers to.
///
/// Views that only care about one slice can ignore notifications for the
/// others instead of diffing the whole state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slice {
    Chrome,
    Panels,
    Viewer,
    Nodes,
    Search,
    Modal,
}

/// Identifies a registered subscriber, for later removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);

/// Callback invoked after each mutation with the post-mutation state and the
/// slice that changed.
///
/// # Semantics
///
/// - **Ordering**: subscribers run synchronously, in registration order,
///   before the mutating call returns. Mutations themselves are applied in
///   call order on a single thread; there is no batching or coalescing.
/// - **Re-entrancy**: callbacks receive a shared borrow of the state and
///   cannot mutate the store during notification; they should record what
///   they need and mutate afterwards if they must.
/// - **Snapshots**: callbacks must not retain interior references past the
///   call; clone the slices they need instead.
pub(crate) type SubscriberFn = Box<dyn Fn(&AppState, Slice)>;
