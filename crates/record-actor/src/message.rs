//! # Generic Messages
//!
//! Message types exchanged between the `ResourceClient` and the `ResourceActor`.

use crate::entity::Record;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// The variants map onto the repository surface a persistence layer usually offers:
///
/// - **Insert**: always a new row. The actor assigns the identity.
/// - **Save**: upsert. Without an identity it is an insert, with one it replaces the stored row.
/// - **Get**: lookup by identity.
/// - **Find**: first record (in id order) matching a [`Record::Query`].
/// - **List**: every record, in id order.
///
/// The enum is generic over `T: Record`, so a `User` store can only ever receive `User` rows.
#[derive(Debug)]
pub enum ResourceRequest<T: Record> {
    Insert {
        record: T,
        respond_to: Response<T>,
    },
    Save {
        record: T,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Find {
        query: T::Query,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
}
