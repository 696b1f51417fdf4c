//! Mode change requests from other tasks
//!
//! Effect handlers and network handlers may run outside the task owning the
//! driver. They push [`ModeIntent`]s into an [`IntentQueue`]; the owner drains
//! it with [`SonoffL1Light::process_intents`](crate::SonoffL1Light::process_intents).
//! The queue is a bounded FIFO guarded by a critical section, so intents are
//! applied in the order they were sent and each one becomes one command.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::mode::ModeId;

/// Requested mode change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeIntent {
    /// Select a mode, Sync-to-Music resumes the stored parameters
    Select(ModeId),
    /// Select Sync-to-Music with new parameters, clamped on apply
    Sync { sensitivity: i32, speed: i32 },
}

/// Queue was full, the rejected intent is handed back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrySendError(pub ModeIntent);

/// Queue was empty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryReceiveError;

/// Bounded FIFO of pending mode changes
///
/// `SIZE` is the number of intents that can wait before senders are
/// refused. Usually placed in a `static` and shared by reference.
pub struct IntentQueue<const SIZE: usize> {
    pending: Mutex<RefCell<Deque<ModeIntent, SIZE>>>,
}

impl<const SIZE: usize> IntentQueue<SIZE> {
    /// Create an empty queue
    pub const fn new() -> Self {
        Self {
            pending: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Handle for tasks requesting mode changes
    pub const fn sender(&self) -> IntentSender<'_, SIZE> {
        IntentSender { queue: self }
    }

    /// Handle for the task owning the driver
    pub const fn receiver(&self) -> IntentReceiver<'_, SIZE> {
        IntentReceiver { queue: self }
    }

    /// Append an intent
    ///
    /// Returns the intent back if the queue is full.
    pub fn try_send(&self, intent: ModeIntent) -> Result<(), TrySendError> {
        self.with_pending(|pending| pending.push_back(intent).map_err(TrySendError))
    }

    /// Take the oldest intent
    pub fn try_receive(&self) -> Result<ModeIntent, TryReceiveError> {
        self.with_pending(|pending| pending.pop_front().ok_or(TryReceiveError))
    }

    /// Number of intents waiting to be applied
    pub fn len(&self) -> usize {
        self.with_pending(|pending| pending.len())
    }

    /// Returns if no intent is waiting
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn with_pending<R>(&self, f: impl FnOnce(&mut Deque<ModeIntent, SIZE>) -> R) -> R {
        critical_section::with(|cs| f(&mut self.pending.borrow(cs).borrow_mut()))
    }
}

impl<const SIZE: usize> Default for IntentQueue<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Sending side of an [`IntentQueue`]
#[derive(Clone, Copy)]
pub struct IntentSender<'a, const SIZE: usize> {
    queue: &'a IntentQueue<SIZE>,
}

impl<const SIZE: usize> IntentSender<'_, SIZE> {
    /// Queue an intent, see [`IntentQueue::try_send`]
    pub fn try_send(&self, intent: ModeIntent) -> Result<(), TrySendError> {
        self.queue.try_send(intent)
    }

    /// Request a mode selection
    pub fn select(&self, mode: ModeId) -> Result<(), TrySendError> {
        self.try_send(ModeIntent::Select(mode))
    }

    /// Request Sync-to-Music with parameters
    pub fn sync(&self, sensitivity: i32, speed: i32) -> Result<(), TrySendError> {
        self.try_send(ModeIntent::Sync { sensitivity, speed })
    }
}

/// Receiving side of an [`IntentQueue`]
#[derive(Clone, Copy)]
pub struct IntentReceiver<'a, const SIZE: usize> {
    queue: &'a IntentQueue<SIZE>,
}

impl<const SIZE: usize> IntentReceiver<'_, SIZE> {
    /// Take the oldest intent, see [`IntentQueue::try_receive`]
    pub fn try_receive(&self) -> Result<ModeIntent, TryReceiveError> {
        self.queue.try_receive()
    }

    /// Number of intents waiting to be applied
    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}
