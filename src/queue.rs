use crossbeam_channel as chan;

/// Send half of a [`Queue`].
///
/// [`Queue`]: struct.Queue.html
pub type Sender<T> = chan::Sender<T>;

/// Unbounded multi-producer queue, drained on the context thread.
#[derive(Clone)]
pub struct Queue<T> {
    tx: Sender<T>,
    rx: chan::Receiver<T>,
}

impl<T> Queue<T> {
    /// Constructor.
    pub fn new() -> Self {
        let (tx, rx) = chan::unbounded();
        Self { tx, rx }
    }

    /// Clone the send half of the queue.
    pub fn tx(&self) -> Sender<T> {
        self.tx.clone()
    }

    /// Takes every item queued so far, oldest first, without blocking.
    pub fn drain(&self) -> chan::TryIter<'_, T> {
        self.rx.try_iter()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_yields_items_in_order() {
        let queue = Queue::new();
        let tx = queue.tx();
        tx.send(1u32).unwrap();
        tx.send(2u32).unwrap();
        assert_eq!(queue.drain().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(queue.drain().next(), None);
    }
}
