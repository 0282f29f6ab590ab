use swipe_vision::Gesture;
use tokio::sync::watch;

/// Writer half of the shared gesture slot.
///
/// The slot holds the most recent classification result. Writes overwrite:
/// if the reader polls slower than the writer publishes, intermediate
/// gestures are lost. That is the intended last-value-wins behavior.
pub struct GesturePublisher {
    tx: watch::Sender<Option<Gesture>>,
}

impl GesturePublisher {
    /// Publish a classification result, gesture or not. A send with no
    /// live reader is silently dropped.
    pub fn publish(&self, gesture: Option<Gesture>) {
        let _ = self.tx.send(gesture);
    }
}

/// Reader half of the shared gesture slot.
pub struct GestureReader {
    rx: watch::Receiver<Option<Gesture>>,
}

impl GestureReader {
    /// Return the gesture from the most recent unseen publish, without
    /// blocking. Returns `None` both when nothing new was published and
    /// when the publish itself carried no gesture; the game treats those
    /// the same. Each publish is observed at most once, so a single swipe
    /// never steers the snake twice.
    pub fn latest(&mut self) -> Option<Gesture> {
        match self.rx.has_changed() {
            Ok(true) => *self.rx.borrow_and_update(),
            _ => None,
        }
    }
}

/// Create a connected publisher/reader pair holding no gesture.
pub fn gesture_slot() -> (GesturePublisher, GestureReader) {
    let (tx, rx) = watch::channel(None);
    (GesturePublisher { tx }, GestureReader { rx })
}
