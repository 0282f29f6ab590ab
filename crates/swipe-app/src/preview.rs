use log::debug;
use swipe_base::Tensor;

/// Destination for the annotated frames the classifier produces.
///
/// The production build runs headless with [`NoopPreview`]; tests count
/// frames through this seam, and a debug build can log frame statistics
/// with [`StatsPreview`].
pub trait PreviewSink {
    fn show(&mut self, frame: &Tensor<u8>);
}

impl PreviewSink for Box<dyn PreviewSink + Send> {
    fn show(&mut self, frame: &Tensor<u8>) {
        (**self).show(frame);
    }
}

/// Discards every frame.
pub struct NoopPreview;

impl PreviewSink for NoopPreview {
    fn show(&mut self, _frame: &Tensor<u8>) {}
}

/// Logs mean frame brightness at a fixed cadence.
pub struct StatsPreview {
    every: u64,
    count: u64,
}

impl StatsPreview {
    pub fn new(every: u64) -> Self {
        Self {
            every: every.max(1),
            count: 0,
        }
    }
}

impl PreviewSink for StatsPreview {
    fn show(&mut self, frame: &Tensor<u8>) {
        self.count += 1;
        if self.count % self.every != 0 {
            return;
        }
        let sum: u64 = frame.data.iter().map(|&v| v as u64).sum();
        let mean = sum as f64 / frame.data.len().max(1) as f64;
        debug!(
            "preview frame {}: shape {:?}, mean {:.1}",
            self.count, frame.shape, mean
        );
    }
}
