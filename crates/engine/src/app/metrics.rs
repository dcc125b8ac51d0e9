/// Counts for one report window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopMetricsSnapshot {
    /// Frames rendered.
    pub fps: u32,
    /// Fixed-step ticks run.
    pub ticks: u32,
    /// Ticks whose render was skipped.
    pub skipped: u32,
}

#[derive(Debug, Default)]
pub(crate) struct MetricsAccumulator {
    frames: u32,
    ticks: u32,
    skipped: u32,
}

impl MetricsAccumulator {
    pub(crate) fn record_frame(&mut self) {
        self.frames = self.frames.saturating_add(1);
    }

    pub(crate) fn record_tick(&mut self) {
        self.ticks = self.ticks.saturating_add(1);
    }

    pub(crate) fn record_skip(&mut self) {
        self.skipped = self.skipped.saturating_add(1);
    }

    pub(crate) fn frames(&self) -> u32 {
        self.frames
    }

    pub(crate) fn take_snapshot(&mut self) -> LoopMetricsSnapshot {
        let snapshot = LoopMetricsSnapshot {
            fps: self.frames,
            ticks: self.ticks,
            skipped: self.skipped,
        };
        *self = Self::default();
        snapshot
    }
}

pub fn format_fps_title(base_title: &str, fps: u32) -> String {
    format!("{base_title}: {fps} FPS")
}
