use indicatif::{ProgressBar, ProgressDrawTarget, ProgressState, ProgressStyle};

/// Progress bar for a batch of snapshots.
///
/// Cloning shares the same bar, so worker threads can report independently.
#[derive(Clone)]
pub struct BatchProgress {
    pb: ProgressBar,
}

impl BatchProgress {
    pub fn new(total: u64) -> Self {
        let pb = ProgressBar::new(total).with_style(Self::bar_style());
        pb.set_draw_target(ProgressDrawTarget::stderr());
        Self { pb }
    }

    /// A bar that never draws. Used when output is quiet and in tests.
    pub fn hidden(total: u64) -> Self {
        let pb = ProgressBar::hidden();
        pb.set_length(total);
        pb.set_style(Self::bar_style());
        Self { pb }
    }

    pub fn start(&self, name: &str) {
        self.pb.set_message(name.to_string());
    }

    pub fn finish_one(&self) {
        self.pb.inc(1);
    }

    pub fn report_failure(&self, name: &str, reason: &str) {
        self.pb.println(format!("  ✗ {}: {}", name, reason));
        self.pb.inc(1);
    }

    pub fn finish(&self) {
        self.pb.finish_with_message("✓ Done");
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::with_template("{msg:<24} [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
            .expect("Failed to create bar style template")
            .with_key(
                "eta",
                |state: &ProgressState, w: &mut dyn std::fmt::Write| {
                    let _ = write!(w, "{:.1}s", state.eta().as_secs_f64());
                },
            )
            .progress_chars("##-")
    }
}
