use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct Metrics {
    scores_recorded: AtomicU64,
    bonus_claims: AtomicU64,
    bonus_conflicts: AtomicU64,
    validation_errors: AtomicU64,
    store_errors: AtomicU64,
}

impl Metrics {
    pub fn record_score(&self) {
        self.scores_recorded.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_bonus_claim(&self) {
        self.bonus_claims.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_bonus_conflict(&self) {
        self.bonus_conflicts.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_validation_error(&self) {
        self.validation_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_store_error(&self) {
        self.store_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn render_prometheus(&self) -> String {
        let scores = self.scores_recorded.load(Ordering::Relaxed);
        let claims = self.bonus_claims.load(Ordering::Relaxed);
        let conflicts = self.bonus_conflicts.load(Ordering::Relaxed);
        let validation = self.validation_errors.load(Ordering::Relaxed);
        let store = self.store_errors.load(Ordering::Relaxed);

        format!(
            "# TYPE playlab_scores_recorded_total counter\n\
playlab_scores_recorded_total {}\n\
# TYPE playlab_bonus_claims_total counter\n\
playlab_bonus_claims_total {}\n\
# TYPE playlab_bonus_conflicts_total counter\n\
playlab_bonus_conflicts_total {}\n\
# TYPE playlab_validation_errors_total counter\n\
playlab_validation_errors_total {}\n\
# TYPE playlab_store_errors_total counter\n\
playlab_store_errors_total {}\n",
            scores, claims, conflicts, validation, store
        )
    }
}
