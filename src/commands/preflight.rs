use crate::areas::session::Session;

impl Session {
    /// `git --version` must run and exit zero before anything is asked of the user.
    pub async fn preflight(&self) -> bool {
        let available = self.git().is_available().await;
        tracing::debug!(available, "git preflight");
        available
    }
}
