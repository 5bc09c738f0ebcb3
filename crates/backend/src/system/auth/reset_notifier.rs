use async_trait::async_trait;
use once_cell::sync::OnceCell;

/// Delivers password reset tokens to admins
#[async_trait]
pub trait ResetNotifier: Send + Sync {
    async fn send_reset_token(&self, email: &str, token: &str) -> anyhow::Result<()>;
}

/// Writes the reset link to the log instead of sending mail
#[derive(Debug, Default, Clone)]
pub struct LogNotifier {
    link_base: String,
}

impl LogNotifier {
    pub fn new(link_base: impl Into<String>) -> Self {
        Self {
            link_base: link_base.into(),
        }
    }
}

#[async_trait]
impl ResetNotifier for LogNotifier {
    async fn send_reset_token(&self, email: &str, token: &str) -> anyhow::Result<()> {
        tracing::info!(
            email = %email,
            "Password reset requested, link: {}{}",
            self.link_base,
            token
        );
        Ok(())
    }
}

static NOTIFIER: OnceCell<Box<dyn ResetNotifier>> = OnceCell::new();

pub fn install(notifier: Box<dyn ResetNotifier>) {
    if NOTIFIER.set(notifier).is_err() {
        tracing::warn!("Reset notifier is already installed");
    }
}

pub fn notifier() -> &'static dyn ResetNotifier {
    NOTIFIER
        .get_or_init(|| Box::new(LogNotifier::default()))
        .as_ref()
}
