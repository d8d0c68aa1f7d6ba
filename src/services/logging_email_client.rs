use color_eyre::eyre::Result;

use crate::domain::{Email, EmailClient};

/// Stand-in for a real mail transport: the confirmation link is only
/// logged. Swap this collaborator out to send real mail.
#[derive(Default)]
pub struct LoggingEmailClient;

#[async_trait::async_trait]
impl EmailClient for LoggingEmailClient {
    #[tracing::instrument(name = "Sending confirmation email", skip_all)]
    async fn send_confirmation(
        &self,
        _recipient: &Email,
        confirmation_link: &str,
    ) -> Result<()> {
        tracing::info!("Confirmation link: {}", confirmation_link);
        Ok(())
    }
}
