use color_eyre::eyre::Result;

use super::Email;

/// Outbound-mail seam. The shipping implementation only logs the link;
/// a real transport slots in here without touching lifecycle logic.
#[async_trait::async_trait]
pub trait EmailClient {
    async fn send_confirmation(
        &self,
        recipient: &Email,
        confirmation_link: &str,
    ) -> Result<()>;
}
