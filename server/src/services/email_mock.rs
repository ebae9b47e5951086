// storefront_app/src/services/email_mock.rs
use crate::errors::Result as AppResult; // Using AppResult
use tracing::info;

#[derive(Debug)]
pub struct SentEmailInfo {
  pub to: String,
  pub from: String,
  pub subject: String,
  pub message_id: String,
}

pub async fn send_order_confirmation(to: &str, from: &str, order_number: &str, total_cents: i32) -> AppResult<SentEmailInfo> {
  let subject = format!("Order {} confirmed", order_number);
  info!(
    "Simulating sending email: To='{}', From='{}', Subject='{}', Total=${:.2}",
    to,
    from,
    subject,
    total_cents as f32 / 100.0
  );
  tokio::time::sleep(std::time::Duration::from_millis(20)).await; // Simulate network latency

  // Simulate potential failure
  if to.ends_with("@fail.test") {
    tracing::warn!("Simulated email failure for recipient: {}", to);
    return Err(crate::errors::AppError::Internal(
      "Simulated email send failure".to_string(),
    ));
  }

  let message_id = format!("mock_email_{}", uuid::Uuid::new_v4());
  info!("Mock email sent successfully. Message ID: {}", message_id);

  Ok(SentEmailInfo {
    to: to.to_string(),
    from: from.to_string(),
    subject,
    message_id,
  })
}
