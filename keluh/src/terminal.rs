//! Terminal implementations of the store's collaborators:
//! a y/N deletion prompt and notifications printed to stderr.

use std::io::{self, BufRead, Write};

use async_trait::async_trait;
use keluh_core::ids::CategoryId;
use keluh_store::{ConfirmDeletion, ConfirmationOutcome, Notification, NotificationKind, Notifier};
use tracing::warn;


/// Asks on stderr and reads the answer from stdin.
///
/// Anything other than an explicit yes cancels; a closed stdin counts as dismissing the prompt.
pub struct TerminalConfirmation;

#[async_trait]
impl ConfirmDeletion for TerminalConfirmation {
    async fn confirm_deletion(
        &self,
        category_id: CategoryId,
        category_name: Option<&str>,
    ) -> ConfirmationOutcome {
        let prompt = match category_name {
            Some(category_name) => format!(
                "Hapus kategori \"{}\" (id {})? [y/N] ",
                category_name, category_id
            ),
            None => format!("Hapus kategori dengan id {}? [y/N] ", category_id),
        };

        let answer = tokio::task::spawn_blocking(move || {
            prompt_for_answer(&prompt, &mut io::stderr(), &mut io::stdin().lock())
        })
        .await;

        match answer {
            Ok(Ok(Some(answer))) => parse_answer(&answer),
            Ok(Ok(None)) => ConfirmationOutcome::Dismissed,
            Ok(Err(error)) => {
                warn!(error = %error, "Failed to read the confirmation answer.");
                ConfirmationOutcome::Dismissed
            }
            Err(error) => {
                warn!(error = %error, "Confirmation prompt task failed.");
                ConfirmationOutcome::Dismissed
            }
        }
    }
}

/// Writes the prompt and reads one line. `None` means the input was closed.
fn prompt_for_answer<W, R>(prompt: &str, output: &mut W, input: &mut R) -> io::Result<Option<String>>
where
    W: Write,
    R: BufRead,
{
    output.write_all(prompt.as_bytes())?;
    output.flush()?;

    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        return Ok(None);
    }

    Ok(Some(answer))
}

fn parse_answer(answer: &str) -> ConfirmationOutcome {
    match answer.trim().to_lowercase().as_str() {
        "y" | "ya" | "yes" => ConfirmationOutcome::Confirmed,
        _ => ConfirmationOutcome::Cancelled,
    }
}



/// Prints notifications to stderr, one per line.
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notification: Notification) {
        let label = match notification.kind {
            NotificationKind::Success => "berhasil",
            NotificationKind::Info => "info",
            NotificationKind::Error => "gagal",
        };

        eprintln!("[{}] {}", label, notification.message);
    }
}
