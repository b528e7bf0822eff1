//! Voice dispatcher: maps a voice request to at most one control server
//! call and turns the outcome into speech.
//!
//! Every path ends in an [`Utterance`]; client failures never escape.

use powerctl_domain::intent::{Intent, VoiceRequest};
use powerctl_domain::mac::MacAddress;
use powerctl_domain::speech::{Language, Utterance};

use crate::ports::{ClientError, ControlClient};
use crate::services::phrasebook::Phrase;

/// Stateless dispatcher bound to one control server and one target MAC.
pub struct VoiceDispatcher<C> {
    client: C,
    mac: MacAddress,
}

impl<C: ControlClient> VoiceDispatcher<C> {
    /// Create a dispatcher that wakes `mac` on "turn on".
    pub fn new(client: C, mac: MacAddress) -> Self {
        Self { client, mac }
    }

    /// Answer a voice request.
    pub async fn dispatch(&self, request: VoiceRequest, language: Language) -> Utterance {
        match request {
            VoiceRequest::Launch => Utterance::ask(Phrase::Welcome.text(language)),
            VoiceRequest::Intent(intent) => self.handle_intent(intent, language).await,
            VoiceRequest::SessionEnded { reason } => {
                tracing::info!(reason = reason.as_deref().unwrap_or("unknown"), "session ended");
                Utterance::silent()
            }
            VoiceRequest::Unsupported(kind) => {
                tracing::warn!(request_type = %kind, "unsupported voice request");
                Self::apologize(language)
            }
        }
    }

    /// Catch-all answer when a request cannot be handled at all.
    #[must_use]
    pub fn apologize(language: Language) -> Utterance {
        Utterance::ask(Phrase::Apology.text(language))
    }

    async fn handle_intent(&self, intent: Intent, language: Language) -> Utterance {
        tracing::debug!(intent = intent.name(), "dispatching intent");
        match intent {
            Intent::TurnOnComputer => self.turn_on(language).await,
            Intent::TurnOffComputer => self.turn_off(language).await,
            Intent::CancelShutdown => self.cancel_shutdown(language).await,
            Intent::ComputerStatus => self.status(language).await,
            Intent::Help => Utterance::ask(Phrase::Help.text(language)),
            Intent::Fallback => Utterance::ask(Phrase::Fallback.text(language)),
            Intent::Cancel | Intent::Stop => Utterance::speak(Phrase::Goodbye.text(language)),
            Intent::Other(name) => Utterance::speak(Phrase::Reflect(&name).text(language)),
        }
    }

    async fn turn_on(&self, language: Language) -> Utterance {
        // Any 2xx counts as "on", even when the body does not decode.
        if matches!(
            self.client.health().await,
            Ok(_) | Err(ClientError::Decode(_))
        ) {
            return Utterance::speak(Phrase::AlreadyOn.text(language));
        }
        match self.client.wake(self.mac).await {
            Ok(()) => Utterance::speak(Phrase::WakeSent.text(language)),
            Err(err) => {
                log_failure("wake", &err);
                Utterance::speak(Phrase::WakeFailed(&err.to_string()).text(language))
            }
        }
    }

    async fn turn_off(&self, language: Language) -> Utterance {
        match self.client.shutdown().await {
            Ok(()) => Utterance::speak(Phrase::ShutdownStarted.text(language)),
            Err(err) => {
                log_failure("shutdown", &err);
                Utterance::speak(Phrase::ShutdownFailed(&err.to_string()).text(language))
            }
        }
    }

    async fn cancel_shutdown(&self, language: Language) -> Utterance {
        match self.client.cancel_shutdown().await {
            Ok(()) => Utterance::speak(Phrase::ShutdownCancelled.text(language)),
            Err(err) => {
                log_failure("cancel-shutdown", &err);
                Utterance::speak(Phrase::CancelFailed(&err.to_string()).text(language))
            }
        }
    }

    async fn status(&self, language: Language) -> Utterance {
        let phrase = match self.client.health().await {
            Ok(health) => Phrase::Uptime(health.uptime_minutes()),
            Err(err @ ClientError::Decode(_)) => {
                log_failure("health", &err);
                Phrase::StatusUnavailable
            }
            Err(_) => Phrase::ProbablyOff,
        };
        Utterance::speak(phrase.text(language))
    }
}

fn log_failure(call: &str, err: &ClientError) {
    tracing::error!(call, error = %err, "control server call failed");
}
