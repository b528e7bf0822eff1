//! Voice intents and the requests that carry them.

/// The closed set of intents the skill understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    TurnOnComputer,
    TurnOffComputer,
    CancelShutdown,
    ComputerStatus,
    Help,
    Fallback,
    Cancel,
    Stop,
    /// Anything else the voice model routed to us.
    Other(String),
}

impl Intent {
    /// Map a platform intent name to an [`Intent`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "TurnOnComputerIntent" => Self::TurnOnComputer,
            "TurnOffComputerIntent" => Self::TurnOffComputer,
            "CancelShutdownIntent" => Self::CancelShutdown,
            "ComputerStatusIntent" => Self::ComputerStatus,
            "AMAZON.HelpIntent" => Self::Help,
            "AMAZON.FallbackIntent" => Self::Fallback,
            "AMAZON.CancelIntent" => Self::Cancel,
            "AMAZON.StopIntent" => Self::Stop,
            other => Self::Other(other.to_string()),
        }
    }

    /// Platform name of this intent.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::TurnOnComputer => "TurnOnComputerIntent",
            Self::TurnOffComputer => "TurnOffComputerIntent",
            Self::CancelShutdown => "CancelShutdownIntent",
            Self::ComputerStatus => "ComputerStatusIntent",
            Self::Help => "AMAZON.HelpIntent",
            Self::Fallback => "AMAZON.FallbackIntent",
            Self::Cancel => "AMAZON.CancelIntent",
            Self::Stop => "AMAZON.StopIntent",
            Self::Other(name) => name,
        }
    }
}

/// A voice platform request, stripped of its envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoiceRequest {
    /// The user opened the skill without asking for anything.
    Launch,
    Intent(Intent),
    /// The platform closed the session.
    SessionEnded { reason: Option<String> },
    /// A request type the skill does not handle.
    Unsupported(String),
}
