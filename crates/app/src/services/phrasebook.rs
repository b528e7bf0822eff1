//! Canned sentences spoken by the voice dispatcher.

use powerctl_domain::speech::Language;

/// Everything the skill can say.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phrase<'a> {
    Welcome,
    AlreadyOn,
    WakeSent,
    WakeFailed(&'a str),
    ShutdownStarted,
    ShutdownFailed(&'a str),
    ShutdownCancelled,
    CancelFailed(&'a str),
    Uptime(u64),
    ProbablyOff,
    StatusUnavailable,
    Help,
    Fallback,
    Goodbye,
    Reflect(&'a str),
    Apology,
}

impl Phrase<'_> {
    /// Render the phrase in `language`.
    #[must_use]
    pub fn text(self, language: Language) -> String {
        let sentence = match language {
            Language::Portuguese => self.portuguese(),
            Language::English => self.english(),
        };
        match self {
            Self::WakeFailed(detail)
            | Self::ShutdownFailed(detail)
            | Self::CancelFailed(detail) => format!("{sentence} {detail}"),
            Self::Uptime(minutes) => {
                let unit = match (language, minutes) {
                    (Language::Portuguese, 1) => "minuto",
                    (Language::Portuguese, _) => "minutos",
                    (Language::English, 1) => "minute",
                    (Language::English, _) => "minutes",
                };
                format!("{sentence} {minutes} {unit}.")
            }
            Self::Reflect(name) => format!("{sentence} {name}"),
            _ => sentence.to_string(),
        }
    }

    fn portuguese(self) -> &'static str {
        match self {
            Self::Welcome => {
                "Bem-vindo ao Controle do Computador! Você pode pedir para eu ligar ou desligar seu computador. O que gostaria de fazer?"
            }
            Self::AlreadyOn => "Seu computador já está ligado e respondendo.",
            Self::WakeSent => {
                "Enviei um sinal para acordar seu computador. Ele deve estar ligando agora."
            }
            Self::WakeFailed(_) => "Não consegui ligar seu computador.",
            Self::ShutdownStarted => {
                "Iniciei o processo de desligamento. Seu computador vai desligar em um minuto."
            }
            Self::ShutdownFailed(_) => "Não consegui desligar seu computador.",
            Self::ShutdownCancelled => {
                "O desligamento foi cancelado. Seu computador vai continuar ligado."
            }
            Self::CancelFailed(_) => "Não consegui cancelar o desligamento.",
            Self::Uptime(_) => "Seu computador está ligado e funcionando há",
            Self::ProbablyOff => "Seu computador parece estar desligado ou não está respondendo.",
            Self::StatusUnavailable => {
                "Não consegui verificar o status do seu computador no momento."
            }
            Self::Help => {
                "Você pode me pedir para ligar ou desligar seu computador, verificar o status, ou cancelar um desligamento. Tente falar \"ligar meu computador\" ou \"desligar meu computador\"."
            }
            Self::Fallback => {
                "Desculpe, não entendi isso. Você pode me pedir para ligar ou desligar seu computador, ou verificar o status."
            }
            Self::Goodbye => "Tchau!",
            // Diagnostic echo for the skill developer; never localised.
            Self::Reflect(_) => "You just triggered",
            Self::Apology => {
                "Desculpe, tive problemas para fazer o que você pediu. Tente novamente."
            }
        }
    }

    fn english(self) -> &'static str {
        match self {
            Self::Welcome => {
                "Welcome to Computer Control! You can ask me to turn your computer on or off. What would you like to do?"
            }
            Self::AlreadyOn => "Your computer is already on and responding.",
            Self::WakeSent => {
                "I sent a wake-up signal to your computer. It should be starting now."
            }
            Self::WakeFailed(_) => "I couldn't turn on your computer.",
            Self::ShutdownStarted => {
                "I started the shutdown. Your computer will turn off in one minute."
            }
            Self::ShutdownFailed(_) => "I couldn't turn off your computer.",
            Self::ShutdownCancelled => "The shutdown was cancelled. Your computer will stay on.",
            Self::CancelFailed(_) => "I couldn't cancel the shutdown.",
            Self::Uptime(_) => "Your computer has been on and running for",
            Self::ProbablyOff => "Your computer seems to be off or is not responding.",
            Self::StatusUnavailable => "I couldn't check your computer's status right now.",
            Self::Help => {
                "You can ask me to turn your computer on or off, check its status, or cancel a shutdown. Try saying \"turn on my computer\" or \"turn off my computer\"."
            }
            Self::Fallback => {
                "Sorry, I didn't get that. You can ask me to turn your computer on or off, or to check its status."
            }
            Self::Goodbye => "Goodbye!",
            Self::Reflect(_) => "You just triggered",
            Self::Apology => "Sorry, I had trouble doing what you asked. Please try again.",
        }
    }
}
