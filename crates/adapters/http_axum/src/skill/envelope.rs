//! Voice platform request and response envelopes.

use serde::{Deserialize, Serialize};

use powerctl_domain::intent::{Intent, VoiceRequest};
use powerctl_domain::speech::{Language, Utterance};

/// Incoming skill request. Only the fields the dispatcher needs are read;
/// session, context and signature data are ignored.
#[derive(Debug, Deserialize)]
pub struct RequestEnvelope {
    pub request: RequestBody,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestBody {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub intent: Option<IntentBody>,
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct IntentBody {
    pub name: String,
}

impl RequestEnvelope {
    /// Strip the envelope down to a [`VoiceRequest`] and the language to
    /// answer in.
    #[must_use]
    pub fn into_voice_request(self) -> (VoiceRequest, Language) {
        let RequestBody {
            kind,
            locale,
            intent,
            reason,
            ..
        } = self.request;
        let language = Language::from_locale(locale.as_deref());

        let request = match (kind.as_str(), intent) {
            ("LaunchRequest", _) => VoiceRequest::Launch,
            ("IntentRequest", Some(intent)) => {
                VoiceRequest::Intent(Intent::from_name(&intent.name))
            }
            ("SessionEndedRequest", _) => VoiceRequest::SessionEnded { reason },
            _ => VoiceRequest::Unsupported(kind),
        };

        (request, language)
    }
}

/// Outgoing skill response.
#[derive(Debug, Serialize)]
pub struct ResponseEnvelope {
    pub version: &'static str,
    pub response: ResponseBody,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    pub should_end_session: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

#[derive(Debug, Serialize)]
pub struct OutputSpeech {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub text: String,
}

impl OutputSpeech {
    fn plain(text: String) -> Self {
        Self {
            kind: "PlainText",
            text,
        }
    }
}

impl From<Utterance> for ResponseEnvelope {
    fn from(utterance: Utterance) -> Self {
        let should_end_session = utterance.ends_session();
        Self {
            version: "1.0",
            response: ResponseBody {
                output_speech: utterance.speech.map(OutputSpeech::plain),
                reprompt: utterance.reprompt.map(|text| Reprompt {
                    output_speech: OutputSpeech::plain(text),
                }),
                should_end_session,
            },
        }
    }
}
