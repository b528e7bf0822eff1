//! Shared application state for axum handlers.

use std::sync::Arc;

use powerctl_app::auth::ApiKey;
use powerctl_app::ports::{ControlClient, PowerControl, WakeSender};
use powerctl_app::services::control_service::ControlService;
use powerctl_app::services::voice_dispatcher::VoiceDispatcher;

/// State shared across the control API handlers.
///
/// Generic over the power and wake ports to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<P, W> {
    /// Shutdown, cancel, wake and uptime use-cases.
    pub control_service: Arc<ControlService<P, W>>,
    /// Secret required on mutating routes.
    pub api_key: Arc<ApiKey>,
}

impl<P, W> Clone for AppState<P, W> {
    fn clone(&self) -> Self {
        Self {
            control_service: Arc::clone(&self.control_service),
            api_key: Arc::clone(&self.api_key),
        }
    }
}

impl<P, W> AppState<P, W>
where
    P: PowerControl + Send + Sync + 'static,
    W: WakeSender + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(control_service: ControlService<P, W>, api_key: ApiKey) -> Self {
        Self {
            control_service: Arc::new(control_service),
            api_key: Arc::new(api_key),
        }
    }
}

/// State shared across the skill endpoint handlers.
pub struct SkillState<C> {
    pub dispatcher: Arc<VoiceDispatcher<C>>,
}

impl<C> Clone for SkillState<C> {
    fn clone(&self) -> Self {
        Self {
            dispatcher: Arc::clone(&self.dispatcher),
        }
    }
}

impl<C> SkillState<C>
where
    C: ControlClient + Send + Sync + 'static,
{
    pub fn new(dispatcher: VoiceDispatcher<C>) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
        }
    }
}
