//! Best-effort ad slot delivery, modeled as an explicit state machine.
//!
//! The daemon never touches the DOM or real timers: it emits effects
//! (inject the loader script, create the slot element, push a display
//! request, schedule/cancel a retry timer, show the fallback block) and the
//! front end reports back events. Every failure mode is downgraded to a
//! retry or to the terminal fallback; nothing escapes as an error.
//!
//! Phase graph:
//! `scriptLoading -> slotCreated -> pushRequested -> {loaded | failed}`,
//! `failed` retried up to `max_attempts` with linearly growing delay, then
//! `fallback` (terminal, entered exactly once). Ad-block detection, when
//! enabled, short-circuits to `fallback` from any non-terminal phase.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotConfig {
    pub script_url: String,
    pub client_id: String,
    pub slot: String,
    pub format: String,
    pub responsive: bool,
    pub show_fallback: bool,
    pub fallback_text: String,
    pub max_attempts: u32,
    pub retry_delay_ms: u64,
    pub retry_delay_growth_ms: u64,
    pub detect_ad_block: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    ScriptLoading,
    SlotCreated,
    PushRequested,
    Loaded,
    Failed,
    Fallback,
}

impl Phase {
    pub fn is_terminal(self) -> bool {
        self == Phase::Fallback
    }
}

/// Events the front end reports back to the machine.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SlotEvent {
    ScriptLoaded,
    ScriptError,
    /// The slot element exists in the document and can receive a push.
    SlotReady,
    PushAccepted,
    #[serde(rename_all = "camelCase")]
    PushFailed {
        #[serde(default)]
        reason: String,
    },
    /// Rendered slot dimensions; a zero or negative height means the network
    /// delivered nothing.
    #[serde(rename_all = "camelCase")]
    SlotMeasured { height: i64 },
    #[serde(rename_all = "camelCase")]
    RetryTimerFired { token: String },
    AdBlockDetected,
}

/// Effects the front end must execute.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Effect {
    #[serde(rename_all = "camelCase")]
    InjectScript { url: String },
    #[serde(rename_all = "camelCase")]
    CreateSlotElement {
        client_id: String,
        slot: String,
        format: String,
        responsive: bool,
    },
    RequestDisplay,
    #[serde(rename_all = "camelCase")]
    ScheduleRetry { delay_ms: u64, token: String },
    #[serde(rename_all = "camelCase")]
    CancelTimer { token: String },
    ClearSlot,
    #[serde(rename_all = "camelCase")]
    ShowFallback { visible: bool, text: String },
}

pub struct AdSlot {
    id: String,
    config: SlotConfig,
    phase: Phase,
    /// Failed display attempts so far.
    attempts: u32,
    pending_timer: Option<String>,
}

impl AdSlot {
    /// Create a slot and return its initial effects. `script_injected` is
    /// true when the loader script for this URL was already injected by an
    /// earlier slot in this process; the script tag is never duplicated.
    pub fn new(config: SlotConfig, script_injected: bool) -> (Self, Vec<Effect>) {
        let mut slot = AdSlot {
            id: Uuid::new_v4().to_string(),
            config,
            phase: Phase::ScriptLoading,
            attempts: 0,
            pending_timer: None,
        };
        let effects = if script_injected {
            // The loader already executed; skip straight to slot creation.
            slot.phase = Phase::SlotCreated;
            vec![slot.create_slot_effect()]
        } else {
            vec![Effect::InjectScript {
                url: slot.config.script_url.clone(),
            }]
        };
        (slot, effects)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn has_pending_timer(&self) -> bool {
        self.pending_timer.is_some()
    }

    fn create_slot_effect(&self) -> Effect {
        Effect::CreateSlotElement {
            client_id: self.config.client_id.clone(),
            slot: self.config.slot.clone(),
            format: self.config.format.clone(),
            responsive: self.config.responsive,
        }
    }

    /// Settle into the terminal fallback phase. Guarded by the caller so it
    /// runs at most once per slot.
    fn fall_back(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();
        if let Some(token) = self.pending_timer.take() {
            effects.push(Effect::CancelTimer { token });
        }
        effects.push(Effect::ClearSlot);
        effects.push(Effect::ShowFallback {
            visible: self.config.show_fallback,
            text: self.config.fallback_text.clone(),
        });
        self.phase = Phase::Fallback;
        effects
    }

    /// Count one failed attempt and either schedule a retry or give up.
    fn record_failure(&mut self) -> Vec<Effect> {
        self.attempts += 1;
        if self.attempts >= self.config.max_attempts {
            return self.fall_back();
        }
        let delay_ms = self.config.retry_delay_ms
            + self.config.retry_delay_growth_ms * u64::from(self.attempts - 1);
        let token = Uuid::new_v4().to_string();
        self.pending_timer = Some(token.clone());
        self.phase = Phase::Failed;
        vec![Effect::ScheduleRetry { delay_ms, token }]
    }

    /// Advance the machine. Unknown, stale, or post-terminal events are
    /// ignored rather than rejected.
    pub fn handle(&mut self, event: SlotEvent) -> Vec<Effect> {
        if self.phase.is_terminal() {
            return Vec::new();
        }
        match event {
            SlotEvent::ScriptLoaded => {
                if self.phase == Phase::ScriptLoading {
                    self.phase = Phase::SlotCreated;
                    vec![self.create_slot_effect()]
                } else {
                    Vec::new()
                }
            }
            SlotEvent::ScriptError => {
                if self.phase == Phase::ScriptLoading {
                    self.record_failure()
                } else {
                    Vec::new()
                }
            }
            SlotEvent::SlotReady => {
                if self.phase == Phase::SlotCreated {
                    self.phase = Phase::PushRequested;
                    vec![Effect::RequestDisplay]
                } else {
                    Vec::new()
                }
            }
            SlotEvent::PushAccepted => {
                if self.phase == Phase::PushRequested {
                    self.phase = Phase::Loaded;
                }
                Vec::new()
            }
            SlotEvent::PushFailed { .. } => {
                if self.phase == Phase::PushRequested {
                    self.record_failure()
                } else {
                    Vec::new()
                }
            }
            SlotEvent::SlotMeasured { height } => match self.phase {
                Phase::PushRequested | Phase::Loaded if height <= 0 => self.record_failure(),
                Phase::PushRequested => {
                    self.phase = Phase::Loaded;
                    Vec::new()
                }
                _ => Vec::new(),
            },
            SlotEvent::RetryTimerFired { token } => {
                if self.phase == Phase::Failed && self.pending_timer.as_deref() == Some(token.as_str()) {
                    self.pending_timer = None;
                    // The script tag is never re-injected; a retry rebuilds
                    // the slot element and pushes again.
                    self.phase = Phase::SlotCreated;
                    vec![Effect::ClearSlot, self.create_slot_effect()]
                } else {
                    Vec::new()
                }
            }
            SlotEvent::AdBlockDetected => {
                if self.config.detect_ad_block {
                    self.fall_back()
                } else {
                    Vec::new()
                }
            }
        }
    }

    /// The widget is being removed from the page. Only a pending retry timer
    /// needs releasing; the phase is left as-is.
    pub fn teardown(&mut self) -> Vec<Effect> {
        match self.pending_timer.take() {
            Some(token) => vec![Effect::CancelTimer { token }],
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(max_attempts: u32) -> SlotConfig {
        SlotConfig {
            script_url: "https://ads.example/loader.js?client=ca-pub-1".to_string(),
            client_id: "ca-pub-1".to_string(),
            slot: "5962076197".to_string(),
            format: "auto".to_string(),
            responsive: true,
            show_fallback: true,
            fallback_text: "مساحة إعلانية".to_string(),
            max_attempts,
            retry_delay_ms: 1000,
            retry_delay_growth_ms: 1000,
            detect_ad_block: false,
        }
    }

    fn retry_token(effects: &[Effect]) -> String {
        effects
            .iter()
            .find_map(|e| match e {
                Effect::ScheduleRetry { token, .. } => Some(token.clone()),
                _ => None,
            })
            .expect("retry scheduled")
    }

    #[test]
    fn happy_path_reaches_loaded() {
        let (mut slot, effects) = AdSlot::new(config(3), false);
        assert_eq!(
            effects,
            vec![Effect::InjectScript {
                url: "https://ads.example/loader.js?client=ca-pub-1".to_string()
            }]
        );

        let effects = slot.handle(SlotEvent::ScriptLoaded);
        assert!(matches!(effects[0], Effect::CreateSlotElement { .. }));
        assert_eq!(slot.phase(), Phase::SlotCreated);

        let effects = slot.handle(SlotEvent::SlotReady);
        assert_eq!(effects, vec![Effect::RequestDisplay]);
        assert_eq!(slot.phase(), Phase::PushRequested);

        slot.handle(SlotEvent::PushAccepted);
        assert_eq!(slot.phase(), Phase::Loaded);
        assert_eq!(slot.attempts(), 0);
    }

    #[test]
    fn already_injected_script_is_not_injected_again() {
        let (mut slot, effects) = AdSlot::new(config(3), true);
        assert_eq!(effects.len(), 1);
        assert!(matches!(effects[0], Effect::CreateSlotElement { .. }));
        assert_eq!(slot.phase(), Phase::SlotCreated);

        let effects = slot.handle(SlotEvent::SlotReady);
        assert_eq!(effects, vec![Effect::RequestDisplay]);
    }

    #[test]
    fn retry_delays_grow_linearly() {
        let (mut slot, _) = AdSlot::new(config(5), false);
        slot.handle(SlotEvent::ScriptLoaded);
        slot.handle(SlotEvent::SlotReady);

        let effects = slot.handle(SlotEvent::PushFailed {
            reason: "adsbygoogle missing".to_string(),
        });
        let Effect::ScheduleRetry { delay_ms, .. } = &effects[0] else {
            panic!("expected retry, got {effects:?}");
        };
        assert_eq!(*delay_ms, 1000);

        let token = retry_token(&effects);
        slot.handle(SlotEvent::RetryTimerFired { token });
        slot.handle(SlotEvent::SlotReady);
        let effects = slot.handle(SlotEvent::PushFailed {
            reason: String::new(),
        });
        let Effect::ScheduleRetry { delay_ms, .. } = &effects[0] else {
            panic!("expected retry, got {effects:?}");
        };
        assert_eq!(*delay_ms, 2000);
    }

    #[test]
    fn exhausted_retries_settle_into_fallback_exactly_once() {
        let (mut slot, _) = AdSlot::new(config(2), false);
        let effects = slot.handle(SlotEvent::ScriptError);
        let token = retry_token(&effects);
        assert_eq!(slot.phase(), Phase::Failed);

        slot.handle(SlotEvent::RetryTimerFired { token });
        slot.handle(SlotEvent::SlotReady);
        let effects = slot.handle(SlotEvent::SlotMeasured { height: 0 });
        assert!(effects.contains(&Effect::ShowFallback {
            visible: true,
            text: "مساحة إعلانية".to_string(),
        }));
        assert_eq!(slot.phase(), Phase::Fallback);

        // Terminal: nothing fires anymore, no matter what arrives.
        assert!(slot.handle(SlotEvent::ScriptLoaded).is_empty());
        assert!(slot
            .handle(SlotEvent::PushFailed {
                reason: String::new()
            })
            .is_empty());
        assert!(slot
            .handle(SlotEvent::RetryTimerFired {
                token: "stale".to_string()
            })
            .is_empty());
        assert_eq!(slot.phase(), Phase::Fallback);
    }

    #[test]
    fn stale_timer_tokens_are_ignored() {
        let (mut slot, _) = AdSlot::new(config(3), false);
        let effects = slot.handle(SlotEvent::ScriptError);
        let real = retry_token(&effects);

        let effects = slot.handle(SlotEvent::RetryTimerFired {
            token: "not-the-token".to_string(),
        });
        assert!(effects.is_empty());
        assert_eq!(slot.phase(), Phase::Failed);

        let effects = slot.handle(SlotEvent::RetryTimerFired { token: real });
        assert_eq!(effects.len(), 2);
        assert_eq!(slot.phase(), Phase::SlotCreated);
    }

    #[test]
    fn ad_block_detection_short_circuits_when_enabled() {
        let mut cfg = config(5);
        cfg.detect_ad_block = true;
        cfg.show_fallback = false;
        let (mut slot, _) = AdSlot::new(cfg, false);

        let effects = slot.handle(SlotEvent::AdBlockDetected);
        assert!(effects.contains(&Effect::ShowFallback {
            visible: false,
            text: "مساحة إعلانية".to_string(),
        }));
        assert_eq!(slot.phase(), Phase::Fallback);
        assert_eq!(slot.attempts(), 0);
    }

    #[test]
    fn ad_block_event_is_ignored_when_detection_disabled() {
        let (mut slot, _) = AdSlot::new(config(3), false);
        assert!(slot.handle(SlotEvent::AdBlockDetected).is_empty());
        assert_eq!(slot.phase(), Phase::ScriptLoading);
    }

    #[test]
    fn teardown_cancels_only_a_pending_timer() {
        let (mut slot, _) = AdSlot::new(config(3), false);
        assert!(slot.teardown().is_empty());

        let (mut slot, _) = AdSlot::new(config(3), false);
        let effects = slot.handle(SlotEvent::ScriptError);
        let token = retry_token(&effects);
        assert_eq!(slot.teardown(), vec![Effect::CancelTimer { token }]);
        assert!(!slot.has_pending_timer());
    }

    #[test]
    fn zero_height_after_load_triggers_retry() {
        let (mut slot, _) = AdSlot::new(config(3), false);
        slot.handle(SlotEvent::ScriptLoaded);
        slot.handle(SlotEvent::SlotReady);
        slot.handle(SlotEvent::PushAccepted);
        assert_eq!(slot.phase(), Phase::Loaded);

        let effects = slot.handle(SlotEvent::SlotMeasured { height: 0 });
        assert!(matches!(effects[0], Effect::ScheduleRetry { .. }));
        assert_eq!(slot.phase(), Phase::Failed);
    }
}
