//! The notification tray.
//!
//! At most one notification exists at a time: showing a new one drops
//! the current element on the spot, then the newcomer slides in, lingers,
//! and slides back out. A click dismisses it early. The tray tracks the
//! slide phases; the component schedules the timers and renders the slot.

use caisses_common::ui;

/// Visual category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
    Warning,
}

impl NoticeKind {
    /// The class the page stylesheet keys on (`notification error` etc).
    pub fn as_class(&self) -> &'static str {
        match self {
            NoticeKind::Info => "info",
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
            NoticeKind::Warning => "warning",
        }
    }

    /// The background gradient of each kind.
    pub fn gradient(&self) -> &'static str {
        match self {
            NoticeKind::Info => "background: linear-gradient(135deg, #4299e1, #3182ce);",
            NoticeKind::Success => "background: linear-gradient(135deg, #48bb78, #38a169);",
            NoticeKind::Error => "background: linear-gradient(135deg, #f56565, #e53e3e);",
            NoticeKind::Warning => "background: linear-gradient(135deg, #ed8936, #dd6b20);",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
}

/// Where the visible notification is in its slide animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticePhase {
    /// Created off-screen, about to slide in.
    Entering,
    /// Fully visible.
    Shown,
    /// Sliding back out, dropped when the transition ends.
    Leaving,
}

/// Timer work the component owes the tray.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayEffect {
    SlideIn { serial: u32, delay_ms: u32 },
    Dismiss { serial: u32, delay_ms: u32 },
    Remove { serial: u32, delay_ms: u32 },
}

#[derive(Debug)]
struct ActiveNotice {
    notice: Notice,
    phase: NoticePhase,
}

/// The visible notification, borrowed for rendering.
pub struct NoticeView<'a> {
    pub notice: &'a Notice,
    pub phase: NoticePhase,
    pub serial: u32,
}

/// The single notification slot.
///
/// `serial` grows with every shown notice, and timers carry the serial
/// they were scheduled for: a timer that outlives its notice is ignored.
#[derive(Debug, Default)]
pub struct Tray {
    slot: Option<ActiveNotice>,
    serial: u32,
}

impl Tray {
    pub fn current(&self) -> Option<NoticeView<'_>> {
        self.slot.as_ref().map(|active| NoticeView {
            notice: &active.notice,
            phase: active.phase,
            serial: self.serial,
        })
    }

    /// Show a notification, replacing whatever was on screen.
    pub fn show(&mut self, message: impl Into<String>, kind: NoticeKind) -> Vec<TrayEffect> {
        self.serial += 1;
        self.slot = Some(ActiveNotice {
            notice: Notice {
                message: message.into(),
                kind,
            },
            phase: NoticePhase::Entering,
        });
        vec![
            TrayEffect::SlideIn {
                serial: self.serial,
                delay_ms: ui::NOTICE_SLIDE_IN_MS,
            },
            TrayEffect::Dismiss {
                serial: self.serial,
                delay_ms: ui::NOTICE_LINGER_MS,
            },
        ]
    }

    /// The slide-in timer fired. True when the view changed.
    pub fn slide_in(&mut self, serial: u32) -> bool {
        if serial != self.serial {
            return false;
        }
        match &mut self.slot {
            Some(active) if active.phase == NoticePhase::Entering => {
                active.phase = NoticePhase::Shown;
                true
            }
            _ => false,
        }
    }

    /// Start the slide-out, from the linger timer or a click.
    pub fn dismiss(&mut self, serial: u32) -> Vec<TrayEffect> {
        if serial != self.serial {
            return vec![];
        }
        match &mut self.slot {
            // A click followed by the linger timer must not schedule a
            // second removal.
            Some(active) if active.phase != NoticePhase::Leaving => {
                active.phase = NoticePhase::Leaving;
                vec![TrayEffect::Remove {
                    serial: self.serial,
                    delay_ms: ui::NOTICE_SLIDE_OUT_MS,
                }]
            }
            _ => vec![],
        }
    }

    /// The slide-out transition ended, drop the element. True when the
    /// view changed.
    pub fn remove(&mut self, serial: u32) -> bool {
        if serial != self.serial {
            return false;
        }
        self.slot.take().is_some()
    }
}

/// The inline style of the notification element: the fixed overlay
/// styling plus the kind gradient, with the transform driven by the
/// slide phase.
pub fn style_for(kind: NoticeKind, phase: NoticePhase) -> String {
    let transform = match phase {
        NoticePhase::Shown => "translateX(0)",
        NoticePhase::Entering | NoticePhase::Leaving => "translateX(100%)",
    };
    format!(
        "position: fixed; top: 20px; right: 20px; padding: 16px 24px; \
         border-radius: 12px; color: white; font-weight: 500; z-index: 1000; \
         transform: {transform}; transition: transform 0.3s ease; \
         box-shadow: 0 10px 25px rgba(0,0,0,0.1); {}",
        kind.gradient()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use speculoos::prelude::*;

    #[test]
    fn show_should_schedule_the_slide_in_and_the_linger() {
        let mut tray = Tray::default();

        let effects = tray.show("Connexion réussie !", NoticeKind::Success);

        assert_that(&effects).is_equal_to(vec![
            TrayEffect::SlideIn {
                serial: 1,
                delay_ms: ui::NOTICE_SLIDE_IN_MS,
            },
            TrayEffect::Dismiss {
                serial: 1,
                delay_ms: ui::NOTICE_LINGER_MS,
            },
        ]);
        let view = tray.current().expect("a visible notification");
        assert_that(&view.phase).is_equal_to(NoticePhase::Entering);
    }

    #[test]
    fn show_should_replace_the_notification_on_screen() {
        let mut tray = Tray::default();
        let _ = tray.show("première", NoticeKind::Info);

        let _ = tray.show("seconde", NoticeKind::Error);

        let view = tray.current().expect("a visible notification");
        assert_that(&view.notice.message.as_str()).is_equal_to("seconde");
        assert_that(&view.serial).is_equal_to(2);
    }

    #[test]
    fn a_notification_should_slide_in_then_out_then_disappear() {
        let mut tray = Tray::default();
        let _ = tray.show("message", NoticeKind::Info);

        assert_that(&tray.slide_in(1)).is_true();
        let effects = tray.dismiss(1);
        assert_that(&effects).is_equal_to(vec![TrayEffect::Remove {
            serial: 1,
            delay_ms: ui::NOTICE_SLIDE_OUT_MS,
        }]);
        assert_that(&tray.remove(1)).is_true();
        assert_that(&tray.current().is_none()).is_true();
    }

    #[test]
    fn a_click_then_the_linger_timer_should_remove_only_once() {
        let mut tray = Tray::default();
        let _ = tray.show("message", NoticeKind::Info);
        let _ = tray.slide_in(1);

        let click = tray.dismiss(1);
        let linger = tray.dismiss(1);

        assert_that(&click).has_length(1);
        assert_that(&linger).is_empty();
    }

    #[test]
    fn timers_of_a_replaced_notification_should_be_ignored() {
        let mut tray = Tray::default();
        let _ = tray.show("première", NoticeKind::Info);
        let _ = tray.show("seconde", NoticeKind::Info);

        // Leftover timers from the first notification.
        assert_that(&tray.slide_in(1)).is_false();
        assert_that(&tray.dismiss(1)).is_empty();
        assert_that(&tray.remove(1)).is_false();

        let view = tray.current().expect("a visible notification");
        assert_that(&view.notice.message.as_str()).is_equal_to("seconde");
    }

    #[test]
    fn style_should_move_the_notification_with_its_phase() {
        let entering = style_for(NoticeKind::Error, NoticePhase::Entering);
        let shown = style_for(NoticeKind::Error, NoticePhase::Shown);
        let leaving = style_for(NoticeKind::Error, NoticePhase::Leaving);

        assert_that(&entering.contains("translateX(100%)")).is_true();
        assert_that(&shown.contains("translateX(0)")).is_true();
        assert_that(&leaving.contains("translateX(100%)")).is_true();
        assert_that(&shown.contains(NoticeKind::Error.gradient())).is_true();
    }

    #[test]
    fn each_kind_should_keep_its_gradient_and_class() {
        assert_that(&NoticeKind::Info.as_class()).is_equal_to("info");
        assert_that(&NoticeKind::Success.as_class()).is_equal_to("success");
        assert_that(&NoticeKind::Error.as_class()).is_equal_to("error");
        assert_that(&NoticeKind::Warning.as_class()).is_equal_to("warning");
        assert_that(&NoticeKind::Success.gradient())
            .is_equal_to("background: linear-gradient(135deg, #48bb78, #38a169);");
    }
}
