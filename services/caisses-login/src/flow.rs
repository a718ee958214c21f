//! The submit state machine.
//!
//! `LoginFlow` owns the lifecycle of one login attempt: validation, the
//! in-flight guard, and the interpretation of the outcome. Transitions
//! return the effects the page has to apply, so the machine itself never
//! touches the browser and is tested on the host.

use caisses_common::login::{LoginResponse, Role};
use caisses_common::routes;
use caisses_common::ui;

use crate::notify::NoticeKind;

pub const EMPTY_FIELDS_MSG: &str = "Veuillez remplir tous les champs";
pub const BAD_CREDENTIALS_MSG: &str = "Identifiants incorrects";
pub const UNREACHABLE_MSG: &str = "Erreur de connexion au serveur";
pub const LOGIN_OK_MSG: &str = "Connexion réussie !";

/// What the page has to do after a transition, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Put the submit button into its loading state.
    BeginLoading,
    /// Run the credentialed POST against the authentication endpoint.
    Fetch { username: String, password: String },
    /// Clear the loading state right away.
    ClearLoading,
    /// Clear the loading state after a delay. Scheduled in every
    /// settlement branch, so the spinner can never be left behind.
    ClearLoadingAfter { delay_ms: u32 },
    /// Show a notification.
    Notify { message: String, kind: NoticeKind },
    /// Run the one-shot shake animation on the login container.
    Shake,
    /// Move focus back to the username field.
    FocusUsername,
    /// Navigate to `path` once the delay has elapsed.
    NavigateAfter { path: &'static str, delay_ms: u32 },
}

/// How a settled request is interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// HTTP success and `success: true` in the body.
    Accepted { role: Role },
    /// A well formed rejection: an HTTP error status, or `success: false`.
    Rejected { message: Option<String> },
    /// The request never settled into JSON: the fetch threw, or the body
    /// could not be parsed.
    Unreachable,
}

impl Verdict {
    /// Classify a settled response. `http_ok` is the `Response.ok` flag;
    /// rejection bodies still parse, so their message is kept.
    pub fn classify(http_ok: bool, body: LoginResponse) -> Verdict {
        if http_ok && body.success {
            Verdict::Accepted { role: body.role() }
        } else {
            Verdict::Rejected {
                message: body.message,
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Submitting,
}

/// Tracks whether a request is in flight, which is all the submit logic
/// needs to remember between events.
#[derive(Debug)]
pub struct LoginFlow {
    phase: Phase,
}

impl LoginFlow {
    pub fn new() -> LoginFlow {
        LoginFlow { phase: Phase::Idle }
    }

    pub fn submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    /// A submit click. Empty fields are rejected before any network
    /// call, and a click while a request is in flight does nothing.
    pub fn submit(&mut self, username: &str, password: &str) -> Vec<Effect> {
        if self.phase == Phase::Submitting {
            return vec![];
        }
        let username = username.trim();
        let password = password.trim();
        if username.is_empty() || password.is_empty() {
            return vec![Effect::Notify {
                message: EMPTY_FIELDS_MSG.to_string(),
                kind: NoticeKind::Error,
            }];
        }
        self.phase = Phase::Submitting;
        vec![
            Effect::BeginLoading,
            Effect::Fetch {
                username: username.to_string(),
                password: password.to_string(),
            },
        ]
    }

    /// The in-flight request settled, whatever the outcome. Every branch
    /// ends with the delayed loading clear.
    pub fn settle(&mut self, verdict: Verdict) -> Vec<Effect> {
        self.phase = Phase::Idle;
        let mut effects = match verdict {
            Verdict::Accepted { role } => vec![
                Effect::Notify {
                    message: LOGIN_OK_MSG.to_string(),
                    kind: NoticeKind::Success,
                },
                Effect::NavigateAfter {
                    path: landing_page(role),
                    delay_ms: ui::REDIRECT_DELAY_MS,
                },
            ],
            Verdict::Rejected { message } => {
                // An empty message falls back to the stock text, like a
                // missing one.
                let message = message.filter(|message| !message.is_empty());
                auth_error(message.unwrap_or_else(|| BAD_CREDENTIALS_MSG.to_string()))
            }
            Verdict::Unreachable => auth_error(UNREACHABLE_MSG.to_string()),
        };
        effects.push(Effect::ClearLoadingAfter {
            delay_ms: ui::LOADING_CLEAR_MS,
        });
        effects
    }
}

impl Default for LoginFlow {
    fn default() -> LoginFlow {
        LoginFlow::new()
    }
}

/// Where a role lands after login. Only `Administrateur` is special.
pub fn landing_page(role: Role) -> &'static str {
    match role {
        Role::Administrateur => routes::ADMIN_ENTRY,
        _ => routes::DASHBOARD,
    }
}

/// The shared failure path: clear the spinner, tell the user, shake the
/// form, and hand focus back for a retry.
fn auth_error(message: String) -> Vec<Effect> {
    vec![
        Effect::ClearLoading,
        Effect::Notify {
            message,
            kind: NoticeKind::Error,
        },
        Effect::Shake,
        Effect::FocusUsername,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::internet::en::Password;
    use fake::faker::name::en::Name;
    use fake::Fake;
    use speculoos::prelude::*;

    #[test]
    fn submit_should_start_loading_then_fetch_the_trimmed_credentials() {
        let username: String = Name().fake();
        let password: String = Password(8..16).fake();
        let mut flow = LoginFlow::new();

        let effects = flow.submit(&format!("  {username} "), &format!("{password}  "));

        assert_that(&effects).is_equal_to(vec![
            Effect::BeginLoading,
            Effect::Fetch {
                username: username.clone(),
                password: password.clone(),
            },
        ]);
        assert_that(&flow.submitting()).is_true();
    }

    #[test]
    fn submit_should_reject_empty_fields_without_a_network_call() {
        let mut flow = LoginFlow::new();

        let effects = flow.submit("aminata", "   ");

        assert_that(&effects).is_equal_to(vec![Effect::Notify {
            message: EMPTY_FIELDS_MSG.to_string(),
            kind: NoticeKind::Error,
        }]);
        assert_that(&flow.submitting()).is_false();
    }

    #[test]
    fn submit_should_ignore_a_click_while_a_request_is_in_flight() {
        let mut flow = LoginFlow::new();
        let _ = flow.submit("aminata", "secret");

        let effects = flow.submit("aminata", "secret");

        assert_that(&effects).is_empty();
    }

    #[test]
    fn submit_should_accept_a_new_attempt_once_the_request_settled() {
        let mut flow = LoginFlow::new();
        let _ = flow.submit("aminata", "secret");
        let _ = flow.settle(Verdict::Rejected { message: None });

        let effects = flow.submit("aminata", "secret");

        assert_that(&effects).has_length(2);
    }

    #[test]
    fn an_accepted_administrateur_should_be_sent_to_the_admin_entry() {
        let mut flow = LoginFlow::new();
        let _ = flow.submit("admin", "secret");

        let effects = flow.settle(Verdict::Accepted {
            role: Role::Administrateur,
        });

        assert_that(&effects).is_equal_to(vec![
            Effect::Notify {
                message: LOGIN_OK_MSG.to_string(),
                kind: NoticeKind::Success,
            },
            Effect::NavigateAfter {
                path: routes::ADMIN_ENTRY,
                delay_ms: ui::REDIRECT_DELAY_MS,
            },
            Effect::ClearLoadingAfter {
                delay_ms: ui::LOADING_CLEAR_MS,
            },
        ]);
    }

    #[test]
    fn every_other_role_should_be_sent_to_the_dashboard() {
        for role in [Role::Presidente, Role::Secretaire, Role::Tresoriere, Role::Membre] {
            let mut flow = LoginFlow::new();
            let _ = flow.submit("membre", "secret");

            let effects = flow.settle(Verdict::Accepted { role });

            assert_that(&effects).contains(&Effect::NavigateAfter {
                path: routes::DASHBOARD,
                delay_ms: ui::REDIRECT_DELAY_MS,
            });
        }
    }

    #[test]
    fn a_rejection_should_show_the_backend_message_and_shake_the_form() {
        let mut flow = LoginFlow::new();
        let _ = flow.submit("aminata", "secret");

        let effects = flow.settle(Verdict::Rejected {
            message: Some("Compte désactivé".to_string()),
        });

        assert_that(&effects).is_equal_to(vec![
            Effect::ClearLoading,
            Effect::Notify {
                message: "Compte désactivé".to_string(),
                kind: NoticeKind::Error,
            },
            Effect::Shake,
            Effect::FocusUsername,
            Effect::ClearLoadingAfter {
                delay_ms: ui::LOADING_CLEAR_MS,
            },
        ]);
    }

    #[test]
    fn a_rejection_without_a_message_should_fall_back_to_the_stock_text() {
        for message in [None, Some(String::new())] {
            let mut flow = LoginFlow::new();
            let _ = flow.submit("aminata", "secret");

            let effects = flow.settle(Verdict::Rejected { message });

            assert_that(&effects).contains(&Effect::Notify {
                message: BAD_CREDENTIALS_MSG.to_string(),
                kind: NoticeKind::Error,
            });
        }
    }

    #[test]
    fn an_unreachable_backend_should_show_the_connectivity_message() {
        let mut flow = LoginFlow::new();
        let _ = flow.submit("aminata", "secret");

        let effects = flow.settle(Verdict::Unreachable);

        assert_that(&effects).contains(&Effect::Notify {
            message: UNREACHABLE_MSG.to_string(),
            kind: NoticeKind::Error,
        });
        assert_that(&flow.submitting()).is_false();
    }

    #[test]
    fn every_settlement_should_schedule_the_delayed_loading_clear() {
        for verdict in [
            Verdict::Accepted { role: Role::Membre },
            Verdict::Rejected { message: None },
            Verdict::Unreachable,
        ] {
            let mut flow = LoginFlow::new();
            let _ = flow.submit("aminata", "secret");

            let effects = flow.settle(verdict);

            assert_that(&effects).contains(&Effect::ClearLoadingAfter {
                delay_ms: ui::LOADING_CLEAR_MS,
            });
        }
    }

    #[test]
    fn classify_should_require_both_the_status_and_the_success_flag() {
        let accepted = LoginResponse {
            success: true,
            ..LoginResponse::default()
        };
        assert_that(&Verdict::classify(true, accepted.clone())).is_equal_to(Verdict::Accepted {
            role: Role::Membre,
        });
        // HTTP 401 with a parseable body is a rejection, not an outage.
        assert_that(&Verdict::classify(false, accepted)).is_equal_to(Verdict::Rejected {
            message: None,
        });
        let rejected = LoginResponse {
            success: false,
            message: Some("Identifiants incorrects".to_string()),
            ..LoginResponse::default()
        };
        assert_that(&Verdict::classify(true, rejected)).is_equal_to(Verdict::Rejected {
            message: Some("Identifiants incorrects".to_string()),
        });
    }
}
