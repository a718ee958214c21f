//! The login page component.
//!
//! The markup contract (`loginForm`, `loginBtn`, `username`, `password`,
//! `password-toggle`, `login-container`) is the one the page stylesheet
//! and the backend templates already key on.

use gloo::timers::callback::Timeout;
use web_sys::{HtmlInputElement, SubmitEvent};
use yew::{classes, html, Component, Context, Html, NodeRef};

use caisses_common::login::LoginRequest;
use caisses_common::ui;

use crate::components::backend::{self, Settlement};
use crate::flow::{Effect, LoginFlow, Verdict};
use crate::notify::{self, Tray, TrayEffect};
use crate::pwa;

pub enum Msg {
    TogglePassword,
    Submit,
    Settled(Verdict),
    LoadingCleared,
    ShakeEnded,
    Navigate(&'static str),
    NoticeSlideIn(u32),
    NoticeDismiss(u32),
    NoticeRemove(u32),
}

pub struct Login {
    flow: LoginFlow,
    tray: Tray,
    username: NodeRef,
    password: NodeRef,
    password_visible: bool,
    loading: bool,
    shaking: bool,
}

impl Login {
    fn focus_username(&self) {
        if let Some(input) = self.username.cast::<HtmlInputElement>() {
            let _ = input.focus();
        }
    }

    fn field_value(&self, field: &NodeRef) -> String {
        field
            .cast::<HtmlInputElement>()
            .map(|input| input.value())
            .unwrap_or_default()
    }

    /// Apply the effects of a flow transition: flip the rendered state,
    /// arm the timers, run the request.
    fn run_effects(&mut self, ctx: &Context<Self>, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::BeginLoading => self.loading = true,
                Effect::ClearLoading => self.loading = false,
                Effect::ClearLoadingAfter { delay_ms } => {
                    let link = ctx.link().clone();
                    Timeout::new(delay_ms, move || link.send_message(Msg::LoadingCleared))
                        .forget();
                }
                Effect::Fetch { username, password } => {
                    ctx.link().send_future(async move {
                        let credentials = LoginRequest { username, password };
                        match backend::submit_login(&credentials).await {
                            Ok(Settlement { http_ok, body }) => {
                                Msg::Settled(Verdict::classify(http_ok, body))
                            }
                            Err(err) => {
                                gloo_console::error!("login request failed:", err.to_string());
                                Msg::Settled(Verdict::Unreachable)
                            }
                        }
                    });
                }
                Effect::Notify { message, kind } => {
                    let tray_effects = self.tray.show(message, kind);
                    self.run_tray_effects(ctx, tray_effects);
                }
                Effect::Shake => {
                    self.shaking = true;
                    let link = ctx.link().clone();
                    Timeout::new(ui::SHAKE_MS, move || link.send_message(Msg::ShakeEnded))
                        .forget();
                }
                Effect::FocusUsername => self.focus_username(),
                Effect::NavigateAfter { path, delay_ms } => {
                    let link = ctx.link().clone();
                    Timeout::new(delay_ms, move || link.send_message(Msg::Navigate(path)))
                        .forget();
                }
            }
        }
    }

    fn run_tray_effects(&mut self, ctx: &Context<Self>, effects: Vec<TrayEffect>) {
        for effect in effects {
            let link = ctx.link().clone();
            match effect {
                TrayEffect::SlideIn { serial, delay_ms } => {
                    Timeout::new(delay_ms, move || {
                        link.send_message(Msg::NoticeSlideIn(serial))
                    })
                    .forget();
                }
                TrayEffect::Dismiss { serial, delay_ms } => {
                    Timeout::new(delay_ms, move || {
                        link.send_message(Msg::NoticeDismiss(serial))
                    })
                    .forget();
                }
                TrayEffect::Remove { serial, delay_ms } => {
                    Timeout::new(delay_ms, move || {
                        link.send_message(Msg::NoticeRemove(serial))
                    })
                    .forget();
                }
            }
        }
    }

    fn view_notice(&self, ctx: &Context<Self>) -> Html {
        match self.tray.current() {
            Some(view) => {
                let serial = view.serial;
                let onclick = ctx.link().callback(move |_| Msg::NoticeDismiss(serial));
                html! {
                    <div class={classes!("notification", view.notice.kind.as_class())}
                         style={notify::style_for(view.notice.kind, view.phase)}
                         onclick={onclick}>
                        { view.notice.message.clone() }
                    </div>
                }
            }
            None => html! {},
        }
    }
}

impl Component for Login {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            flow: LoginFlow::new(),
            tray: Tray::default(),
            username: NodeRef::default(),
            password: NodeRef::default(),
            password_visible: false,
            loading: false,
            shaking: false,
        }
    }

    // Focus is only ever moved by the failure path; the page load
    // leaves it alone.
    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if first_render {
            pwa::register_service_worker();
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::TogglePassword => {
                self.password_visible = !self.password_visible;
                true
            }
            Msg::Submit => {
                let username = self.field_value(&self.username);
                let password = self.field_value(&self.password);
                let effects = self.flow.submit(&username, &password);
                self.run_effects(ctx, effects);
                true
            }
            Msg::Settled(verdict) => {
                let effects = self.flow.settle(verdict);
                self.run_effects(ctx, effects);
                true
            }
            Msg::LoadingCleared => {
                self.loading = false;
                true
            }
            Msg::ShakeEnded => {
                self.shaking = false;
                true
            }
            Msg::Navigate(path) => {
                if let Err(err) = gloo::utils::window().location().set_href(path) {
                    gloo_console::error!("navigation failed:", err);
                }
                false
            }
            Msg::NoticeSlideIn(serial) => self.tray.slide_in(serial),
            Msg::NoticeDismiss(serial) => {
                let effects = self.tray.dismiss(serial);
                let changed = !effects.is_empty();
                self.run_tray_effects(ctx, effects);
                changed
            }
            Msg::NoticeRemove(serial) => self.tray.remove(serial),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|event: SubmitEvent| {
            event.prevent_default();
            Msg::Submit
        });
        let ontoggle = ctx.link().callback(|_| Msg::TogglePassword);
        let container_style = if self.shaking {
            "animation: shake 0.5s ease-in-out"
        } else {
            ""
        };
        html! {
            <>
                <div class="login-container" style={container_style}>
                    <form id="loginForm" onsubmit={onsubmit}>
                        <div class="form-group">
                            <label for="username">{ "Nom d'utilisateur" }</label>
                            <input id="username"
                                   name="username"
                                   type="text"
                                   autocomplete="username"
                                   ref={&self.username} />
                        </div>
                        <div class="form-group">
                            <label for="password">{ "Mot de passe" }</label>
                            <div class="password-field">
                                <input id="password"
                                       name="password"
                                       type={if self.password_visible { "text" } else { "password" }}
                                       autocomplete="current-password"
                                       ref={&self.password} />
                                <span class="password-toggle" onclick={ontoggle}>
                                    { if self.password_visible { "🙈" } else { "👁️" } }
                                </span>
                            </div>
                        </div>
                        <button id="loginBtn"
                                type="submit"
                                class={classes!(self.loading.then_some("loading"))}
                                disabled={self.loading}>
                            { if self.loading { "" } else { "Se connecter" } }
                        </button>
                    </form>
                </div>
                { self.view_notice(ctx) }
            </>
        }
    }
}
