use log::info;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::backdrop::AuroraBackdrop;
use crate::components::notification::{use_notifier, Notice};
use crate::components::primitives::{BrandLogo, GoogleMark, Stat};
use crate::forms::inquiry::LoanInquiryForm;

const NEXT_STEP: &str = "Showing the next-step form. We can wire real login later.";

/// Which card the right-hand pane shows. Never persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthView {
    #[default]
    SignedOut,
    SignedIn,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthEvent {
    EmailSubmitted,
    GoogleActivated,
    Back,
}

impl AuthView {
    /// Next view plus the notice to show for it. No credentials are checked.
    pub fn apply(self, event: AuthEvent) -> (AuthView, Option<Notice>) {
        match event {
            AuthEvent::EmailSubmitted => (
                AuthView::SignedIn,
                Some(Notice::message("Signed in (UI only)").with_description(NEXT_STEP)),
            ),
            AuthEvent::GoogleActivated => (
                AuthView::SignedIn,
                Some(Notice::message("Google sign-in (UI only)").with_description(NEXT_STEP)),
            ),
            AuthEvent::Back => (AuthView::SignedOut, None),
        }
    }
}

const WHY: [&str; 5] = [
    "No data selling",
    "No bureau score damage",
    "RBI-aligned APR transparency",
    "Compare lenders in minutes",
    "Higher approval probability",
];

#[function_component(SplitSignIn)]
pub fn split_sign_in() -> Html {
    let view = use_state(AuthView::default);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let notifier = use_notifier();

    let transition = {
        let view = view.clone();
        Callback::from(move |event: AuthEvent| {
            let (next, notice) = view.apply(event);
            info!("Auth view {:?} -> {:?} on {:?}", *view, next, event);
            if let Some(notice) = notice {
                notifier.notify(notice);
            }
            view.set(next);
        })
    };

    let on_email_login = {
        let transition = transition.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            transition.emit(AuthEvent::EmailSubmitted);
        })
    };

    let on_google = {
        let transition = transition.clone();
        Callback::from(move |_: MouseEvent| transition.emit(AuthEvent::GoogleActivated))
    };

    let on_back = {
        let transition = transition.clone();
        Callback::from(move |_: ()| transition.emit(AuthEvent::Back))
    };

    let on_email_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_password_input = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let right_pane = match *view {
        AuthView::SignedIn => html! { <LoanInquiryForm on_back={on_back} /> },
        AuthView::SignedOut => html! {
            <div class="card card--glass">
                <div class="card__header card__header--center">
                    <h2 class="card__title">{"Welcome back"}</h2>
                    <p class="card__description">{"Sign in to access your collections and downloads"}</p>
                </div>
                <div class="card__content stack">
                    <button type="button" class="btn btn--outline btn--block" onclick={on_google}>
                        <GoogleMark />
                        {"Continue with Google"}
                    </button>

                    <div class="or-divider">
                        <hr class="separator" />
                        <span>{"OR CONTINUE WITH EMAIL"}</span>
                        <hr class="separator" />
                    </div>

                    <form class="stack" onsubmit={on_email_login}>
                        <div class="field">
                            <label class="field__label" for="signin-email">{"Email"}</label>
                            <input
                                id="signin-email"
                                class="input"
                                type="email"
                                placeholder="you@example.com"
                                value={(*email).clone()}
                                oninput={on_email_input}
                                required={true}
                            />
                        </div>
                        <div class="field">
                            <label class="field__label" for="signin-password">{"Password"}</label>
                            <input
                                id="signin-password"
                                class="input"
                                type="password"
                                placeholder="••••••••"
                                value={(*password).clone()}
                                oninput={on_password_input}
                                required={true}
                            />
                        </div>
                        <button type="submit" class="btn btn--hero btn--block">{"Sign In"}</button>
                    </form>

                    <p class="center-note">
                        {"Don't have an account? "}
                        <a class="link-primary" href="#">{"Sign up"}</a>
                    </p>
                    <p class="center-note center-note--fine">
                        {"By continuing, you agree to our "}
                        <a class="link-underline" href="#">{"Terms of Service"}</a>
                        {" and "}
                        <a class="link-underline" href="#">{"Privacy Policy"}</a>
                    </p>
                </div>
            </div>
        },
    };

    html! {
        <AuroraBackdrop class="min-h-screen">
            <div class="split">
                <section class="split__pitch">
                    <div class="split__brand">
                        <div class="logo-chip"><BrandLogo /></div>
                        <span class="muted">{"Transparent • Privacy-first"}</span>
                    </div>

                    <div class="split__headline">
                        <h1>{"Compare & Secure "}<span class="accent">{"Smarter Loans"}</span></h1>
                        <p class="muted">
                            {"India’s first transparent loan comparison platform with zero spam and no credit score damage."}
                        </p>
                    </div>

                    <div class="split__why">
                        <h2>{"Why Happirate"}</h2>
                        <ul class="check-list">
                            { for WHY.iter().map(|item| html! { <li>{"✔ "}{*item}</li> }) }
                        </ul>
                    </div>

                    <div class="split__stats">
                        <Stat value="15+" label="Integrated Banks & NBFCs" />
                        <div class="split__rule" aria-hidden="true"></div>
                        <Stat value="0" label="Spam Calls Allowed" />
                    </div>
                </section>

                <section class="split__auth">
                    { right_pane }
                </section>
            </div>
            <style>
                {r#"
                .split {
                    max-width: 72rem;
                    min-height: 100vh;
                    margin: 0 auto;
                    padding: 2.5rem 1.5rem;
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 2.5rem;
                }
                .split__pitch { display: flex; flex-direction: column; justify-content: center; }
                .split__brand { display: flex; align-items: center; gap: 0.75rem; font-size: 0.85rem; }
                .logo-chip {
                    padding: 0.75rem;
                    border: 1px solid var(--border);
                    border-radius: 16px;
                    background: var(--card);
                    box-shadow: var(--shadow-soft);
                }
                .split__headline { margin-top: 2rem; }
                .split__headline h1 { margin: 0 0 1rem; font-size: 3rem; font-weight: 600; letter-spacing: -0.03em; line-height: 1.1; }
                .split__headline p { max-width: 36rem; font-size: 1.1rem; margin: 0; }
                .accent { color: var(--primary); }
                .split__why { margin-top: 2rem; }
                .split__why h2 { font-size: 0.9rem; font-weight: 500; margin: 0 0 0.75rem; }
                .check-list { margin: 0; padding: 0; list-style: none; display: grid; gap: 0.5rem; font-size: 0.9rem; color: var(--muted-foreground); }
                .split__stats {
                    margin-top: 2.5rem;
                    padding-top: 2rem;
                    border-top: 1px solid var(--border);
                    display: grid;
                    grid-template-columns: 1fr auto 1fr;
                    gap: 1.5rem;
                }
                .split__rule { width: 1px; background: var(--border); }
                .split__auth { display: flex; align-items: center; justify-content: center; }
                .or-divider { display: flex; align-items: center; gap: 0.75rem; font-size: 0.7rem; color: var(--muted-foreground); }
                .or-divider .separator { flex: 1; }
                .center-note { margin: 0; text-align: center; font-size: 0.85rem; color: var(--muted-foreground); }
                .center-note--fine { font-size: 0.75rem; }
                .link-primary { color: var(--primary); }
                .link-primary:hover, .link-underline:hover { text-decoration: underline; }
                @media (min-width: 1024px) {
                    .split { grid-template-columns: 1fr 1fr; gap: 3.5rem; }
                    .split__headline h1 { font-size: 3.75rem; }
                    .split__auth { justify-content: flex-end; }
                }
                "#}
            </style>
        </AuroraBackdrop>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_signed_out() {
        assert_eq!(AuthView::default(), AuthView::SignedOut);
    }

    #[test]
    fn both_sign_in_paths_reach_signed_in_with_a_notice() {
        for event in [AuthEvent::EmailSubmitted, AuthEvent::GoogleActivated] {
            let (view, notice) = AuthView::SignedOut.apply(event);
            assert_eq!(view, AuthView::SignedIn);
            let notice = notice.expect("sign in shows a notice");
            assert_eq!(notice.description.as_deref(), Some(NEXT_STEP));
        }
    }

    #[test]
    fn sign_in_titles_name_the_path() {
        let (_, email) = AuthView::SignedOut.apply(AuthEvent::EmailSubmitted);
        let (_, google) = AuthView::SignedOut.apply(AuthEvent::GoogleActivated);
        assert_eq!(email.map(|n| n.title), Some("Signed in (UI only)".to_string()));
        assert_eq!(google.map(|n| n.title), Some("Google sign-in (UI only)".to_string()));
    }

    #[test]
    fn back_returns_to_signed_out_quietly() {
        let (view, notice) = AuthView::SignedIn.apply(AuthEvent::Back);
        assert_eq!(view, AuthView::SignedOut);
        assert!(notice.is_none());
    }

    #[test]
    fn cycles_indefinitely() {
        let mut view = AuthView::SignedOut;
        for _ in 0..3 {
            view = view.apply(AuthEvent::GoogleActivated).0;
            assert_eq!(view, AuthView::SignedIn);
            view = view.apply(AuthEvent::Back).0;
            assert_eq!(view, AuthView::SignedOut);
        }
    }
}
