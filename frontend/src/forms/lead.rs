use log::info;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::notification::{use_notifier, Notice};
use crate::forms::validation::LoanInterestLead;

// Only checked by the browser through the input's `pattern` attribute.
const PHONE_PATTERN: &str = "[0-9]{10}";

/// Takes the typed lead and empties the form. Nothing is kept.
pub fn capture(lead: &mut LoanInterestLead) -> Notice {
    *lead = LoanInterestLead::default();
    info!("Loan interest lead captured");
    Notice::success("Thanks! We’ll reach out with lender options.")
        .with_description("(Demo form — connects to backend later)")
}

#[function_component(LoanInterestCard)]
pub fn loan_interest_card() -> Html {
    let lead = use_state(LoanInterestLead::default);
    let notifier = use_notifier();

    let onsubmit = {
        let lead = lead.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut current = (*lead).clone();
            notifier.notify(capture(&mut current));
            lead.set(current);
        })
    };

    let on_name = {
        let lead = lead.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            lead.set(LoanInterestLead {
                name: input.value(),
                ..(*lead).clone()
            });
        })
    };

    let on_phone = {
        let lead = lead.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            lead.set(LoanInterestLead {
                phone: input.value(),
                ..(*lead).clone()
            });
        })
    };

    html! {
        <div class="card card--glass">
            <div class="card__header">
                <div class="badge-line">
                    <span class="icon-dot" aria-hidden="true"></span>
                    {"Zero spam • No score damage"}
                </div>
                <h2 class="card__title card__title--sm">{"Check your best loan options"}</h2>
                <p class="card__description">
                    {"Start with a quick preview — no hidden calls, no data selling."}
                </p>
            </div>
            <form class="card__content stack" {onsubmit}>
                <div class="field">
                    <label class="field__label" for="lead-name">{"Name"}</label>
                    <input
                        id="lead-name"
                        class="input"
                        placeholder="Your name"
                        value={lead.name.clone()}
                        oninput={on_name}
                        required={true}
                    />
                </div>
                <div class="field">
                    <label class="field__label" for="lead-phone">{"Mobile"}</label>
                    <input
                        id="lead-phone"
                        class="input"
                        placeholder="10-digit mobile number"
                        inputmode="numeric"
                        pattern={PHONE_PATTERN}
                        value={lead.phone.clone()}
                        oninput={on_phone}
                        required={true}
                    />
                </div>
                <button type="submit" class="btn btn--hero btn--block">{"Compare lenders"}</button>
                <p class="fine-print">{"By continuing, you agree to our Terms & Privacy Policy."}</p>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::notification::ToastKind;

    #[test]
    fn capture_clears_both_fields() {
        let mut lead = LoanInterestLead {
            name: "Ravi".to_string(),
            phone: "9876543210".to_string(),
        };
        capture(&mut lead);
        assert!(lead.name.is_empty());
        assert!(lead.phone.is_empty());
    }

    #[test]
    fn capture_yields_one_success_notice() {
        let mut lead = LoanInterestLead {
            name: "Ravi".to_string(),
            phone: "9876543210".to_string(),
        };
        let notice = capture(&mut lead);
        assert_eq!(notice.kind, ToastKind::Success);
        assert_eq!(notice.title, "Thanks! We’ll reach out with lender options.");
        assert_eq!(notice.description.as_deref(), Some("(Demo form — connects to backend later)"));
    }
}
