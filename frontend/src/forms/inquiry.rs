use std::rc::Rc;

use log::{debug, info};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::notification::{use_notifier, Notice};
use crate::forms::validation::{
    validate, validate_field, InquiryError, InquiryField, LoanInquiry, ValidationReport,
};

/// Field values plus the errors currently on screen.
///
/// Fields are checked when they lose focus and all together on submit.
/// After the first submit attempt every keystroke re-checks its field.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InquiryForm {
    values: LoanInquiry,
    errors: ValidationReport,
    submitted: bool,
}

impl InquiryForm {
    pub fn values(&self) -> &LoanInquiry {
        &self.values
    }

    pub fn error(&self, field: InquiryField) -> Option<InquiryError> {
        self.errors.get(&field).copied()
    }

    pub fn input(&mut self, field: InquiryField, value: String) {
        self.values.set(field, value);
        if self.submitted {
            self.check(field);
        }
    }

    pub fn blur(&mut self, field: InquiryField) {
        self.check(field);
    }

    /// Accepted values come back trimmed; the form keeps what was typed.
    pub fn submit(&mut self) -> Result<LoanInquiry, ValidationReport> {
        self.submitted = true;
        self.errors = validate(&self.values);
        if self.errors.is_empty() {
            Ok(self.values.trimmed())
        } else {
            Err(self.errors.clone())
        }
    }

    fn check(&mut self, field: InquiryField) {
        match validate_field(field, self.values.get(field)) {
            Ok(()) => {
                self.errors.remove(&field);
            }
            Err(error) => {
                self.errors.insert(field, error);
            }
        }
    }
}

pub enum InquiryAction {
    Input(InquiryField, String),
    Blur(InquiryField),
    Submit,
}

impl Reducible for InquiryForm {
    type Action = InquiryAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            InquiryAction::Input(field, value) => next.input(field, value),
            InquiryAction::Blur(field) => next.blur(field),
            InquiryAction::Submit => {
                let _ = next.submit();
            }
        }
        Rc::new(next)
    }
}

pub fn accepted_notice(inquiry: &LoanInquiry) -> Notice {
    Notice::success("Saved (UI only)").with_description(format!(
        "Thanks, {}. Next we can wire this to Cloud + lender results.",
        inquiry.full_name
    ))
}

#[derive(Properties, PartialEq)]
pub struct LoanInquiryFormProps {
    #[prop_or_default]
    pub on_back: Option<Callback<()>>,
}

#[function_component(LoanInquiryForm)]
pub fn loan_inquiry_form(props: &LoanInquiryFormProps) -> Html {
    let form = use_reducer(InquiryForm::default);
    let notifier = use_notifier();

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut attempt = (*form).clone();
            match attempt.submit() {
                Ok(inquiry) => {
                    info!("Loan inquiry accepted");
                    notifier.notify(accepted_notice(&inquiry));
                }
                Err(report) => {
                    let fields: Vec<&str> = report.keys().map(|field| field.name()).collect();
                    debug!("Loan inquiry rejected, invalid fields: {:?}", fields);
                }
            }
            form.dispatch(InquiryAction::Submit);
        })
    };

    let render_field = |field: InquiryField, label: &'static str, placeholder: &'static str, inputmode: Option<&'static str>| {
        let oninput = {
            let form = form.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                form.dispatch(InquiryAction::Input(field, input.value()));
            })
        };
        let onblur = {
            let form = form.clone();
            Callback::from(move |_: FocusEvent| form.dispatch(InquiryAction::Blur(field)))
        };
        let error = form.error(field);
        let id = format!("inquiry-{}", field.name());

        html! {
            <div class="field">
                <label class="field__label" for={id.clone()}>{label}</label>
                <input
                    id={id}
                    class="input"
                    name={field.name()}
                    placeholder={placeholder}
                    inputmode={inputmode}
                    value={form.values().get(field).to_string()}
                    aria-invalid={error.is_some().to_string()}
                    {oninput}
                    {onblur}
                />
                if let Some(error) = error {
                    <p class="field__error">{error.to_string()}</p>
                }
            </div>
        }
    };

    let back = props.on_back.clone().map(|on_back| {
        let onclick = Callback::from(move |_: MouseEvent| on_back.emit(()));
        html! {
            <button type="button" class="btn btn--outline btn--block" {onclick}>
                {"Back to sign in"}
            </button>
        }
    });

    html! {
        <div class="card card--glass inquiry-card">
            <div class="card__header">
                <h2 class="card__title">{"Loan inquiry"}</h2>
                <p class="card__description">
                    {"Light-shade form experience — we’ll connect it to real lender matching next."}
                </p>
            </div>
            <form class="card__content stack" novalidate={true} {onsubmit}>
                { render_field(InquiryField::FullName, "Full name", "Your name", None) }
                { render_field(InquiryField::MonthlyIncome, "Monthly income (₹)", "e.g. 75000", Some("decimal")) }
                <div class="field-row">
                    { render_field(InquiryField::City, "City", "Mumbai", None) }
                    { render_field(InquiryField::EmploymentType, "Employment", "Salaried", None) }
                </div>
                <button type="submit" class="btn btn--hero btn--block">{"Continue"}</button>
                { back.unwrap_or_default() }
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(form: &mut InquiryForm) {
        form.input(InquiryField::FullName, " Asha Rao ".to_string());
        form.input(InquiryField::MonthlyIncome, "75000.50".to_string());
        form.input(InquiryField::City, "Pune".to_string());
    }

    #[test]
    fn typing_before_submit_shows_no_errors() {
        let mut form = InquiryForm::default();
        form.input(InquiryField::FullName, "A".to_string());
        assert_eq!(form.error(InquiryField::FullName), None);
    }

    #[test]
    fn blur_checks_only_that_field() {
        let mut form = InquiryForm::default();
        form.blur(InquiryField::MonthlyIncome);
        assert_eq!(form.error(InquiryField::MonthlyIncome), Some(InquiryError::IncomeMissing));
        assert_eq!(form.error(InquiryField::FullName), None);

        form.input(InquiryField::MonthlyIncome, "75000".to_string());
        form.blur(InquiryField::MonthlyIncome);
        assert_eq!(form.error(InquiryField::MonthlyIncome), None);
    }

    #[test]
    fn submit_blocks_until_every_field_passes() {
        let mut form = InquiryForm::default();
        let report = form.submit().unwrap_err();
        assert_eq!(report.len(), 3);
        assert_eq!(form.error(InquiryField::City), Some(InquiryError::CityTooShort));

        fill(&mut form);
        let accepted = form.submit().unwrap();
        assert_eq!(accepted.full_name, "Asha Rao");
        assert_eq!(accepted.employment_type, "Salaried");
        assert_eq!(form.error(InquiryField::FullName), None);
    }

    #[test]
    fn accepted_form_keeps_its_values() {
        let mut form = InquiryForm::default();
        fill(&mut form);
        form.submit().unwrap();
        assert_eq!(form.values().full_name, " Asha Rao ");
        assert_eq!(form.values().city, "Pune");
    }

    #[test]
    fn typing_after_failed_submit_revalidates() {
        let mut form = InquiryForm::default();
        let _ = form.submit();
        form.input(InquiryField::FullName, "Asha".to_string());
        assert_eq!(form.error(InquiryField::FullName), None);
        form.input(InquiryField::FullName, "A".to_string());
        assert_eq!(form.error(InquiryField::FullName), Some(InquiryError::NameTooShort));
    }

    #[test]
    fn reducer_applies_actions_in_order() {
        let form = Rc::new(InquiryForm::default());
        let form = form.reduce(InquiryAction::Input(InquiryField::City, "X".to_string()));
        let form = form.reduce(InquiryAction::Blur(InquiryField::City));
        assert_eq!(form.error(InquiryField::City), Some(InquiryError::CityTooShort));
        let form = form.reduce(InquiryAction::Submit);
        assert_eq!(form.error(InquiryField::FullName), Some(InquiryError::NameTooShort));
    }

    #[test]
    fn accepted_notice_names_the_applicant() {
        let mut form = InquiryForm::default();
        fill(&mut form);
        let notice = accepted_notice(&form.submit().unwrap());
        assert_eq!(notice.title, "Saved (UI only)");
        assert_eq!(
            notice.description.as_deref(),
            Some("Thanks, Asha Rao. Next we can wire this to Cloud + lender results.")
        );
    }
}
