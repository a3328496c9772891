use yew::prelude::*;

use crate::config;
use crate::utils::cn;

#[derive(Properties, PartialEq)]
pub struct StatProps {
    pub value: AttrValue,
    pub label: AttrValue,
    #[prop_or_default]
    pub boxed: bool,
}

#[function_component(Stat)]
pub fn stat(props: &StatProps) -> Html {
    let class = cn([Some("stat"), props.boxed.then_some("stat--boxed")]);
    html! {
        <div {class}>
            <div class="stat__value">{ props.value.clone() }</div>
            <div class="stat__label">{ props.label.clone() }</div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TickProps {
    pub children: Children,
}

#[function_component(Tick)]
pub fn tick(props: &TickProps) -> Html {
    html! {
        <li class="tick">
            <svg class="tick__icon" viewBox="0 0 24 24" aria-hidden="true">
                <circle cx="12" cy="12" r="10" fill="none" stroke="currentColor" stroke-width="2" />
                <path d="m8.5 12.5 2.5 2.5 4.5-5" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" />
            </svg>
            <span class="tick__text">{ for props.children.iter() }</span>
        </li>
    }
}

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub title: AttrValue,
    pub description: AttrValue,
}

#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    html! {
        <div class="card card--soft feature-card">
            <h3 class="feature-card__title">{ props.title.clone() }</h3>
            <p class="card__description">{ props.description.clone() }</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BrandLogoProps {
    #[prop_or_default]
    pub class: Option<AttrValue>,
}

#[function_component(BrandLogo)]
pub fn brand_logo(props: &BrandLogoProps) -> Html {
    html! {
        <img
            src={config::LOGO_PATH}
            alt={config::BRAND_NAME}
            class={cn([Some("logo"), props.class.as_deref()])}
            loading="eager"
            decoding="async"
        />
    }
}

#[function_component(GoogleMark)]
pub fn google_mark() -> Html {
    html! {
        <svg class="google-mark" viewBox="0 0 48 48" aria-hidden="true">
            <path
                d="M24 9.5c3.4 0 6.4 1.2 8.8 3.3l6-6C35.1 3.6 29.9 1.5 24 1.5 14.6 1.5 6.5 6.9 2.6 14.7l7 5.4C11.6 13.5 17.3 9.5 24 9.5z"
                fill="var(--primary)"
            />
            <path
                d="M46.5 24.5c0-1.5-.2-2.9-.5-4.2H24v8h12.6c-.6 3-2.4 5.6-5 7.3l7 5.4c4.1-3.8 6.9-9.4 6.9-16.5z"
                fill="var(--foreground)"
                opacity="0.75"
            />
            <path
                d="M9.6 28.1c-1-3-1-6.2 0-9.2l-7-5.4C-.2 19.6-.2 28.4 2.6 34.5l7-5.4z"
                fill="var(--primary)"
                opacity="0.55"
            />
            <path
                d="M24 46.5c5.9 0 11.1-2 14.8-5.5l-7-5.4c-2 1.4-4.6 2.2-7.8 2.2-6.7 0-12.4-4-14.4-10.1l-7 5.4C6.5 41.1 14.6 46.5 24 46.5z"
                fill="var(--primary)"
                opacity="0.8"
            />
        </svg>
    }
}

/// Shared palette, cards, buttons and inputs used by every page.
#[function_component(ThemeStyles)]
pub fn theme_styles() -> Html {
    html! {
        <style>
            {r#"
            :root {
                --primary-hsl: 166 45% 34%;
                --primary: hsl(var(--primary-hsl));
                --background: #f7faf8;
                --background-soft: #eef4f1;
                --foreground: #13231f;
                --muted-foreground: #5b6b67;
                --card: rgba(255, 255, 255, 0.75);
                --border: rgba(19, 35, 31, 0.12);
                --destructive: #c0392b;
                --shadow-soft: 0 4px 16px rgba(19, 35, 31, 0.06);
                --shadow-elev: 0 18px 48px rgba(19, 35, 31, 0.14);
            }
            * { box-sizing: border-box; }
            body {
                margin: 0;
                color: var(--foreground);
                background: var(--background);
                font-family: Inter, -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            }
            a { color: inherit; text-decoration: none; }
            .min-h-screen { min-height: 100vh; }
            .container {
                max-width: 72rem;
                margin: 0 auto;
                padding: 2rem 1.5rem;
            }
            .muted { color: var(--muted-foreground); }
            .stack { display: flex; flex-direction: column; gap: 0.75rem; }

            .card {
                border: 1px solid var(--border);
                border-radius: 18px;
                background: var(--card);
            }
            .card--glass {
                width: 100%;
                max-width: 28rem;
                backdrop-filter: blur(14px);
                box-shadow: var(--shadow-elev);
            }
            .card--soft { backdrop-filter: blur(8px); box-shadow: var(--shadow-soft); padding: 1.25rem; }
            .card__header { padding: 1.5rem 1.5rem 0.5rem; display: flex; flex-direction: column; gap: 0.5rem; }
            .card__header--center { text-align: center; }
            .card__title { margin: 0; font-size: 1.5rem; font-weight: 600; }
            .card__title--sm { font-size: 1.25rem; }
            .card__description { margin: 0; font-size: 0.9rem; color: var(--muted-foreground); }
            .card__content { padding: 0.5rem 1.5rem 1.5rem; }

            .field { display: flex; flex-direction: column; gap: 0.4rem; }
            .field-row { display: grid; grid-template-columns: 1fr; gap: 0.75rem; }
            .field__label { font-size: 0.85rem; font-weight: 500; }
            .field__error { margin: 0; font-size: 0.75rem; color: var(--destructive); }
            .input {
                height: 2.6rem;
                padding: 0 0.8rem;
                border: 1px solid var(--border);
                border-radius: 10px;
                background: rgba(255, 255, 255, 0.9);
                font-size: 0.95rem;
            }
            .input:focus { outline: 2px solid var(--primary); outline-offset: 1px; }
            .input[aria-invalid="true"] { border-color: var(--destructive); }

            .btn {
                display: inline-flex;
                align-items: center;
                justify-content: center;
                gap: 0.5rem;
                height: 2.6rem;
                padding: 0 1.2rem;
                border-radius: 10px;
                border: 1px solid transparent;
                font-size: 0.95rem;
                font-weight: 500;
                cursor: pointer;
                transition: transform 0.15s ease, box-shadow 0.15s ease;
            }
            .btn--hero { background: var(--primary); color: #fff; box-shadow: 0 8px 24px hsl(var(--primary-hsl) / 0.3); }
            .btn--hero:hover { transform: translateY(-1px); }
            .btn--soft { background: hsl(var(--primary-hsl) / 0.1); color: var(--primary); }
            .btn--outline { background: rgba(255, 255, 255, 0.6); border-color: var(--border); color: var(--foreground); }
            .btn--lg { height: 3rem; padding: 0 1.6rem; font-size: 1rem; }
            .btn--block { width: 100%; }

            .badge-line { display: inline-flex; align-items: center; gap: 0.5rem; font-size: 0.85rem; color: var(--muted-foreground); }
            .icon-dot { width: 0.55rem; height: 0.55rem; border-radius: 999px; background: var(--primary); }
            .fine-print { margin: 0; font-size: 0.75rem; color: var(--muted-foreground); }
            .separator { height: 1px; border: none; background: var(--border); margin: 0; }

            .stat { min-width: 0; }
            .stat--boxed {
                border: 1px solid var(--border);
                border-radius: 14px;
                padding: 0.75rem 1rem;
                background: var(--card);
                box-shadow: var(--shadow-soft);
            }
            .stat__value { font-size: 1.6rem; font-weight: 600; letter-spacing: -0.02em; }
            .stat__label { font-size: 0.85rem; color: var(--muted-foreground); }

            .tick { display: flex; align-items: flex-start; gap: 0.5rem; font-size: 0.9rem; }
            .tick__icon { width: 1rem; height: 1rem; margin-top: 0.15rem; color: var(--primary); flex-shrink: 0; }
            .feature-card__title { margin: 0 0 0.4rem; font-size: 1rem; font-weight: 600; }
            .logo { height: 2rem; width: auto; }
            .google-mark { width: 1.25rem; height: 1.25rem; }

            @media (min-width: 640px) {
                .field-row { grid-template-columns: 1fr 1fr; }
            }
            "#}
        </style>
    }
}
