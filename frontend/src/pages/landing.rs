use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::backdrop::AuroraBackdrop;
use crate::components::primitives::{BrandLogo, FeatureCard, Stat, Tick};
use crate::config;
use crate::forms::lead::LoanInterestCard;
use crate::utils::cn;
use crate::Route;

const TICKS: [&str; 5] = [
    "No data selling",
    "No bureau score damage",
    "RBI-aligned APR transparency",
    "Compare lenders in minutes",
    "Higher approval probability",
];

const FEATURES: [(&str, &str); 4] = [
    ("Zero spam", "No random calls. You stay in control of who contacts you."),
    ("No score damage", "Explore options without unnecessary bureau hits."),
    ("APR transparency", "RBI-aligned APR breakdown so you can compare fairly."),
    ("Higher approvals", "Match with lenders that fit your profile — faster, smarter."),
];

fn stats() -> Html {
    html! {
        <div class="stat-grid">
            <Stat value="15+" label="Integrated Banks & NBFCs" boxed={true} />
            <Stat value="0" label="Spam Calls Allowed" boxed={true} />
        </div>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <AuroraBackdrop class="min-h-screen">
            <div class="container">
                <header class="site-header">
                    <Link<Route> to={Route::Home} classes="site-header__brand">
                        <BrandLogo />
                        <span class="sr-only">{config::BRAND_NAME}</span>
                    </Link<Route>>

                    <nav class="site-header__nav">
                        <a href="#why">{"Why Happirate"}</a>
                        <a href="#impact">{"Our Impact"}</a>
                        <Link<Route> to={Route::SignIn}>{"Sign in"}</Link<Route>>
                    </nav>

                    <div class="site-header__actions">
                        <a class="btn btn--soft hide-mobile" href="#why">{"Learn more"}</a>
                        <a class="btn btn--hero" href="#start">{"Get started"}</a>
                    </div>
                </header>

                <main>
                    <section id="start" class="hero">
                        <div class="hero__copy">
                            <div class="pill">
                                <span class="icon-dot" aria-hidden="true"></span>
                                <span class="muted">{"India’s first transparent loan comparison platform"}</span>
                            </div>

                            <h1 class="hero__title">{"Compare & Secure Smarter Loans"}</h1>

                            <p class="hero__lead muted">
                                {"Compare lenders in minutes — with zero spam and no credit score damage."}
                            </p>

                            <ul class="tick-list">
                                { for TICKS.iter().map(|item| html! { <Tick>{*item}</Tick> }) }
                            </ul>

                            { stats() }

                            <div class="hero__ctas">
                                <a class="btn btn--hero btn--lg" href="#start">{"Compare now"}</a>
                                <a class={cn(["btn btn--outline btn--lg", "glass"])} href="#impact">
                                    {"See our impact"}
                                </a>
                            </div>
                        </div>

                        <div class="hero__card">
                            <LoanInterestCard />
                        </div>
                    </section>

                    <hr class="separator" />

                    <section id="why" class="section">
                        <div class="why">
                            <div>
                                <h2 class="section__title">{"Why Happirate"}</h2>
                                <p class="muted">{"Designed to be privacy-first, transparent, and fast."}</p>
                            </div>
                            <div class="feature-grid">
                                { for FEATURES.iter().map(|(title, description)| html! {
                                    <FeatureCard key={*title} title={*title} description={*description} />
                                }) }
                            </div>
                        </div>
                    </section>

                    <hr class="separator" />

                    <section id="impact" class="section impact">
                        <div>
                            <h2 class="section__title">{"Our Impact"}</h2>
                            <p class="muted">{"Built to make borrowing transparent and stress-free."}</p>
                        </div>
                        { stats() }
                    </section>

                    <footer class="site-footer">
                        <span>{format!("© {} {}", year, config::BRAND_NAME)}</span>
                        <span class="site-footer__tagline">{"Transparent comparisons • Privacy-first"}</span>
                    </footer>
                </main>
            </div>
            <style>
                {r#"
                .sr-only {
                    position: absolute;
                    width: 1px;
                    height: 1px;
                    overflow: hidden;
                    clip: rect(0, 0, 0, 0);
                    white-space: nowrap;
                }
                .site-header { display: flex; align-items: center; justify-content: space-between; gap: 1.5rem; }
                .site-header__brand { display: flex; align-items: center; gap: 0.75rem; }
                .site-header__nav { display: none; gap: 1.5rem; font-size: 0.9rem; color: var(--muted-foreground); }
                .site-header__nav a:hover { color: var(--foreground); }
                .site-header__actions { display: flex; align-items: center; gap: 0.5rem; }
                .hide-mobile { display: none; }

                .hero { display: grid; gap: 2.5rem; align-items: center; padding: 3.5rem 0; }
                .hero__copy { display: flex; flex-direction: column; gap: 1.5rem; }
                .pill {
                    display: inline-flex;
                    align-self: flex-start;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.25rem 0.75rem;
                    border: 1px solid var(--border);
                    border-radius: 999px;
                    background: var(--card);
                    box-shadow: var(--shadow-soft);
                    font-size: 0.85rem;
                }
                .hero__title { margin: 0; font-size: 2.5rem; font-weight: 600; letter-spacing: -0.03em; line-height: 1.1; }
                .hero__lead { margin: 0; max-width: 36rem; font-size: 1.1rem; }
                .tick-list { margin: 0; padding: 0; list-style: none; display: grid; gap: 0.5rem; }
                .stat-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 0.75rem; max-width: 32rem; }
                .hero__ctas { display: flex; flex-direction: column; gap: 0.75rem; }
                .glass { backdrop-filter: blur(8px); }

                .section { padding: 3.5rem 0; }
                .section__title { margin: 0; font-size: 1.5rem; font-weight: 600; letter-spacing: -0.02em; }
                .why { display: grid; gap: 2rem; }
                .feature-grid { display: grid; gap: 1rem; }
                .impact { display: grid; gap: 1.5rem; }

                .site-footer {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    padding: 0.5rem 0 2.5rem;
                    font-size: 0.85rem;
                    color: var(--muted-foreground);
                }
                .site-footer__tagline { font-size: 0.75rem; }

                @media (min-width: 640px) {
                    .hide-mobile { display: inline-flex; }
                    .hero__ctas { flex-direction: row; align-items: center; }
                    .feature-grid { grid-template-columns: 1fr 1fr; }
                    .site-footer { flex-direction: row; align-items: center; justify-content: space-between; }
                }
                @media (min-width: 768px) {
                    .site-header__nav { display: flex; }
                    .hero__title { font-size: 3rem; }
                }
                @media (min-width: 1024px) {
                    .hero { grid-template-columns: 1.05fr 0.95fr; }
                    .hero__card { justify-self: end; }
                    .why { grid-template-columns: 1fr 2fr; }
                    .impact { grid-template-columns: 1fr 1fr; align-items: end; }
                    .impact .stat-grid { justify-self: end; }
                }
                "#}
            </style>
        </AuroraBackdrop>
    }
}
