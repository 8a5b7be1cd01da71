use consts::{COMPANY_NAME, PORTFOLIO_ANCHOR};
use leptos::prelude::*;
use leptos_meta::*;

use crate::hero::Hero;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <Title text=COMPANY_NAME />
        <div class="overflow-x-hidden relative w-screen min-h-screen">
            <Hero />
            <section id=PORTFOLIO_ANCHOR class="py-24 px-6 w-screen min-h-screen bg-black">
                <h2 class="text-4xl font-bold text-white md:text-6xl">"Our Work"</h2>
            </section>
        </div>
    }
}
