use leptos::prelude::*;
use leptos_icons::*;

#[component]
pub fn CtaButton(
    #[prop(into)] id: String,
    label: &'static str,
    #[prop(optional)] left_icon: Option<icondata_core::Icon>,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] hover_lift: Signal<bool>,
    on_click: impl Fn() + 'static,
) -> impl IntoView {
    view! {
        <button
            id=id
            on:click=move |_| on_click()
            class=move || {
                format!(
                    "group relative z-10 w-fit cursor-pointer overflow-hidden rounded-full px-7 py-3 text-black transition-transform {class} {}",
                    if hover_lift.get() { "hover:-translate-y-0.5" } else { "" },
                )
            }
        >
            {left_icon.map(|icon| view! { <Icon icon /> })}
            <span class="relative inline-flex overflow-hidden text-xs font-bold uppercase">
                {label}
            </span>
        </button>
    }
}
