use leptos::prelude::*;

/// Full-screen overlay shown until the first hero clip is playable
#[component]
pub fn LoadingSpinner(#[prop(into)] is_dark: Signal<bool>) -> impl IntoView {
    view! {
        <div class=move || {
            format!(
                "flex absolute justify-center items-center w-screen overflow-hidden z-[100] h-dvh {}",
                if is_dark.get() { "bg-violet-50" } else { "bg-gray-100" },
            )
        }>
            <div class="flex flex-row gap-2">
                <div class="w-4 h-4 rounded-full animate-bounce bg-black/60"></div>
                <div
                    class="w-4 h-4 rounded-full animate-bounce bg-black/60"
                    style:animation-delay="-300ms"
                ></div>
                <div
                    class="w-4 h-4 rounded-full animate-bounce bg-black/60"
                    style:animation-delay="-500ms"
                ></div>
            </div>
        </div>
    }
}
