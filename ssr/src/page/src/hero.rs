use std::rc::Rc;

use component::{cta_button::CtaButton, spinner::LoadingSpinner};
use consts::{hero::HERO_POSTER, COMPANY_NAME, PORTFOLIO_ANCHOR};
use leptos::{ev, html::Video, prelude::*};
use leptos_use::{use_document, use_event_listener};
use state::{animation::use_animation_settings, theme::use_theme};
use utils::{
    device::{shows_preview, DeviceClass},
    playback::{
        admit_ready, already_playable, arm_polling, BrowserScheduler, LoadGate, ScopedTeardown,
        VideoSlot, Watchdog,
    },
    route::jump_to_anchor,
    video_source::{primary_source, resolve},
};

const STATS: [(&str, &str); 3] = [
    ("50+", "Projects Delivered"),
    ("99%", "Client Satisfaction"),
    ("10+", "Years Experience"),
];

/// Clip shown in the hero. Advancing between clips is not wired up.
const CURRENT_INDEX: usize = 1;

#[component]
pub fn Hero() -> impl IntoView {
    let theme = use_theme();
    let anim = use_animation_settings();

    let gate = RwSignal::new(LoadGate::new());
    let is_loading = Memo::new(move |_| gate.with(LoadGate::is_loading));
    let gate_timer = StoredValue::new(ScopedTeardown::new());
    on_cleanup(move || {
        gate_timer.try_update_value(ScopedTeardown::release_all);
    });

    // None until classified, so neither the server nor a handheld client
    // ever creates the preview element
    let device = RwSignal::new(None::<DeviceClass>);
    // no tracked reads: classified once per mount, client side
    Effect::new(move |_| device.set(Some(DeviceClass::detect())));
    let is_desktop = move || shows_preview(device.get());

    let primary_ref = NodeRef::<Video>::new();
    let preview_ref = NodeRef::<Video>::new();

    let primary_src =
        primary_source(CURRENT_INDEX).expect("hero video registry is misconfigured");
    let preview_src = resolve(CURRENT_INDEX).expect("hero video registry is misconfigured");

    let on_video_ready = move |slot: VideoSlot| {
        let Some(step) = gate.try_update(|g| g.notify_loaded(slot)) else {
            return;
        };
        let scheduled = gate_timer.try_update_value(|pending| {
            admit_ready(&BrowserScheduler, step, pending, move || {
                gate.try_update(LoadGate::open);
            })
        });
        if let Some(Err(e)) = scheduled {
            log::warn!("hero: {e}, opening load gate without settle delay");
            gate.try_update(LoadGate::open);
        }
    };

    // The primary clip can finish loading before hydration attaches `loadeddata`
    Effect::new(move |_| {
        if let Some(video) = primary_ref.get() {
            if already_playable(video.ready_state()) {
                on_video_ready(VideoSlot::Primary);
            }
        }
    });

    // `muted`/`loop` attributes don't reach the media element properties after hydration
    Effect::new(move |_| {
        for vid in [primary_ref.get(), preview_ref.get()].into_iter().flatten() {
            vid.set_muted(true);
            vid.set_loop(true);
        }
    });

    // Re-armed when the loading flag flips, the element may only resolve after first mount
    Effect::new(move |_| {
        is_loading.track();
        let Some(video) = primary_ref.get() else {
            return;
        };
        let watchdog = Rc::new(Watchdog::new(video));

        let mut teardown = match arm_polling(&BrowserScheduler, watchdog.clone()) {
            Ok(polling) => polling,
            Err(e) => {
                log::error!("hero watchdog: {e}, relying on visibility and ended events");
                let mut teardown = ScopedTeardown::new();
                teardown.push(watchdog.kill_switch());
                teardown
            }
        };

        let on_visible = watchdog.clone();
        teardown.push(use_event_listener(
            use_document(),
            ev::visibilitychange,
            move |_| {
                on_visible.on_visibility_change(document().hidden());
            },
        ));
        let on_end = watchdog;
        teardown.push(use_event_listener(primary_ref, ev::ended, move |_| {
            on_end.on_ended();
        }));

        on_cleanup(move || teardown.release());
    });

    let go_to_portfolio = move || {
        if let Err(e) = jump_to_anchor(&window().location(), PORTFOLIO_ANCHOR) {
            log::warn!("hero: {e}");
        }
    };

    view! {
        <section id="hero" class="overflow-hidden relative w-screen h-screen">
            <Show when=move || is_loading.get()>
                <LoadingSpinner is_dark=theme.is_dark />
            </Show>

            <div
                id="video-frame"
                class=move || {
                    format!(
                        "overflow-hidden relative z-10 w-screen rounded-lg h-dvh {}",
                        if theme.is_dark.get() { "bg-blue-75" } else { "bg-gray-100" },
                    )
                }
            >
                <Show when=is_desktop>
                    <video
                        node_ref=preview_ref
                        id="next-video"
                        src=preview_src
                        muted=true
                        loop=true
                        playsinline=true
                        preload="metadata"
                        aria-hidden="true"
                        tabindex="-1"
                        class="object-cover object-center absolute invisible z-20 pointer-events-none absolute-center size-64"
                        on:loadeddata=move |_| on_video_ready(VideoSlot::Preview)
                    ></video>
                </Show>

                <video
                    node_ref=primary_ref
                    src=primary_src
                    autoplay=move || anim.get().enable_video_autoplay
                    muted=true
                    loop=true
                    playsinline=true
                    preload="auto"
                    poster=HERO_POSTER
                    class="object-cover object-center absolute top-0 left-0 size-full"
                    on:loadeddata=move |_| on_video_ready(VideoSlot::Primary)
                ></video>
            </div>

            <div class="flex absolute inset-0 z-20 flex-col justify-center w-full h-full">
                <div class="container px-6 mx-auto sm:px-10 lg:px-16">
                    <div class="inline-flex gap-2 items-center py-2 px-4 mb-6 rounded-full border backdrop-blur-sm bg-white/10 border-white/20">
                        <span class="flex relative w-2 h-2">
                            <span class="inline-flex absolute w-full h-full bg-green-400 rounded-full opacity-75 animate-ping"></span>
                            <span class="inline-flex relative w-2 h-2 bg-green-500 rounded-full"></span>
                        </span>
                        <span class="text-sm font-medium text-white">"Available for Projects"</span>
                    </div>

                    <h1 class="text-white special-font hero-heading drop-shadow-2xl">
                        "Innov" <b>"a"</b> "tive"
                    </h1>

                    <p class=move || {
                        format!(
                            "mb-5 max-w-64 font-robert-regular {}",
                            if theme.is_dark.get() { "text-blue-100" } else { "text-gray-600" },
                        )
                    }>"Crafting Digital Solutions" <br /> "by " {COMPANY_NAME}</p>

                    <CtaButton
                        id="watch-trailer"
                        label="Our Portfolio"
                        left_icon=icondata::TiLocationArrow
                        class="flex gap-1 justify-center items-center bg-gradient-to-r from-yellow-400 to-orange-400"
                        hover_lift=Signal::derive(move || anim.get().enable_hover_effects)
                        on_click=go_to_portfolio
                    />

                    <Show when=is_desktop>
                        <div class="flex gap-10 items-center mt-10">
                            {STATS
                                .into_iter()
                                .map(|(value, label)| {
                                    view! {
                                        <div class="text-center">
                                            <div class="text-4xl font-black text-white md:text-5xl drop-shadow-xl">
                                                {value}
                                            </div>
                                            <div class="mt-1 text-sm text-white/70">{label}</div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Show>
                </div>
            </div>

            <div class="absolute right-8 bottom-8 z-30">
                <h1 class="text-6xl font-black tracking-tight md:text-8xl text-white/20">
                    "4DK" <span class="text-yellow-400/30">"."</span> "Teams"
                </h1>
            </div>

            <div class=move || {
                format!(
                    "flex absolute bottom-8 left-1/2 z-30 flex-col gap-2 items-center -translate-x-1/2 {}",
                    if anim.get().should_animate { "animate-bounce" } else { "" },
                )
            }>
                <span class="text-sm font-medium text-white/60">"Scroll to explore"</span>
                <svg
                    class="w-6 h-6 text-white/60"
                    fill="none"
                    stroke="currentColor"
                    viewBox="0 0 24 24"
                >
                    <path
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        stroke-width="2"
                        d="M19 14l-7 7m0 0l-7-7m7 7V3"
                    />
                </svg>
            </div>
        </section>
    }
}
