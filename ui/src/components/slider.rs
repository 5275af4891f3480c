//! The one slider component behind every carousel on the site.
//!
//! Layout math and index bounds live in `core::carousel`; this file wires
//! pointer, touch, keyboard, resize and autoplay events into it.

use dioxus::prelude::*;

use crate::core::carousel::{Bounds, Carousel, CarouselConfig};
use crate::core::responsive::{Debouncer, Viewport, CAROUSEL_RESIZE_DEBOUNCE_MS};
use crate::core::task::{spawn_cancellable, TaskHandle};
use crate::core::timing::{self, FRAME_MS};
use crate::i18n::Language;
use crate::t;

/// `render_slide` is called with slide indices in `0..count`; `label` names
/// the slider in logs and as its `aria-label`.
#[component]
pub fn Slider(
    config: CarouselConfig,
    count: usize,
    #[props(into)] label: String,
    #[props(default)] show_indicators: bool,
    #[props(default)] class: String,
    render_slide: Callback<usize, Element>,
) -> Element {
    let lang: Language = use_context::<Signal<Language>>()();
    let viewport = use_context::<Signal<Viewport>>();

    let mut state = use_signal(|| match Carousel::new(config.clone(), count) {
        Ok(carousel) => Some(carousel),
        Err(err) => {
            tracing::warn!("slider `{label}` not rendered: {err}");
            None
        }
    });
    // (viewport, container) widths; applied to the layout once they settle.
    let mut measured = use_signal(|| (viewport.peek().width, 0.0_f64));
    let mut pointer_x = use_signal(|| 0.0_f64);
    let mut frames = use_signal(|| None::<TaskHandle>);
    let debouncer = use_hook(Debouncer::default);

    let viewport_debouncer = debouncer.clone();
    use_effect(move || {
        let width = viewport().width;
        if measured.peek().0 == width {
            return;
        }
        measured.write().0 = width;
        schedule_layout(&viewport_debouncer, measured, state);
    });

    let autoplay_ms = config.autoplay_ms;
    use_future(move || async move {
        let Some(period) = autoplay_ms else {
            return;
        };
        loop {
            timing::sleep_ms(period).await;
            if let Some(carousel) = state.write().as_mut() {
                if !carousel.is_dragging() {
                    carousel.next();
                }
            }
        }
    });

    let Some(carousel) = state.read().clone() else {
        return rsx! {};
    };

    let on_resize = move |evt: Event<ResizeData>| {
        let Ok(size) = evt.data().get_border_box_size() else {
            return;
        };
        let first_measurement = measured.peek().1 == 0.0;
        measured.write().1 = size.width;
        if first_measurement {
            apply_layout(measured, state);
        } else {
            schedule_layout(&debouncer, measured, state);
        }
    };

    // Drag: the pointer position is sampled once per frame while held.
    let mut begin_drag = move |x: f64| {
        pointer_x.set(x);
        match state.write().as_mut() {
            Some(carousel) => carousel.begin_drag(x),
            None => return,
        }
        let handle = spawn_cancellable(async move {
            loop {
                timing::sleep_ms(FRAME_MS).await;
                let x = *pointer_x.peek();
                let still_dragging = state
                    .write()
                    .as_mut()
                    .and_then(|carousel| carousel.drag_to(x))
                    .is_some();
                if !still_dragging {
                    break;
                }
            }
        });
        if let Some(previous) = frames.write().replace(handle) {
            previous.cancel();
        }
    };
    let mut end_drag = move || {
        if let Some(handle) = frames.write().take() {
            handle.cancel();
        }
        if let Some(carousel) = state.write().as_mut() {
            if carousel.is_dragging() {
                let release = carousel.release_at(*pointer_x.peek());
                tracing::debug!(?release, "slider drag released");
            }
        }
    };

    let translate = carousel.translate_px();
    let gap = carousel.config().gap_px;
    let transition = if carousel.is_dragging() {
        "none"
    } else {
        "transform 0.3s ease"
    };
    let track_style = format!("gap: {gap}px; transform: translateX({translate}px); transition: {transition};");
    let slide_style = match carousel.config().bounds {
        Bounds::Clamped => format!("flex: 0 0 {}px;", carousel.item_width_px()),
        Bounds::Wrapping => String::new(),
    };
    let order = carousel.visible_order();
    let dots = if show_indicators {
        carousel.indicator_count()
    } else {
        0
    };

    rsx! {
        div { class: "slider {class}", aria_label: "{label}",
            button {
                class: "slider__nav slider__nav--prev",
                r#type: "button",
                aria_label: t!(lang, "slider-prev"),
                disabled: !carousel.can_prev(),
                onclick: move |_| {
                    if let Some(carousel) = state.write().as_mut() {
                        carousel.prev();
                    }
                },
                "‹"
            }

            div {
                class: "slider__viewport",
                tabindex: "0",
                onresize: on_resize,
                onkeydown: move |evt: KeyboardEvent| {
                    let mut guard = state.write();
                    let Some(carousel) = guard.as_mut() else { return };
                    match evt.key() {
                        Key::ArrowLeft => {
                            carousel.prev();
                        }
                        Key::ArrowRight => {
                            carousel.next();
                        }
                        _ => {}
                    }
                },
                onmousedown: move |evt: MouseEvent| begin_drag(evt.client_coordinates().x),
                onmousemove: move |evt: MouseEvent| pointer_x.set(evt.client_coordinates().x),
                onmouseup: move |_| end_drag(),
                onmouseleave: move |_| end_drag(),
                ontouchstart: move |evt: TouchEvent| {
                    if let Some(touch) = evt.touches().first() {
                        begin_drag(touch.client_coordinates().x);
                    }
                },
                ontouchmove: move |evt: TouchEvent| {
                    if let Some(touch) = evt.touches().first() {
                        pointer_x.set(touch.client_coordinates().x);
                    }
                },
                ontouchend: move |_| end_drag(),

                div { class: "slider__track", style: "{track_style}",
                    for (position, index) in order.into_iter().enumerate() {
                        div {
                            key: "{index}",
                            class: if position == 0 { "slider__slide slider__slide--lead" } else { "slider__slide" },
                            style: "{slide_style}",
                            {render_slide.call(index)}
                        }
                    }
                }
            }

            button {
                class: "slider__nav slider__nav--next",
                r#type: "button",
                aria_label: t!(lang, "slider-next"),
                disabled: !carousel.can_next(),
                onclick: move |_| {
                    if let Some(carousel) = state.write().as_mut() {
                        carousel.next();
                    }
                },
                "›"
            }

            if dots > 0 {
                div { class: "slider__indicators",
                    for dot in 0..dots {
                        button {
                            key: "{dot}",
                            r#type: "button",
                            class: if carousel.is_active_indicator(dot) { "slider__dot slider__dot--active" } else { "slider__dot" },
                            aria_label: t!(lang, "slider-go-to", index = (dot + 1)),
                            onclick: move |_| {
                                if let Some(carousel) = state.write().as_mut() {
                                    carousel.go_to_slide(dot);
                                }
                            },
                        }
                    }
                }
            }
        }
    }
}

/// Resizes the carousel to the latest measured widths.
fn apply_layout(measured: Signal<(f64, f64)>, mut state: Signal<Option<Carousel>>) {
    let (viewport_width, container_width) = *measured.peek();
    if let Some(carousel) = state.write().as_mut() {
        carousel.resize(viewport_width, container_width);
    }
}

/// Applies the layout once no newer width arrived for `CAROUSEL_RESIZE_DEBOUNCE_MS`.
fn schedule_layout(
    debouncer: &Debouncer,
    measured: Signal<(f64, f64)>,
    state: Signal<Option<Carousel>>,
) {
    let ticket = debouncer.schedule();
    let debouncer = debouncer.clone();
    spawn(async move {
        timing::sleep_ms(CAROUSEL_RESIZE_DEBOUNCE_MS).await;
        if debouncer.is_current(ticket) {
            apply_layout(measured, state);
        }
    });
}
