use std::rc::Rc;

use log::error;
use yew::prelude::*;

use crate::motion::scene::SceneError;
use crate::motion::{Scene, Sequencer, SequencerFrame, ViewportBinder};

// Matches the path length of the headline underline stroke below.
const UNDERLINE_DASH: f64 = 640.0;

/// The hero timeline: four scenes across a 400vh scroll container, with a
/// persistent CTA mapped against global page progress. Adjacent windows
/// overlap on purpose; the overlaps are the crossfades.
fn hero_timeline() -> Result<Sequencer, SceneError> {
    Sequencer::new(vec![
        Scene::builder("brand", 0.0, 0.3)
            .prop("opacity", vec![(0.0, 1.0), (0.7, 1.0), (1.0, 0.0)])
            .prop("scale", vec![(0.0, 1.0), (1.0, 1.12)])
            .prop("underline", vec![(0.0, UNDERLINE_DASH), (0.6, 0.0), (1.0, 0.0)])
            .build()?,
        Scene::builder("craft", 0.25, 0.55)
            .prop("opacity", vec![(0.0, 0.0), (0.25, 1.0), (0.8, 1.0), (1.0, 0.0)])
            .prop("translate_y", vec![(0.0, 70.0), (0.35, 0.0), (1.0, -40.0)])
            .prop("rotate_x", vec![(0.0, 14.0), (0.35, 0.0), (1.0, 0.0)])
            .build()?,
        Scene::builder("motion", 0.5, 0.8)
            .prop("opacity", vec![(0.0, 0.0), (0.25, 1.0), (0.8, 1.0), (1.0, 0.0)])
            // Spring-flavored pop: deliberately overshoots before settling.
            .prop("scale", vec![(0.0, 0.85), (0.45, 1.04), (0.7, 1.0), (1.0, 1.0)])
            .build()?,
        Scene::builder("invite", 0.75, 1.0)
            .prop("opacity", vec![(0.0, 0.0), (0.4, 1.0)])
            .prop("translate_y", vec![(0.0, 90.0), (0.5, 0.0)])
            .global_prop("cta_opacity", vec![(0.0, 0.0), (0.7, 0.0), (0.85, 1.0)])
            .build()?,
    ])
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let container_ref = use_node_ref();
    let frame = use_state(SequencerFrame::default);
    let sequencer = use_state(|| hero_timeline().map(Rc::new));

    {
        let container_ref = container_ref.clone();
        let frame = frame.clone();
        let sequencer = sequencer.clone();
        use_effect_with_deps(
            move |_| {
                let mut binder = None;
                if let Ok(seq) = &*sequencer {
                    if let Some(element) = container_ref.cast::<web_sys::Element>() {
                        let seq = seq.clone();
                        let on_progress = Callback::from(move |p: f64| {
                            frame.set(seq.update(p));
                        });
                        binder = ViewportBinder::bind(element, on_progress);
                    }
                }
                move || drop(binder)
            },
            (),
        );
    }

    if let Err(err) = &*sequencer {
        // Authoring mistake: refuse to animate, keep the page readable.
        error!("hero timeline rejected: {}", err);
        return html! {
            <header class="hero hero-static">
                <h1>{"Kairo Studio"}</h1>
                <p>{"Web design with momentum."}</p>
            </header>
        };
    }

    let scene_style = |id: &str| {
        let opacity = frame.value_or(id, "opacity", 0.0);
        let scale = frame.value_or(id, "scale", 1.0);
        let translate_y = frame.value_or(id, "translate_y", 0.0);
        let rotate_x = frame.value_or(id, "rotate_x", 0.0);
        format!(
            "opacity: {}; transform: translateY({}px) scale({}) rotateX({}deg);",
            opacity, translate_y, scale, rotate_x
        )
    };

    let underline_offset = frame.value_or("brand", "underline", UNDERLINE_DASH);
    let cta_opacity = frame.value_or("invite", "cta_opacity", 0.0);
    let cta_disabled = cta_opacity < 0.05;

    html! {
        <header class="hero" ref={container_ref}>
            <style>
                {r#"
                    .hero {
                        position: relative;
                        height: 400vh;
                    }
                    .hero-stage {
                        position: sticky;
                        top: 0;
                        height: 100vh;
                        overflow: hidden;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        perspective: 900px;
                        background: #0c0c0e;
                    }
                    .hero-scene {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        padding: 0 1.5rem;
                        will-change: transform, opacity;
                    }
                    .hero-scene h1 {
                        font-size: clamp(2.5rem, 8vw, 6rem);
                        letter-spacing: -0.03em;
                        color: #f5f2ea;
                    }
                    .hero-scene p {
                        max-width: 34rem;
                        color: rgba(245, 242, 234, 0.75);
                        font-size: 1.2rem;
                    }
                    .hero-underline {
                        width: min(640px, 80vw);
                        height: 24px;
                        overflow: visible;
                    }
                    .hero-cta {
                        position: absolute;
                        bottom: 3rem;
                        left: 50%;
                        transform: translateX(-50%);
                        padding: 1rem 2.5rem;
                        border: none;
                        border-radius: 999px;
                        background: #e8ff63;
                        color: #0c0c0e;
                        font-size: 1.05rem;
                        cursor: pointer;
                    }
                    .hero-static {
                        height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        background: #0c0c0e;
                        color: #f5f2ea;
                    }
                "#}
            </style>
            <div class="hero-stage">
                <div class="hero-scene" style={scene_style("brand")}>
                    <h1>{"Kairo Studio"}</h1>
                    <svg class="hero-underline" viewBox="0 0 640 24" fill="none">
                        <path
                            d="M4 18 C 160 2, 480 2, 636 14"
                            stroke="#e8ff63"
                            stroke-width="4"
                            stroke-linecap="round"
                            stroke-dasharray={UNDERLINE_DASH.to_string()}
                            stroke-dashoffset={underline_offset.to_string()}
                        />
                    </svg>
                    <p>{"A web-design studio for brands that refuse to sit still."}</p>
                </div>
                <div class="hero-scene" style={scene_style("craft")}>
                    <h1>{"Craft first"}</h1>
                    <p>{"Type, color and layout tuned by hand until the page feels inevitable."}</p>
                </div>
                <div class="hero-scene" style={scene_style("motion")}>
                    <h1>{"Motion second"}</h1>
                    <p>{"Scroll-linked scenes, not autoplay videos. Every frame is yours to control."}</p>
                </div>
                <div class="hero-scene" style={scene_style("invite")}>
                    <h1>{"Let's build yours"}</h1>
                    <p>{"Tell us where your brand should move next."}</p>
                </div>
                <a href="#contact" style={format!("opacity: {};", cta_opacity)}>
                    <button class="hero-cta" disabled={cta_disabled}>{"Start a project"}</button>
                </a>
            </div>
        </header>
    }
}
