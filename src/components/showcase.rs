use std::rc::Rc;

use log::error;
use yew::prelude::*;

use crate::motion::scene::SceneError;
use crate::motion::{Scene, Sequencer, SequencerFrame, ViewportBinder};

struct Project {
    scene_id: &'static str,
    title: &'static str,
    blurb: &'static str,
    tag: &'static str,
}

const PROJECTS: [Project; 3] = [
    Project {
        scene_id: "atlas",
        title: "Atlas Coffee",
        blurb: "Subscription storefront with a bean-to-door scroll story.",
        tag: "E-commerce",
    },
    Project {
        scene_id: "fieldnote",
        title: "Fieldnote",
        blurb: "Editorial identity and a reading experience that breathes.",
        tag: "Publishing",
    },
    Project {
        scene_id: "verra",
        title: "Verra Architects",
        blurb: "Portfolio where every project unfolds as you scroll past it.",
        tag: "Architecture",
    },
];

/// Each project gets a third of the section's scroll range, with slight
/// overlap so one card hands off to the next instead of cutting.
fn showcase_timeline() -> Result<Sequencer, SceneError> {
    let windows = [(0.0, 0.4), (0.3, 0.7), (0.6, 1.0)];
    let mut scenes = Vec::with_capacity(PROJECTS.len());
    for (project, (start, end)) in PROJECTS.iter().zip(windows) {
        // The last card holds instead of fading, so the section ends settled.
        let opacity = if project.scene_id == "verra" {
            vec![(0.0, 0.0), (0.3, 1.0), (1.0, 1.0)]
        } else {
            vec![(0.0, 0.0), (0.3, 1.0), (0.75, 1.0), (1.0, 0.0)]
        };
        scenes.push(
            Scene::builder(project.scene_id, start, end)
                .prop("opacity", opacity)
                .prop("translate_y", vec![(0.0, 120.0), (0.4, 0.0), (1.0, -60.0)])
                // Background drifts slower than the card, the parallax layer.
                .prop("bg_translate_y", vec![(0.0, 40.0), (1.0, -20.0)])
                .build()?,
        );
    }
    Sequencer::new(scenes)
}

#[function_component(Showcase)]
pub fn showcase() -> Html {
    let container_ref = use_node_ref();
    let frame = use_state(SequencerFrame::default);
    let sequencer = use_state(|| showcase_timeline().map(Rc::new));

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
        error!("showcase timeline rejected: {}", err);
        return html! {};
    }

    html! {
        <section class="showcase" ref={container_ref} id="work">
            <style>
                {r#"
                    .showcase {
                        position: relative;
                        height: 280vh;
                        background: #111114;
                    }
                    .showcase-stage {
                        position: sticky;
                        top: 0;
                        height: 100vh;
                        overflow: hidden;
                    }
                    .showcase-stage h2 {
                        position: absolute;
                        top: 3rem;
                        left: 50%;
                        transform: translateX(-50%);
                        color: #f5f2ea;
                        font-size: 1.1rem;
                        letter-spacing: 0.3em;
                        text-transform: uppercase;
                    }
                    .showcase-card {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        will-change: transform, opacity;
                    }
                    .showcase-card-inner {
                        width: min(720px, 86vw);
                        padding: 3rem;
                        border-radius: 20px;
                        background: rgba(30, 30, 34, 0.85);
                        border: 1px solid rgba(245, 242, 234, 0.08);
                        color: #f5f2ea;
                    }
                    .showcase-card-inner h3 { font-size: 2.2rem; margin-bottom: 0.8rem; }
                    .showcase-card-inner p { color: rgba(245, 242, 234, 0.7); }
                    .showcase-tag {
                        display: inline-block;
                        margin-bottom: 1.2rem;
                        padding: 0.3rem 0.9rem;
                        border-radius: 999px;
                        background: rgba(232, 255, 99, 0.12);
                        color: #e8ff63;
                        font-size: 0.8rem;
                    }
                    .showcase-backdrop {
                        position: absolute;
                        inset: -10% -5%;
                        background: radial-gradient(circle at 30% 40%, rgba(232, 255, 99, 0.08), transparent 60%);
                        will-change: transform;
                    }
                "#}
            </style>
            <div class="showcase-stage">
                <h2>{"Selected work"}</h2>
                { for PROJECTS.iter().map(|project| {
                    let opacity = frame.value_or(project.scene_id, "opacity", 0.0);
                    let card_y = frame.value_or(project.scene_id, "translate_y", 120.0);
                    let bg_y = frame.value_or(project.scene_id, "bg_translate_y", 40.0);
                    html! {
                        <div
                            class="showcase-card"
                            key={project.scene_id}
                            style={format!("opacity: {}; transform: translateY({}px);", opacity, card_y)}
                        >
                            <div class="showcase-backdrop" style={format!("transform: translateY({}px);", bg_y)}></div>
                            <div class="showcase-card-inner">
                                <span class="showcase-tag">{project.tag}</span>
                                <h3>{project.title}</h3>
                                <p>{project.blurb}</p>
                            </div>
                        </div>
                    }
                }) }
            </div>
        </section>
    }
}
