use gloo_timers::callback::Timeout;
use yew::prelude::*;

const QUOTES: [(&str, &str, &str); 3] = [
    (
        "They rebuilt our store as a story you scroll through. Conversion went up, support tickets went down.",
        "Maya Okonkwo",
        "Founder, Atlas Coffee",
    ),
    (
        "The only agency that showed us the animation timeline before writing a line of markup.",
        "Tomas Lindqvist",
        "Creative Director, Fieldnote",
    ),
    (
        "Our portfolio finally moves the way our buildings feel. Clients mention the site unprompted.",
        "Irene Vasquez",
        "Partner, Verra Architects",
    ),
];

const ROTATE_MS: u32 = 6_000;

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let active = use_state(|| 0usize);

    // Advance on a timer; each render arms the next step, like a stage machine.
    {
        let active_clone = active.clone();
        let setter = active.setter();
        use_effect(move || {
            let next = (*active_clone + 1) % QUOTES.len();
            let timeout = Timeout::new(ROTATE_MS, move || {
                setter.set(next);
            });
            move || drop(timeout)
        });
    }

    let pick = |index: usize| {
        let active = active.clone();
        Callback::from(move |_: MouseEvent| {
            active.set(index);
        })
    };

    html! {
        <section class="testimonials">
            <style>
                {r#"
                    .testimonials {
                        padding: 6rem 1.5rem;
                        background: #111114;
                        color: #f5f2ea;
                        text-align: center;
                    }
                    .testimonial-quote {
                        max-width: 44rem;
                        margin: 0 auto;
                        font-size: 1.6rem;
                        line-height: 1.5;
                        min-height: 9rem;
                        transition: opacity 0.4s ease;
                    }
                    .testimonial-who { margin-top: 1.5rem; color: rgba(245, 242, 234, 0.6); }
                    .testimonial-who strong { color: #f5f2ea; display: block; }
                    .testimonial-dots { margin-top: 2rem; }
                    .testimonial-dots button {
                        width: 10px;
                        height: 10px;
                        border-radius: 50%;
                        border: none;
                        margin: 0 0.4rem;
                        background: rgba(245, 242, 234, 0.25);
                        cursor: pointer;
                    }
                    .testimonial-dots button.active { background: #e8ff63; }
                "#}
            </style>
            {
                {
                    let (quote, who, role) = QUOTES[*active];
                    html! {
                        <>
                            <blockquote class="testimonial-quote">{format!("\u{201c}{}\u{201d}", quote)}</blockquote>
                            <div class="testimonial-who">
                                <strong>{who}</strong>
                                {role}
                            </div>
                        </>
                    }
                }
            }
            <div class="testimonial-dots">
                { for (0..QUOTES.len()).map(|index| {
                    html! {
                        <button
                            key={index}
                            class={classes!((index == *active).then(|| "active"))}
                            onclick={pick(index)}
                            aria-label={format!("Show testimonial {}", index + 1)}
                        />
                    }
                }) }
            </div>
        </section>
    }
}
