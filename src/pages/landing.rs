use yew::prelude::*;

use crate::components::contact::Contact;
use crate::components::hero::Hero;
use crate::components::marquee::Marquee;
use crate::components::pricing::Pricing;
use crate::components::showcase::Showcase;
use crate::components::testimonials::Testimonials;

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <style>
                {r#"
                    .landing-page {
                        background: #0c0c0e;
                    }
                    .services {
                        padding: 6rem 1.5rem;
                        background: #0c0c0e;
                        color: #f5f2ea;
                    }
                    .services-grid {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1.5rem;
                        justify-content: center;
                        max-width: 72rem;
                        margin: 2.5rem auto 0;
                    }
                    .services h2 { text-align: center; font-size: 2.4rem; }
                    .service-card {
                        width: min(340px, 100%);
                        padding: 2rem;
                        border-radius: 16px;
                        border: 1px solid rgba(245, 242, 234, 0.1);
                        background: rgba(30, 30, 34, 0.5);
                    }
                    .service-card h3 { margin-bottom: 0.6rem; color: #e8ff63; }
                    .service-card p { color: rgba(245, 242, 234, 0.7); }
                "#}
            </style>

            <Hero />
            <Marquee />

            <section class="services" id="services">
                <h2>{"What we do"}</h2>
                <div class="services-grid">
                    <div class="service-card">
                        <h3>{"Design"}</h3>
                        <p>{"Identity, art direction and interfaces that carry a point of view."}</p>
                    </div>
                    <div class="service-card">
                        <h3>{"Build"}</h3>
                        <p>{"Hand-built sites that stay fast with every scene we layer on."}</p>
                    </div>
                    <div class="service-card">
                        <h3>{"Motion"}</h3>
                        <p>{"Scroll-driven timelines authored as data, tuned until they feel right."}</p>
                    </div>
                </div>
            </section>

            <Showcase />
            <Pricing />
            <Testimonials />
            <Contact />
        </div>
    }
}
