use web_sys::MouseEvent;
use yew::prelude::*;
use yew::{Children, Properties};

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: String,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", if *is_open { "open" } else { "" })}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    html! {
        <div class="faq-page">
            <style>
                {r#"
                    .faq-page {
                        min-height: 100vh;
                        background: #0c0c0e;
                        color: #f5f2ea;
                        padding: 8rem 1.5rem 6rem;
                    }
                    .faq-hero { text-align: center; margin-bottom: 3rem; }
                    .faq-hero h1 { font-size: 2.6rem; }
                    .faq-hero p { color: rgba(245, 242, 234, 0.6); }
                    .faq-section { max-width: 46rem; margin: 0 auto; }
                    .faq-item {
                        border-bottom: 1px solid rgba(245, 242, 234, 0.12);
                    }
                    .faq-question {
                        width: 100%;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        padding: 1.3rem 0;
                        background: none;
                        border: none;
                        color: #f5f2ea;
                        font-size: 1.1rem;
                        text-align: left;
                        cursor: pointer;
                    }
                    .toggle-icon { color: #e8ff63; font-size: 1.4rem; }
                    .faq-answer {
                        display: none;
                        padding-bottom: 1.3rem;
                        color: rgba(245, 242, 234, 0.7);
                        line-height: 1.6;
                    }
                    .faq-item.open .faq-answer { display: block; }
                "#}
            </style>
            <section class="faq-hero">
                <h1>{"Frequently Asked Questions"}</h1>
                <p>{"Everything you need to know before working with Kairo Studio"}</p>
            </section>

            <section class="faq-section">
                <FaqItem question="How long does a project take?">
                    <p>{"A Launch page ships in two to three weeks. A full Studio site usually lands in six to eight, depending on how much motion work the timeline carries."}</p>
                </FaqItem>

                <FaqItem question="Do the scroll animations hurt performance?">
                    <p>{"No. Every scene is a set of precomputed interpolation curves evaluated against scroll position, so the browser only ever updates transforms and opacity. There are no videos to buffer and no layout thrash."}</p>
                </FaqItem>

                <FaqItem question="Can we edit the site ourselves afterwards?">
                    <p>{"Yes. Copy and imagery live apart from the motion timeline, and we hand off a written guide. Changing a headline never risks breaking an animation."}</p>
                </FaqItem>

                <FaqItem question="What do you need from us to start?">
                    <p>{"The contact form on the landing page is enough: your name, email and a few sentences about the project. We reply within two working days with questions and a rough shape of the timeline."}</p>
                </FaqItem>

                <FaqItem question="Do you work with existing brands?">
                    <p>{"Most of our work starts from an existing identity. We extend it with a motion language rather than replacing what already works."}</p>
                </FaqItem>
            </section>
        </div>
    }
}
