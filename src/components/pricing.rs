use yew::prelude::*;

struct Tier {
    name: &'static str,
    monthly: u32,
    yearly: u32,
    pitch: &'static str,
    features: [&'static str; 4],
    highlighted: bool,
}

const TIERS: [Tier; 3] = [
    Tier {
        name: "Launch",
        monthly: 900,
        yearly: 9000,
        pitch: "A single landing page that moves.",
        features: [
            "One-page design & build",
            "Two scroll-linked scenes",
            "Copy polish",
            "Two revision rounds",
        ],
        highlighted: false,
    },
    Tier {
        name: "Studio",
        monthly: 2400,
        yearly: 24000,
        pitch: "A full site with a motion system.",
        features: [
            "Up to six pages",
            "Full scroll-scene timeline",
            "Design system handoff",
            "Monthly iteration call",
        ],
        highlighted: true,
    },
    Tier {
        name: "Partner",
        monthly: 5200,
        yearly: 52000,
        pitch: "An embedded design partner.",
        features: [
            "Unlimited pages & campaigns",
            "Custom motion engineering",
            "Brand & art direction",
            "Same-week turnaround",
        ],
        highlighted: false,
    },
];

#[function_component(Pricing)]
pub fn pricing() -> Html {
    let yearly = use_state(|| false);

    let toggle = {
        let yearly = yearly.clone();
        Callback::from(move |_: MouseEvent| {
            yearly.set(!*yearly);
        })
    };

    html! {
        <section class="pricing" id="pricing">
            <style>
                {r#"
                    .pricing {
                        padding: 6rem 1.5rem;
                        background: #0c0c0e;
                        color: #f5f2ea;
                        text-align: center;
                    }
                    .pricing h2 { font-size: 2.4rem; margin-bottom: 0.6rem; }
                    .pricing-toggle {
                        margin: 2rem auto;
                        display: inline-flex;
                        border: 1px solid rgba(245, 242, 234, 0.15);
                        border-radius: 999px;
                        overflow: hidden;
                    }
                    .pricing-toggle button {
                        padding: 0.6rem 1.6rem;
                        border: none;
                        background: transparent;
                        color: rgba(245, 242, 234, 0.6);
                        cursor: pointer;
                    }
                    .pricing-toggle button.active {
                        background: #e8ff63;
                        color: #0c0c0e;
                    }
                    .pricing-cards {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1.5rem;
                        justify-content: center;
                        margin-top: 2rem;
                    }
                    .pricing-card {
                        width: min(320px, 100%);
                        padding: 2.5rem 2rem;
                        border-radius: 20px;
                        border: 1px solid rgba(245, 242, 234, 0.1);
                        background: rgba(30, 30, 34, 0.6);
                        text-align: left;
                    }
                    .pricing-card.highlighted {
                        border-color: #e8ff63;
                        box-shadow: 0 8px 40px rgba(232, 255, 99, 0.1);
                    }
                    .pricing-card .price { font-size: 2.4rem; margin: 1rem 0; }
                    .pricing-card .price span { font-size: 1rem; color: rgba(245, 242, 234, 0.5); }
                    .pricing-card ul { list-style: none; padding: 0; margin-top: 1.2rem; }
                    .pricing-card li { padding: 0.4rem 0; color: rgba(245, 242, 234, 0.75); }
                    .pricing-card li::before { content: "— "; color: #e8ff63; }
                "#}
            </style>
            <h2>{"Pricing"}</h2>
            <p>{"Flat monthly rates. Pause or stop whenever."}</p>
            <div class="pricing-toggle">
                <button class={classes!((!*yearly).then(|| "active"))} onclick={toggle.clone()}>
                    {"Monthly"}
                </button>
                <button class={classes!((*yearly).then(|| "active"))} onclick={toggle}>
                    {"Yearly"}
                </button>
            </div>
            <div class="pricing-cards">
                { for TIERS.iter().map(|tier| {
                    let (amount, period) = if *yearly {
                        (tier.yearly, "/yr")
                    } else {
                        (tier.monthly, "/mo")
                    };
                    html! {
                        <div class={classes!("pricing-card", tier.highlighted.then(|| "highlighted"))} key={tier.name}>
                            <h3>{tier.name}</h3>
                            <p>{tier.pitch}</p>
                            <div class="price">{format!("${}", amount)}<span>{period}</span></div>
                            <ul>
                                { for tier.features.iter().map(|feature| html! { <li>{*feature}</li> }) }
                            </ul>
                        </div>
                    }
                }) }
            </div>
        </section>
    }
}
