use yew::prelude::*;

const CLIENTS: [&str; 7] = [
    "Atlas Coffee",
    "Fieldnote",
    "Verra Architects",
    "Lumen Labs",
    "Portside",
    "Hatch & Co",
    "Meridian Fit",
];

/// Looping client-name marquee. The track is rendered twice and translated
/// by -50% so the loop point is invisible.
#[function_component(Marquee)]
pub fn marquee() -> Html {
    let entries = || {
        CLIENTS.iter().map(|name| {
            html! {
                <span class="marquee-item">{*name}<span class="marquee-dot">{"•"}</span></span>
            }
        })
    };

    html! {
        <div class="marquee" aria-hidden="true">
            <style>
                {r#"
                    .marquee {
                        overflow: hidden;
                        white-space: nowrap;
                        padding: 1.5rem 0;
                        background: #0c0c0e;
                        border-top: 1px solid rgba(245, 242, 234, 0.08);
                        border-bottom: 1px solid rgba(245, 242, 234, 0.08);
                    }
                    .marquee-track {
                        display: inline-block;
                        animation: marquee-scroll 28s linear infinite;
                    }
                    .marquee-item {
                        color: rgba(245, 242, 234, 0.5);
                        font-size: 1.1rem;
                        letter-spacing: 0.08em;
                    }
                    .marquee-dot {
                        margin: 0 1.6rem;
                        color: #e8ff63;
                    }
                    @keyframes marquee-scroll {
                        from { transform: translateX(0); }
                        to { transform: translateX(-50%); }
                    }
                "#}
            </style>
            <div class="marquee-track">
                { for entries() }
                { for entries() }
            </div>
        </div>
    }
}
