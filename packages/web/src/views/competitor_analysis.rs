use dioxus::prelude::*;
use ui::icons::FaChartLine;
use ui::Icon;

const PLANNED: [(&str, &str); 4] = [
    ("Market Analysis", "Deep insights into market trends and competitor positioning"),
    ("Competitor Tracking", "Monitor competitor activities and strategy changes"),
    ("Opportunity Mapping", "Identify gaps and opportunities in the market"),
    ("Performance Benchmarks", "Compare your performance against industry leaders"),
];

/// Placeholder until competitor analysis ships.
#[component]
pub fn CompetitorAnalysis() -> Element {
    rsx! {
        div {
            class: "page page-narrow",
            div {
                class: "page-hero",
                Icon { icon: FaChartLine, width: 20, height: 20 }
                h1 { "Competitor Analysis" }
                p { class: "muted", "Analyze your competitors and discover market opportunities" }
            }
            div {
                class: "card",
                h3 { class: "center", "Coming Soon" }
                p { class: "muted center", "Advanced competitor analysis features are being developed" }
                div {
                    class: "feature-grid",
                    for (title, description) in PLANNED {
                        div {
                            key: "{title}",
                            h4 { "{title}" }
                            p { class: "small muted", "{description}" }
                        }
                    }
                }
            }
        }
    }
}
