//! Curated reading and emergency contacts.

use leptos::*;

struct Resource {
    title: &'static str,
    category: &'static str,
    read_time: &'static str,
    url: &'static str,
}

const RESOURCES: [Resource; 3] = [
    Resource {
        title: "Understanding Anxiety",
        category: "Mental Health",
        read_time: "5 min read",
        url: "https://www.nimh.nih.gov/health/topics/anxiety-disorders",
    },
    Resource {
        title: "Coping with Depression",
        category: "Mental Health",
        read_time: "7 min read",
        url: "https://www.nimh.nih.gov/health/topics/depression",
    },
    Resource {
        title: "Stress Management Techniques",
        category: "Wellness",
        read_time: "4 min read",
        url: "https://www.cdc.gov/mental-health/living-with/index.html",
    },
];

#[component]
pub fn ResourcesTab() -> impl IntoView {
    view! {
        <div class="resources-tab">
            <div class="card-grid">
                {RESOURCES
                    .iter()
                    .map(|resource| {
                        view! {
                            <a
                                class="card resource-card"
                                href=resource.url
                                target="_blank"
                                rel="noopener"
                            >
                                <span class="resource-category">{resource.category}</span>
                                <h3>{resource.title}</h3>
                                <p>{resource.read_time}</p>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="card emergency-card">
                <h3>"Emergency Resources"</h3>
                <p>"If you are in crisis or thinking about harming yourself, reach out now."</p>
                <ul>
                    <li>
                        <strong>"988 Suicide & Crisis Lifeline"</strong>
                        " \u{2014} call or text 988, available 24/7"
                    </li>
                    <li>
                        <strong>"Crisis Text Line"</strong>
                        " \u{2014} text HOME to 741741"
                    </li>
                </ul>
            </div>
        </div>
    }
}
