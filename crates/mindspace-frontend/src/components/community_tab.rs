//! Moderated peer-support groups (directory only; joining happens elsewhere).

use leptos::*;

struct SupportGroup {
    name: &'static str,
    members: u32,
}

const GROUPS: [SupportGroup; 3] = [
    SupportGroup {
        name: "Anxiety Support Group",
        members: 142,
    },
    SupportGroup {
        name: "Depression Recovery",
        members: 89,
    },
    SupportGroup {
        name: "Mindfulness & Meditation",
        members: 203,
    },
];

#[component]
pub fn CommunityTab() -> impl IntoView {
    view! {
        <div class="community-tab">
            <div class="card-grid">
                {GROUPS
                    .iter()
                    .map(|group| {
                        view! {
                            <div class="card group-card">
                                <h3>{group.name}</h3>
                                <p>{format!("{} members", group.members)}</p>
                                <span class="badge">"Moderated"</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="card">
                <h3>"Community Guidelines"</h3>
                <ul class="guideline-list">
                    <li>"Be kind and respectful to every member."</li>
                    <li>"Keep what is shared here confidential."</li>
                    <li>"No medical advice; share experiences, not prescriptions."</li>
                    <li>"Report anything that worries you to a moderator."</li>
                </ul>
            </div>
        </div>
    }
}
